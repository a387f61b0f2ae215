//! Button input tasks
//!
//! One task per front-panel button. Each waits for a press, queues the
//! matching trigger, and debounces before re-arming.

use defmt::*;
use embassy_rp::gpio::Input;
use embassy_time::Timer;

use deltos_core::panel::PanelInput;

use crate::channels::INPUT_CHANNEL;

/// Hold-off after a press before the button re-arms
const DEBOUNCE_MS: u64 = 30;

/// Button task - translates one pin into one input trigger
#[embassy_executor::task(pool_size = 5)]
pub async fn button_task(mut pin: Input<'static>, input: PanelInput) {
    info!("Button task started: {:?}", input);

    loop {
        pin.wait_for_falling_edge().await;
        if INPUT_CHANNEL.try_send(input).is_err() {
            warn!("Input queue full, dropping {:?}", input);
        }
        Timer::after_millis(DEBOUNCE_MS).await;
        pin.wait_for_high().await;
    }
}
