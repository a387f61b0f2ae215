//! Panel UI task
//!
//! Owns the render sink. Waits for input triggers, redraw requests, and
//! a periodic tick; panel access always uses a short bounded timeout so
//! a busy worker only costs a skipped tick, never a stall.

use defmt::*;
use embassy_futures::select::{select3, Either3};
use embassy_time::{with_timeout, Duration, Ticker};

use deltos_core::panel::{PanelAction, PanelInput};
use deltos_core::sink::PanelSink;

use crate::channels::{CMD_CHANNEL, INPUT_CHANNEL, PANEL, REDRAW};
use crate::console::SerialConsole;

/// Poll period for the render loop
const TICK_MS: u64 = 33;

/// Panel lock timeout for periodic redraw polls
const REDRAW_LOCK_TIMEOUT_MS: u64 = 10;

/// Panel lock timeout for input handling
const INPUT_LOCK_TIMEOUT_MS: u64 = 100;

/// UI task - handles input triggers and drives the render sink
#[embassy_executor::task]
pub async fn ui_task(mut console: SerialConsole) {
    info!("UI task started");

    {
        // Build the boot greeting before the first render.
        let mut panel = PANEL.lock().await;
        panel.rebuild_lines();
    }

    let mut ticker = Ticker::every(Duration::from_millis(TICK_MS));
    let mut pending_redraw = true;

    loop {
        match select3(INPUT_CHANNEL.receive(), REDRAW.wait(), ticker.next()).await {
            Either3::First(input) => handle_input(&mut console, input).await,
            Either3::Second(()) => pending_redraw = true,
            Either3::Third(()) => {
                // Periodic poll; retries any redraw a busy panel deferred
            }
        }

        if pending_redraw && render(&mut console).await {
            pending_redraw = false;
        }
    }
}

/// Handle one input trigger under a short-lived panel lock.
async fn handle_input(console: &mut SerialConsole, input: PanelInput) {
    debug!("Input: {:?}", input);

    let lock = with_timeout(Duration::from_millis(INPUT_LOCK_TIMEOUT_MS), PANEL.lock()).await;
    let Ok(mut panel) = lock else {
        // Worker is busy; drop the trigger rather than queue it against
        // a stale selection.
        warn!("Panel busy, input dropped");
        return;
    };

    match panel.handle_input(input) {
        Some(PanelAction::SelectionChanged) => {
            console.show_selection(panel.selected_index());
        }
        Some(PanelAction::Send(command)) => {
            info!("Issuing command: {:?}", command);
            if CMD_CHANNEL.try_send(command).is_err() {
                warn!("Command queue full, dropping command");
            }
        }
        None => {}
    }

    drop(panel);
    console.flush().await;
}

/// Render a full panel snapshot; false when the panel was busy.
async fn render(console: &mut SerialConsole) -> bool {
    let lock = with_timeout(Duration::from_millis(REDRAW_LOCK_TIMEOUT_MS), PANEL.lock()).await;
    let Ok(panel) = lock else {
        return false;
    };

    console.show_tasks(panel.display_lines());
    console.show_selection(panel.selected_index());

    drop(panel);
    console.flush().await;
    true
}
