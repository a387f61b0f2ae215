//! Deltos - task panel firmware
//!
//! Main firmware binary for RP2040-based task panels. The panel mirrors
//! a task list kept by a wireless co-processor, synchronized over a text
//! packet link, and drives it with five front-panel buttons.
//!
//! Named after the Greek "deltos", the wax tablet lists were scratched
//! onto.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::bind_interrupts;
use embassy_rp::gpio::{Input, Pull};
use embassy_rp::peripherals::{UART0, UART1};
use embassy_rp::uart::{BufferedInterruptHandler, Config as UartConfig, Uart};
use static_cell::StaticCell;
use {defmt_rtt as _, panic_probe as _};

use deltos_core::panel::PanelInput;

use crate::console::SerialConsole;

mod channels;
mod console;
mod tasks;

bind_interrupts!(struct Irqs {
    UART0_IRQ => BufferedInterruptHandler<UART0>;
    UART1_IRQ => BufferedInterruptHandler<UART1>;
});

// Static cells for UART buffers (must live forever)
static LINK_TX_BUF: StaticCell<[u8; 256]> = StaticCell::new();
static LINK_RX_BUF: StaticCell<[u8; 256]> = StaticCell::new();
static CONSOLE_TX_BUF: StaticCell<[u8; 512]> = StaticCell::new();
static CONSOLE_RX_BUF: StaticCell<[u8; 16]> = StaticCell::new();

/// Link baud rate, matching the co-processor
const LINK_BAUD: u32 = 115_200;

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Deltos firmware starting...");

    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    // UART0: packet link to the co-processor
    let mut link_config = UartConfig::default();
    link_config.baudrate = LINK_BAUD;

    let link_tx_buf = LINK_TX_BUF.init([0u8; 256]);
    let link_rx_buf = LINK_RX_BUF.init([0u8; 256]);

    let link = Uart::new_blocking(p.UART0, p.PIN_0, p.PIN_1, link_config);
    let link = link.into_buffered(Irqs, link_tx_buf, link_rx_buf);
    let (link_tx, link_rx) = link.split();

    info!("Link UART initialized at {} baud", LINK_BAUD);

    // UART1: operator console, the render sink's transport
    let console_tx_buf = CONSOLE_TX_BUF.init([0u8; 512]);
    let console_rx_buf = CONSOLE_RX_BUF.init([0u8; 16]);

    let console_uart = Uart::new_blocking(p.UART1, p.PIN_4, p.PIN_5, UartConfig::default());
    let console_uart = console_uart.into_buffered(Irqs, console_tx_buf, console_rx_buf);
    let (console_tx, _console_rx) = console_uart.split();
    let console = SerialConsole::new(console_tx);

    info!("Console UART initialized");

    // Front-panel buttons, active low
    let buttons = [
        (Input::new(p.PIN_10, Pull::Up), PanelInput::Up),
        (Input::new(p.PIN_11, Pull::Up), PanelInput::Down),
        (Input::new(p.PIN_12, Pull::Up), PanelInput::Finish),
        (Input::new(p.PIN_13, Pull::Up), PanelInput::Delete),
        (Input::new(p.PIN_14, Pull::Up), PanelInput::Get),
    ];

    // Spawn tasks
    spawner.spawn(tasks::link_rx_task(link_rx)).unwrap();
    spawner.spawn(tasks::link_tx_task(link_tx)).unwrap();
    spawner.spawn(tasks::worker_task()).unwrap();
    spawner.spawn(tasks::ui_task(console)).unwrap();
    for (pin, input) in buttons {
        spawner.spawn(tasks::button_task(pin, input)).unwrap();
    }

    info!("All tasks spawned, firmware running");

    // Main task has nothing else to do - all work happens in spawned tasks
    loop {
        embassy_time::Timer::after_secs(60).await;
        trace!("Main loop heartbeat");
    }
}
