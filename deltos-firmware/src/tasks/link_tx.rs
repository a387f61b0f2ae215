//! Link UART transmit task
//!
//! Drains the command queue and writes each encoded command to the
//! co-processor. Fire-and-forget: no retry, no acknowledgement; results
//! come back later as packets through the normal receive path.

use defmt::*;
use embassy_rp::uart::BufferedUartTx;
use embedded_io_async::Write;

use crate::channels::CMD_CHANNEL;

/// Link TX task - sends commands to the co-processor
#[embassy_executor::task]
pub async fn link_tx_task(mut tx: BufferedUartTx) {
    info!("Link TX task started");

    loop {
        let command = CMD_CHANNEL.receive().await;
        let line = command.encode();
        match tx.write_all(line.as_bytes()).await {
            Ok(()) => info!("Command sent: {:?}", command),
            Err(e) => warn!("Command write failed: {:?}", e),
        }
    }
}
