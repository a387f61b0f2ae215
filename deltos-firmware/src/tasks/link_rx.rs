//! Link UART receive task
//!
//! Feeds received bytes to the frame reassembler and queues complete
//! frames for the worker. This is the per-byte hot path: it never takes
//! the panel mutex and never blocks on the frame channel.

use defmt::*;
use embassy_rp::uart::BufferedUartRx;
use embedded_io_async::Read;

use deltos_protocol::{FrameError, Reassembler};

use crate::channels::FRAME_CHANNEL;

/// Buffer size for UART reads
const RX_BUF_SIZE: usize = 64;

/// Link RX task - reassembles frames from the co-processor
#[embassy_executor::task]
pub async fn link_rx_task(mut rx: BufferedUartRx) {
    info!("Link RX task started");

    let mut reassembler = Reassembler::new();
    let mut buf = [0u8; RX_BUF_SIZE];

    loop {
        match rx.read(&mut buf).await {
            Ok(n) if n > 0 => {
                trace!("RX: {} bytes", n);

                for &byte in &buf[..n] {
                    match reassembler.feed(byte) {
                        Ok(Some(frame)) => {
                            debug!("Complete frame received ({} bytes)", frame.len());
                            // No acknowledgement protocol: a dropped
                            // frame is simply never processed and the
                            // peer or the user retries.
                            if FRAME_CHANNEL.try_send(frame).is_err() {
                                warn!("Frame queue full, dropping frame");
                            }
                        }
                        Ok(None) => {
                            // Need more bytes
                        }
                        Err(FrameError::Overflow) => {
                            warn!("RX buffer overflow, resetting");
                        }
                    }
                }
            }
            Ok(_) => {
                // No bytes read, continue
            }
            Err(e) => {
                warn!("UART read error: {:?}", e);
            }
        }
    }
}
