//! Packet worker task
//!
//! The single consumer of reassembled frames. Validates each frame,
//! dispatches by packet type, and is the only task that mutates the
//! task table. Frames are processed strictly in arrival order.

use defmt::*;
use embassy_time::Timer;

use deltos_core::parse::ParseOutcome;
use deltos_protocol::{Packet, PacketKind};

use crate::channels::{FRAME_CHANNEL, PANEL, REDRAW};

/// Pause after a RESULT packet before further commands may go out
const RESULT_SETTLE_MS: u64 = 500;

/// Worker task - validates and dispatches packets
#[embassy_executor::task]
pub async fn worker_task() {
    info!("Packet worker task started");

    loop {
        let frame = FRAME_CHANNEL.receive().await;

        // The frame is already dequeued and must not be dropped, so this
        // lock has no timeout.
        let mut panel = PANEL.lock().await;

        let packet = match Packet::decode(&frame) {
            Ok(packet) => packet,
            Err(e) => {
                warn!("Dropping malformed frame: {:?}", e);
                continue;
            }
        };

        match packet.kind {
            PacketKind::Tasks => {
                match panel.apply_tasks(packet.data) {
                    ParseOutcome::Parsed(count) => info!("Task list replaced: {} tasks", count),
                    ParseOutcome::NoTasks => info!("No tasks available"),
                    ParseOutcome::Empty => warn!("Empty task data received"),
                }
                REDRAW.signal(());
            }
            PacketKind::Result => {
                info!("Operation result: {=str}", packet.data);
                // Holding the panel mutex through the pause keeps the
                // button handlers from flooding the link with commands.
                Timer::after_millis(RESULT_SETTLE_MS).await;
            }
            PacketKind::Error => {
                warn!("Peer error: {=str}", packet.data);
            }
            PacketKind::Status => {
                info!("Peer status: {=str}", packet.data);
            }
            PacketKind::Help => {
                info!("Help: {=str}", packet.data);
            }
            PacketKind::Test => {
                info!("Test response: {=str}", packet.data);
            }
            PacketKind::Unknown => {
                warn!("Unknown packet type: {=str}", packet.type_name);
            }
        }
    }
}
