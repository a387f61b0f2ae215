//! Co-processor link protocol for the Deltos task panel
//!
//! This crate defines the UART-based protocol between the panel
//! controller and its wireless co-processor. Packets travel as
//! length-delimited text frames:
//!
//! ```text
//! <PKT_START>TYPE:<type>|DATA:<data>|CHECKSUM:<n><PKT_END>
//! ```
//!
//! - `TYPE` names the packet (`TASKS`, `RESULT`, `ERROR`, `STATUS`,
//!   `HELP`, `TEST`); unrecognized names are carried through for logging.
//! - `DATA` is the type-specific payload. It may contain commas (the
//!   `TASKS` payload uses them) but never the field delimiter `|` or
//!   either marker literal.
//! - `CHECKSUM` is the decimal additive checksum over `TYPE` followed
//!   directly by `DATA`, no separator.
//!
//! The protocol is fire-and-forget: commands go out as plain `\r\n`
//! terminated text, and any effect comes back later as an independent
//! packet. There is no acknowledgement or retransmission; the transport
//! guarantee is limited to never staying stuck on line noise.

#![no_std]
#![deny(unsafe_code)]

#[cfg(test)]
#[macro_use]
extern crate std;

pub mod checksum;
pub mod command;
pub mod field;
pub mod frame;
pub mod packet;

pub use command::{Command, LINE_TERMINATOR, MAX_COMMAND_LEN};
pub use frame::{FrameError, RawFrame, Reassembler, MAX_FRAME_LEN, PKT_END, PKT_START};
pub use packet::{Packet, PacketError, PacketKind};
