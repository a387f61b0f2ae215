//! Packet validation and decoding.
//!
//! A reassembled frame becomes a [`Packet`] only after the framing
//! markers, field structure, and checksum all check out. Rejection is
//! all-or-nothing; a failed frame has no effect beyond a log line at the
//! call site.

use crate::checksum;
use crate::field::extract;
use crate::frame::{PKT_END_STR, PKT_START_STR};

/// Packet types understood by the panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PacketKind {
    /// Task list payload; the only type that mutates panel state
    Tasks,
    /// Outcome of a previously sent command
    Result,
    /// Error report from the peer
    Error,
    /// Peer status text
    Status,
    /// Help text
    Help,
    /// Link test response
    Test,
    /// Anything else; logged and dropped
    Unknown,
}

impl PacketKind {
    /// Map a TYPE field value to its kind.
    pub fn from_name(name: &str) -> Self {
        match name {
            "TASKS" => PacketKind::Tasks,
            "RESULT" => PacketKind::Result,
            "ERROR" => PacketKind::Error,
            "STATUS" => PacketKind::Status,
            "HELP" => PacketKind::Help,
            "TEST" => PacketKind::Test,
            _ => PacketKind::Unknown,
        }
    }
}

/// Reasons a frame is rejected before dispatch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PacketError {
    /// Frame bytes are not valid UTF-8
    NotText,
    /// Frame does not begin with the START marker
    MissingStart,
    /// Frame has no END marker
    MissingEnd,
    /// Claimed checksum does not match the TYPE and DATA fields
    ChecksumMismatch,
}

/// A validated packet, borrowing from its frame.
///
/// Transient: constructed and consumed within a single dispatch, never
/// stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Packet<'a> {
    /// Decoded packet type
    pub kind: PacketKind,
    /// Raw TYPE text, kept so unknown types can be logged
    pub type_name: &'a str,
    /// Raw DATA text
    pub data: &'a str,
}

impl<'a> Packet<'a> {
    /// Validate a reassembled frame and decode its fields.
    pub fn decode(frame: &'a [u8]) -> Result<Self, PacketError> {
        let text = core::str::from_utf8(frame).map_err(|_| PacketError::NotText)?;

        if !text.starts_with(PKT_START_STR) {
            return Err(PacketError::MissingStart);
        }
        if !text.contains(PKT_END_STR) {
            return Err(PacketError::MissingEnd);
        }

        let type_name = extract(text, "TYPE");
        let data = extract(text, "DATA");
        // An absent or garbled checksum reads as 0, which fails
        // verification for any packet whose real checksum is nonzero.
        let expected = extract(text, "CHECKSUM").parse::<u32>().unwrap_or(0);
        if !checksum::verify(type_name, data, expected) {
            return Err(PacketError::ChecksumMismatch);
        }

        Ok(Packet {
            kind: PacketKind::from_name(type_name),
            type_name,
            data,
        })
    }
}
