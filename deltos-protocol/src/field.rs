//! Field extraction from the delimited packet body.

use crate::frame::{FIELD_DELIMITER, PKT_END_STR};

/// Extract the value of a named `key:value` field from a packet.
///
/// The value runs from just after `"<field>:"` up to the next field
/// delimiter, or up to the end-of-packet marker when the field is last.
/// Returns `""` when the field is absent or neither terminator follows;
/// callers treat an empty value as a missing field (a missing CHECKSUM
/// parses as 0 and fails verification, which rejects the packet).
///
/// The returned text borrows from the packet; truncation to bounded
/// storage is the caller's concern.
pub fn extract<'a>(packet: &'a str, field: &str) -> &'a str {
    let Some(value_start) = find_field(packet, field) else {
        return "";
    };
    let value = &packet[value_start..];
    match value
        .find(FIELD_DELIMITER)
        .or_else(|| value.find(PKT_END_STR))
    {
        Some(end) => &value[..end],
        None => "",
    }
}

/// Locate `"<field>:"` and return the index just past the colon.
fn find_field(packet: &str, field: &str) -> Option<usize> {
    let bytes = packet.as_bytes();
    let name = field.as_bytes();
    let last = packet.len().checked_sub(name.len() + 1)?;
    for start in 0..=last {
        if bytes[start + name.len()] == b':' && &bytes[start..start + name.len()] == name {
            return Some(start + name.len() + 1);
        }
    }
    None
}
