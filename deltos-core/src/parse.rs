//! TASKS payload parsing.
//!
//! The payload is a flat comma-separated token stream encoding a
//! two-level hierarchy:
//!
//! - `"<digit>.<name>"` - a list header; no further dot may follow
//! - `"<digit>.<number>.<title>"` - a task entry, filed under the most
//!   recently seen list header
//!
//! Tokens of neither shape are skipped without comment, and once the
//! table is full the rest of the payload is ignored. Availability over
//! strictness: a lossy link plus a retry button beats a rejected list.

use crate::table::{TaskRecord, TaskTable, LIST_NAME_LEN, TITLE_LEN};

/// Payload literal meaning "the task list is empty".
pub const NO_TASKS: &str = "NO_TASKS";

/// What a TASKS payload turned out to contain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ParseOutcome {
    /// Table replaced with this many records
    Parsed(usize),
    /// The peer reported an empty task list
    NoTasks,
    /// Payload was empty or missing
    Empty,
}

/// Replace the table contents with the records encoded in `data`.
///
/// The table is cleared on every path, including [`ParseOutcome::Empty`]
/// and [`ParseOutcome::NoTasks`].
pub fn parse_task_data(data: &str, table: &mut TaskTable) -> ParseOutcome {
    table.clear();

    if data.is_empty() {
        return ParseOutcome::Empty;
    }
    if data == NO_TASKS {
        return ParseOutcome::NoTasks;
    }

    // Task entries inherit their list name from the most recent header
    // token; entries arriving before any header get an empty name.
    let mut current_list = "";

    for token in data.split(',') {
        if table.is_full() {
            break;
        }

        let token = token.trim_matches(|c| c == ' ' || c == '\t');
        let bytes = token.as_bytes();
        if bytes.len() < 2 || !matches!(bytes[0], b'1'..=b'9') || bytes[1] != b'.' {
            continue;
        }

        let rest = &token[2..];
        match rest.find('.') {
            None => {
                // List header: remember it for the entries that follow.
                current_list = rest;
            }
            Some(dot) => {
                let mut record = TaskRecord {
                    list_number: bytes[0] - b'0',
                    task_number: digit_prefix(&rest[..dot]),
                    ..TaskRecord::default()
                };
                let _ = record.title.push_str(truncated(&rest[dot + 1..], TITLE_LEN));
                let _ = record
                    .list_name
                    .push_str(truncated(current_list, LIST_NAME_LEN));
                let _ = table.push(record);
            }
        }
    }

    ParseOutcome::Parsed(table.len())
}

/// Decimal value of the leading ASCII digits, 0 when there are none.
fn digit_prefix(text: &str) -> i32 {
    let mut value: i32 = 0;
    for byte in text.bytes() {
        if !byte.is_ascii_digit() {
            break;
        }
        value = value
            .saturating_mul(10)
            .saturating_add(i32::from(byte - b'0'));
    }
    value
}

/// Longest prefix of `text` that fits `max` bytes on a char boundary.
fn truncated(text: &str, max: usize) -> &str {
    if text.len() <= max {
        return text;
    }
    let mut end = max;
    while !text.is_char_boundary(end) {
        end -= 1;
    }
    &text[..end]
}
