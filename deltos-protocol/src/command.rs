//! Outbound command encoding.
//!
//! Commands travel to the co-processor as plain text lines, not framed
//! packets. Fire-and-forget: any resulting state change arrives later as
//! an independent RESULT or ERROR packet.

use core::fmt::Write;
use heapless::String;

/// Maximum encoded command length, terminator included.
pub const MAX_COMMAND_LEN: usize = 64;

/// Line terminator appended to every command.
pub const LINE_TERMINATOR: &str = "\r\n";

/// Commands the panel can send to the co-processor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Command {
    /// Request the current task list
    Get,
    /// Mark a task finished
    Finish { list: u8, task: i32 },
    /// Delete a task
    Delete { list: u8, task: i32 },
}

impl Command {
    /// Render the command text, line terminator included.
    pub fn encode(&self) -> String<MAX_COMMAND_LEN> {
        let mut out = String::new();
        let _ = match self {
            Command::Get => out.push_str("get"),
            Command::Finish { list, task } => {
                write!(out, "finish {}.{}", list, task).map_err(|_| ())
            }
            Command::Delete { list, task } => {
                write!(out, "delete {}.{}", list, task).map_err(|_| ())
            }
        };
        let _ = out.push_str(LINE_TERMINATOR);
        out
    }
}
