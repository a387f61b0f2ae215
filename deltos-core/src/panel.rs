//! Panel state: task table, selection cursor, display lines.
//!
//! Everything the worker and UI tasks share lives here behind one mutex.
//! The cursor is 1-based and always addresses the valid prefix of the
//! table; display lines are regenerated on every change so readers only
//! ever see a consistent snapshot.

use core::fmt::Write;

use heapless::{String, Vec};

use deltos_protocol::Command;

use crate::parse::{parse_task_data, ParseOutcome};
use crate::table::{TaskRecord, TaskTable, MAX_TASKS};

/// Capacity of one rendered display line.
pub const DISPLAY_LINE_LEN: usize = 200;

/// One rendered line of panel text.
pub type DisplayLine = String<DISPLAY_LINE_LEN>;

/// Input triggers the UI layer can deliver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PanelInput {
    /// Move the selection cursor up
    Up,
    /// Move the selection cursor down
    Down,
    /// Finish the selected task
    Finish,
    /// Delete the selected task
    Delete,
    /// Request a fresh task list
    Get,
}

/// What an input trigger asks the caller to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PanelAction {
    /// The selection moved; re-render the cursor
    SelectionChanged,
    /// Send this command over the link
    Send(Command),
}

/// The shared panel state.
pub struct Panel {
    table: TaskTable,
    /// 1-based cursor into the valid records
    selected: usize,
    lines: Vec<DisplayLine, MAX_TASKS>,
    /// Whether a TASKS payload has ever been applied
    loaded: bool,
}

impl Panel {
    /// Create a panel with an empty table and the cursor at 1.
    ///
    /// Display lines start empty; call [`rebuild_lines`](Self::rebuild_lines)
    /// before the first render.
    pub const fn new() -> Self {
        Self {
            table: TaskTable::new(),
            selected: 1,
            lines: Vec::new(),
            loaded: false,
        }
    }

    /// Replace the table from a TASKS payload.
    ///
    /// Re-clamps the selection and rebuilds the display lines on every
    /// path, including the empty ones.
    pub fn apply_tasks(&mut self, data: &str) -> ParseOutcome {
        let outcome = parse_task_data(data, &mut self.table);
        self.loaded = true;
        self.clamp_selection();
        self.rebuild_lines();
        outcome
    }

    /// Handle one input trigger.
    ///
    /// Boundary moves and actions on an empty table are no-ops and
    /// return `None`.
    pub fn handle_input(&mut self, input: PanelInput) -> Option<PanelAction> {
        match input {
            PanelInput::Up => self.select_up().then_some(PanelAction::SelectionChanged),
            PanelInput::Down => self.select_down().then_some(PanelAction::SelectionChanged),
            PanelInput::Finish => self.selected_record().map(|record| {
                PanelAction::Send(Command::Finish {
                    list: record.list_number,
                    task: record.task_number,
                })
            }),
            PanelInput::Delete => self.selected_record().map(|record| {
                PanelAction::Send(Command::Delete {
                    list: record.list_number,
                    task: record.task_number,
                })
            }),
            PanelInput::Get => Some(PanelAction::Send(Command::Get)),
        }
    }

    /// Move the cursor up one entry; no-op when already at the top.
    pub fn select_up(&mut self) -> bool {
        if self.selected > 1 {
            self.selected -= 1;
            true
        } else {
            false
        }
    }

    /// Move the cursor down one entry; no-op at the bottom or when the
    /// table is empty.
    pub fn select_down(&mut self) -> bool {
        if self.selected < self.table.len() {
            self.selected += 1;
            true
        } else {
            false
        }
    }

    /// 1-based selection cursor.
    pub fn selected_index(&self) -> usize {
        self.selected
    }

    /// The record under the cursor, if any is addressable.
    pub fn selected_record(&self) -> Option<&TaskRecord> {
        self.table.get(self.selected - 1)
    }

    /// The task table, read-only.
    pub fn table(&self) -> &TaskTable {
        &self.table
    }

    /// Rendered display lines for the sink.
    pub fn display_lines(&self) -> &[DisplayLine] {
        &self.lines
    }

    /// Regenerate the display lines from the current table.
    pub fn rebuild_lines(&mut self) {
        self.lines.clear();

        if self.table.is_empty() {
            let mut line = DisplayLine::new();
            let _ = line.push_str(if self.loaded {
                "No tasks available"
            } else {
                "No tasks loaded"
            });
            let _ = self.lines.push(line);

            let mut line = DisplayLine::new();
            let _ = line.push_str("Press GET to load tasks");
            let _ = self.lines.push(line);
            return;
        }

        for (ordinal, record) in self.table.iter().enumerate() {
            let mut line = DisplayLine::new();
            let _ = write!(
                line,
                "{}. {} [{}]",
                ordinal + 1,
                record.title,
                record.list_name
            );
            let _ = self.lines.push(line);
        }
    }

    /// Pull the cursor back inside the valid prefix after the table
    /// shrank; an empty table parks it at 1.
    fn clamp_selection(&mut self) {
        let count = self.table.len();
        if count == 0 {
            self.selected = 1;
        } else if self.selected > count {
            self.selected = count;
        }
    }
}

impl Default for Panel {
    fn default() -> Self {
        Self::new()
    }
}
