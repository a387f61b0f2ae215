//! Task table storage.

use heapless::{String, Vec};

/// Maximum number of task records held at once.
pub const MAX_TASKS: usize = 20;

/// Capacity of a task title.
pub const TITLE_LEN: usize = 128;

/// Capacity of a list name.
pub const LIST_NAME_LEN: usize = 64;

/// One entry in the task table.
///
/// A record only exists in the table fully populated; overlong source
/// text is silently truncated into the bounded fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TaskRecord {
    /// Display text of the task
    pub title: String<TITLE_LEN>,
    /// Name of the list the task belongs to
    pub list_name: String<LIST_NAME_LEN>,
    /// List number, a single digit 1-9 on the wire
    pub list_number: u8,
    /// Task number within the list
    pub task_number: i32,
}

/// Ordered, fixed-capacity task storage.
///
/// Replaced wholesale on every successful TASKS packet - cleared before
/// repopulating, never patched in place. Valid records occupy `[0, len)`
/// by construction.
#[derive(Debug, Clone, Default)]
pub struct TaskTable {
    records: Vec<TaskRecord, MAX_TASKS>,
}

impl TaskTable {
    /// Create an empty table.
    pub const fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    /// Remove every record.
    pub fn clear(&mut self) {
        self.records.clear();
    }

    /// Number of records currently held.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// True when no records are held.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// True when no further record fits.
    pub fn is_full(&self) -> bool {
        self.records.is_full()
    }

    /// Record at `index` (0-based), if present.
    pub fn get(&self, index: usize) -> Option<&TaskRecord> {
        self.records.get(index)
    }

    /// Append a record; returns it back when the table is full.
    pub fn push(&mut self, record: TaskRecord) -> Result<(), TaskRecord> {
        self.records.push(record)
    }

    /// Iterate the records in order.
    pub fn iter(&self) -> core::slice::Iter<'_, TaskRecord> {
        self.records.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(title: &str) -> TaskRecord {
        let mut r = TaskRecord::default();
        let _ = r.title.push_str(title);
        r
    }

    #[test]
    fn test_new_table_is_empty() {
        let table = TaskTable::new();
        assert!(table.is_empty());
        assert_eq!(table.len(), 0);
        assert!(table.get(0).is_none());
    }

    #[test]
    fn test_push_up_to_capacity() {
        let mut table = TaskTable::new();
        for i in 0..MAX_TASKS {
            assert!(table.push(record("t")).is_ok(), "push {} failed", i);
        }
        assert!(table.is_full());
        assert!(table.push(record("overflow")).is_err());
        assert_eq!(table.len(), MAX_TASKS);
    }

    #[test]
    fn test_clear_drops_everything() {
        let mut table = TaskTable::new();
        let _ = table.push(record("a"));
        let _ = table.push(record("b"));
        table.clear();
        assert!(table.is_empty());
        assert!(table.get(0).is_none());
    }
}
