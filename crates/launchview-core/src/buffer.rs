//! Bounded, insertion-ordered log storage.

use std::collections::VecDeque;

use crate::entry::LogEntry;

/// Maximum number of entries the console retains.
pub const LOG_CAPACITY: usize = 1000;

/// Append-only sequence of log entries with a hard length bound.
///
/// Inserting past the bound evicts the oldest entry first. The buffer is the
/// sole owner of its entries; views only project it.
#[derive(Debug)]
pub struct LogBuffer {
    entries: VecDeque<LogEntry>,
    capacity: usize,
}

impl LogBuffer {
    /// Create a buffer with the standard [`LOG_CAPACITY`] bound.
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(LOG_CAPACITY)
    }

    /// Create a buffer with a custom bound. A zero bound is treated as one.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Append an entry, evicting the oldest if the bound would be exceeded.
    pub fn push(&mut self, entry: LogEntry) {
        self.entries.push_back(entry);
        if self.entries.len() > self.capacity {
            self.entries.pop_front();
        }
    }

    /// Drop every entry. A hard reset, not an eviction.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Entries in insertion order, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &LogEntry> {
        self.entries.iter()
    }

    /// The most recent entry, if any.
    #[must_use]
    pub fn last(&self) -> Option<&LogEntry> {
        self.entries.back()
    }
}

impl Default for LogBuffer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entry::Severity;

    fn entry(msg: &str) -> LogEntry {
        LogEntry::new(msg, Severity::Info)
    }

    #[test]
    fn starts_empty() {
        let buffer = LogBuffer::new();
        assert!(buffer.is_empty());
        assert_eq!(buffer.capacity(), LOG_CAPACITY);
    }

    #[test]
    fn push_keeps_insertion_order() {
        let mut buffer = LogBuffer::new();
        buffer.push(entry("first"));
        buffer.push(entry("second"));
        let messages: Vec<&str> = buffer.iter().map(LogEntry::message).collect();
        assert_eq!(messages, ["first", "second"]);
    }

    #[test]
    fn overflow_evicts_oldest_first() {
        let mut buffer = LogBuffer::with_capacity(3);
        for msg in ["a", "b", "c", "d"] {
            buffer.push(entry(msg));
        }
        assert_eq!(buffer.len(), 3);
        let messages: Vec<&str> = buffer.iter().map(LogEntry::message).collect();
        assert_eq!(messages, ["b", "c", "d"]);
    }

    #[test]
    fn length_never_exceeds_the_bound() {
        let mut buffer = LogBuffer::new();
        for i in 0..LOG_CAPACITY + 200 {
            buffer.push(entry(&format!("msg {i}")));
            assert!(buffer.len() <= LOG_CAPACITY);
        }
        assert_eq!(buffer.len(), LOG_CAPACITY);
    }

    #[test]
    fn retains_the_most_recent_entries() {
        let mut buffer = LogBuffer::new();
        for i in 0..LOG_CAPACITY + 5 {
            buffer.push(entry(&format!("msg {i}")));
        }
        let first = buffer.iter().next().unwrap();
        assert_eq!(first.message(), "msg 5");
        assert_eq!(
            buffer.last().unwrap().message(),
            format!("msg {}", LOG_CAPACITY + 4)
        );
    }

    #[test]
    fn clear_is_a_hard_reset() {
        let mut buffer = LogBuffer::with_capacity(3);
        buffer.push(entry("a"));
        buffer.push(entry("b"));
        buffer.clear();
        assert!(buffer.is_empty());
    }

    #[test]
    fn zero_capacity_is_clamped_to_one() {
        let mut buffer = LogBuffer::with_capacity(0);
        buffer.push(entry("only"));
        buffer.push(entry("newer"));
        assert_eq!(buffer.len(), 1);
        assert_eq!(buffer.last().unwrap().message(), "newer");
    }
}
