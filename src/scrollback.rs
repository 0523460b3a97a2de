//! Bounded console scrollback and severity classification.

use std::collections::VecDeque;

/// Default number of retained console lines.
pub const DEFAULT_CAPACITY: usize = 8;

/// Display severity derived from a line's prefix convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Normal,
    Success,
    Warning,
    Error,
}

impl Severity {
    /// Classifies a console line by its severity prefix.
    #[must_use]
    pub fn of(line: &str) -> Self {
        if line.starts_with("[SUCCESS]") {
            Self::Success
        } else if line.starts_with("[ERROR]") {
            Self::Error
        } else if line.starts_with("[WARNING]") {
            Self::Warning
        } else {
            Self::Normal
        }
    }
}

/// Bounded FIFO log of revealed console lines.
///
/// Holds at most `capacity` most-recent lines; the oldest line is evicted
/// first and arrival order is never disturbed. Scoped to one screen's
/// lifetime, never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScrollbackBuffer {
    lines: VecDeque<String>,
    capacity: usize,
}

impl ScrollbackBuffer {
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Creates a buffer retaining up to `capacity` lines (minimum 1).
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            lines: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    pub fn append(&mut self, line: impl Into<String>) {
        self.lines.push_back(line.into());
        while self.lines.len() > self.capacity {
            self.lines.pop_front();
        }
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.lines.iter().map(String::as_str)
    }

    #[must_use]
    pub fn last(&self) -> Option<&str> {
        self.lines.back().map(String::as_str)
    }

    #[must_use]
    pub fn to_vec(&self) -> Vec<String> {
        self.lines.iter().cloned().collect()
    }
}

impl Default for ScrollbackBuffer {
    fn default() -> Self {
        Self::new()
    }
}
