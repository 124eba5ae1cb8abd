//! Undo history of a level session.

use std::{
    collections::{VecDeque, vec_deque},
    num::NonZero,
};

use blockslide_core::{Label, Positions};

/// A move as it can be reverted: which vehicle moved and where it was before.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    /// The vehicle that moved.
    pub label: Label,
    /// Its cells before the move.
    pub previous: Positions,
}

/// A bounded LIFO stack of [`HistoryEntry`].
///
/// When full, pushing drops the oldest entry.
#[derive(Debug, Clone)]
pub struct History {
    stack: VecDeque<HistoryEntry>,
    capacity: NonZero<usize>,
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}

impl History {
    /// Capacity used by [`History::new`].
    #[must_use]
    pub const fn default_capacity() -> NonZero<usize> {
        NonZero::new(5000).unwrap()
    }

    /// Creates an empty history with the default capacity.
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(Self::default_capacity())
    }

    /// Creates an empty history holding at most `capacity` entries.
    #[must_use]
    pub fn with_capacity(capacity: NonZero<usize>) -> Self {
        Self {
            stack: VecDeque::new(),
            capacity,
        }
    }

    /// Returns the maximum number of entries kept.
    #[must_use]
    pub fn capacity(&self) -> NonZero<usize> {
        self.capacity
    }

    /// Returns the number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.stack.len()
    }

    /// Returns `true` if there is nothing to undo.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }

    /// Returns the entries from oldest to newest.
    pub fn entries(&self) -> vec_deque::Iter<'_, HistoryEntry> {
        self.stack.iter()
    }

    /// Pushes an entry, dropping the oldest one if the history is full.
    pub fn push(&mut self, entry: HistoryEntry) {
        if self.stack.len() == self.capacity.get() {
            self.stack.pop_front();
        }
        self.stack.push_back(entry);
    }

    /// Removes and returns the newest entry.
    pub fn pop(&mut self) -> Option<HistoryEntry> {
        self.stack.pop_back()
    }

    /// Removes every entry.
    pub fn clear(&mut self) {
        self.stack.clear();
    }
}

#[cfg(test)]
mod tests {
    use std::num::NonZero;

    use blockslide_core::{Cell, Label};

    use super::*;

    fn entry(label: char, first: u8) -> HistoryEntry {
        HistoryEntry {
            label: Label::new(label).unwrap(),
            previous: [Cell::new(first), Cell::new(first + 1)].into_iter().collect(),
        }
    }

    #[test]
    fn push_pop_is_lifo() {
        let mut history = History::new();
        history.push(entry('A', 0));
        history.push(entry('B', 6));
        history.push(entry('C', 12));

        assert_eq!(history.len(), 3);
        assert_eq!(history.pop(), Some(entry('C', 12)));
        assert_eq!(history.pop(), Some(entry('B', 6)));
        assert_eq!(history.pop(), Some(entry('A', 0)));
        assert_eq!(history.pop(), None);
        assert!(history.is_empty());
    }

    #[test]
    fn capacity_drops_oldest() {
        let mut history = History::with_capacity(NonZero::new(2).unwrap());
        history.push(entry('A', 0));
        history.push(entry('B', 6));
        history.push(entry('C', 12));

        let labels: Vec<char> = history.entries().map(|e| e.label.as_char()).collect();
        assert_eq!(labels, ['B', 'C']);
        assert_eq!(history.pop(), Some(entry('C', 12)));
        assert_eq!(history.pop(), Some(entry('B', 6)));
        assert_eq!(history.pop(), None);
    }

    #[test]
    fn clear_resets_history_state() {
        let mut history = History::new();
        history.push(entry('A', 0));
        history.push(entry('B', 6));

        history.clear();

        assert!(history.is_empty());
        assert_eq!(history.pop(), None);

        history.push(entry('C', 12));
        assert_eq!(history.len(), 1);
    }
}
