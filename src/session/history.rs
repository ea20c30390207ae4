//! Bounded play history.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{Item, DEFAULT_HISTORY_CAPACITY};

/// Most recently played items, oldest first, capped at `capacity`.
///
/// Pushing past capacity evicts the oldest entry.
///
/// ```
/// use bingo_studio::core::{Item, ItemId};
/// use bingo_studio::session::History;
///
/// let mut history = History::new(2);
/// for n in 0..3 {
///     history.push(Item::new(ItemId(n), n.to_string(), ""));
/// }
///
/// let labels: Vec<_> = history.iter().map(|i| i.label.as_str()).collect();
/// assert_eq!(labels, vec!["1", "2"]);
/// assert_eq!(history.latest().unwrap().label, "2");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct History {
    capacity: usize,
    entries: SmallVec<[Item; DEFAULT_HISTORY_CAPACITY]>,
}

impl History {
    /// Create an empty history. Capacity is at least 1.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity: capacity.max(1),
            entries: SmallVec::new(),
        }
    }

    /// Append an item, evicting the oldest if full.
    pub fn push(&mut self, item: Item) {
        if self.entries.len() == self.capacity {
            self.entries.remove(0);
        }
        self.entries.push(item);
    }

    /// Remove all entries.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The most recently pushed item.
    #[must_use]
    pub fn latest(&self) -> Option<&Item> {
        self.entries.last()
    }

    /// Entries oldest first.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &Item> {
        self.entries.iter()
    }

    /// Entries most recent first, as a "last played" list shows them.
    pub fn recent_first(&self) -> impl Iterator<Item = &Item> {
        self.entries.iter().rev()
    }

    /// Entries oldest first as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[Item] {
        &self.entries
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new(DEFAULT_HISTORY_CAPACITY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ItemId;

    fn item(n: u32) -> Item {
        Item::new(ItemId(n), format!("T{}", n), "")
    }

    #[test]
    fn test_bounded() {
        let mut history = History::default();
        for n in 0..10 {
            history.push(item(n));
            assert!(history.len() <= 3);
        }

        let ids: Vec<_> = history.iter().map(|i| i.id.raw()).collect();
        assert_eq!(ids, vec![7, 8, 9]);

        let recent: Vec<_> = history.recent_first().map(|i| i.id.raw()).collect();
        assert_eq!(recent, vec![9, 8, 7]);
    }

    #[test]
    fn test_zero_capacity_clamped() {
        let mut history = History::new(0);
        assert_eq!(history.capacity(), 1);

        history.push(item(1));
        history.push(item(2));
        assert_eq!(history.as_slice(), &[item(2)]);
    }

    #[test]
    fn test_larger_capacity_spills() {
        let mut history = History::new(6);
        for n in 0..6 {
            history.push(item(n));
        }
        assert_eq!(history.len(), 6);
        assert_eq!(history.latest(), Some(&item(5)));
    }

    #[test]
    fn test_clear() {
        let mut history = History::default();
        history.push(item(1));
        history.clear();
        assert!(history.is_empty());
        assert_eq!(history.latest(), None);
    }
}
