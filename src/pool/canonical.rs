//! The canonical item pool.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::core::{Item, ItemId};

use super::normalizer::RawItem;

/// Ordered, deduplicated sequence of candidate items.
///
/// Backed by a persistent vector so handing a snapshot to a renderer or a
/// session is O(1). A pool is rebuilt, never edited, when its sources change.
///
/// ```
/// use bingo_studio::pool::Pool;
///
/// let pool = Pool::generated(75);
/// assert_eq!(pool.len(), 75);
/// assert_eq!(pool.get(0).unwrap().label, "1");
/// assert_eq!(pool.get(74).unwrap().label, "75");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pool {
    items: Vector<Item>,
}

impl Pool {
    /// Create an empty pool.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The fixed sequence `"1"..="count"` with no media.
    #[must_use]
    pub fn generated(count: u32) -> Self {
        let items = (1..=count)
            .map(|n| Item::new(ItemId(n - 1), n.to_string(), ""))
            .collect();
        Self { items }
    }

    /// Wrap items that are already canonical (trimmed, unique, numbered).
    pub(crate) fn from_canonical(items: Vector<Item>) -> Self {
        Self { items }
    }

    /// Number of items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if the pool is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Get an item by position.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Item> {
        self.items.get(index)
    }

    /// Iterate over items in pool order.
    pub fn iter(&self) -> impl Iterator<Item = &Item> {
        self.items.iter()
    }

    /// The underlying persistent vector.
    #[must_use]
    pub fn items(&self) -> &Vector<Item> {
        &self.items
    }

    /// Convert back to raw entries, e.g. to feed the normalizer again.
    #[must_use]
    pub fn to_raw(&self) -> Vec<RawItem> {
        self.items.iter().map(RawItem::from).collect()
    }
}

impl<'a> IntoIterator for &'a Pool {
    type Item = &'a Item;
    type IntoIter = im::vector::Iter<'a, Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
