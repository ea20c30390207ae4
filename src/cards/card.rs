//! Composed bingo cards.
//!
//! A `Card` is a `size × size` grid stored row-major. Cards are immutable
//! snapshots: renderers read them, composition always builds a new one.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::core::{GridSpec, Item, ItemKey};

use super::cell::Cell;

/// A grid of cells.
///
/// Invariant: no item appears twice among the `Filled` cells.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    size: usize,
    cells: Vec<Cell>,
}

impl Card {
    /// Build a card from row-major cells.
    ///
    /// Callers guarantee `cells.len() == size * size` and distinct items.
    pub(crate) fn from_cells(size: usize, cells: Vec<Cell>) -> Self {
        debug_assert_eq!(cells.len(), size * size);
        Self { size, cells }
    }

    /// An all-`Empty` card (with its free center, if any).
    ///
    /// Renderers use this to draw the grid while the pool is too small.
    ///
    /// ```
    /// use bingo_studio::cards::Card;
    /// use bingo_studio::core::GridSpec;
    ///
    /// let card = Card::placeholder(GridSpec::new(3, true));
    /// assert!(card.cell(1, 1).unwrap().is_center());
    /// assert!(!card.is_complete());
    /// assert_eq!(card.filled_items().count(), 0);
    /// ```
    #[must_use]
    pub fn placeholder(spec: GridSpec) -> Self {
        let center = spec.center_index();
        let cells = (0..spec.cell_count())
            .map(|i| if Some(i) == center { Cell::Center } else { Cell::Empty })
            .collect();
        Self::from_cells(spec.size(), cells)
    }

    /// Grid edge length.
    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    /// All cells, row-major.
    #[must_use]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Cell at `(row, col)`, or `None` when out of bounds.
    #[must_use]
    pub fn cell(&self, row: usize, col: usize) -> Option<&Cell> {
        if row >= self.size || col >= self.size {
            return None;
        }
        self.cells.get(row * self.size + col)
    }

    /// Iterate over rows.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.size)
    }

    /// Items in `Filled` cells, row-major.
    pub fn filled_items(&self) -> impl Iterator<Item = &Item> {
        self.cells.iter().filter_map(Cell::item)
    }

    /// True when no cell is `Empty`.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        !self.cells.iter().any(Cell::is_empty)
    }

    /// Check the no-duplicate invariant.
    #[must_use]
    pub fn has_unique_items(&self) -> bool {
        let mut seen: FxHashSet<ItemKey> = FxHashSet::default();
        self.filled_items().all(|item| seen.insert(item.key()))
    }
}
