//! Grid cells.

use serde::{Deserialize, Serialize};

use crate::core::Item;

/// One cell of a card.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Cell {
    /// The free middle cell of an odd grid, always marked.
    Center,
    /// A cell holding a pool item.
    Filled(Item),
    /// Placeholder for partial renders of an insufficient pool.
    Empty,
}

impl Cell {
    /// The item in this cell, if any.
    #[must_use]
    pub fn item(&self) -> Option<&Item> {
        match self {
            Cell::Filled(item) => Some(item),
            Cell::Center | Cell::Empty => None,
        }
    }

    #[must_use]
    pub fn is_center(&self) -> bool {
        matches!(self, Cell::Center)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }
}
