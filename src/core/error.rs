//! Error types for expected, recoverable conditions.
//!
//! Nothing here is fatal: an insufficient pool is reported back to the
//! caller, which asks the user for more items and retries on the next change.

use thiserror::Error;

/// Card composition failure.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum CompositionError {
    /// The pool has fewer unique items than the card has usable slots.
    #[error("not enough items: have {have}, need {need} (add {} more)", .need.saturating_sub(*.have))]
    InsufficientPool { have: usize, need: usize },
}

impl CompositionError {
    /// How many more unique items the pool needs.
    #[must_use]
    pub fn missing(&self) -> usize {
        match self {
            CompositionError::InsufficientPool { have, need } => need.saturating_sub(*have),
        }
    }
}
