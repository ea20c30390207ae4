//! Card composition: cells, cards, the composer, and batch allocation.
//!
//! ## Key Types
//!
//! - `Cell`: `Center`, `Filled(item)`, or `Empty`
//! - `Card`: an immutable `size × size` grid of cells
//! - `compose`: one card from a pool and a grid spec
//! - `CardBatch`: a lazy, finite sequence of cards for print runs

pub mod allocator;
pub mod card;
pub mod cell;
pub mod composer;

pub use allocator::{compose_many, AllocationPolicy, CardBatch};
pub use card::Card;
pub use cell::Cell;
pub use composer::compose;
