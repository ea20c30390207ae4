//! Core types: items, configuration, RNG, errors.
//!
//! Everything else in the crate builds on these. Nothing in here performs
//! I/O; collaborators convert files and URLs into opaque strings first.

pub mod item;
pub mod config;
pub mod rng;
pub mod error;

pub use item::{Item, ItemId, ItemKey, UNTITLED_LABEL};
pub use config::{
    GridSpec, Mode, PoolSource, StudioConfig, DEFAULT_GENERATED_COUNT, DEFAULT_GRID_SIZE,
    DEFAULT_HISTORY_CAPACITY, DEFAULT_TITLE, MAX_GRID_SIZE, MIN_GRID_SIZE,
};
pub use rng::{ShuffleRng, ShuffleRngState};
pub use error::CompositionError;
