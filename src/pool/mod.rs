//! Item pools: raw entries in, canonical deduplicated pool out.
//!
//! ## Key Types
//!
//! - `RawItem`: an entry as typed or imported by the user
//! - `Pool`: the canonical, deduplicated sequence composers and sessions draw from
//! - `normalize`: the pure function between the two

pub mod normalizer;
pub mod canonical;

pub use normalizer::{normalize, normalize_with, RawItem};
pub use canonical::Pool;
