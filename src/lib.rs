//! # bingo-studio
//!
//! Card composition and live calling engine for bingo-style games, with a
//! memory-pairs variant.
//!
//! ## Design Principles
//!
//! 1. **Pure core**: Normalizing, composing, and deck building are pure
//!    functions. The caller owns all UI and persisted state and calls in on
//!    every change.
//!
//! 2. **Explicit randomness**: Every random step draws from a seeded
//!    `ShuffleRng` the caller passes in, so cards and sessions reproduce.
//!
//! 3. **Clamp, don't fail**: Out-of-range settings are clamped at the
//!    boundary. The only reported condition is a pool too small for a card.
//!
//! ## Data Flow
//!
//! ```text
//! RawItem[] --normalize--> Pool --compose / compose_many--> Card(s)
//!                            \
//!                             +--SessionPlayer::start--> live calling
//! MemoryPair[] --build_deck--> MemoryDeck
//! ```
//!
//! ## Modules
//!
//! - `core`: Items, identity, grid spec, modes, configuration, RNG, errors
//! - `pool`: Raw entries and the normalizer
//! - `cards`: Cells, cards, composer, batch allocator
//! - `session`: Live calling state machine and bounded history
//! - `memory`: Memory-pairs deck builder
//!
//! ## Example
//!
//! ```
//! use bingo_studio::{compose, normalize, GridSpec, Mode, PoolSource, RawItem, ShuffleRng};
//!
//! let raw: Vec<_> = (1..=30).map(|n| RawItem::label(format!("Song {}", n))).collect();
//! let pool = normalize(&raw, Mode::Audio, PoolSource::Curated);
//!
//! let mut rng = ShuffleRng::new(2024);
//! let card = compose(&pool, GridSpec::new(5, true), &mut rng).unwrap();
//! assert_eq!(card.filled_items().count(), 24);
//! ```

pub mod core;
pub mod pool;
pub mod cards;
pub mod session;
pub mod memory;

// Re-export commonly used types
pub use crate::core::{
    Item, ItemId, ItemKey,
    Mode, PoolSource, GridSpec, StudioConfig,
    ShuffleRng, ShuffleRngState,
    CompositionError,
};

pub use crate::pool::{normalize, normalize_with, Pool, RawItem};

pub use crate::cards::{compose, compose_many, AllocationPolicy, Card, CardBatch, Cell};

pub use crate::session::{History, SessionPlayer, SessionSnapshot, SessionState};

pub use crate::memory::{build_deck, reorder, MemoryCard, MemoryDeck, MemoryDeckSpec, MemoryPair, PairId};
