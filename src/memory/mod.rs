//! Memory-pairs variant: editor pairs in, printable deck out.

pub mod deck;
pub mod pair;

pub use deck::{
    build_deck, MemoryCard, MemoryDeck, MemoryDeckSpec, PairSlot, Side, ANCHOR_END, ANCHOR_START,
    DEFAULT_CARDS_PER_PAGE, DEFAULT_PAIR_COUNT, MIN_CARDS_PER_PAGE, MIN_PAIR_COUNT,
};
pub use pair::{reorder, MemoryPair, PairId};
