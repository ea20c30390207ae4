//! Memory deck builder.
//!
//! A deck is always:
//! - the START/END anchor pair, then
//! - exactly `desired_pairs` numbered pairs, cycling through the non-blank
//!   input pairs when there are fewer of them than requested,
//!
//! each pair contributing an `A` and a `B` card. The built deck is
//! deterministic; [`MemoryDeck::shuffled`] gives a playable layout.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::core::ShuffleRng;

use super::pair::{MemoryPair, PairId};

/// Default number of numbered pairs.
pub const DEFAULT_PAIR_COUNT: usize = 8;

/// Fewest numbered pairs a deck may have.
pub const MIN_PAIR_COUNT: usize = 2;

/// Default cards per printed page.
pub const DEFAULT_CARDS_PER_PAGE: usize = 12;

/// Fewest cards per printed page.
pub const MIN_CARDS_PER_PAGE: usize = 4;

/// Anchor card texts.
pub const ANCHOR_START: &str = "START";
pub const ANCHOR_END: &str = "END";

/// Deck size settings, clamped on construction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemoryDeckSpec {
    desired_pairs: usize,
    cards_per_page: usize,
}

impl MemoryDeckSpec {
    #[must_use]
    pub fn new(desired_pairs: usize, cards_per_page: usize) -> Self {
        Self {
            desired_pairs: desired_pairs.max(MIN_PAIR_COUNT),
            cards_per_page: cards_per_page.max(MIN_CARDS_PER_PAGE),
        }
    }

    #[must_use]
    pub fn desired_pairs(self) -> usize {
        self.desired_pairs
    }

    #[must_use]
    pub fn cards_per_page(self) -> usize {
        self.cards_per_page
    }
}

impl Default for MemoryDeckSpec {
    fn default() -> Self {
        Self::new(DEFAULT_PAIR_COUNT, DEFAULT_CARDS_PER_PAGE)
    }
}

/// Which side of a pair a card shows.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    A,
    B,
}

/// The pair a card belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PairSlot {
    /// The START/END pair.
    Anchor,
    /// A numbered pair, 1-based.
    Numbered(usize),
}

/// One printable memory card.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemoryCard {
    pub slot: PairSlot,
    pub side: Side,
    pub text: String,
    pub image: Option<String>,
    /// Badge shown in the card corner, e.g. `Pair 3 · A` or `START`.
    pub label: String,
    /// The input pair this card was built from; `None` for anchors and placeholders.
    pub source: Option<PairId>,
}

/// A complete deck, ready to print.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemoryDeck {
    cards: Vec<MemoryCard>,
    spec: MemoryDeckSpec,
}

/// Build a deck from editor pairs.
///
/// ```
/// use bingo_studio::memory::{build_deck, MemoryDeckSpec, MemoryPair, PairId};
///
/// let pairs = vec![
///     MemoryPair::new(PairId(0), "2 + 2", "4"),
///     MemoryPair::new(PairId(1), "3 × 3", "9"),
/// ];
/// let deck = build_deck(&pairs, MemoryDeckSpec::new(3, 12));
///
/// assert_eq!(deck.len(), 8);
/// assert_eq!(deck.cards()[0].text, "START");
/// assert_eq!(deck.cards()[1].text, "END");
/// assert_eq!(deck.cards()[6].text, "2 + 2");
/// ```
#[must_use]
pub fn build_deck(pairs: &[MemoryPair], spec: MemoryDeckSpec) -> MemoryDeck {
    let placeholder = MemoryPair::new(PairId(0), "Pair A", "Pair B");
    let usable: Vec<&MemoryPair> = pairs.iter().filter(|p| !p.is_blank()).collect();
    let from_input = !usable.is_empty();
    let working: Vec<&MemoryPair> = if from_input { usable } else { vec![&placeholder] };

    let mut cards = Vec::with_capacity(2 * (spec.desired_pairs() + 1));
    cards.push(anchor_card(Side::A));
    cards.push(anchor_card(Side::B));

    for n in 1..=spec.desired_pairs() {
        let pair = working[(n - 1) % working.len()];
        let source = from_input.then_some(pair.id);
        cards.push(numbered_card(n, Side::A, &pair.text_a, &pair.image_a, source));
        cards.push(numbered_card(n, Side::B, &pair.text_b, &pair.image_b, source));
    }

    debug!(
        "built memory deck: {} pairs from {} inputs, {} cards",
        spec.desired_pairs(),
        pairs.len(),
        cards.len()
    );

    MemoryDeck { cards, spec }
}

fn anchor_card(side: Side) -> MemoryCard {
    let text = match side {
        Side::A => ANCHOR_START,
        Side::B => ANCHOR_END,
    };
    MemoryCard {
        slot: PairSlot::Anchor,
        side,
        text: text.to_owned(),
        image: None,
        label: text.to_owned(),
        source: None,
    }
}

fn numbered_card(n: usize, side: Side, text: &str, image: &Option<String>, source: Option<PairId>) -> MemoryCard {
    let (fallback, suffix) = match side {
        Side::A => ("Card A", "A"),
        Side::B => ("Card B", "B"),
    };
    MemoryCard {
        slot: PairSlot::Numbered(n),
        side,
        text: if text.is_empty() { fallback.to_owned() } else { text.to_owned() },
        image: image.as_deref().filter(|src| !src.is_empty()).map(str::to_owned),
        label: format!("Pair {} · {}", n, suffix),
        source,
    }
}

impl MemoryDeck {
    /// All cards in deck order.
    #[must_use]
    pub fn cards(&self) -> &[MemoryCard] {
        &self.cards
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Numbered pairs, excluding the anchor.
    #[must_use]
    pub fn pair_count(&self) -> usize {
        self.spec.desired_pairs()
    }

    #[must_use]
    pub fn spec(&self) -> MemoryDeckSpec {
        self.spec
    }

    /// Cards split into printed pages.
    pub fn pages(&self) -> impl Iterator<Item = &[MemoryCard]> {
        self.cards.chunks(self.spec.cards_per_page())
    }

    /// Grid columns for a printed page.
    #[must_use]
    pub fn columns(&self) -> usize {
        (self.spec.cards_per_page() / 4).max(2)
    }

    /// A copy of this deck in random order.
    #[must_use]
    pub fn shuffled(&self, rng: &mut ShuffleRng) -> MemoryDeck {
        MemoryDeck {
            cards: rng.permuted(&self.cards),
            spec: self.spec,
        }
    }
}
