//! Multi-card allocator for print batches.
//!
//! A [`CardBatch`] lazily yields up to `count` cards. Each card gets its own
//! forked RNG stream, so cards are independent permutations.
//!
//! ## Policies
//!
//! - [`AllocationPolicy::Independent`]: every card samples the full pool.
//!   Cards may share items; callers wanting fully distinct cards must supply
//!   at least `count × usable_slots` items.
//! - [`AllocationPolicy::PreferFresh`]: every card takes all items no
//!   earlier card used, topped up from a shuffle of the used ones when fewer
//!   than `usable_slots` are left. Overlap with earlier cards is the least any
//!   card could have.
//!
//! ## Fallback
//!
//! When a card after the first can't be composed, the batch yields a copy of
//! the first card instead of failing. `fallbacks()` counts these copies. If
//! the first card itself fails, the batch ends and `first_error()` reports
//! why. Both policies only fail a card on a pool shortfall, which the first
//! card hits too.

use im::Vector;
use log::{trace, warn};
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::core::{CompositionError, GridSpec, Item, ItemId, ShuffleRng};
use crate::pool::Pool;

use super::card::Card;
use super::composer::compose;

/// How later cards in a batch draw from the pool.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum AllocationPolicy {
    /// Re-sample the full pool for every card.
    #[default]
    Independent,
    /// Place items no earlier card used first, then top up from used ones.
    PreferFresh,
}

/// Lazily composed sequence of cards.
///
/// Finite and not restartable: each `next()` advances the batch.
#[derive(Clone, Debug)]
pub struct CardBatch {
    pool: Pool,
    spec: GridSpec,
    policy: AllocationPolicy,
    rng: ShuffleRng,
    remaining: usize,
    first: Option<Card>,
    first_error: Option<CompositionError>,
    used: FxHashSet<ItemId>,
    fallbacks: usize,
}

/// Compose `count` cards with the default policy.
///
/// ```
/// use bingo_studio::cards::compose_many;
/// use bingo_studio::core::{GridSpec, ShuffleRng};
/// use bingo_studio::pool::Pool;
///
/// let mut rng = ShuffleRng::new(1);
/// let cards: Vec<_> = compose_many(&Pool::generated(75), GridSpec::default(), 2, &mut rng).collect();
/// assert_eq!(cards.len(), 2);
/// ```
pub fn compose_many(pool: &Pool, spec: GridSpec, count: usize, rng: &mut ShuffleRng) -> CardBatch {
    CardBatch::new(pool, spec, count, rng)
}

impl CardBatch {
    /// Create a batch. The batch draws from a fork of `rng`.
    pub fn new(pool: &Pool, spec: GridSpec, count: usize, rng: &mut ShuffleRng) -> Self {
        Self {
            pool: pool.clone(),
            spec,
            policy: AllocationPolicy::default(),
            rng: rng.fork(),
            remaining: count,
            first: None,
            first_error: None,
            used: FxHashSet::default(),
            fallbacks: 0,
        }
    }

    /// Set the allocation policy.
    #[must_use]
    pub fn with_policy(mut self, policy: AllocationPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Cards still to be yielded (upper bound).
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.remaining
    }

    /// Number of cards that were copies of the first card.
    #[must_use]
    pub fn fallbacks(&self) -> usize {
        self.fallbacks
    }

    /// Why the first card couldn't be composed, if it couldn't.
    #[must_use]
    pub fn first_error(&self) -> Option<CompositionError> {
        self.first_error
    }

    fn candidates(&self, rng: &mut ShuffleRng) -> Pool {
        if self.policy == AllocationPolicy::Independent || self.used.is_empty() {
            return self.pool.clone();
        }

        let mut fresh: Vector<Item> = Vector::new();
        let mut used: Vec<Item> = Vec::new();
        for item in self.pool.iter() {
            if self.used.contains(&item.id) {
                used.push(item.clone());
            } else {
                fresh.push_back(item.clone());
            }
        }

        let short = self.spec.usable_slots().saturating_sub(fresh.len());
        if short > 0 {
            trace!("{} fresh items left, topping up {} from used", fresh.len(), short);
            fresh.extend(rng.permuted(&used).into_iter().take(short));
        }

        Pool::from_canonical(fresh)
    }
}

impl Iterator for CardBatch {
    type Item = Card;

    fn next(&mut self) -> Option<Card> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;

        let mut card_rng = self.rng.fork();
        let candidates = self.candidates(&mut card_rng);

        match compose(&candidates, self.spec, &mut card_rng) {
            Ok(card) => {
                if self.policy == AllocationPolicy::PreferFresh {
                    self.used.extend(card.filled_items().map(|item| item.id));
                }
                if self.first.is_none() {
                    self.first = Some(card.clone());
                }
                Some(card)
            }
            Err(err) => match &self.first {
                Some(first) => {
                    self.fallbacks += 1;
                    warn!("batch card could not be composed ({}), reusing first card", err);
                    Some(first.clone())
                }
                None => {
                    self.first_error = Some(err);
                    self.remaining = 0;
                    None
                }
            },
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        // Once a first card exists every remaining slot yields a card
        let lower = if self.first.is_some() { self.remaining } else { 0 };
        (lower, Some(self.remaining))
    }
}

impl std::iter::FusedIterator for CardBatch {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_yields_count() {
        let mut rng = ShuffleRng::new(4);
        let batch = compose_many(&Pool::generated(75), GridSpec::new(5, true), 5, &mut rng);
        let cards: Vec<_> = batch.collect();

        assert_eq!(cards.len(), 5);
        assert!(cards.iter().all(Card::has_unique_items));
    }

    #[test]
    fn test_cards_are_independent() {
        let mut rng = ShuffleRng::new(4);
        let cards: Vec<_> = compose_many(&Pool::generated(75), GridSpec::new(5, true), 2, &mut rng).collect();

        assert_ne!(cards[0], cards[1]);
    }

    #[test]
    fn test_zero_count() {
        let mut rng = ShuffleRng::new(4);
        let mut batch = compose_many(&Pool::generated(75), GridSpec::default(), 0, &mut rng);
        assert!(batch.next().is_none());
        assert_eq!(batch.first_error(), None);
    }

    #[test]
    fn test_first_failure_ends_batch() {
        let mut rng = ShuffleRng::new(4);
        let mut batch = compose_many(&Pool::generated(3), GridSpec::new(3, true), 2, &mut rng);

        assert!(batch.next().is_none());
        assert!(batch.next().is_none());
        assert_eq!(
            batch.first_error(),
            Some(CompositionError::InsufficientPool { have: 3, need: 8 })
        );
    }

    #[test]
    fn test_prefer_fresh_distinct_cards() {
        let mut rng = ShuffleRng::new(8);
        let cards: Vec<_> = compose_many(&Pool::generated(16), GridSpec::new(3, true), 2, &mut rng)
            .with_policy(AllocationPolicy::PreferFresh)
            .collect();

        let first: FxHashSet<_> = cards[0].filled_items().map(|i| i.id).collect();
        assert!(cards[1].filled_items().all(|i| !first.contains(&i.id)));
    }

    fn overlap(a: &Card, b: &Card) -> usize {
        let ids: FxHashSet<_> = a.filled_items().map(|i| i.id).collect();
        b.filled_items().filter(|i| ids.contains(&i.id)).count()
    }

    #[test]
    fn test_prefer_fresh_tops_up_from_used() {
        let mut rng = ShuffleRng::new(8);
        let mut batch = compose_many(&Pool::generated(10), GridSpec::new(3, true), 3, &mut rng)
            .with_policy(AllocationPolicy::PreferFresh);

        let first = batch.next().unwrap();
        assert_eq!(batch.size_hint(), (2, Some(2)));

        let second = batch.next().unwrap();
        let third = batch.next().unwrap();

        // Two fresh items are left after the first card; six come from it
        assert!(second.has_unique_items());
        assert_eq!(overlap(&first, &second), 6);
        assert_ne!(second, first);
        assert!(third.is_complete());
        assert_eq!(batch.fallbacks(), 0);
        assert!(batch.next().is_none());
    }

    #[test]
    fn test_prefer_fresh_overlap_not_above_independent() {
        let pool = Pool::generated(10);
        let spec = GridSpec::new(3, true);

        for seed in 0..32 {
            let independent: Vec<_> = compose_many(&pool, spec, 2, &mut ShuffleRng::new(seed)).collect();
            let fresh: Vec<_> = compose_many(&pool, spec, 2, &mut ShuffleRng::new(seed))
                .with_policy(AllocationPolicy::PreferFresh)
                .collect();

            assert_eq!(independent[0], fresh[0]);
            assert!(overlap(&fresh[0], &fresh[1]) <= overlap(&independent[0], &independent[1]));
        }
    }

    #[test]
    fn test_batch_deterministic() {
        let pool = Pool::generated(75);
        let a: Vec<_> = compose_many(&pool, GridSpec::default(), 3, &mut ShuffleRng::new(2)).collect();
        let b: Vec<_> = compose_many(&pool, GridSpec::default(), 3, &mut ShuffleRng::new(2)).collect();
        assert_eq!(a, b);
    }
}
