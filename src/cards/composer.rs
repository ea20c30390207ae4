//! Card composer.
//!
//! Composition is three steps:
//! 1. Check the pool covers every usable slot
//! 2. Take a uniformly random permutation of the pool (the only random step)
//! 3. Fill cells row-major, skipping the free center
//!
//! The pool is never mutated; the permutation is a fresh vector.

use log::{debug, trace};

use crate::core::{CompositionError, GridSpec, ShuffleRng};
use crate::pool::Pool;

use super::card::Card;
use super::cell::Cell;

/// Compose one card from a pool.
///
/// Returns `InsufficientPool` when the pool has fewer items than the grid
/// has usable slots; the caller decides how to render that state.
///
/// ```
/// use bingo_studio::cards::compose;
/// use bingo_studio::core::{CompositionError, GridSpec, ShuffleRng};
/// use bingo_studio::pool::Pool;
///
/// let mut rng = ShuffleRng::new(7);
/// let spec = GridSpec::new(3, true);
///
/// let err = compose(&Pool::generated(4), spec, &mut rng).unwrap_err();
/// assert_eq!(err, CompositionError::InsufficientPool { have: 4, need: 8 });
///
/// let card = compose(&Pool::generated(8), spec, &mut rng).unwrap();
/// assert!(card.cells()[4].is_center());
/// assert_eq!(card.filled_items().count(), 8);
/// ```
pub fn compose(pool: &Pool, spec: GridSpec, rng: &mut ShuffleRng) -> Result<Card, CompositionError> {
    let need = spec.usable_slots();
    let have = pool.len();

    if have < need {
        debug!("cannot compose {}x{} card: have {}, need {}", spec.size(), spec.size(), have, need);
        return Err(CompositionError::InsufficientPool { have, need });
    }

    let mut sampled = rng.permuted_iter(pool.iter()).into_iter().take(need);
    let center = spec.center_index();

    let cells: Vec<Cell> = (0..spec.cell_count())
        .map(|index| {
            if Some(index) == center {
                Cell::Center
            } else {
                // `need` items were taken for exactly the non-center cells
                sampled.next().map_or(Cell::Empty, Cell::Filled)
            }
        })
        .collect();

    trace!("composed {}x{} card from pool of {}", spec.size(), spec.size(), have);

    Ok(Card::from_cells(spec.size(), cells))
}
