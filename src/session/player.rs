//! Live calling session.
//!
//! ## States
//!
//! ```text
//! Idle --start(pool)--> Playing --advance--> Playing
//!                          |                    |
//!                          +------advance-------+--> Exhausted
//! any --reset/stop--> Idle
//! ```
//!
//! `start` shuffles the whole pool into a queue and draws the first item.
//! `advance` pops the next item and moves the previous one into a bounded
//! history. The final item is not added to history when the queue runs dry. Items are only ever popped, so nothing plays twice in a session.
//! Once the queue runs dry the session is `Exhausted` until reset.

use im::Vector;
use log::{debug, trace};
use serde::{Deserialize, Serialize};

use crate::core::{Item, Mode, ShuffleRng, StudioConfig, DEFAULT_HISTORY_CAPACITY};
use crate::pool::Pool;

use super::history::History;

/// Session lifecycle state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SessionState {
    /// Not started, or reset.
    #[default]
    Idle,
    /// An item is current and more may follow.
    Playing,
    /// Every item has been played.
    Exhausted,
}

/// Shuffle/draw/history/reveal controller.
///
/// ```
/// use bingo_studio::core::{Mode, PoolSource};
/// use bingo_studio::pool::{normalize, RawItem};
/// use bingo_studio::session::{SessionPlayer, SessionState};
///
/// let raw: Vec<_> = ["T1", "T2", "T3"].iter().map(|t| RawItem::label(*t)).collect();
/// let pool = normalize(&raw, Mode::Audio, PoolSource::Curated);
///
/// let mut player = SessionPlayer::with_seed(42);
/// assert!(player.start(&pool));
/// assert!(player.current().is_some());
/// assert!(!player.is_revealed());
///
/// player.advance();
/// player.advance();
/// assert_eq!(player.played_count(), 3);
///
/// player.advance();
/// assert_eq!(player.state(), SessionState::Exhausted);
/// assert!(player.current().is_none());
/// assert!(player.is_revealed());
/// ```
#[derive(Clone, Debug)]
pub struct SessionPlayer {
    state: SessionState,
    queue: Vector<Item>,
    history: History,
    current: Option<Item>,
    revealed: bool,
    played: usize,
    rng: ShuffleRng,
}

impl SessionPlayer {
    /// Create an idle player drawing from `rng`, with the default history window.
    #[must_use]
    pub fn new(rng: ShuffleRng) -> Self {
        Self::with_capacity(rng, DEFAULT_HISTORY_CAPACITY)
    }

    /// Create an idle player seeded with `seed`.
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self::new(ShuffleRng::new(seed))
    }

    /// Create an idle player with a custom history window.
    #[must_use]
    pub fn with_capacity(rng: ShuffleRng, history_capacity: usize) -> Self {
        Self {
            state: SessionState::Idle,
            queue: Vector::new(),
            history: History::new(history_capacity),
            current: None,
            revealed: false,
            played: 0,
            rng,
        }
    }

    /// Create an idle player using the history window from `config`.
    #[must_use]
    pub fn from_config(config: &StudioConfig, rng: ShuffleRng) -> Self {
        Self::with_capacity(rng, config.history_capacity)
    }

    /// Start a session over `pool`.
    ///
    /// An empty pool is a no-op: the player stays `Idle` and this returns
    /// `false`. Starting while already playing restarts from a fresh shuffle.
    pub fn start(&mut self, pool: &Pool) -> bool {
        if pool.is_empty() {
            debug!("session start ignored: pool is empty");
            return false;
        }

        self.queue = self.rng.permuted_iter(pool.iter()).into_iter().collect();
        self.history.clear();
        self.current = None;
        self.played = 0;
        self.state = SessionState::Playing;
        debug!("session started with {} items", self.queue.len());

        self.advance();
        true
    }

    /// Draw the next item.
    ///
    /// Does nothing while `Idle`. The previous item moves into history only
    /// when a next item exists. With an empty queue the session becomes
    /// `Exhausted`: no current item, history untouched, revealed so the
    /// finished message shows.
    pub fn advance(&mut self) -> Option<&Item> {
        if self.state == SessionState::Idle {
            return None;
        }

        match self.queue.pop_front() {
            Some(next) => {
                if let Some(previous) = self.current.take() {
                    self.history.push(previous);
                }
                trace!("session advanced to {}, {} remaining", next.id, self.queue.len());
                self.current = Some(next);
                self.played += 1;
                self.revealed = false;
                self.state = SessionState::Playing;
            }
            None => {
                if self.state != SessionState::Exhausted {
                    debug!("session exhausted after {} items", self.played);
                }
                self.current = None;
                self.revealed = true;
                self.state = SessionState::Exhausted;
            }
        }

        self.current.as_ref()
    }

    /// Reveal the current item. Idempotent.
    pub fn reveal(&mut self) {
        self.revealed = true;
    }

    /// Clear everything and return to `Idle`.
    pub fn reset(&mut self) {
        if self.state != SessionState::Idle {
            debug!("session reset");
        }
        self.state = SessionState::Idle;
        self.queue = Vector::new();
        self.history.clear();
        self.current = None;
        self.revealed = false;
        self.played = 0;
    }

    /// Stop playback. Same as [`reset`](Self::reset).
    pub fn stop(&mut self) {
        self.reset();
    }

    /// React to a mode switch: leaving a playable mode discards the session.
    pub fn on_mode_change(&mut self, mode: Mode) {
        if !mode.is_playable() {
            self.reset();
        }
    }

    #[must_use]
    pub fn state(&self) -> SessionState {
        self.state
    }

    #[must_use]
    pub fn current(&self) -> Option<&Item> {
        self.current.as_ref()
    }

    #[must_use]
    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    #[must_use]
    pub fn history(&self) -> &History {
        &self.history
    }

    /// Items not yet drawn.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.queue.len()
    }

    /// Items drawn so far, including the current one.
    #[must_use]
    pub fn played_count(&self) -> usize {
        self.played
    }

    /// True once every item has been played.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        self.state == SessionState::Exhausted
    }

    /// Read-only view for renderers.
    #[must_use]
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            state: self.state,
            current: self.current.clone(),
            revealed: self.revealed,
            history: self.history.as_slice().to_vec(),
            remaining: self.queue.len(),
            played: self.played,
        }
    }
}

impl Default for SessionPlayer {
    fn default() -> Self {
        Self::new(ShuffleRng::from_entropy())
    }
}

/// Point-in-time copy of a session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub state: SessionState,
    pub current: Option<Item>,
    pub revealed: bool,
    /// Oldest first.
    pub history: Vec<Item>,
    pub remaining: usize,
    pub played: usize,
}

impl SessionSnapshot {
    /// History most recent first.
    pub fn recent_first(&self) -> impl Iterator<Item = &Item> {
        self.history.iter().rev()
    }
}
