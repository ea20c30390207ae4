//! Live calling sessions.
//!
//! A session plays a pool aloud in random order without repeats, keeping a
//! short history of what was just played and hiding each new item until the
//! caller reveals it.

pub mod history;
pub mod player;

pub use history::History;
pub use player::{SessionPlayer, SessionSnapshot, SessionState};
