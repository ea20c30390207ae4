//! Studio configuration types.
//!
//! The collaborator layer (forms, persisted settings) hands the core:
//! - `Mode`: which kind of content the items carry
//! - `PoolSource`: generated numbers or curated user items
//! - `GridSpec`: card size and free-center rule
//! - `StudioConfig`: all of the above plus session and title settings
//!
//! Out-of-range values are clamped at construction, never rejected.

use serde::{Deserialize, Serialize};

/// Smallest supported grid edge.
pub const MIN_GRID_SIZE: usize = 3;

/// Largest supported grid edge.
pub const MAX_GRID_SIZE: usize = 7;

/// Default grid edge.
pub const DEFAULT_GRID_SIZE: usize = 5;

/// Length of the generated number sequence (`"1"..="75"`).
pub const DEFAULT_GENERATED_COUNT: u32 = 75;

/// Number of recently played items a session remembers.
pub const DEFAULT_HISTORY_CAPACITY: usize = 3;

/// Default card title.
pub const DEFAULT_TITLE: &str = "Friday Bingo";

/// Content mode for a card or session.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mode {
    /// Plain text cells (classic bingo).
    #[default]
    Text,
    /// Image cells.
    Image,
    /// Music tracks, played live by a session.
    Audio,
}

impl Mode {
    /// Whether this mode supports live calling sessions.
    #[must_use]
    pub const fn is_playable(self) -> bool {
        matches!(self, Mode::Audio)
    }
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Mode::Text => "Classic",
            Mode::Image => "Images",
            Mode::Audio => "Music",
        };
        f.write_str(name)
    }
}

/// Where the pool comes from.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PoolSource {
    /// A fixed numeric sequence, ignoring user items (text mode only).
    Generated,
    /// User-entered items after normalization.
    #[default]
    Curated,
}

/// Card grid specification.
///
/// `size` is clamped to `MIN_GRID_SIZE..=MAX_GRID_SIZE`. The free center only
/// applies to odd sizes, since even grids have no middle cell.
///
/// ```
/// use bingo_studio::core::GridSpec;
///
/// let spec = GridSpec::new(5, true);
/// assert_eq!(spec.center_index(), Some(12));
/// assert_eq!(spec.usable_slots(), 24);
///
/// let even = GridSpec::new(4, true);
/// assert_eq!(even.center_index(), None);
/// assert_eq!(even.usable_slots(), 16);
///
/// assert_eq!(GridSpec::new(42, false).size(), 7);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "GridSpecRepr", into = "GridSpecRepr")]
pub struct GridSpec {
    size: usize,
    free_center: bool,
}

/// Wire form of `GridSpec`; deserializing goes through `GridSpec::new` so
/// persisted sizes are clamped too.
#[derive(Clone, Copy, Serialize, Deserialize)]
struct GridSpecRepr {
    size: usize,
    free_center: bool,
}

impl From<GridSpecRepr> for GridSpec {
    fn from(repr: GridSpecRepr) -> Self {
        Self::new(repr.size, repr.free_center)
    }
}

impl From<GridSpec> for GridSpecRepr {
    fn from(spec: GridSpec) -> Self {
        Self {
            size: spec.size,
            free_center: spec.free_center,
        }
    }
}

impl GridSpec {
    /// Create a grid spec, clamping `size` into the supported range.
    #[must_use]
    pub fn new(size: usize, free_center: bool) -> Self {
        Self {
            size: size.clamp(MIN_GRID_SIZE, MAX_GRID_SIZE),
            free_center,
        }
    }

    /// Grid edge length.
    #[must_use]
    pub const fn size(self) -> usize {
        self.size
    }

    /// The free-center flag as requested (may not apply, see `has_free_center`).
    #[must_use]
    pub const fn free_center(self) -> bool {
        self.free_center
    }

    /// Whether the free center actually takes effect.
    #[must_use]
    pub const fn has_free_center(self) -> bool {
        self.free_center && self.size % 2 == 1
    }

    /// Total number of cells.
    #[must_use]
    pub const fn cell_count(self) -> usize {
        self.size * self.size
    }

    /// Row-major index of the free center, if it applies.
    #[must_use]
    pub const fn center_index(self) -> Option<usize> {
        if self.has_free_center() {
            Some(self.cell_count() / 2)
        } else {
            None
        }
    }

    /// Number of cells that must be filled from the pool.
    #[must_use]
    pub const fn usable_slots(self) -> usize {
        if self.has_free_center() {
            self.cell_count() - 1
        } else {
            self.cell_count()
        }
    }
}

impl Default for GridSpec {
    fn default() -> Self {
        Self::new(DEFAULT_GRID_SIZE, true)
    }
}

/// Complete studio configuration.
///
/// Collaborators build this from form input or persisted settings and pass
/// it to the core on every change.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudioConfig {
    /// Card title, shown by renderers.
    pub title: String,

    /// Content mode.
    pub mode: Mode,

    /// Pool construction mode.
    pub pool_source: PoolSource,

    /// Card grid.
    pub grid: GridSpec,

    /// Length of the generated sequence (at least 1).
    pub generated_count: u32,

    /// Session history window (at least 1).
    pub history_capacity: usize,
}

impl Default for StudioConfig {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_owned(),
            mode: Mode::default(),
            pool_source: PoolSource::default(),
            grid: GridSpec::default(),
            generated_count: DEFAULT_GENERATED_COUNT,
            history_capacity: DEFAULT_HISTORY_CAPACITY,
        }
    }
}

impl StudioConfig {
    /// Create the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the title. A blank title falls back to the default.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        let title = title.into();
        self.title = if title.trim().is_empty() {
            DEFAULT_TITLE.to_owned()
        } else {
            title
        };
        self
    }

    /// Set the content mode.
    #[must_use]
    pub fn with_mode(mut self, mode: Mode) -> Self {
        self.mode = mode;
        self
    }

    /// Set the pool source.
    #[must_use]
    pub fn with_pool_source(mut self, source: PoolSource) -> Self {
        self.pool_source = source;
        self
    }

    /// Set the grid.
    #[must_use]
    pub fn with_grid(mut self, grid: GridSpec) -> Self {
        self.grid = grid;
        self
    }

    /// Set the generated sequence length.
    #[must_use]
    pub fn with_generated_count(mut self, count: u32) -> Self {
        self.generated_count = count.max(1);
        self
    }

    /// Set the session history window.
    #[must_use]
    pub fn with_history_capacity(mut self, capacity: usize) -> Self {
        self.history_capacity = capacity.max(1);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_clamps() {
        assert_eq!(GridSpec::new(0, true).size(), MIN_GRID_SIZE);
        assert_eq!(GridSpec::new(2, true).size(), 3);
        assert_eq!(GridSpec::new(6, true).size(), 6);
        assert_eq!(GridSpec::new(100, true).size(), MAX_GRID_SIZE);
    }

    #[test]
    fn test_free_center_only_odd() {
        let odd = GridSpec::new(3, true);
        assert!(odd.has_free_center());
        assert_eq!(odd.center_index(), Some(4));
        assert_eq!(odd.usable_slots(), 8);

        let even = GridSpec::new(6, true);
        assert!(even.free_center());
        assert!(!even.has_free_center());
        assert_eq!(even.usable_slots(), 36);

        let off = GridSpec::new(5, false);
        assert_eq!(off.center_index(), None);
        assert_eq!(off.usable_slots(), 25);
    }

    #[test]
    fn test_center_index_per_size() {
        assert_eq!(GridSpec::new(5, true).center_index(), Some(12));
        assert_eq!(GridSpec::new(7, true).center_index(), Some(24));
    }

    #[test]
    fn test_grid_deserialize_clamps() {
        let spec: GridSpec = serde_json::from_str(r#"{"size":12,"free_center":true}"#).unwrap();
        assert_eq!(spec.size(), MAX_GRID_SIZE);
        assert!(spec.has_free_center());
    }

    #[test]
    fn test_mode_display() {
        assert_eq!(Mode::Text.to_string(), "Classic");
        assert_eq!(Mode::Audio.to_string(), "Music");
        assert!(Mode::Audio.is_playable());
        assert!(!Mode::Image.is_playable());
    }

    #[test]
    fn test_studio_config_defaults() {
        let config = StudioConfig::new();
        assert_eq!(config.title, DEFAULT_TITLE);
        assert_eq!(config.mode, Mode::Text);
        assert_eq!(config.pool_source, PoolSource::Curated);
        assert_eq!(config.grid, GridSpec::new(5, true));
        assert_eq!(config.generated_count, 75);
        assert_eq!(config.history_capacity, 3);
    }

    #[test]
    fn test_studio_config_builder() {
        let config = StudioConfig::new()
            .with_title("   ")
            .with_mode(Mode::Audio)
            .with_pool_source(PoolSource::Generated)
            .with_grid(GridSpec::new(4, false))
            .with_generated_count(0)
            .with_history_capacity(0);

        assert_eq!(config.title, DEFAULT_TITLE);
        assert_eq!(config.mode, Mode::Audio);
        assert_eq!(config.pool_source, PoolSource::Generated);
        assert_eq!(config.grid.size(), 4);
        assert_eq!(config.generated_count, 1);
        assert_eq!(config.history_capacity, 1);
    }

    #[test]
    fn test_studio_config_serde() {
        let config = StudioConfig::new().with_title("Office Party").with_mode(Mode::Image);
        let json = serde_json::to_string(&config).unwrap();
        let back: StudioConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, back);
    }
}
