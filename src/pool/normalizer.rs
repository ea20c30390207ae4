//! Item pool normalizer.
//!
//! Turns raw user entries into a canonical [`Pool`]:
//! - trims `label` and `secondary_text`
//! - drops entries with nothing in any field
//! - deduplicates by [`ItemKey`], keeping the first occurrence
//! - numbers survivors `ItemId(0..)` in order
//!
//! In text mode with a generated pool source, user entries are ignored and
//! the fixed numeric sequence is returned instead.

use im::Vector;
use log::debug;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::core::{Item, ItemId, ItemKey, Mode, PoolSource, StudioConfig, DEFAULT_GENERATED_COUNT};

use super::canonical::Pool;

/// An unprocessed entry as supplied by the collaborator layer.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawItem {
    pub label: String,
    pub secondary_text: String,
    pub media_ref: Option<String>,
}

impl RawItem {
    /// Create a raw entry with text fields only.
    pub fn new(label: impl Into<String>, secondary_text: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            secondary_text: secondary_text.into(),
            media_ref: None,
        }
    }

    /// Create a raw entry with just a label.
    pub fn label(label: impl Into<String>) -> Self {
        Self::new(label, "")
    }

    /// Attach a media reference.
    #[must_use]
    pub fn with_media(mut self, media_ref: impl Into<String>) -> Self {
        self.media_ref = Some(media_ref.into());
        self
    }
}

impl From<&Item> for RawItem {
    fn from(item: &Item) -> Self {
        Self {
            label: item.label.clone(),
            secondary_text: item.secondary_text.clone(),
            media_ref: item.media_ref.clone(),
        }
    }
}

/// Build a canonical pool from raw entries.
///
/// Never fails; empty input gives an empty pool.
///
/// ```
/// use bingo_studio::core::{Mode, PoolSource};
/// use bingo_studio::pool::{normalize, RawItem};
///
/// let raw = vec![
///     RawItem::label("  Dancing Queen "),
///     RawItem::label("dancing queen"),
///     RawItem::label("   "),
///     RawItem::new("Waterloo", "ABBA"),
/// ];
///
/// let pool = normalize(&raw, Mode::Text, PoolSource::Curated);
/// assert_eq!(pool.len(), 2);
/// assert_eq!(pool.get(0).unwrap().label, "Dancing Queen");
/// ```
#[must_use]
pub fn normalize(raw_items: &[RawItem], mode: Mode, source: PoolSource) -> Pool {
    normalize_counted(raw_items, mode, source, DEFAULT_GENERATED_COUNT)
}

/// [`normalize`] using the mode, source, and generated count from a config.
#[must_use]
pub fn normalize_with(raw_items: &[RawItem], config: &StudioConfig) -> Pool {
    normalize_counted(raw_items, config.mode, config.pool_source, config.generated_count)
}

fn normalize_counted(raw_items: &[RawItem], mode: Mode, source: PoolSource, generated_count: u32) -> Pool {
    if source == PoolSource::Generated && mode == Mode::Text {
        debug!("using generated pool of {} numbers", generated_count);
        return Pool::generated(generated_count);
    }

    let mut seen: FxHashSet<ItemKey> = FxHashSet::default();
    let mut items = Vector::new();

    for raw in raw_items {
        let label = raw.label.trim();
        let secondary_text = raw.secondary_text.trim();
        let media_ref = raw
            .media_ref
            .as_deref()
            .filter(|m| !m.trim().is_empty());

        if label.is_empty() && secondary_text.is_empty() && media_ref.is_none() {
            continue;
        }

        if !seen.insert(ItemKey::new(label, secondary_text, media_ref)) {
            continue;
        }

        let id = ItemId(items.len() as u32);
        items.push_back(Item {
            id,
            label: label.to_owned(),
            secondary_text: secondary_text.to_owned(),
            media_ref: media_ref.map(str::to_owned),
        });
    }

    debug!(
        "normalized {} raw entries into a pool of {}",
        raw_items.len(),
        items.len()
    );

    Pool::from_canonical(items)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(pool: &Pool) -> Vec<&str> {
        pool.iter().map(|i| i.label.as_str()).collect()
    }

    #[test]
    fn test_trims_fields() {
        let raw = vec![RawItem::new("  Title  ", "\tArtist\n")];
        let pool = normalize(&raw, Mode::Audio, PoolSource::Curated);

        let item = pool.get(0).unwrap();
        assert_eq!(item.label, "Title");
        assert_eq!(item.secondary_text, "Artist");
    }

    #[test]
    fn test_drops_blank_entries() {
        let raw = vec![
            RawItem::new("", ""),
            RawItem::new("  ", "   "),
            RawItem::new("", "").with_media("  "),
            RawItem::new("", "").with_media("data:audio/mp3;base64,AA"),
        ];
        let pool = normalize(&raw, Mode::Audio, PoolSource::Curated);

        assert_eq!(pool.len(), 1);
        assert_eq!(pool.get(0).unwrap().media_ref.as_deref(), Some("data:audio/mp3;base64,AA"));
    }

    #[test]
    fn test_dedup_case_insensitive_first_wins() {
        let raw = vec![
            RawItem::new("Hello", "World"),
            RawItem::new("hello", "WORLD"),
            RawItem::new("Other", ""),
            RawItem::new(" HELLO ", "world "),
        ];
        let pool = normalize(&raw, Mode::Text, PoolSource::Curated);

        assert_eq!(labels(&pool), vec!["Hello", "Other"]);
        assert_eq!(pool.get(0).unwrap().secondary_text, "World");
    }

    #[test]
    fn test_media_distinguishes_items() {
        let raw = vec![
            RawItem::label("Cat").with_media("https://x/cat1.png"),
            RawItem::label("Cat").with_media("https://x/cat2.png"),
            RawItem::label("Cat").with_media("https://x/cat1.png"),
            RawItem::label("Cat"),
        ];
        let pool = normalize(&raw, Mode::Image, PoolSource::Curated);

        assert_eq!(pool.len(), 3);
    }

    #[test]
    fn test_ids_follow_pool_order() {
        let raw = vec![RawItem::label("a"), RawItem::label("A"), RawItem::label("b")];
        let pool = normalize(&raw, Mode::Text, PoolSource::Curated);

        let ids: Vec<_> = pool.iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![ItemId(0), ItemId(1)]);
    }

    #[test]
    fn test_generated_ignores_user_items() {
        let raw = vec![RawItem::label("Ignored")];
        let pool = normalize(&raw, Mode::Text, PoolSource::Generated);

        assert_eq!(pool.len(), DEFAULT_GENERATED_COUNT as usize);
        assert_eq!(pool.get(0).unwrap().label, "1");
        assert!(pool.iter().all(|i| i.media_ref.is_none()));
    }

    #[test]
    fn test_generated_only_applies_to_text_mode() {
        let raw = vec![RawItem::label("Track")];
        let pool = normalize(&raw, Mode::Audio, PoolSource::Generated);

        assert_eq!(labels(&pool), vec!["Track"]);
    }

    #[test]
    fn test_normalize_with_config_count() {
        let config = StudioConfig::new()
            .with_pool_source(PoolSource::Generated)
            .with_generated_count(90);
        let pool = normalize_with(&[], &config);

        assert_eq!(pool.len(), 90);
    }

    #[test]
    fn test_empty_input() {
        assert!(normalize(&[], Mode::Text, PoolSource::Curated).is_empty());
    }

    #[test]
    fn test_idempotent() {
        let raw = vec![
            RawItem::new(" A ", "x"),
            RawItem::new("a", "X"),
            RawItem::label("B").with_media("m"),
            RawItem::new("", ""),
        ];
        let once = normalize(&raw, Mode::Image, PoolSource::Curated);
        let twice = normalize(&once.to_raw(), Mode::Image, PoolSource::Curated);

        assert_eq!(once, twice);
    }
}
