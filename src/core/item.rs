//! Item model and identity.
//!
//! An `Item` is one entry in a pool: a bingo number, a phrase, an image, or
//! an audio track. The core treats `media_ref` as an opaque string (data URI
//! or URL) and never looks inside it.
//!
//! ## Identity
//!
//! Two items are the same pool entry when their [`ItemKey`]s match:
//! `label` and `secondary_text` compare case-insensitively, `media_ref`
//! compares by exact string. The `id` never participates in identity.
//!
//! ```
//! use bingo_studio::core::{Item, ItemId};
//!
//! let a = Item::new(ItemId(0), "Bohemian Rhapsody", "Queen");
//! let b = Item::new(ItemId(7), "bohemian rhapsody", "QUEEN");
//! assert_eq!(a.key(), b.key());
//!
//! let c = a.clone().with_media("https://example.com/a.mp3");
//! assert_ne!(a.key(), c.key());
//! ```

use serde::{Deserialize, Serialize};

use super::config::Mode;

/// Label shown for an item with neither label nor secondary text.
pub const UNTITLED_LABEL: &str = "Untitled item";

/// Position of an item within its pool.
///
/// Assigned in first-seen order by the normalizer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ItemId(pub u32);

impl ItemId {
    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for ItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Item({})", self.0)
    }
}

/// A canonical pool entry.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub label: String,
    pub secondary_text: String,
    pub media_ref: Option<String>,
}

impl Item {
    /// Create a text item without media.
    pub fn new(id: ItemId, label: impl Into<String>, secondary_text: impl Into<String>) -> Self {
        Self {
            id,
            label: label.into(),
            secondary_text: secondary_text.into(),
            media_ref: None,
        }
    }

    /// Attach an opaque media reference.
    #[must_use]
    pub fn with_media(mut self, media_ref: impl Into<String>) -> Self {
        self.media_ref = Some(media_ref.into());
        self
    }

    /// Identity used for deduplication.
    #[must_use]
    pub fn key(&self) -> ItemKey {
        ItemKey::new(&self.label, &self.secondary_text, self.media_ref.as_deref())
    }

    /// Text a renderer should show for this item.
    ///
    /// Falls back from label to secondary text to [`UNTITLED_LABEL`].
    #[must_use]
    pub fn display_label(&self) -> &str {
        if !self.label.is_empty() {
            &self.label
        } else if !self.secondary_text.is_empty() {
            &self.secondary_text
        } else {
            UNTITLED_LABEL
        }
    }

    /// Media a renderer should embed for this item in the given mode.
    ///
    /// Text mode never embeds media. Image and audio modes prefer the
    /// attached reference and otherwise accept a URL typed into the
    /// secondary field.
    #[must_use]
    pub fn media_source(&self, mode: Mode) -> Option<&str> {
        match mode {
            Mode::Text => None,
            Mode::Image | Mode::Audio => self.media_ref.as_deref().or_else(|| {
                if self.secondary_text.is_empty() {
                    None
                } else {
                    Some(self.secondary_text.as_str())
                }
            }),
        }
    }
}

/// Case-insensitive identity tuple `(label, secondary_text, media_ref)`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ItemKey {
    label: String,
    secondary_text: String,
    media_ref: Option<String>,
}

impl ItemKey {
    /// Build a key from already-trimmed fields.
    #[must_use]
    pub fn new(label: &str, secondary_text: &str, media_ref: Option<&str>) -> Self {
        Self {
            label: label.to_lowercase(),
            secondary_text: secondary_text.to_lowercase(),
            media_ref: media_ref.map(str::to_owned),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_id_display() {
        assert_eq!(ItemId(3).raw(), 3);
        assert_eq!(format!("{}", ItemId(3)), "Item(3)");
    }

    #[test]
    fn test_key_ignores_text_case() {
        let a = Item::new(ItemId(0), "Free Parking", "Board");
        let b = Item::new(ItemId(1), "FREE PARKING", "board");
        assert_eq!(a.key(), b.key());
    }

    #[test]
    fn test_key_media_is_exact() {
        let a = Item::new(ItemId(0), "Song", "").with_media("https://x/Track.mp3");
        let b = Item::new(ItemId(0), "Song", "").with_media("https://x/track.mp3");
        assert_ne!(a.key(), b.key());
    }

    #[test]
    fn test_key_ignores_id() {
        let a = Item::new(ItemId(0), "A", "");
        let b = Item::new(ItemId(99), "A", "");
        assert_eq!(a.key(), b.key());
        assert_ne!(a, b);
    }

    #[test]
    fn test_display_label_fallbacks() {
        assert_eq!(Item::new(ItemId(0), "Title", "Artist").display_label(), "Title");
        assert_eq!(Item::new(ItemId(0), "", "Artist").display_label(), "Artist");
        let media_only = Item::new(ItemId(0), "", "").with_media("data:image/png;base64,AA");
        assert_eq!(media_only.display_label(), UNTITLED_LABEL);
    }

    #[test]
    fn test_media_source_by_mode() {
        let with_file = Item::new(ItemId(0), "Cat", "https://x/cat.png").with_media("data:image/png;base64,AA");
        assert_eq!(with_file.media_source(Mode::Text), None);
        assert_eq!(with_file.media_source(Mode::Image), Some("data:image/png;base64,AA"));

        let url_only = Item::new(ItemId(1), "Song", "https://x/song.mp3");
        assert_eq!(url_only.media_source(Mode::Audio), Some("https://x/song.mp3"));

        let bare = Item::new(ItemId(2), "Song", "");
        assert_eq!(bare.media_source(Mode::Audio), None);
    }
}
