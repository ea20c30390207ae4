//! Two-sided memory pairs.

use serde::{Deserialize, Serialize};

/// Identifier for a pair in the editor list.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PairId(pub u32);

/// A question/answer (or picture/word) pair. Each side may carry text, an
/// image reference, or both.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemoryPair {
    pub id: PairId,
    pub text_a: String,
    pub text_b: String,
    pub image_a: Option<String>,
    pub image_b: Option<String>,
}

impl MemoryPair {
    /// Create a text-only pair.
    pub fn new(id: PairId, text_a: impl Into<String>, text_b: impl Into<String>) -> Self {
        Self {
            id,
            text_a: text_a.into(),
            text_b: text_b.into(),
            image_a: None,
            image_b: None,
        }
    }

    /// Create a pair with the same text on both sides.
    pub fn symmetric(id: PairId, text: impl Into<String>) -> Self {
        let text = text.into();
        Self::new(id, text.clone(), text)
    }

    /// Attach images to both sides.
    #[must_use]
    pub fn with_images(mut self, image_a: Option<String>, image_b: Option<String>) -> Self {
        self.image_a = image_a;
        self.image_b = image_b;
        self
    }

    /// True when neither side has text or an image.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.text_a.is_empty()
            && self.text_b.is_empty()
            && self.image_a.as_deref().map_or(true, str::is_empty)
            && self.image_b.as_deref().map_or(true, str::is_empty)
    }
}

/// Move the pair `source` to the position currently held by `target`.
///
/// No-op when the ids are equal or either is missing. Returns whether the
/// list changed.
///
/// ```
/// use bingo_studio::memory::{reorder, MemoryPair, PairId};
///
/// let mut pairs: Vec<_> = (0..4).map(|n| MemoryPair::symmetric(PairId(n), n.to_string())).collect();
/// assert!(reorder(&mut pairs, PairId(0), PairId(2)));
///
/// let order: Vec<_> = pairs.iter().map(|p| p.id.0).collect();
/// assert_eq!(order, vec![1, 2, 0, 3]);
/// ```
pub fn reorder(pairs: &mut Vec<MemoryPair>, source: PairId, target: PairId) -> bool {
    if source == target {
        return false;
    }
    let Some(from) = pairs.iter().position(|p| p.id == source) else {
        return false;
    };
    let Some(to) = pairs.iter().position(|p| p.id == target) else {
        return false;
    };

    let moved = pairs.remove(from);
    pairs.insert(to, moved);
    true
}
