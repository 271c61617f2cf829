//! Layout inputs and outputs.
//!
//! The positioners never look inside an item: a [`LayoutItem`] carries an
//! opaque key plus the pinned/unpinned tag, and a [`PositionedTile`] pairs
//! that key with the rectangle it was given.

use callgrid_core::geometry::Rect;
use serde::{Deserialize, Serialize};

/// Opaque tile identifier used by the stream pipeline.
pub type TileId = String;

/// Whether an item belongs to the featured region or the thumbnail strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Pin {
    #[default]
    Unpinned,
    Pinned,
}

impl Pin {
    #[inline]
    pub const fn is_pinned(self) -> bool {
        matches!(self, Self::Pinned)
    }
}

impl From<bool> for Pin {
    fn from(pinned: bool) -> Self {
        if pinned { Self::Pinned } else { Self::Unpinned }
    }
}

/// One input to [`AdaptiveStreamLayout`](crate::AdaptiveStreamLayout).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LayoutItem<K = TileId> {
    pub key: K,
    pub pin: Pin,
}

impl<K> LayoutItem<K> {
    pub fn new(key: K, pin: Pin) -> Self {
        Self { key, pin }
    }

    pub fn pinned(key: K) -> Self {
        Self::new(key, Pin::Pinned)
    }

    pub fn unpinned(key: K) -> Self {
        Self::new(key, Pin::Unpinned)
    }

    #[inline]
    pub fn is_pinned(&self) -> bool {
        self.pin.is_pinned()
    }
}

/// A tile id paired with the rectangle assigned to it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PositionedTile<K = TileId> {
    pub id: K,
    pub rect: Rect,
}

impl<K> PositionedTile<K> {
    pub fn new(id: K, rect: Rect) -> Self {
        Self { id, rect }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pin_from_bool() {
        assert_eq!(Pin::from(true), Pin::Pinned);
        assert_eq!(Pin::from(false), Pin::Unpinned);
        assert!(!Pin::default().is_pinned());
    }

    #[test]
    fn item_constructors_tag_pin() {
        assert!(LayoutItem::pinned("a").is_pinned());
        assert!(!LayoutItem::unpinned("b").is_pinned());
    }
}
