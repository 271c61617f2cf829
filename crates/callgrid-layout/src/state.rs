//! Pin, fullscreen and selection state.
//!
//! The engine never owns this state; hosts keep a [`LayoutState`] next to
//! their participant list, mutate it from user events, and pass a snapshot
//! into every layout pass.

use serde::{Deserialize, Serialize};

use crate::item::TileId;
use crate::tiles::StreamDescriptor;

/// Caller-owned layout state.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LayoutState {
    /// Pinned stream ids, oldest first.
    #[serde(default)]
    pub pinned: Vec<TileId>,
    /// Stream shown alone, if any. Takes precedence over `selected`.
    #[serde(default)]
    pub fullscreen: Option<TileId>,
    /// Stream highlighted in the grid, if any.
    #[serde(default)]
    pub selected: Option<TileId>,
}

fn contains(streams: &[StreamDescriptor], id: &str) -> bool {
    streams.iter().any(|stream| stream.id == id)
}

impl LayoutState {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn is_pinned(&self, id: &str) -> bool {
        self.pinned.iter().any(|pinned| pinned == id)
    }

    #[inline]
    pub fn is_fullscreen(&self) -> bool {
        self.fullscreen.is_some()
    }

    /// Pin a stream.
    ///
    /// Returns `false` without changing anything when the id is unknown,
    /// already pinned, or `max_pinned` pins exist.
    pub fn pin(&mut self, id: &str, streams: &[StreamDescriptor], max_pinned: usize) -> bool {
        if !contains(streams, id) || self.is_pinned(id) || self.pinned.len() >= max_pinned {
            return false;
        }
        self.pinned.push(id.to_owned());
        true
    }

    /// Unpin a stream. Returns whether it was pinned.
    pub fn unpin(&mut self, id: &str) -> bool {
        let before = self.pinned.len();
        self.pinned.retain(|pinned| pinned != id);
        self.pinned.len() != before
    }

    pub fn unpin_all(&mut self) {
        self.pinned.clear();
    }

    /// Show one stream alone. Unknown ids are ignored.
    pub fn enter_fullscreen(&mut self, id: &str, streams: &[StreamDescriptor]) -> bool {
        if !contains(streams, id) {
            return false;
        }
        self.fullscreen = Some(id.to_owned());
        true
    }

    pub fn exit_fullscreen(&mut self) {
        self.fullscreen = None;
    }

    pub fn select(&mut self, id: impl Into<TileId>) {
        self.selected = Some(id.into());
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    /// Bring the state in line with a new stream snapshot.
    ///
    /// Pins, fullscreen and selection pointing at streams that are gone are
    /// dropped, and pins above `max_pinned` are released newest first.
    /// Returns whether anything changed.
    pub fn reconcile(&mut self, streams: &[StreamDescriptor], max_pinned: usize) -> bool {
        let before = self.clone();
        self.pinned.retain(|id| contains(streams, id));
        self.pinned.truncate(max_pinned);
        if self.fullscreen.as_deref().is_some_and(|id| !contains(streams, id)) {
            self.fullscreen = None;
        }
        if self.selected.as_deref().is_some_and(|id| !contains(streams, id)) {
            self.selected = None;
        }
        *self != before
    }
}
