//! Tile descriptors handed from the stream pipeline to the renderer.

use std::collections::HashSet;

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

use crate::item::{LayoutItem, Pin, TileId};

/// Preferred id of the synthetic overflow tile.
///
/// When a stream already uses it, [`overflow_tile_id`] appends `#1`, `#2`,
/// ... until the id is free.
pub const OVERFLOW_TILE_ID: &str = "overflow";

/// Overflow tile id that no stream in `streams` uses.
pub fn overflow_tile_id(streams: &[StreamDescriptor]) -> TileId {
    let taken: HashSet<&str> = streams.iter().map(|stream| stream.id.as_str()).collect();
    if !taken.contains(OVERFLOW_TILE_ID) {
        return OVERFLOW_TILE_ID.to_owned();
    }
    (1usize..)
        .map(|suffix| format!("{OVERFLOW_TILE_ID}#{suffix}"))
        .find(|candidate| !taken.contains(candidate.as_str()))
        .unwrap_or_default()
}

/// A participant as shown on an avatar.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserPreview {
    pub id: String,
    pub display_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_uri: Option<String>,
}

impl UserPreview {
    pub fn new(id: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            display_name: display_name.into(),
            avatar_uri: None,
        }
    }

    #[must_use]
    pub fn with_avatar(mut self, uri: impl Into<String>) -> Self {
        self.avatar_uri = Some(uri.into());
        self
    }
}

/// One logical participant stream.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StreamDescriptor {
    pub id: TileId,
    pub user: UserPreview,
    #[serde(default)]
    pub is_local: bool,
    #[serde(default)]
    pub is_screen_share: bool,
}

impl StreamDescriptor {
    pub fn new(id: impl Into<TileId>, user: UserPreview) -> Self {
        Self {
            id: id.into(),
            user,
            is_local: false,
            is_screen_share: false,
        }
    }

    #[must_use]
    pub fn local(mut self) -> Self {
        self.is_local = true;
        self
    }

    #[must_use]
    pub fn screen_share(mut self) -> Self {
        self.is_screen_share = true;
        self
    }

    /// The local participant sharing their own screen.
    #[inline]
    pub fn is_local_screen_share(&self) -> bool {
        self.is_local && self.is_screen_share
    }
}

/// Participants collapsed into the trailing overflow tile.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct OverflowGroup {
    /// Overflowed participants, in stream order.
    pub users: Vec<UserPreview>,
    /// Ids of the overflowed streams, parallel to `users`.
    pub stream_ids: Vec<TileId>,
}

impl OverflowGroup {
    /// Avatars a renderer shows before falling back to the count.
    pub const MAX_AVATARS: usize = 3;

    pub fn push(&mut self, stream: &StreamDescriptor) {
        self.users.push(stream.user.clone());
        self.stream_ids.push(stream.id.clone());
    }

    #[inline]
    pub fn count(&self) -> usize {
        self.users.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    /// Users shown as avatars.
    pub fn avatars(&self) -> &[UserPreview] {
        &self.users[..self.users.len().min(Self::MAX_AVATARS)]
    }
}

bitflags! {
    /// Presentation flags on a tile.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
    pub struct TileFlags: u8 {
        /// Rendered in the featured region while a strip exists.
        const PINNED             = 0b0_0001;
        /// Local screen-share indicator.
        const LOCAL_SCREEN_SHARE = 0b0_0010;
        /// Sole tile of a fullscreen pass.
        const FULLSCREEN         = 0b0_0100;
        /// Currently selected.
        const HIGHLIGHTED        = 0b0_1000;
        /// Rendered in the thumbnail strip.
        const THUMBNAIL          = 0b1_0000;
    }
}

/// What a tile shows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "data", rename_all = "snake_case")]
pub enum TileKind {
    /// Exactly one participant stream.
    Stream(StreamDescriptor),
    /// Non-interactive indicator for the local screen share.
    LocalScreenShare(StreamDescriptor),
    /// Participants beyond every cap.
    OverflowGroup(OverflowGroup),
}

/// One tile slot in a layout pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TileDescriptor {
    pub id: TileId,
    pub flags: TileFlags,
    pub kind: TileKind,
}

impl TileDescriptor {
    pub fn stream(stream: &StreamDescriptor, flags: TileFlags) -> Self {
        Self {
            id: stream.id.clone(),
            flags,
            kind: TileKind::Stream(stream.clone()),
        }
    }

    pub fn local_screen_share(stream: &StreamDescriptor) -> Self {
        Self {
            id: stream.id.clone(),
            flags: TileFlags::PINNED | TileFlags::LOCAL_SCREEN_SHARE,
            kind: TileKind::LocalScreenShare(stream.clone()),
        }
    }

    /// Overflow tile under `id`; see [`overflow_tile_id`].
    pub fn overflow(id: impl Into<TileId>, group: OverflowGroup, flags: TileFlags) -> Self {
        Self {
            id: id.into(),
            flags,
            kind: TileKind::OverflowGroup(group),
        }
    }

    #[inline]
    pub fn is_pinned(&self) -> bool {
        self.flags.contains(TileFlags::PINNED)
    }

    #[inline]
    pub fn is_thumbnail(&self) -> bool {
        self.flags.contains(TileFlags::THUMBNAIL)
    }

    #[inline]
    pub fn is_highlighted(&self) -> bool {
        self.flags.contains(TileFlags::HIGHLIGHTED)
    }

    /// The stream behind a stream or screen-share tile.
    pub fn stream_descriptor(&self) -> Option<&StreamDescriptor> {
        match &self.kind {
            TileKind::Stream(stream) | TileKind::LocalScreenShare(stream) => Some(stream),
            TileKind::OverflowGroup(_) => None,
        }
    }

    #[inline]
    pub fn is_overflow(&self) -> bool {
        matches!(self.kind, TileKind::OverflowGroup(_))
    }

    pub fn overflow_group(&self) -> Option<&OverflowGroup> {
        match &self.kind {
            TileKind::OverflowGroup(group) => Some(group),
            _ => None,
        }
    }

    /// Number of participants this tile stands for.
    pub fn participant_count(&self) -> usize {
        match &self.kind {
            TileKind::OverflowGroup(group) => group.count(),
            _ => 1,
        }
    }

    /// The positioner input for this tile.
    pub fn layout_item(&self) -> LayoutItem {
        LayoutItem::new(self.id.clone(), Pin::from(self.is_pinned()))
    }
}
