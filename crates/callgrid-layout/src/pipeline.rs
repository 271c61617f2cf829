//! Stream collection pipeline.
//!
//! Turns a stream snapshot, the caller's [`LayoutState`] and a capacity
//! profile into the ordered tile list fed to the stream layout. Rules apply
//! in order:
//!
//! 1. An active fullscreen stream is the only tile. No caps, no overflow. A
//!    fullscreen local screen share keeps its indicator kind.
//! 2. The first local screen share becomes a pinned indicator tile placed
//!    first. It never counts against the pin cap.
//! 3. Pins are taken in pin order up to `max_pinned`; the rest are demoted
//!    and rejoin the unpinned streams in stream order.
//! 4. With nothing pinned (mosaic), the first `max_featured` unpinned streams
//!    are featured.
//! 5. With pinned tiles, the first `max_thumbnail` unpinned streams become
//!    thumbnails.
//! 6. Everything left joins one trailing overflow tile. Its id never matches
//!    a stream id.
//!
//! Every stream ends up either as its own tile or inside the overflow tile,
//! never both and never neither.

use std::collections::HashMap;

use callgrid_core::debug;
use serde::{Deserialize, Serialize};

use crate::capacity::CapacityConstraints;
use crate::state::LayoutState;
use crate::tiles::{OverflowGroup, StreamDescriptor, TileDescriptor, TileFlags, overflow_tile_id};

/// Aggregate information about the overflow tile of a pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OverflowSummary {
    /// Participants collapsed into the tile.
    pub count: usize,
    /// Whether the tile sits in the thumbnail strip.
    pub thumbnail: bool,
}

/// Builds the tile list for one layout pass.
#[derive(Debug, Clone, Copy, Default)]
pub struct StreamCollectionPipeline;

impl StreamCollectionPipeline {
    /// Ordered tiles for `streams`.
    pub fn build(
        streams: &[StreamDescriptor],
        state: &LayoutState,
        constraints: &CapacityConstraints,
    ) -> Vec<TileDescriptor> {
        Self::build_with_overflow(streams, state, constraints).0
    }

    /// Ordered tiles plus a summary of the overflow tile, if one was emitted.
    pub fn build_with_overflow(
        streams: &[StreamDescriptor],
        state: &LayoutState,
        constraints: &CapacityConstraints,
    ) -> (Vec<TileDescriptor>, Option<OverflowSummary>) {
        if let Some(stream) = state
            .fullscreen
            .as_deref()
            .and_then(|id| streams.iter().find(|stream| stream.id == id))
        {
            debug!(stream = %stream.id, "fullscreen override");
            let tile = if stream.is_local_screen_share() {
                let mut tile = TileDescriptor::local_screen_share(stream);
                tile.flags.insert(TileFlags::FULLSCREEN);
                tile
            } else {
                TileDescriptor::stream(stream, TileFlags::FULLSCREEN)
            };
            return (vec![tile], None);
        }

        let screen_share = streams.iter().position(StreamDescriptor::is_local_screen_share);

        let mut index_of: HashMap<&str, usize> = HashMap::with_capacity(streams.len());
        for (index, stream) in streams.iter().enumerate() {
            index_of.entry(stream.id.as_str()).or_insert(index);
        }

        // Pinned stream indices in pin order, before the cap.
        let mut is_pinned = vec![false; streams.len()];
        let mut candidates: Vec<usize> = Vec::with_capacity(state.pinned.len());
        for id in &state.pinned {
            let Some(&index) = index_of.get(id.as_str()) else {
                continue;
            };
            if Some(index) != screen_share && !is_pinned[index] {
                is_pinned[index] = true;
                candidates.push(index);
            }
        }
        let pinned = &candidates[..candidates.len().min(constraints.max_pinned)];
        for &index in &candidates[pinned.len()..] {
            is_pinned[index] = false;
        }

        let has_pinned = screen_share.is_some() || !pinned.is_empty();
        let cap = if has_pinned {
            constraints.max_thumbnail
        } else {
            constraints.max_featured
        };
        let unpinned_flags = if has_pinned {
            TileFlags::THUMBNAIL
        } else {
            TileFlags::empty()
        };

        let mut tiles = Vec::new();
        if let Some(index) = screen_share {
            tiles.push(TileDescriptor::local_screen_share(&streams[index]));
        }
        for &index in pinned {
            tiles.push(TileDescriptor::stream(&streams[index], TileFlags::PINNED));
        }

        let mut overflow = OverflowGroup::default();
        let mut placed = 0usize;
        for (index, stream) in streams.iter().enumerate() {
            if Some(index) == screen_share || is_pinned[index] {
                continue;
            }
            if placed < cap {
                tiles.push(TileDescriptor::stream(stream, unpinned_flags));
                placed += 1;
            } else {
                overflow.push(stream);
            }
        }

        if let Some(selected) = state.selected.as_deref() {
            for tile in tiles.iter_mut().filter(|tile| tile.id == selected) {
                if !tile.flags.contains(TileFlags::LOCAL_SCREEN_SHARE) {
                    tile.flags.insert(TileFlags::HIGHLIGHTED);
                }
            }
        }

        let summary = (!overflow.is_empty()).then(|| OverflowSummary {
            count: overflow.count(),
            thumbnail: has_pinned,
        });
        debug!(
            streams = streams.len(),
            screen_share = screen_share.is_some(),
            pinned = pinned.len(),
            demoted = candidates.len() - pinned.len(),
            unpinned = placed,
            overflow = overflow.count(),
            "stream pipeline built tiles"
        );
        if !overflow.is_empty() {
            let id = overflow_tile_id(streams);
            tiles.push(TileDescriptor::overflow(id, overflow, unpinned_flags));
        }
        (tiles, summary)
    }
}
