//! One-call composer for a full layout pass.
//!
//! [`StreamGrid::compose`] classifies the window, picks the capacity profile,
//! thumbnail arrangement and thumbnail size, runs the stream pipeline and
//! positions the resulting tiles.

use callgrid_core::debug;
use callgrid_core::geometry::{Constraints, Rect, Sides, Size};
use serde::{Deserialize, Serialize};

use crate::adaptive_grid::saturating_u32;
use crate::capacity::{CapacityConstraints, thumbnail_size_for};
use crate::config::GridConfig;
use crate::error::{LayoutError, bounded, fatal};
use crate::item::{LayoutItem, PositionedTile};
use crate::pipeline::{OverflowSummary, StreamCollectionPipeline};
use crate::placement::{GridCalculator, GridPlacementCalculator};
use crate::state::LayoutState;
use crate::stream_layout::{AdaptiveStreamLayout, ThumbnailArrangement};
use crate::tiles::{StreamDescriptor, TileDescriptor};
use crate::window::WindowSizeClass;

/// Result of one layout pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridFrame {
    pub window: WindowSizeClass,
    pub capacity: CapacityConstraints,
    pub arrangement: ThumbnailArrangement,
    pub thumbnail_size: u32,
    pub tile_padding: u32,
    /// Tiles in pipeline order.
    pub tiles: Vec<TileDescriptor>,
    /// Slots for every rendered tile, in pipeline order.
    pub positions: Vec<PositionedTile>,
    pub overflow: Option<OverflowSummary>,
}

impl GridFrame {
    pub fn tile(&self, id: &str) -> Option<&TileDescriptor> {
        self.tiles.iter().find(|tile| tile.id == id)
    }

    /// Slot of a tile, if it was rendered.
    pub fn slot(&self, id: &str) -> Option<Rect> {
        self.positions
            .iter()
            .find(|position| position.id == id)
            .map(|position| position.rect)
    }

    /// Slot inset by the tile padding.
    pub fn content_rect(&self, id: &str) -> Option<Rect> {
        self.slot(id).map(|rect| rect.inner(Sides::all(self.tile_padding)))
    }

    /// The overflow tile, if the pass emitted one.
    pub fn overflow_tile(&self) -> Option<&TileDescriptor> {
        self.tiles.iter().rev().find(|tile| tile.is_overflow())
    }

    /// Tiles paired with their slots, skipping tiles that got none.
    ///
    /// `positions` is a subsequence of `tiles` in the same order, so the two
    /// are walked side by side rather than matched by id.
    pub fn placed(&self) -> impl Iterator<Item = (&TileDescriptor, Rect)> + '_ {
        let mut positions = self.positions.iter().peekable();
        self.tiles.iter().filter_map(move |tile| {
            positions
                .next_if(|position| position.id == tile.id)
                .map(|position| (tile, position.rect))
        })
    }
}

/// Composer for full layout passes.
#[derive(Debug, Clone, Default)]
pub struct StreamGrid<C = GridPlacementCalculator> {
    config: GridConfig,
    calculator: C,
}

impl StreamGrid {
    pub fn new(config: GridConfig) -> Self {
        Self {
            config,
            calculator: GridPlacementCalculator,
        }
    }
}

impl<C> StreamGrid<C> {
    /// Replace the calculator used for more than three featured tiles.
    pub fn with_calculator<D: GridCalculator>(self, calculator: D) -> StreamGrid<D> {
        StreamGrid {
            config: self.config,
            calculator,
        }
    }

    pub fn config(&self) -> &GridConfig {
        &self.config
    }
}

impl<C: GridCalculator> StreamGrid<C> {
    /// Lay out `streams` for a window of `window_dp` inside `container`.
    ///
    /// # Panics
    ///
    /// Panics if either axis of `container` is unbounded.
    #[track_caller]
    pub fn compose(
        &self,
        window_dp: Size,
        container: Constraints,
        streams: &[StreamDescriptor],
        state: &LayoutState,
    ) -> GridFrame {
        fatal(self.try_compose(window_dp, container, streams, state))
    }

    /// Lay out `streams`, rejecting unbounded containers.
    pub fn try_compose(
        &self,
        window_dp: Size,
        container: Constraints,
        streams: &[StreamDescriptor],
        state: &LayoutState,
    ) -> Result<GridFrame, LayoutError> {
        let container = bounded(container)?;
        let window = self.config.breakpoints.classify(window_dp);
        let capacity = self.config.capacity_for(window);
        let arrangement = ThumbnailArrangement::for_window(window);
        let thumbnail_size = thumbnail_size_for(
            container,
            self.config.thumbnail_max_size,
            saturating_u32(capacity.max_thumbnail),
        );

        let (tiles, overflow) =
            StreamCollectionPipeline::build_with_overflow(streams, state, &capacity);
        let thumbnail_cap = match overflow {
            Some(summary) if summary.thumbnail => capacity.max_thumbnail.saturating_add(1),
            _ => capacity.max_thumbnail,
        };
        let items: Vec<LayoutItem> = tiles.iter().map(TileDescriptor::layout_item).collect();
        let positions = AdaptiveStreamLayout::new()
            .arrangement(arrangement)
            .thumbnail_size(thumbnail_size)
            .thumbnail_cap(thumbnail_cap)
            .with_calculator(&self.calculator)
            .layout_in(container, &items);

        debug!(
            window = %window,
            arrangement = arrangement.label(),
            thumbnail_size,
            tiles = tiles.len(),
            positioned = positions.len(),
            "composed stream grid"
        );

        Ok(GridFrame {
            window,
            capacity,
            arrangement,
            thumbnail_size,
            tile_padding: self.config.tile_padding,
            tiles,
            positions,
            overflow,
        })
    }
}
