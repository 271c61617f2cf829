#![forbid(unsafe_code)]

//! Adaptive stream-tile layout.
//!
//! This crate packs participant tiles of a video call into a rectangle:
//!
//! - [`GridPlacementCalculator`] - rows/columns for N featured tiles
//! - [`AdaptiveGrid`] - fixed-column grid with a centered last row
//! - [`AdaptiveStreamLayout`] - featured region plus a thumbnail strip on one edge
//! - [`StreamCollectionPipeline`] - caps, demotion and overflow aggregation
//! - [`LayoutState`] - caller-owned pin, fullscreen and selection state
//! - [`StreamGrid`] - window class to positioned tiles in one call
//!
//! Everything is a pure function of its inputs: the same streams, state and
//! container always produce the same frame.
//!
//! ```ignore
//! use callgrid_layout::{GridConfig, LayoutState, StreamGrid};
//! use callgrid_core::{Constraints, Size};
//!
//! let grid = StreamGrid::new(GridConfig::from_env());
//! let frame = grid.compose(Size::new(1280, 800), Constraints::fixed(1280, 720), &streams, &state);
//! for (tile, rect) in frame.placed() {
//!     draw(tile, rect);
//! }
//! ```

pub mod adaptive_grid;
pub mod capacity;
pub mod config;
pub mod error;
pub mod frame;
pub mod item;
pub mod pipeline;
pub mod placement;
pub mod state;
pub mod stream_layout;
pub mod tiles;
pub mod window;

pub use adaptive_grid::AdaptiveGrid;
pub use callgrid_core::geometry::{Axis, Constraints, Rect, Sides, Size};
pub use capacity::{
    CapacityConstraints, DEFAULT_THUMBNAIL_COUNT, DEFAULT_THUMBNAIL_MAX_SIZE, thumbnail_size_for,
};
pub use config::{DEFAULT_TILE_PADDING, GridConfig};
pub use error::LayoutError;
pub use frame::{GridFrame, StreamGrid};
pub use item::{LayoutItem, Pin, PositionedTile, TileId};
pub use pipeline::{OverflowSummary, StreamCollectionPipeline};
pub use placement::{GridCalculator, GridPlacementCalculator, GridPlan, split_plan};
pub use state::LayoutState;
pub use stream_layout::{AdaptiveStreamLayout, ThumbnailArrangement};
pub use tiles::{
    OVERFLOW_TILE_ID, OverflowGroup, StreamDescriptor, TileDescriptor, TileFlags, TileKind,
    UserPreview, overflow_tile_id,
};
pub use window::{
    WindowBreakpoints, WindowClass, WindowHeightClass, WindowSizeClass, WindowWidthClass,
};
