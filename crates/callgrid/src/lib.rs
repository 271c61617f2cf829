#![forbid(unsafe_code)]

//! callgrid public facade crate.
//!
//! Re-exports the geometry primitives and the stream-tile layout engine, and
//! offers a small prelude for hosts that only need to compose frames.
//!
//! ```
//! use callgrid::prelude::*;
//!
//! let streams = vec![
//!     StreamDescriptor::new("a", UserPreview::new("ua", "Ada")),
//!     StreamDescriptor::new("b", UserPreview::new("ub", "Bo")),
//! ];
//! let grid = StreamGrid::new(GridConfig::default());
//! let frame = grid.compose(
//!     Size::new(1280, 800),
//!     Constraints::fixed(1280, 720),
//!     &streams,
//!     &LayoutState::default(),
//! );
//! assert_eq!(frame.positions.len(), 2);
//! ```

// --- Core re-exports -------------------------------------------------------

pub use callgrid_core::geometry::{Axis, Constraints, Rect, Sides, Size};

// --- Layout re-exports -----------------------------------------------------

pub use callgrid_layout::{
    AdaptiveGrid, AdaptiveStreamLayout, CapacityConstraints, GridCalculator, GridConfig,
    GridFrame, GridPlacementCalculator, GridPlan, LayoutError, LayoutItem, LayoutState,
    OverflowGroup, OverflowSummary, Pin, PositionedTile, StreamCollectionPipeline,
    StreamDescriptor, StreamGrid, ThumbnailArrangement, TileDescriptor, TileFlags, TileId,
    TileKind, UserPreview, WindowBreakpoints, WindowClass, WindowSizeClass,
};

/// Standard result type for callgrid APIs.
pub type Result<T> = std::result::Result<T, LayoutError>;

// --- Prelude --------------------------------------------------------------

pub mod prelude {
    pub use crate::{
        Constraints, GridConfig, GridFrame, LayoutError, LayoutState, Rect, Result, Size,
        StreamDescriptor, StreamGrid, TileDescriptor, TileFlags, UserPreview,
    };

    pub use crate::{core, layout};
}

pub use callgrid_core as core;
pub use callgrid_layout as layout;
