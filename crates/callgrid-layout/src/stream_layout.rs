//! Featured region plus thumbnail strip.
//!
//! [`AdaptiveStreamLayout`] splits its input into featured tiles (pinned, or
//! everything when nothing is pinned) and thumbnails (the unpinned rest). The
//! thumbnails form a single line of square cells flush against one edge and
//! centered along it. The featured tiles share what is left: one to three of
//! them are split evenly along the dominant axis, more go through the
//! injected [`GridCalculator`] and are packed row by row with the last row
//! centered.
//!
//! ```text
//!  Bottom                         Start
//! ┌─────────────────┐            ┌──┬──────────────┐
//! │                 │            │  │              │
//! │    featured     │            ├──┤   featured   │
//! │                 │            │  │              │
//! ├─────┬──┬──┬─────┤            ├──┤              │
//! │     │  │  │     │            │  │              │
//! └─────┴──┴──┴─────┘            └──┴──────────────┘
//! ```

use callgrid_core::geometry::{Axis, Constraints, Rect, Size};
use callgrid_core::trace;
use serde::{Deserialize, Serialize};

use crate::adaptive_grid::{pack_rows, saturating_u32};
use crate::capacity::{DEFAULT_THUMBNAIL_COUNT, DEFAULT_THUMBNAIL_MAX_SIZE};
use crate::error::{LayoutError, bounded, fatal};
use crate::item::{LayoutItem, PositionedTile};
use crate::placement::{GridCalculator, GridPlacementCalculator, split_plan};
use crate::window::WindowSizeClass;

/// Edge the thumbnail strip is attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ThumbnailArrangement {
    /// Vertical strip on the left.
    Start,
    /// Vertical strip on the right.
    End,
    /// Horizontal strip along the top.
    Top,
    /// Horizontal strip along the bottom.
    #[default]
    Bottom,
}

impl ThumbnailArrangement {
    pub const ALL: [ThumbnailArrangement; 4] = [Self::Start, Self::End, Self::Top, Self::Bottom];

    /// Direction the strip runs in.
    #[inline]
    pub const fn axis(self) -> Axis {
        match self {
            Self::Start | Self::End => Axis::Vertical,
            Self::Top | Self::Bottom => Axis::Horizontal,
        }
    }

    #[inline]
    pub const fn is_horizontal(self) -> bool {
        matches!(self.axis(), Axis::Horizontal)
    }

    #[inline]
    pub const fn is_vertical(self) -> bool {
        matches!(self.axis(), Axis::Vertical)
    }

    /// Arrangement for a window class: short windows put the strip at the
    /// end, wide ones at the start, everything else along the bottom.
    pub const fn for_window(class: WindowSizeClass) -> Self {
        if class.height.is_compact() {
            Self::End
        } else if class.width.is_expanded() {
            Self::Start
        } else {
            Self::Bottom
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::End => "end",
            Self::Top => "top",
            Self::Bottom => "bottom",
        }
    }
}

impl std::fmt::Display for ThumbnailArrangement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Composer for the featured region and the thumbnail strip.
#[derive(Debug, Clone)]
pub struct AdaptiveStreamLayout<C = GridPlacementCalculator> {
    arrangement: ThumbnailArrangement,
    thumbnail_size: u32,
    thumbnail_cap: usize,
    calculator: C,
}

impl AdaptiveStreamLayout {
    /// Bottom strip of up to three 180px thumbnails.
    pub fn new() -> Self {
        Self {
            arrangement: ThumbnailArrangement::Bottom,
            thumbnail_size: DEFAULT_THUMBNAIL_MAX_SIZE,
            thumbnail_cap: DEFAULT_THUMBNAIL_COUNT as usize,
            calculator: GridPlacementCalculator,
        }
    }
}

impl Default for AdaptiveStreamLayout {
    fn default() -> Self {
        Self::new()
    }
}

impl<C> AdaptiveStreamLayout<C> {
    #[must_use]
    pub fn arrangement(mut self, arrangement: ThumbnailArrangement) -> Self {
        self.arrangement = arrangement;
        self
    }

    /// Edge length of a thumbnail cell. Cells are shrunk when the strip
    /// would not fit the container or would take more than half its depth.
    #[must_use]
    pub fn thumbnail_size(mut self, size: u32) -> Self {
        self.thumbnail_size = size;
        self
    }

    /// Maximum number of thumbnails rendered; the rest are dropped.
    #[must_use]
    pub fn thumbnail_cap(mut self, cap: usize) -> Self {
        self.thumbnail_cap = cap;
        self
    }

    /// Replace the calculator used for more than three featured tiles.
    pub fn with_calculator<D: GridCalculator>(self, calculator: D) -> AdaptiveStreamLayout<D> {
        AdaptiveStreamLayout {
            arrangement: self.arrangement,
            thumbnail_size: self.thumbnail_size,
            thumbnail_cap: self.thumbnail_cap,
            calculator,
        }
    }

    pub fn current_arrangement(&self) -> ThumbnailArrangement {
        self.arrangement
    }

    pub fn calculator(&self) -> &C {
        &self.calculator
    }
}

impl<C: GridCalculator> AdaptiveStreamLayout<C> {
    /// Position `items` inside `constraints`, in input order.
    ///
    /// # Panics
    ///
    /// Panics if either axis of `constraints` is unbounded.
    #[track_caller]
    pub fn layout<K: Clone>(
        &self,
        constraints: Constraints,
        items: &[LayoutItem<K>],
    ) -> Vec<PositionedTile<K>> {
        fatal(self.try_layout(constraints, items))
    }

    /// Position `items`, rejecting unbounded constraints.
    pub fn try_layout<K: Clone>(
        &self,
        constraints: Constraints,
        items: &[LayoutItem<K>],
    ) -> Result<Vec<PositionedTile<K>>, LayoutError> {
        let container = bounded(constraints)?;
        Ok(self.layout_in(container, items))
    }

    /// Position `items` inside a finite container.
    ///
    /// Output follows input order. Thumbnails beyond the cap get no
    /// position.
    pub fn layout_in<K: Clone>(
        &self,
        container: Size,
        items: &[LayoutItem<K>],
    ) -> Vec<PositionedTile<K>> {
        let any_pinned = items.iter().any(LayoutItem::is_pinned);
        let mut featured = Vec::with_capacity(items.len());
        let mut thumbnails = Vec::new();
        for (index, item) in items.iter().enumerate() {
            if !any_pinned || item.is_pinned() {
                featured.push(index);
            } else if thumbnails.len() < self.thumbnail_cap {
                thumbnails.push(index);
            }
        }

        let mut slots: Vec<Option<Rect>> = vec![None; items.len()];
        let region = self.place_strip(container, &thumbnails, &mut slots);
        self.place_featured(region, &featured, &mut slots);

        trace!(
            featured = featured.len(),
            thumbnails = thumbnails.len(),
            arrangement = self.arrangement.label(),
            "stream layout pass"
        );

        items
            .iter()
            .zip(slots)
            .filter_map(|(item, rect)| rect.map(|rect| PositionedTile::new(item.key.clone(), rect)))
            .collect()
    }

    /// Lay out the strip and return the region left for featured tiles.
    fn place_strip(
        &self,
        container: Size,
        thumbnails: &[usize],
        slots: &mut [Option<Rect>],
    ) -> Rect {
        let full = Rect::from_size(container);
        if thumbnails.is_empty() {
            return full;
        }
        let arrangement = self.arrangement;
        let count = saturating_u32(thumbnails.len());
        // Cells shrink rather than spill past the container, and the strip
        // takes at most half the depth so featured tiles stay visible.
        let (depth, span) = match arrangement.axis() {
            Axis::Horizontal => (container.height, container.width),
            Axis::Vertical => (container.width, container.height),
        };
        let thickness = self.thumbnail_size.min(depth / 2).min(span / count);
        let cell = Size::square(thickness);
        let length = thickness.saturating_mul(count);

        for (position, &index) in thumbnails.iter().enumerate() {
            let step = thickness.saturating_mul(saturating_u32(position));
            let (x, y) = match arrangement {
                ThumbnailArrangement::Top | ThumbnailArrangement::Bottom => {
                    let start_x = container.width.saturating_sub(length) / 2;
                    let y = if arrangement == ThumbnailArrangement::Bottom {
                        container.height - thickness
                    } else {
                        0
                    };
                    (start_x.saturating_add(step), y)
                }
                ThumbnailArrangement::Start | ThumbnailArrangement::End => {
                    let start_y = container.height.saturating_sub(length) / 2;
                    let x = if arrangement == ThumbnailArrangement::End {
                        container.width - thickness
                    } else {
                        0
                    };
                    (x, start_y.saturating_add(step))
                }
            };
            slots[index] = Some(Rect::at(x, y, cell));
        }

        let shrunk = container.shrink(arrangement.axis().cross(), thickness);
        let (x, y) = match arrangement {
            ThumbnailArrangement::Start => (thickness, 0),
            ThumbnailArrangement::Top => (0, thickness),
            ThumbnailArrangement::End | ThumbnailArrangement::Bottom => (0, 0),
        };
        Rect::at(x, y, shrunk)
    }

    fn place_featured(&self, region: Rect, featured: &[usize], slots: &mut [Option<Rect>]) {
        let count = featured.len();
        let plan = if count <= 3 {
            split_plan(region.size(), count)
        } else {
            self.calculator.calculate(region.size(), count)
        };
        for (&index, rect) in featured.iter().zip(pack_rows(region, plan, count)) {
            slots[index] = Some(rect);
        }
    }
}
