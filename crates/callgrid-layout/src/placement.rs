//! Grid placement: how many rows and columns a featured region is split into.
//!
//! Small counts are special-cased so one, two and three streams always look
//! the same regardless of the packing heuristic: a single stream fills the
//! container, two or three streams are split along the container's dominant
//! axis. Larger counts go through a [`GridCalculator`], which the stream
//! layout receives by injection so the heuristic can be tuned (or mocked in
//! tests) without touching the composer.
//!
//! # Packing heuristic (more than three items)
//!
//! Every column count `c` in `1..=n` is a candidate with `r = ceil(n / c)`
//! rows and cells of `(w / c, h / r)`. Candidates are ranked by:
//!
//! 1. **Fitted scale** (larger wins): `min(cell.w * h, cell.h * w)`, i.e. how
//!    large a container-shaped tile can be drawn inside one cell.
//! 2. **Wasted cells** (fewer wins): `r * c - n`.
//! 3. **Aspect deviation** (smaller wins): `|cell.w * h - cell.h * w|`.
//! 4. **Dominant axis**: more columns in landscape, more rows in portrait.
//!
//! Because adding an item can only keep or increase the row count of every
//! candidate, the winning fitted scale never grows as `n` grows for a fixed
//! container.

use std::cmp::Reverse;

use callgrid_core::geometry::{Constraints, Size};
use serde::{Deserialize, Serialize};

use crate::error::{LayoutError, bounded, fatal};

/// A packing plan for a featured region.
///
/// For a non-zero item count `rows * columns >= item_count` and both are at
/// least one. A zero item count yields [`GridPlan::EMPTY`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct GridPlan {
    /// Number of rows.
    pub rows: usize,
    /// Number of columns.
    pub columns: usize,
    /// Size of a single cell.
    pub cell_size: Size,
}

impl GridPlan {
    /// Plan for zero items.
    pub const EMPTY: Self = Self {
        rows: 0,
        columns: 0,
        cell_size: Size::ZERO,
    };

    /// Create a plan.
    pub const fn new(rows: usize, columns: usize, cell_size: Size) -> Self {
        Self {
            rows,
            columns,
            cell_size,
        }
    }

    /// Number of cells in the plan.
    #[inline]
    pub const fn capacity(&self) -> usize {
        self.rows.saturating_mul(self.columns)
    }

    /// Cells left unused when `item_count` items are packed.
    #[inline]
    pub const fn wasted_cells(&self, item_count: usize) -> usize {
        self.capacity().saturating_sub(item_count)
    }

    /// Check whether `item_count` items fit.
    #[inline]
    pub const fn fits(&self, item_count: usize) -> bool {
        self.capacity() >= item_count
    }

    /// Size of a container-shaped tile drawn inside one cell, as a
    /// cross-multiplied score (`min(cell.w * h, cell.h * w)`).
    #[inline]
    pub fn fitted_scale(&self, container: Size) -> u64 {
        let by_width = self.cell_size.width as u64 * container.height as u64;
        let by_height = self.cell_size.height as u64 * container.width as u64;
        by_width.min(by_height)
    }

    /// How far the cell shape is from the container shape.
    #[inline]
    pub fn aspect_deviation(&self, container: Size) -> u64 {
        let by_width = self.cell_size.width as u64 * container.height as u64;
        let by_height = self.cell_size.height as u64 * container.width as u64;
        by_width.abs_diff(by_height)
    }
}

/// Strategy that packs `item_count` featured tiles into a container.
///
/// Implementations must be pure: the same inputs always produce the same
/// plan.
pub trait GridCalculator {
    /// Compute a plan for `item_count` items in `container`.
    fn calculate(&self, container: Size, item_count: usize) -> GridPlan;
}

impl<T: GridCalculator + ?Sized> GridCalculator for &T {
    fn calculate(&self, container: Size, item_count: usize) -> GridPlan {
        (**self).calculate(container, item_count)
    }
}

impl<T: GridCalculator + ?Sized> GridCalculator for Box<T> {
    fn calculate(&self, container: Size, item_count: usize) -> GridPlan {
        (**self).calculate(container, item_count)
    }
}

/// Plan for one to three items, shared by every calculator.
///
/// One item fills the container. Two or three items are stacked in rows when
/// the container is portrait (`height >= width`) and placed side by side
/// otherwise. Counts above three fall back to a row-major strip along the
/// same axis; callers route those through a [`GridCalculator`] instead.
pub fn split_plan(container: Size, item_count: usize) -> GridPlan {
    let n = u32::try_from(item_count).unwrap_or(u32::MAX);
    match item_count {
        0 => GridPlan::EMPTY,
        1 => GridPlan::new(1, 1, container),
        _ if container.is_portrait() => GridPlan::new(
            item_count,
            1,
            Size::new(container.width, container.height / n),
        ),
        _ => GridPlan::new(
            1,
            item_count,
            Size::new(container.width / n, container.height),
        ),
    }
}

/// Default placement calculator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GridPlacementCalculator;

impl GridPlacementCalculator {
    /// Create the calculator.
    pub const fn new() -> Self {
        Self
    }

    /// Calculate a plan inside incoming constraints.
    ///
    /// # Panics
    ///
    /// Panics if either axis is unbounded.
    #[track_caller]
    pub fn calculate_in(&self, constraints: Constraints, item_count: usize) -> GridPlan {
        fatal(self.try_calculate_in(constraints, item_count))
    }

    /// Calculate a plan inside incoming constraints, rejecting unbounded ones.
    pub fn try_calculate_in(
        &self,
        constraints: Constraints,
        item_count: usize,
    ) -> Result<GridPlan, LayoutError> {
        let container = bounded(constraints)?;
        Ok(self.calculate(container, item_count))
    }

    fn best_fit(container: Size, item_count: usize) -> GridPlan {
        let landscape = !container.is_portrait();
        (1..=item_count)
            .map(|columns| {
                let rows = item_count.div_ceil(columns);
                GridPlan::new(
                    rows,
                    columns,
                    Size::new(
                        container.width / u32::try_from(columns).unwrap_or(u32::MAX),
                        container.height / u32::try_from(rows).unwrap_or(u32::MAX),
                    ),
                )
            })
            .min_by_key(|plan| {
                let dominant = if landscape { plan.columns } else { plan.rows };
                (
                    Reverse(plan.fitted_scale(container)),
                    plan.wasted_cells(item_count),
                    plan.aspect_deviation(container),
                    Reverse(dominant),
                )
            })
            .unwrap_or(GridPlan::EMPTY)
    }
}

impl GridCalculator for GridPlacementCalculator {
    fn calculate(&self, container: Size, item_count: usize) -> GridPlan {
        match item_count {
            0..=3 => split_plan(container, item_count),
            _ => Self::best_fit(container, item_count),
        }
    }
}
