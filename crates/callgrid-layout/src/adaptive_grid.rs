//! Fixed-column grid with a centered last row.
//!
//! Rows above the last are packed left to right in cells of
//! `(width / columns, height / rows)`. A partial last row is shifted right by
//! half of its leftover width, so three columns holding five items in a
//! 300x200 container put the final two at `x = 50` and `x = 150`.

use callgrid_core::geometry::{Constraints, Rect, Size};

use crate::error::{LayoutError, bounded, fatal};
use crate::item::PositionedTile;
use crate::placement::GridPlan;

/// Grid positioner with a fixed column count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AdaptiveGrid {
    columns: usize,
}

impl AdaptiveGrid {
    /// Create a grid with `columns` columns.
    ///
    /// # Panics
    ///
    /// Panics if `columns` is zero.
    #[track_caller]
    pub fn new(columns: usize) -> Self {
        fatal(Self::try_new(columns))
    }

    /// Create a grid, rejecting a zero column count.
    pub fn try_new(columns: usize) -> Result<Self, LayoutError> {
        if columns == 0 {
            return Err(LayoutError::ZeroColumns);
        }
        Ok(Self { columns })
    }

    /// Column count.
    #[inline]
    pub const fn columns(&self) -> usize {
        self.columns
    }

    /// The plan this grid uses for `item_count` items in `container`.
    pub fn plan(&self, container: Size, item_count: usize) -> GridPlan {
        if item_count == 0 {
            return GridPlan::EMPTY;
        }
        let rows = item_count.div_ceil(self.columns);
        GridPlan::new(
            rows,
            self.columns,
            Size::new(
                container.width / saturating_u32(self.columns),
                container.height / saturating_u32(rows),
            ),
        )
    }

    /// Position `items` inside `constraints`.
    ///
    /// # Panics
    ///
    /// Panics if either axis of `constraints` is unbounded.
    #[track_caller]
    pub fn layout<K: Clone>(
        &self,
        items: &[K],
        constraints: Constraints,
    ) -> Vec<PositionedTile<K>> {
        fatal(self.try_layout(items, constraints))
    }

    /// Position `items`, rejecting unbounded constraints.
    pub fn try_layout<K: Clone>(
        &self,
        items: &[K],
        constraints: Constraints,
    ) -> Result<Vec<PositionedTile<K>>, LayoutError> {
        let container = bounded(constraints)?;
        let plan = self.plan(container, items.len());
        Ok(items
            .iter()
            .cloned()
            .zip(pack_rows(Rect::from_size(container), plan, items.len()))
            .map(|(id, rect)| PositionedTile::new(id, rect))
            .collect())
    }
}

/// Row-major cell rectangles for `item_count` items packed by `plan` inside
/// `region`, with the final occupied row centered horizontally.
///
/// Yields exactly `item_count` rectangles (none when the plan has no
/// columns).
pub(crate) fn pack_rows(
    region: Rect,
    plan: GridPlan,
    item_count: usize,
) -> impl Iterator<Item = Rect> {
    let columns = plan.columns;
    let cell = plan.cell_size;
    let (last_row, last_row_padding) = if columns == 0 || item_count == 0 {
        (0, 0)
    } else {
        let last_row = (item_count - 1) / columns;
        let last_count = saturating_u32(item_count - last_row * columns);
        let used = cell.width.saturating_mul(last_count);
        (last_row, region.width.saturating_sub(used) / 2)
    };
    let count = if columns == 0 { 0 } else { item_count };

    (0..count).map(move |index| {
        let row = index / columns;
        let column = saturating_u32(index % columns);
        let padding = if row == last_row { last_row_padding } else { 0 };
        let x = region
            .x
            .saturating_add(padding)
            .saturating_add(cell.width.saturating_mul(column));
        let y = region
            .y
            .saturating_add(cell.height.saturating_mul(saturating_u32(row)));
        Rect::at(x, y, cell)
    })
}

#[inline]
pub(crate) fn saturating_u32(value: usize) -> u32 {
    u32::try_from(value).unwrap_or(u32::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rects(grid: AdaptiveGrid, n: usize, w: u32, h: u32) -> Vec<Rect> {
        let items: Vec<usize> = (0..n).collect();
        grid.layout(&items, Constraints::fixed(w, h))
            .into_iter()
            .map(|tile| tile.rect)
            .collect()
    }

    #[test]
    fn three_columns_five_items_centers_last_row() {
        let out = rects(AdaptiveGrid::new(3), 5, 300, 200);
        assert_eq!(
            out,
            vec![
                Rect::new(0, 0, 100, 100),
                Rect::new(100, 0, 100, 100),
                Rect::new(200, 0, 100, 100),
                Rect::new(50, 100, 100, 100),
                Rect::new(150, 100, 100, 100),
            ]
        );
    }

    #[test]
    fn full_last_row_has_no_padding() {
        let out = rects(AdaptiveGrid::new(2), 4, 200, 200);
        assert_eq!(out[2], Rect::new(0, 100, 100, 100));
        assert_eq!(out[3], Rect::new(100, 100, 100, 100));
    }

    #[test]
    fn single_row_partial_is_centered() {
        let out = rects(AdaptiveGrid::new(4), 2, 400, 100);
        assert_eq!(out, vec![Rect::new(100, 0, 100, 100), Rect::new(200, 0, 100, 100)]);
    }

    #[test]
    fn zero_items_is_empty() {
        for columns in 1..=5 {
            assert!(rects(AdaptiveGrid::new(columns), 0, 123, 45).is_empty());
        }
    }

    #[test]
    fn ids_are_kept_in_order() {
        let out = AdaptiveGrid::new(2).layout(&["a", "b", "c"], Constraints::fixed(100, 100));
        let ids: Vec<&str> = out.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec!["a", "b", "c"]);
    }

    #[test]
    fn zero_columns_rejected() {
        assert_eq!(AdaptiveGrid::try_new(0), Err(LayoutError::ZeroColumns));
    }

    #[test]
    #[should_panic(expected = "grid column count must be at least 1")]
    fn zero_columns_is_fatal() {
        let _ = AdaptiveGrid::new(0);
    }

    #[test]
    fn try_layout_rejects_unbounded() {
        let grid = AdaptiveGrid::new(2);
        assert!(matches!(
            grid.try_layout(&[1, 2], Constraints::unbounded()),
            Err(LayoutError::UnboundedContainer { .. })
        ));
    }

    #[test]
    #[should_panic(expected = "unbounded size not supported")]
    fn layout_unbounded_is_fatal() {
        let _ = AdaptiveGrid::new(2).layout(
            &[1],
            Constraints {
                max_width: None,
                max_height: Some(10),
            },
        );
    }

    #[test]
    fn pack_rows_offsets_by_region_origin() {
        let plan = GridPlan::new(1, 1, Size::new(40, 30));
        let out: Vec<Rect> = pack_rows(Rect::new(10, 20, 40, 30), plan, 1).collect();
        assert_eq!(out, vec![Rect::new(10, 20, 40, 30)]);
    }

    #[test]
    fn pack_rows_empty_plan_yields_nothing() {
        assert_eq!(pack_rows(Rect::new(0, 0, 10, 10), GridPlan::EMPTY, 3).count(), 0);
    }

    #[test]
    fn layout_is_idempotent() {
        let grid = AdaptiveGrid::new(3);
        assert_eq!(rects(grid, 7, 301, 199), rects(grid, 7, 301, 199));
    }
}
