//! Property-based invariant tests for grid placement, stream layout and the
//! stream collection pipeline.
//!
//! 1. Plans hold every item and never leave an empty row.
//! 2. Fitted scale never grows as items are added.
//! 3. Adaptive grid output stays inside the container without overlaps.
//! 4. Stream layout output stays inside the container without overlaps.
//! 5. The pipeline represents every stream exactly once.
//! 6. Pins beyond the cap are demoted, never dropped.
//! 7. Every operation is idempotent.

use callgrid_core::geometry::{Constraints, Rect, Size};
use callgrid_layout::{
    AdaptiveGrid, AdaptiveStreamLayout, CapacityConstraints, GridCalculator,
    GridPlacementCalculator, LayoutItem, LayoutState, OVERFLOW_TILE_ID, StreamCollectionPipeline,
    StreamDescriptor, ThumbnailArrangement, TileFlags, UserPreview,
};
use proptest::prelude::*;

// ── Helpers ─────────────────────────────────────────────────────────────

fn size_strategy() -> impl Strategy<Value = Size> {
    (0u32..=4000, 0u32..=4000).prop_map(|(w, h)| Size::new(w, h))
}

fn arrangement_strategy() -> impl Strategy<Value = ThumbnailArrangement> {
    prop_oneof![
        Just(ThumbnailArrangement::Start),
        Just(ThumbnailArrangement::End),
        Just(ThumbnailArrangement::Top),
        Just(ThumbnailArrangement::Bottom),
    ]
}

fn streams(n: usize) -> Vec<StreamDescriptor> {
    (0..n)
        .map(|i| {
            let user = UserPreview::new(format!("u{i}"), format!("User {i}"));
            StreamDescriptor::new(format!("s{i}"), user)
        })
        .collect()
}

fn assert_disjoint_inside(rects: &[Rect], container: Size) -> Result<(), TestCaseError> {
    let bounds = Rect::from_size(container);
    for (i, a) in rects.iter().enumerate() {
        prop_assert!(
            a.is_empty() || bounds.contains_rect(a),
            "{:?} escapes {:?}",
            a,
            bounds
        );
        for b in &rects[i + 1..] {
            prop_assert!(!a.overlaps(b), "{:?} overlaps {:?}", a, b);
        }
    }
    Ok(())
}

// ═════════════════════════════════════════════════════════════════════════
// 1. Plans hold every item and never leave an empty row
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn plan_fits_all_items(container in size_strategy(), n in 1usize..=64) {
        let plan = GridPlacementCalculator.calculate(container, n);
        prop_assert!(plan.rows >= 1 && plan.columns >= 1, "degenerate plan {:?}", plan);
        prop_assert!(plan.rows * plan.columns >= n, "plan {:?} cannot hold {}", plan, n);
        prop_assert!(
            (plan.rows - 1) * plan.columns < n,
            "plan {:?} has an empty row for {}",
            plan,
            n
        );
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 2. Fitted scale never grows as items are added
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn fitted_scale_non_increasing(container in size_strategy(), n in 4usize..=48) {
        let calc = GridPlacementCalculator;
        let current = calc.calculate(container, n).fitted_scale(container);
        let next = calc.calculate(container, n + 1).fitted_scale(container);
        prop_assert!(next <= current, "n={} scale {} -> {}", n, current, next);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 3. Adaptive grid output stays inside the container without overlaps
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn adaptive_grid_inside_and_disjoint(
        container in size_strategy(),
        columns in 1usize..=8,
        n in 0usize..=40,
    ) {
        let items: Vec<usize> = (0..n).collect();
        let out = AdaptiveGrid::new(columns).layout(&items, Constraints::from_size(container));
        prop_assert_eq!(out.len(), n);
        let rects: Vec<Rect> = out.iter().map(|tile| tile.rect).collect();
        assert_disjoint_inside(&rects, container)?;
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 4. Stream layout output stays inside the container without overlaps
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn stream_layout_inside_and_disjoint(
        container in size_strategy(),
        arrangement in arrangement_strategy(),
        thumbnail_size in 0u32..=400,
        thumbnail_cap in 0usize..=6,
        pins in prop::collection::vec(any::<bool>(), 0..=24),
    ) {
        let items: Vec<LayoutItem<usize>> = pins
            .iter()
            .enumerate()
            .map(|(i, &pinned)| LayoutItem::new(i, pinned.into()))
            .collect();
        let layout = AdaptiveStreamLayout::new()
            .arrangement(arrangement)
            .thumbnail_size(thumbnail_size)
            .thumbnail_cap(thumbnail_cap);
        let out = layout.layout(Constraints::from_size(container), &items);

        let pinned = pins.iter().filter(|&&p| p).count();
        let expected = if pinned == 0 {
            pins.len()
        } else {
            pinned + (pins.len() - pinned).min(thumbnail_cap)
        };
        prop_assert_eq!(out.len(), expected);

        let order: Vec<usize> = out.iter().map(|tile| tile.id).collect();
        let mut sorted = order.clone();
        sorted.sort_unstable();
        prop_assert_eq!(order, sorted, "output must follow input order");

        let rects: Vec<Rect> = out.iter().map(|tile| tile.rect).collect();
        assert_disjoint_inside(&rects, container)?;
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 5. The pipeline represents every stream exactly once
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn pipeline_represents_every_stream_once(
        n in 0usize..=40,
        pin_picks in prop::collection::vec(0usize..40, 0..=8),
        share in prop::option::of(0usize..40),
        max_featured in 1usize..=16,
        max_pinned in 0usize..=6,
        max_thumbnail in 0usize..=5,
        overflow_named in prop::option::of(0usize..40),
    ) {
        let mut all = streams(n);
        if let Some(index) = share.filter(|&i| i < n) {
            all[index] = all[index].clone().local().screen_share();
        }
        if let Some(index) = overflow_named.filter(|&i| i < n) {
            all[index].id = OVERFLOW_TILE_ID.to_owned();
        }
        let state = LayoutState {
            pinned: pin_picks.iter().map(|i| format!("s{i}")).collect(),
            ..LayoutState::default()
        };
        let caps = CapacityConstraints::new(max_featured, max_pinned, max_thumbnail);
        let (tiles, overflow) = StreamCollectionPipeline::build_with_overflow(&all, &state, &caps);

        let mut seen: Vec<String> = Vec::new();
        for tile in &tiles {
            match tile.overflow_group() {
                Some(group) => seen.extend(group.stream_ids.iter().cloned()),
                None => seen.push(tile.id.clone()),
            }
        }
        seen.sort();
        let mut expected: Vec<String> = all.iter().map(|s| s.id.clone()).collect();
        expected.sort();
        prop_assert_eq!(seen, expected);

        let mut tile_ids: Vec<&str> = tiles.iter().map(|tile| tile.id.as_str()).collect();
        tile_ids.sort_unstable();
        tile_ids.dedup();
        prop_assert_eq!(tile_ids.len(), tiles.len(), "tile ids must be unique");

        let overflow_count = overflow.map_or(0, |o| o.count);
        let individual = tiles.iter().filter(|t| t.overflow_group().is_none()).count();
        prop_assert_eq!(individual + overflow_count, n);

        if let Some(first) = tiles.first() {
            if all.iter().any(StreamDescriptor::is_local_screen_share) {
                let expected = TileFlags::LOCAL_SCREEN_SHARE | TileFlags::PINNED;
                prop_assert!(first.flags.contains(expected));
            }
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 6. Pins beyond the cap are demoted, never dropped
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn pinned_tiles_respect_cap(
        n in 1usize..=30,
        pin_picks in prop::collection::vec(0usize..30, 0..=10),
        max_pinned in 0usize..=6,
    ) {
        let all = streams(n);
        let state = LayoutState {
            pinned: pin_picks.iter().map(|i| format!("s{i}")).collect(),
            ..LayoutState::default()
        };
        let caps = CapacityConstraints::new(15, max_pinned, 3);
        let tiles = StreamCollectionPipeline::build(&all, &state, &caps);
        let pinned = tiles.iter().filter(|t| t.is_pinned()).count();
        prop_assert!(pinned <= max_pinned);
        let represented: usize = tiles.iter().map(|t| t.participant_count()).sum();
        prop_assert_eq!(represented, n);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 7. Every operation is idempotent
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn operations_are_idempotent(
        container in size_strategy(),
        n in 0usize..=20,
        pin_picks in prop::collection::vec(0usize..20, 0..=4),
    ) {
        let calc = GridPlacementCalculator;
        prop_assert_eq!(calc.calculate(container, n), calc.calculate(container, n));

        let all = streams(n);
        let state = LayoutState {
            pinned: pin_picks.iter().map(|i| format!("s{i}")).collect(),
            ..LayoutState::default()
        };
        let caps = CapacityConstraints::EXPANDED;
        let first = StreamCollectionPipeline::build_with_overflow(&all, &state, &caps);
        let second = StreamCollectionPipeline::build_with_overflow(&all, &state, &caps);
        prop_assert_eq!(&first, &second);

        let items: Vec<LayoutItem> = first.0.iter().map(|t| t.layout_item()).collect();
        let layout = AdaptiveStreamLayout::new().thumbnail_size(90);
        let constraints = Constraints::from_size(container);
        prop_assert_eq!(layout.layout(constraints, &items), layout.layout(constraints, &items));
    }
}
