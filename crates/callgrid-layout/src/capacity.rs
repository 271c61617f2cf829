//! Capacity profiles and thumbnail sizing.

use callgrid_core::geometry::Size;
use serde::{Deserialize, Serialize};

use crate::error::LayoutError;
use crate::window::WindowSizeClass;

/// Default upper bound for a thumbnail edge, in pixels.
pub const DEFAULT_THUMBNAIL_MAX_SIZE: u32 = 180;

/// Default number of thumbnails the strip is sized for.
pub const DEFAULT_THUMBNAIL_COUNT: u32 = 3;

/// How many tiles of each kind a layout pass may render individually.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CapacityConstraints {
    /// Unpinned tiles rendered at full size when nothing is pinned.
    pub max_featured: usize,
    /// Pinned tiles; the local screen-share indicator does not count.
    pub max_pinned: usize,
    /// Thumbnails rendered alongside pinned tiles.
    pub max_thumbnail: usize,
}

impl CapacityConstraints {
    /// Profile for windows compact along either axis.
    pub const COMPACT: Self = Self {
        max_featured: 8,
        max_pinned: 2,
        max_thumbnail: 3,
    };

    /// Profile for medium and expanded windows.
    pub const EXPANDED: Self = Self {
        max_featured: 15,
        max_pinned: 6,
        max_thumbnail: 3,
    };

    pub const fn new(max_featured: usize, max_pinned: usize, max_thumbnail: usize) -> Self {
        Self {
            max_featured,
            max_pinned,
            max_thumbnail,
        }
    }

    /// Default profile for a window class.
    pub const fn for_window(class: WindowSizeClass) -> Self {
        if class.is_compact() {
            Self::COMPACT
        } else {
            Self::EXPANDED
        }
    }

    /// Reject profiles that could never show a participant.
    pub fn validate(&self) -> Result<(), LayoutError> {
        if self.max_featured == 0 {
            return Err(LayoutError::InvalidConfig {
                field: "max_featured",
                value: 0,
            });
        }
        Ok(())
    }
}

impl Default for CapacityConstraints {
    fn default() -> Self {
        Self::EXPANDED
    }
}

/// Thumbnail edge length for a container.
///
/// Nine tenths of the container's short side are available. When that is
/// smaller than `max_size` it is used whole; otherwise it is divided among
/// `count` thumbnails and capped at `max_size`.
pub fn thumbnail_size_for(container: Size, max_size: u32, count: u32) -> u32 {
    let short_side = container.width.min(container.height) as u64;
    let available = u32::try_from(short_side * 9 / 10).unwrap_or(u32::MAX);
    if available < max_size {
        available
    } else {
        (available / count.max(1)).min(max_size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::window::WindowClass;

    #[test]
    fn compact_in_any_dimension_selects_compact() {
        let cases = [
            (WindowClass::Compact, WindowClass::Expanded),
            (WindowClass::Expanded, WindowClass::Compact),
            (WindowClass::Compact, WindowClass::Compact),
        ];
        for (width, height) in cases {
            assert_eq!(
                CapacityConstraints::for_window(WindowSizeClass::new(width, height)),
                CapacityConstraints::COMPACT
            );
        }
    }

    #[test]
    fn medium_maps_to_expanded() {
        let class = WindowSizeClass::new(WindowClass::Medium, WindowClass::Medium);
        assert_eq!(
            CapacityConstraints::for_window(class),
            CapacityConstraints::EXPANDED
        );
    }

    #[test]
    fn profile_values() {
        assert_eq!(CapacityConstraints::COMPACT, CapacityConstraints::new(8, 2, 3));
        assert_eq!(CapacityConstraints::EXPANDED, CapacityConstraints::new(15, 6, 3));
    }

    #[test]
    fn zero_featured_is_invalid() {
        assert_eq!(
            CapacityConstraints::new(0, 1, 1).validate(),
            Err(LayoutError::InvalidConfig {
                field: "max_featured",
                value: 0
            })
        );
        assert!(CapacityConstraints::COMPACT.validate().is_ok());
    }

    #[test]
    fn small_container_uses_whole_available_side() {
        // 9/10 of 150 = 135 < 180
        assert_eq!(thumbnail_size_for(Size::new(400, 150), 180, 3), 135);
    }

    #[test]
    fn large_container_divides_and_caps() {
        // 9/10 of 400 = 360, / 3 = 120
        assert_eq!(thumbnail_size_for(Size::new(400, 1000), 180, 3), 120);
        // 9/10 of 1000 = 900, / 3 = 300, capped at 180
        assert_eq!(thumbnail_size_for(Size::new(1000, 1200), 180, 3), 180);
    }

    #[test]
    fn zero_count_does_not_divide_by_zero() {
        assert_eq!(thumbnail_size_for(Size::new(1000, 1000), 180, 0), 180);
    }

    #[test]
    fn empty_container_gives_zero() {
        assert_eq!(thumbnail_size_for(Size::ZERO, 180, 3), 0);
    }
}
