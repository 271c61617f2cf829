//! Window size classes.
//!
//! The host hands the engine a window size in density-independent pixels; the
//! capacity profile, thumbnail arrangement and thumbnail size are all derived
//! from its classification.
//!
//! | Axis   | Compact | Medium     | Expanded |
//! |--------|---------|------------|----------|
//! | width  | < 600   | 600 to 839 | 840+     |
//! | height | < 480   | 480 to 899 | 900+     |

use callgrid_core::geometry::Size;
use serde::{Deserialize, Serialize};

/// One axis of a window size class, ordered from smallest to largest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WindowClass {
    Compact,
    Medium,
    Expanded,
}

/// Width axis class.
pub type WindowWidthClass = WindowClass;
/// Height axis class.
pub type WindowHeightClass = WindowClass;

impl WindowClass {
    /// All classes in ascending order.
    pub const ALL: [WindowClass; 3] = [Self::Compact, Self::Medium, Self::Expanded];

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Compact => "compact",
            Self::Medium => "medium",
            Self::Expanded => "expanded",
        }
    }

    #[inline]
    pub const fn is_compact(self) -> bool {
        matches!(self, Self::Compact)
    }

    #[inline]
    pub const fn is_expanded(self) -> bool {
        matches!(self, Self::Expanded)
    }
}

impl std::fmt::Display for WindowClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Classification of both window axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WindowSizeClass {
    pub width: WindowWidthClass,
    pub height: WindowHeightClass,
}

impl WindowSizeClass {
    pub const fn new(width: WindowWidthClass, height: WindowHeightClass) -> Self {
        Self { width, height }
    }

    /// Compact along at least one axis.
    #[inline]
    pub const fn is_compact(&self) -> bool {
        self.width.is_compact() || self.height.is_compact()
    }

    /// Classify with the default thresholds.
    pub const fn classify(window_dp: Size) -> Self {
        WindowBreakpoints::DEFAULT.classify(window_dp)
    }
}

impl std::fmt::Display for WindowSizeClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.width, self.height)
    }
}

/// Classification thresholds, in dp.
///
/// Each field is the minimum extent for that class; compact starts at zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WindowBreakpoints {
    pub width_medium: u32,
    pub width_expanded: u32,
    pub height_medium: u32,
    pub height_expanded: u32,
}

impl WindowBreakpoints {
    /// Default thresholds: widths 600 / 840, heights 480 / 900.
    pub const DEFAULT: Self = Self {
        width_medium: 600,
        width_expanded: 840,
        height_medium: 480,
        height_expanded: 900,
    };

    /// Create thresholds; each expanded threshold is raised to at least its
    /// medium threshold.
    pub const fn new(
        width_medium: u32,
        width_expanded: u32,
        height_medium: u32,
        height_expanded: u32,
    ) -> Self {
        let width_expanded = if width_expanded < width_medium {
            width_medium
        } else {
            width_expanded
        };
        let height_expanded = if height_expanded < height_medium {
            height_medium
        } else {
            height_expanded
        };
        Self {
            width_medium,
            width_expanded,
            height_medium,
            height_expanded,
        }
    }

    #[inline]
    pub const fn classify_width(&self, width: u32) -> WindowWidthClass {
        classify(width, self.width_medium, self.width_expanded)
    }

    #[inline]
    pub const fn classify_height(&self, height: u32) -> WindowHeightClass {
        classify(height, self.height_medium, self.height_expanded)
    }

    /// Classify a window size.
    pub const fn classify(&self, window_dp: Size) -> WindowSizeClass {
        WindowSizeClass::new(
            self.classify_width(window_dp.width),
            self.classify_height(window_dp.height),
        )
    }
}

impl Default for WindowBreakpoints {
    fn default() -> Self {
        Self::DEFAULT
    }
}

const fn classify(extent: u32, medium: u32, expanded: u32) -> WindowClass {
    if extent >= expanded {
        WindowClass::Expanded
    } else if extent >= medium {
        WindowClass::Medium
    } else {
        WindowClass::Compact
    }
}
