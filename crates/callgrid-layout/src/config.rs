//! Grid configuration and environment overrides.
//!
//! | Variable                           | Field                         |
//! |------------------------------------|-------------------------------|
//! | `CALLGRID_MAX_FEATURED_COMPACT`    | `compact.max_featured`        |
//! | `CALLGRID_MAX_FEATURED_EXPANDED`   | `expanded.max_featured`       |
//! | `CALLGRID_MAX_PINNED_COMPACT`      | `compact.max_pinned`          |
//! | `CALLGRID_MAX_PINNED_EXPANDED`     | `expanded.max_pinned`         |
//! | `CALLGRID_MAX_THUMBNAILS`          | `max_thumbnail` of both       |
//! | `CALLGRID_THUMBNAIL_MAX_SIZE`      | `thumbnail_max_size`          |
//! | `CALLGRID_TILE_PADDING`            | `tile_padding`                |
//!
//! Values that do not parse, or are zero where zero is meaningless, are
//! ignored with a warning.

use callgrid_core::warn;
use serde::{Deserialize, Serialize};

use crate::capacity::{CapacityConstraints, DEFAULT_THUMBNAIL_MAX_SIZE};
use crate::error::LayoutError;
use crate::window::{WindowBreakpoints, WindowSizeClass};

const ENV_MAX_FEATURED_COMPACT: &str = "CALLGRID_MAX_FEATURED_COMPACT";
const ENV_MAX_FEATURED_EXPANDED: &str = "CALLGRID_MAX_FEATURED_EXPANDED";
const ENV_MAX_PINNED_COMPACT: &str = "CALLGRID_MAX_PINNED_COMPACT";
const ENV_MAX_PINNED_EXPANDED: &str = "CALLGRID_MAX_PINNED_EXPANDED";
const ENV_MAX_THUMBNAILS: &str = "CALLGRID_MAX_THUMBNAILS";
const ENV_THUMBNAIL_MAX_SIZE: &str = "CALLGRID_THUMBNAIL_MAX_SIZE";
const ENV_TILE_PADDING: &str = "CALLGRID_TILE_PADDING";

/// Default inset between a tile slot and its content, in pixels.
pub const DEFAULT_TILE_PADDING: u32 = 4;

/// Everything [`StreamGrid`](crate::StreamGrid) needs besides its inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    /// Profile for windows compact along either axis.
    pub compact: CapacityConstraints,
    /// Profile for every other window.
    pub expanded: CapacityConstraints,
    /// Window classification thresholds.
    pub breakpoints: WindowBreakpoints,
    /// Upper bound for a thumbnail edge.
    pub thumbnail_max_size: u32,
    /// Inset applied to every slot to get its content rectangle.
    pub tile_padding: u32,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            compact: CapacityConstraints::COMPACT,
            expanded: CapacityConstraints::EXPANDED,
            breakpoints: WindowBreakpoints::DEFAULT,
            thumbnail_max_size: DEFAULT_THUMBNAIL_MAX_SIZE,
            tile_padding: DEFAULT_TILE_PADDING,
        }
    }
}

impl GridConfig {
    /// Defaults with overrides from the process environment.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_env_with(|key| std::env::var(key).ok())
    }

    /// Defaults with overrides from a custom lookup (for tests).
    #[must_use]
    pub fn from_env_with<F>(get_env: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        if let Some(value) = env_count(&get_env, ENV_MAX_FEATURED_COMPACT, 1) {
            config.compact.max_featured = value;
        }
        if let Some(value) = env_count(&get_env, ENV_MAX_FEATURED_EXPANDED, 1) {
            config.expanded.max_featured = value;
        }
        if let Some(value) = env_count(&get_env, ENV_MAX_PINNED_COMPACT, 0) {
            config.compact.max_pinned = value;
        }
        if let Some(value) = env_count(&get_env, ENV_MAX_PINNED_EXPANDED, 0) {
            config.expanded.max_pinned = value;
        }
        if let Some(value) = env_count(&get_env, ENV_MAX_THUMBNAILS, 0) {
            config.compact.max_thumbnail = value;
            config.expanded.max_thumbnail = value;
        }
        if let Some(value) = env_count(&get_env, ENV_THUMBNAIL_MAX_SIZE, 1) {
            config.thumbnail_max_size = value;
        }
        if let Some(value) = env_count(&get_env, ENV_TILE_PADDING, 0) {
            config.tile_padding = value;
        }
        config
    }

    /// Capacity profile for a window class.
    pub const fn capacity_for(&self, class: WindowSizeClass) -> CapacityConstraints {
        if class.is_compact() {
            self.compact
        } else {
            self.expanded
        }
    }

    /// Reject configurations that could never show a participant.
    pub fn validate(&self) -> Result<(), LayoutError> {
        self.compact.validate()?;
        self.expanded.validate()?;
        if self.thumbnail_max_size == 0 {
            return Err(LayoutError::InvalidConfig {
                field: "thumbnail_max_size",
                value: 0,
            });
        }
        Ok(())
    }
}

fn env_count<F, T>(get_env: &F, key: &str, min: T) -> Option<T>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr + PartialOrd + Copy,
{
    let raw = get_env(key)?;
    match raw.trim().parse::<T>() {
        Ok(value) if value >= min => Some(value),
        _ => {
            warn!(key, value = %raw, "ignoring invalid layout override");
            None
        }
    }
}
