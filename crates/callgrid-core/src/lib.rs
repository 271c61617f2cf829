#![forbid(unsafe_code)]

//! Core: pixel geometry, layout constraints, and the logging facade shared by
//! the callgrid crates.

pub mod geometry;
pub mod logging;

pub use geometry::{Axis, Constraints, Rect, Sides, Size};

// Re-export tracing macros at crate root for ergonomic use.
#[cfg(feature = "tracing")]
pub use logging::{debug, trace, warn};
