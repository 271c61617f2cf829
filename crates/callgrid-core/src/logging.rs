#![forbid(unsafe_code)]

//! Logging facade for layout decisions.
//!
//! With the `tracing` feature the macros are `tracing`'s own. Without it they
//! expand to nothing, so the layout crates can log pipeline and composer
//! decisions unconditionally. Only the levels the engine emits are provided:
//! `trace!` for per-pass geometry, `debug!` for pipeline and composer
//! summaries, `warn!` for ignored configuration overrides.

#[cfg(feature = "tracing")]
pub use tracing::{debug, trace, warn};

#[cfg(not(feature = "tracing"))]
mod noop_macros {
    /// No-op debug macro when tracing is disabled.
    #[macro_export]
    macro_rules! debug {
        ($($arg:tt)*) => {};
    }

    /// No-op trace macro when tracing is disabled.
    #[macro_export]
    macro_rules! trace {
        ($($arg:tt)*) => {};
    }

    /// No-op warn macro when tracing is disabled.
    #[macro_export]
    macro_rules! warn {
        ($($arg:tt)*) => {};
    }
}

#[cfg(all(test, not(feature = "tracing")))]
mod tests {
    #[test]
    fn noop_macros_accept_structured_fields() {
        let tiles = 4usize;
        crate::debug!(tiles, overflow = 2, "pipeline pass");
        crate::trace!(window = %"medium/compact", "stream layout pass");
        crate::warn!("ignored override {}", "CALLGRID_TILE_PADDING");
    }
}
