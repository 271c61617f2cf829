//! Layout configuration errors.

use std::fmt;

use callgrid_core::geometry::{Axis, Constraints, Size};

/// Errors raised for misconfigured layout calls.
///
/// These indicate a programming error in the caller. The panicking entry
/// points (`AdaptiveGrid::new`, `layout`, `calculate_in`) abort with this
/// error's message; the `try_*` variants hand it back instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LayoutError {
    /// A grid was configured with zero columns.
    ZeroColumns,
    /// The container is unbounded along `axis`.
    UnboundedContainer { axis: Axis },
    /// A configuration value is outside its accepted range.
    InvalidConfig { field: &'static str, value: u64 },
}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroColumns => write!(f, "grid column count must be at least 1"),
            Self::UnboundedContainer { axis } => {
                write!(f, "unbounded size not supported ({axis} axis)")
            }
            Self::InvalidConfig { field, value } => {
                write!(f, "invalid layout config: {field} = {value}")
            }
        }
    }
}

impl std::error::Error for LayoutError {}

/// Resolve constraints into a bounded container size.
pub(crate) fn bounded(constraints: Constraints) -> Result<Size, LayoutError> {
    match constraints.unbounded_axis() {
        Some(axis) => Err(LayoutError::UnboundedContainer { axis }),
        None => Ok(Size::new(
            constraints.max_width.unwrap_or_default(),
            constraints.max_height.unwrap_or_default(),
        )),
    }
}

/// Unwrap a configuration result, aborting loudly on error.
#[track_caller]
pub(crate) fn fatal<T>(result: Result<T, LayoutError>) -> T {
    match result {
        Ok(value) => value,
        Err(err) => panic!("{err}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages() {
        assert_eq!(
            LayoutError::ZeroColumns.to_string(),
            "grid column count must be at least 1"
        );
        assert_eq!(
            LayoutError::UnboundedContainer {
                axis: Axis::Vertical
            }
            .to_string(),
            "unbounded size not supported (vertical axis)"
        );
        assert_eq!(
            LayoutError::InvalidConfig {
                field: "max_thumbnail",
                value: 0
            }
            .to_string(),
            "invalid layout config: max_thumbnail = 0"
        );
    }

    #[test]
    fn bounded_resolves_size() {
        assert_eq!(bounded(Constraints::fixed(3, 4)), Ok(Size::new(3, 4)));
        assert_eq!(
            bounded(Constraints::unbounded()),
            Err(LayoutError::UnboundedContainer {
                axis: Axis::Horizontal
            })
        );
    }

    #[test]
    #[should_panic(expected = "unbounded size not supported")]
    fn fatal_panics_with_message() {
        let _: Size = fatal(bounded(Constraints {
            max_width: Some(10),
            max_height: None,
        }));
    }
}
