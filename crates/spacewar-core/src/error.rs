//! Error types for body construction and configuration.

use crate::enums::BodyKind;
use crate::types::Shape;

/// Errors raised while building bodies or validating configuration.
///
/// These are construction-time failures; nothing in the per-frame update
/// path returns an error.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SimError {
    /// A dynamic body was given a mass that would break integration.
    #[error("dynamic {kind:?} body needs a positive, finite mass (got {mass})")]
    InvalidMass { kind: BodyKind, mass: f64 },

    /// A bounding shape has a non-positive or non-finite extent.
    #[error("bounding shape extents must be positive and finite: {0:?}")]
    InvalidShape(Shape),

    /// A configuration value is out of range.
    #[error("invalid configuration value for `{field}`: {value}")]
    InvalidConfig { field: &'static str, value: f64 },
}
