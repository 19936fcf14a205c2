//! Error types for the capsize-core crate.
//!
//! Construction is the only fallible step in the model: a canoe needs
//! positive dimensions and a sane crash configuration, and a person needs a
//! positive weight. Everything after construction (embarking, crashing,
//! reporting) cannot fail.

use core::fmt;

/// A named canoe dimension, reported in [`CanoeError::InvalidDimension`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dimension {
    /// The longer horizontal component.
    Length,
    /// The shorter horizontal component.
    Width,
    /// The vertical component.
    Depth,
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Length => write!(f, "length"),
            Self::Width => write!(f, "width"),
            Self::Depth => write!(f, "depth"),
        }
    }
}

/// Errors raised while building canoes and passengers.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CanoeError {
    /// A canoe dimension was zero, negative, or not a finite number.
    #[error("canoe {dimension} must be positive and finite, got {value}")]
    InvalidDimension {
        /// Which dimension was rejected.
        dimension: Dimension,
        /// The rejected value.
        value: f64,
    },

    /// A person's weight was zero, negative, or not a finite number.
    #[error("weight of {name} must be positive and finite, got {weight}")]
    InvalidWeight {
        /// Name of the person being constructed.
        name: String,
        /// The rejected weight.
        weight: f64,
    },

    /// A crash constant would break the damage or threshold rules.
    #[error("crash config {field} is invalid: {value}")]
    InvalidCrashConfig {
        /// Name of the rejected `CrashConfig` field.
        field: &'static str,
        /// The rejected value.
        value: f64,
    },
}

/// Returns `true` for the values the model accepts as a physical quantity.
pub(crate) fn is_positive_finite(value: f64) -> bool {
    value.is_finite() && value > 0.0
}
