//! Shared error types used across submodules.

use thiserror::Error;

use crate::math::Scalar;

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, ValidationError>;

/// Raised whenever an input violates a constraint of the circuit model.
///
/// Every variant renders a message naming the violated constraint, so callers
/// can show `err.to_string()` to a user without further formatting.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// Fewer than two of component value, reactance and angular frequency were given.
    #[error("at least two of {component}, {reactance} and omega are required ({supplied} supplied)")]
    MissingParameters {
        /// Component symbol (`L` or `C`).
        component: &'static str,
        /// Reactance symbol (`X_L` or `X_C`).
        reactance: &'static str,
        /// Number of values actually supplied.
        supplied: usize,
    },
    /// A supplied value was zero or negative.
    #[error("{name} must be positive (got {value})")]
    NonPositive {
        /// Name of the offending quantity.
        name: &'static str,
        /// Value as supplied.
        value: Scalar,
    },
    /// A supplied value was NaN or infinite.
    #[error("{name} must be a finite number (got {value})")]
    NonFinite {
        /// Name of the offending quantity.
        name: &'static str,
        /// Value as supplied.
        value: Scalar,
    },
    /// Three supplied values disagree with the reactance relationship.
    #[error(
        "inconsistent input: {reactance} = {supplied:.4} Ω does not match {expected:.4} Ω \
         computed from {component} and omega (relative error {relative_error:.3e})"
    )]
    Inconsistent {
        /// Component symbol (`L` or `C`).
        component: &'static str,
        /// Reactance symbol (`X_L` or `X_C`).
        reactance: &'static str,
        /// Reactance as supplied.
        supplied: Scalar,
        /// Reactance implied by the other two values.
        expected: Scalar,
        /// `|supplied - expected| / max(|supplied|, |expected|)`.
        relative_error: Scalar,
    },
    /// A derived value left the representable positive range.
    #[error("derived {name} is out of range (got {value})")]
    DerivedOutOfRange {
        /// Name of the derived quantity.
        name: &'static str,
        /// Value produced by the derivation.
        value: Scalar,
    },
    /// Waveform sampling parameters cannot produce a time axis.
    #[error("invalid sampling: {0}")]
    InvalidSampling(String),
    /// A circuit-type tag other than `RL` or `RC`.
    #[error("unknown circuit type {0:?}: expected RL or RC")]
    InvalidCircuitType(String),
    /// A consistency tolerance that is negative or not a number.
    #[error("tolerance must be non-negative and finite (relative {relative}, absolute {absolute})")]
    InvalidTolerance {
        /// Relative part as configured.
        relative: Scalar,
        /// Absolute part as configured.
        absolute: Scalar,
    },
    /// A textual quantity could not be parsed.
    #[error("invalid quantity {text:?}: {reason}")]
    InvalidQuantity {
        /// Text as supplied.
        text: String,
        /// Why parsing failed.
        reason: String,
    },
}

impl ValidationError {
    /// Checks that `value` is finite and strictly positive.
    pub(crate) fn require_positive(name: &'static str, value: Scalar) -> Result<Scalar> {
        if !value.is_finite() {
            return Err(Self::NonFinite { name, value });
        }
        if value <= 0.0 {
            return Err(Self::NonPositive { name, value });
        }
        Ok(value)
    }
}
