//! Solver configuration.

use crate::constants::{DEFAULT_ABSOLUTE_TOLERANCE, DEFAULT_RELATIVE_TOLERANCE};
use crate::errors::{Result, ValidationError};
use crate::math::{is_close, Scalar};

/// Tolerance used when three redundant reactance parameters are compared.
///
/// Both parts must be non-negative and finite. The constructors do not check
/// this; [`Tolerance::validate`] does, and resolution calls it before use.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tolerance {
    /// Relative tolerance, scaled by the larger magnitude.
    pub relative: Scalar,
    /// Absolute floor in ohms.
    pub absolute: Scalar,
}

impl Tolerance {
    /// Creates a tolerance from its relative and absolute parts.
    #[must_use]
    pub const fn new(relative: Scalar, absolute: Scalar) -> Self {
        Self { relative, absolute }
    }

    /// Purely relative tolerance.
    #[must_use]
    pub const fn relative(relative: Scalar) -> Self {
        Self { relative, absolute: 0.0 }
    }

    /// Checks that both parts are non-negative and finite.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidTolerance`] otherwise.
    pub fn validate(&self) -> Result<()> {
        let valid = |v: Scalar| v.is_finite() && v >= 0.0;
        if valid(self.relative) && valid(self.absolute) {
            Ok(())
        } else {
            Err(ValidationError::InvalidTolerance {
                relative: self.relative,
                absolute: self.absolute,
            })
        }
    }

    /// Returns true when `a` and `b` agree within this tolerance.
    #[must_use]
    pub fn accepts(&self, a: Scalar, b: Scalar) -> bool {
        is_close(a, b, self.relative, self.absolute)
    }
}

impl Default for Tolerance {
    fn default() -> Self {
        Self::new(DEFAULT_RELATIVE_TOLERANCE, DEFAULT_ABSOLUTE_TOLERANCE)
    }
}

/// Configuration shared by the resolver and the solver.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SolverConfig {
    /// Consistency tolerance for fully specified reactance triples.
    pub tolerance: Tolerance,
}

impl SolverConfig {
    /// Creates a configuration with a custom consistency tolerance.
    #[must_use]
    pub const fn with_tolerance(tolerance: Tolerance) -> Self {
        Self { tolerance }
    }
}
