//! Numeric constants and frequency conversions.
//!
//! ## Tolerances
//!
//! Redundant inputs (component value, reactance and angular frequency all
//! supplied) are compared with a combined relative/absolute tolerance. The
//! relative term absorbs rounding from the `2πf` conversion; the absolute term
//! only matters for reactances close to zero.

use std::f64::consts::{PI, SQRT_2};

use crate::math::Scalar;

/// Default relative tolerance for the three-way consistency check.
pub const DEFAULT_RELATIVE_TOLERANCE: Scalar = 1.0e-6;
/// Default absolute tolerance (ohms) for the three-way consistency check.
pub const DEFAULT_ABSOLUTE_TOLERANCE: Scalar = 1.0e-9;
/// Ratio between the peak and RMS value of a sinusoid.
pub const PEAK_TO_RMS: Scalar = SQRT_2;

/// Returns the angular frequency corresponding to a linear frequency `hz`.
#[inline]
#[must_use]
pub fn angular_frequency(hz: Scalar) -> Scalar {
    2.0 * PI * hz
}

/// Returns the linear frequency in hertz for an angular frequency `omega`.
#[inline]
#[must_use]
pub fn frequency_from_angular(omega: Scalar) -> Scalar {
    omega / (2.0 * PI)
}

/// Returns the period in seconds of a sinusoid with angular frequency `omega`.
#[inline]
#[must_use]
pub fn period_from_angular(omega: Scalar) -> Scalar {
    2.0 * PI / omega
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn mains_frequency_matches_reference() {
        assert_relative_eq!(angular_frequency(60.0), 376.991_118_430_775_2, max_relative = 1.0e-12);
    }

    #[test]
    fn conversions_invert_each_other() {
        let omega = angular_frequency(1.0e3);
        assert_relative_eq!(frequency_from_angular(omega), 1.0e3, max_relative = 1.0e-12);
        assert_relative_eq!(period_from_angular(omega), 1.0e-3, max_relative = 1.0e-12);
    }
}
