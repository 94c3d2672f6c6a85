//! Shared numerical primitives.

/// Primary scalar type used across the crate.
pub type Scalar = f64;
/// Primary complex scalar type used for impedances and phasors.
pub type CScalar = num_complex::Complex<Scalar>;

/// Returns the complex value `magnitude · e^(j * theta)`.
#[must_use]
pub fn phasor(magnitude: Scalar, theta: Scalar) -> CScalar {
    CScalar::from_polar(magnitude, theta)
}

/// Computes the RMS magnitude of a sinusoidal waveform with peak value `peak`.
#[must_use]
pub fn sinusoid_rms(peak: Scalar) -> Scalar {
    peak / crate::constants::PEAK_TO_RMS
}

/// Computes the peak magnitude of a sinusoidal waveform with RMS value `rms`.
#[must_use]
pub fn sinusoid_peak(rms: Scalar) -> Scalar {
    rms * crate::constants::PEAK_TO_RMS
}

/// Returns true when `a` and `b` agree within `max(relative · max(|a|, |b|), absolute)`.
#[must_use]
pub fn is_close(a: Scalar, b: Scalar, relative: Scalar, absolute: Scalar) -> bool {
    if a == b {
        return true;
    }
    if !(a.is_finite() && b.is_finite()) {
        return false;
    }
    let diff = (a - b).abs();
    diff <= (relative * a.abs().max(b.abs())).max(absolute)
}

/// Relative difference `|a - b| / max(|a|, |b|)`, zero when both are zero.
#[must_use]
pub fn relative_difference(a: Scalar, b: Scalar) -> Scalar {
    let scale = a.abs().max(b.abs());
    if scale == 0.0 {
        0.0
    } else {
        (a - b).abs() / scale
    }
}
