//! Frequency grids and swept solutions.

use crate::circuits::kind::CircuitType;
use crate::circuits::solver::{solve_with, CircuitSolution};
use crate::config::SolverConfig;
use crate::errors::{Result, ValidationError};
use crate::math::Scalar;

/// Generates `n` linearly spaced samples in [start, stop].
#[must_use]
pub fn linspace(start: Scalar, stop: Scalar, n: usize) -> Vec<Scalar> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (stop - start) / (n as Scalar - 1.0);
            (0..n).map(|i| start + step * i as Scalar).collect()
        }
    }
}

/// Generates `n` logarithmically spaced samples between `start_hz` and `stop_hz`.
///
/// # Errors
///
/// Returns [`ValidationError`] unless both bounds are positive and finite.
pub fn logspace_hz(start_hz: Scalar, stop_hz: Scalar, n: usize) -> Result<Vec<Scalar>> {
    ValidationError::require_positive("start frequency", start_hz)?;
    ValidationError::require_positive("stop frequency", stop_hz)?;
    Ok(match n {
        0 => Vec::new(),
        1 => vec![start_hz],
        _ => {
            let log_start = start_hz.log10();
            let log_stop = stop_hz.log10();
            let step = (log_stop - log_start) / (n as Scalar - 1.0);
            (0..n)
                .map(|i| 10f64.powf(log_start + step * i as Scalar))
                .collect()
        }
    })
}

/// Solves the circuit at every frequency in `frequencies_hz` with the
/// component value held fixed.
///
/// # Errors
///
/// Returns the first [`ValidationError`] encountered; no partial sweep is
/// returned.
pub fn frequency_response<I>(
    v_rms: Scalar,
    resistance: Scalar,
    component: Scalar,
    circuit_type: CircuitType,
    frequencies_hz: I,
) -> Result<Vec<CircuitSolution>>
where
    I: IntoIterator<Item = Scalar>,
{
    frequency_response_with(
        &SolverConfig::default(),
        v_rms,
        resistance,
        component,
        circuit_type,
        frequencies_hz,
    )
}

/// [`frequency_response`] with an explicit configuration.
///
/// # Errors
///
/// See [`frequency_response`].
pub fn frequency_response_with<I>(
    config: &SolverConfig,
    v_rms: Scalar,
    resistance: Scalar,
    component: Scalar,
    circuit_type: CircuitType,
    frequencies_hz: I,
) -> Result<Vec<CircuitSolution>>
where
    I: IntoIterator<Item = Scalar>,
{
    let frequencies: Vec<Scalar> = frequencies_hz.into_iter().collect();
    let _span = tracing::info_span!("frequency_response", %circuit_type, n_points = frequencies.len()).entered();

    frequencies
        .into_iter()
        .map(|f| {
            solve_with(
                config,
                v_rms,
                resistance,
                Some(component),
                None,
                Some(f),
                circuit_type,
            )
        })
        .collect()
}

/// Impedance magnitudes of a sweep.
#[must_use]
pub fn impedance_magnitudes(points: &[CircuitSolution]) -> Vec<Scalar> {
    points.iter().map(CircuitSolution::impedance).collect()
}

/// Phases in degrees of a sweep.
#[must_use]
pub fn phase_deg(points: &[CircuitSolution]) -> Vec<Scalar> {
    points.iter().map(CircuitSolution::phase_degrees).collect()
}
