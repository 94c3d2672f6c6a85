//! Time-domain waveform samples for plotting.

use crate::circuits::solver::CircuitSolution;
use crate::constants::period_from_angular;
use crate::errors::{Result, ValidationError};
use crate::math::Scalar;
use crate::sweep::linspace;

/// Sampling parameters for [`waveforms`].
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WaveformConfig {
    /// Number of source periods to cover.
    pub periods: Scalar,
    /// Number of samples, endpoints included.
    pub samples: usize,
}

impl WaveformConfig {
    /// Creates a configuration covering `periods` cycles with `samples` points.
    #[must_use]
    pub const fn new(periods: Scalar, samples: usize) -> Self {
        Self { periods, samples }
    }
}

impl Default for WaveformConfig {
    fn default() -> Self {
        Self::new(2.0, 500)
    }
}

/// Instantaneous source voltage, current and element voltages.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Waveforms {
    /// Sample times in seconds.
    pub times: Vec<Scalar>,
    /// Source voltage `V_peak · sin(ωt)`.
    pub source: Vec<Scalar>,
    /// Current `I_peak · sin(ωt − φ)`.
    pub current: Vec<Scalar>,
    /// Resistor voltage, in phase with the current.
    pub resistor: Vec<Scalar>,
    /// Inductor or capacitor voltage, ±90° from the current.
    pub reactive: Vec<Scalar>,
}

impl Waveforms {
    /// Total captured samples.
    #[must_use]
    pub fn len(&self) -> usize {
        self.times.len()
    }

    /// True if no samples recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }
}

/// Samples the steady-state waveforms of `solution`.
///
/// # Errors
///
/// Returns [`ValidationError::InvalidSampling`] when fewer than two samples
/// are requested or `periods` is not a positive finite number.
pub fn waveforms(solution: &CircuitSolution, config: &WaveformConfig) -> Result<Waveforms> {
    if config.samples < 2 {
        return Err(ValidationError::InvalidSampling(format!(
            "need at least 2 samples, got {}",
            config.samples
        )));
    }
    if !(config.periods.is_finite() && config.periods > 0.0) {
        return Err(ValidationError::InvalidSampling(format!(
            "periods must be positive, got {}",
            config.periods
        )));
    }

    let omega = solution.omega();
    let phase = solution.phase();
    let lead = solution.circuit_type().rules().reactive_voltage_lead;
    let v_peak = solution.v_peak();
    let i_peak = solution.i_peak();
    let r = solution.resistance();
    let x = solution.reactance();

    let times = linspace(0.0, config.periods * period_from_angular(omega), config.samples);
    let mut out = Waveforms {
        source: Vec::with_capacity(times.len()),
        current: Vec::with_capacity(times.len()),
        resistor: Vec::with_capacity(times.len()),
        reactive: Vec::with_capacity(times.len()),
        times: Vec::new(),
    };
    for &t in &times {
        let wt = omega * t;
        let i = i_peak * (wt - phase).sin();
        out.source.push(v_peak * wt.sin());
        out.current.push(i);
        out.resistor.push(r * i);
        out.reactive.push(x * i_peak * (wt - phase + lead).sin());
    }
    out.times = times;
    Ok(out)
}
