//! Convenience re-exports for front ends.

pub use crate::circuits::{
    calculation_steps, resolve, resolve_with, solve, solve_resolved, solve_resolved_with, solve_with,
    CalculationSteps, CircuitSolution, CircuitType, Derivation, ReactanceInput, ReactanceTriple,
};
pub use crate::config::{SolverConfig, Tolerance};
pub use crate::constants::*;
pub use crate::errors::{Result, ValidationError};
pub use crate::math::{phasor, sinusoid_peak, sinusoid_rms, CScalar, Scalar};
pub use crate::sweep::{
    frequency_response, frequency_response_with, impedance_magnitudes, linspace, logspace_hz,
    phase_deg,
};
pub use crate::units::{
    parse_quantity, Ampere, AngularFrequency, Capacitance, Current, Farad, Frequency, Henry,
    Hertz, Impedance, Inductance, Ohm, Quantity, RadiansPerSecond, Unit, Volt, Voltage,
};
pub use crate::visual::{
    phasor_diagram, waveforms, Phasor, PhasorDiagram, WaveformConfig, Waveforms,
};
