//! Steady-state solution of a series RL or RC circuit.

use std::fmt;

use crate::circuits::kind::CircuitType;
use crate::circuits::resolver::{resolve_with, ReactanceInput, ReactanceTriple};
use crate::config::SolverConfig;
use crate::constants::angular_frequency;
use crate::errors::{Result, ValidationError};
use crate::math::{sinusoid_peak, CScalar, Scalar};
use crate::units::{Ampere, Hertz, Ohm, RadiansPerSecond, Unit, Volt};

/// Complete steady-state description of a series single-reactance circuit.
///
/// Produced fresh by every solve; there is no way to mutate one after the fact.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CircuitSolution {
    circuit_type: CircuitType,
    v_rms: Scalar,
    resistance: Scalar,
    input: ReactanceInput,
    triple: ReactanceTriple,
    impedance: Scalar,
    phase: Scalar,
    i_rms: Scalar,
    i_peak: Scalar,
    v_resistor: Scalar,
    v_reactive: Scalar,
}

impl CircuitSolution {
    /// Topology that was solved.
    #[must_use]
    pub const fn circuit_type(&self) -> CircuitType {
        self.circuit_type
    }

    /// Source RMS voltage (V).
    #[must_use]
    pub const fn v_rms(&self) -> Scalar {
        self.v_rms
    }

    /// Source peak voltage (V).
    #[must_use]
    pub fn v_peak(&self) -> Scalar {
        sinusoid_peak(self.v_rms)
    }

    /// Series resistance (Ω).
    #[must_use]
    pub const fn resistance(&self) -> Scalar {
        self.resistance
    }

    /// Reactance parameters exactly as they were supplied.
    #[must_use]
    pub const fn input(&self) -> &ReactanceInput {
        &self.input
    }

    /// Resolved component value, reactance and angular frequency.
    #[must_use]
    pub const fn triple(&self) -> &ReactanceTriple {
        &self.triple
    }

    /// Inductance (H) or capacitance (F).
    #[must_use]
    pub const fn component(&self) -> Scalar {
        self.triple.component
    }

    /// Reactance magnitude (Ω).
    #[must_use]
    pub const fn reactance(&self) -> Scalar {
        self.triple.reactance
    }

    /// Angular frequency (rad/s).
    #[must_use]
    pub const fn omega(&self) -> Scalar {
        self.triple.omega
    }

    /// Linear frequency (Hz).
    #[must_use]
    pub fn frequency(&self) -> Scalar {
        self.triple.frequency()
    }

    /// Impedance magnitude `|Z|` (Ω).
    #[must_use]
    pub const fn impedance(&self) -> Scalar {
        self.impedance
    }

    /// Complex impedance `R + jX_L` or `R - jX_C`.
    #[must_use]
    pub fn impedance_phasor(&self) -> CScalar {
        CScalar::new(
            self.resistance,
            self.circuit_type.rules().reactance_sign * self.triple.reactance,
        )
    }

    /// Phase of the impedance in radians: positive for RL, negative for RC.
    #[must_use]
    pub const fn phase(&self) -> Scalar {
        self.phase
    }

    /// Phase of the impedance in degrees.
    #[must_use]
    pub fn phase_degrees(&self) -> Scalar {
        self.phase.to_degrees()
    }

    /// RMS current (A).
    #[must_use]
    pub const fn i_rms(&self) -> Scalar {
        self.i_rms
    }

    /// Peak current (A).
    #[must_use]
    pub const fn i_peak(&self) -> Scalar {
        self.i_peak
    }

    /// RMS voltage across the resistor (V).
    #[must_use]
    pub const fn v_resistor(&self) -> Scalar {
        self.v_resistor
    }

    /// RMS voltage across the inductor or capacitor (V).
    #[must_use]
    pub const fn v_reactive(&self) -> Scalar {
        self.v_reactive
    }
}

impl fmt::Display for CircuitSolution {
    /// One `key: value` line per quantity.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = self.circuit_type;
        let rows: [(&str, Scalar, &str); 14] = [
            ("V_rms", self.v_rms, Volt::SYMBOL),
            ("R", self.resistance, Ohm::SYMBOL),
            ("f", self.frequency(), Hertz::SYMBOL),
            ("omega", self.omega(), RadiansPerSecond::SYMBOL),
            (kind.component_symbol(), self.component(), kind.component_unit()),
            (kind.reactance_symbol(), self.reactance(), Ohm::SYMBOL),
            ("Z", self.impedance, Ohm::SYMBOL),
            ("phi", self.phase, "rad"),
            ("phi_deg", self.phase_degrees(), "°"),
            ("I_rms", self.i_rms, Ampere::SYMBOL),
            ("I_peak", self.i_peak, Ampere::SYMBOL),
            ("V_rms_R", self.v_resistor, Volt::SYMBOL),
            ("V_rms_X", self.v_reactive, Volt::SYMBOL),
            ("V_peak", self.v_peak(), Volt::SYMBOL),
        ];
        for (i, (key, value, unit)) in rows.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{key}: {value} {unit}")?;
        }
        Ok(())
    }
}

/// Solves a series circuit with the default configuration.
///
/// `frequency` is in hertz; any two of `component`, `reactance` and
/// `frequency` must be given.
///
/// # Errors
///
/// Returns [`ValidationError`] when `v_rms`, `resistance` or `frequency` is
/// not a positive finite number, or when parameter resolution fails.
pub fn solve(
    v_rms: Scalar,
    resistance: Scalar,
    component: Option<Scalar>,
    reactance: Option<Scalar>,
    frequency: Option<Scalar>,
    circuit_type: CircuitType,
) -> Result<CircuitSolution> {
    solve_with(
        &SolverConfig::default(),
        v_rms,
        resistance,
        component,
        reactance,
        frequency,
        circuit_type,
    )
}

/// Solves a series circuit with an explicit configuration.
///
/// # Errors
///
/// See [`solve`].
pub fn solve_with(
    config: &SolverConfig,
    v_rms: Scalar,
    resistance: Scalar,
    component: Option<Scalar>,
    reactance: Option<Scalar>,
    frequency: Option<Scalar>,
    circuit_type: CircuitType,
) -> Result<CircuitSolution> {
    let _span = tracing::debug_span!("solve", %circuit_type).entered();

    ValidationError::require_positive("V_rms", v_rms)?;
    ValidationError::require_positive("R", resistance)?;
    let omega = frequency.map(to_angular).transpose()?;

    let input = ReactanceInput::new(component, reactance, omega);
    let triple = resolve_with(config, input, circuit_type)?;
    Ok(assemble(circuit_type, v_rms, resistance, input, triple))
}

/// Solves a series circuit from an already resolved triple, using the
/// default configuration.
///
/// # Errors
///
/// Returns [`ValidationError`] when any input is not a positive finite number
/// or when the triple does not satisfy the reactance relationship.
pub fn solve_resolved(
    v_rms: Scalar,
    resistance: Scalar,
    triple: ReactanceTriple,
    circuit_type: CircuitType,
) -> Result<CircuitSolution> {
    solve_resolved_with(&SolverConfig::default(), v_rms, resistance, triple, circuit_type)
}

/// Solves a series circuit from an already resolved triple with an explicit
/// configuration. The triple is re-checked against `config.tolerance`.
///
/// # Errors
///
/// See [`solve_resolved`].
pub fn solve_resolved_with(
    config: &SolverConfig,
    v_rms: Scalar,
    resistance: Scalar,
    triple: ReactanceTriple,
    circuit_type: CircuitType,
) -> Result<CircuitSolution> {
    let _span = tracing::debug_span!("solve_resolved", %circuit_type).entered();

    ValidationError::require_positive("V_rms", v_rms)?;
    ValidationError::require_positive("R", resistance)?;

    let input = ReactanceInput::new(Some(triple.component), Some(triple.reactance), Some(triple.omega));
    let triple = resolve_with(config, input, circuit_type)?;
    Ok(assemble(circuit_type, v_rms, resistance, input, triple))
}

/// Converts a frequency in hertz to rad/s, keeping the error labelled `f`.
fn to_angular(frequency: Scalar) -> Result<Scalar> {
    let f = ValidationError::require_positive("f", frequency)?;
    let omega = angular_frequency(f);
    if omega.is_finite() {
        Ok(omega)
    } else {
        Err(ValidationError::NonFinite { name: "f", value: omega })
    }
}

fn assemble(
    circuit_type: CircuitType,
    v_rms: Scalar,
    resistance: Scalar,
    input: ReactanceInput,
    triple: ReactanceTriple,
) -> CircuitSolution {
    let x = triple.reactance;
    let impedance = resistance.hypot(x);
    let phase = (circuit_type.rules().reactance_sign * x).atan2(resistance);
    let i_rms = v_rms / impedance;

    tracing::debug!(impedance, phase, i_rms, "solved series circuit");

    CircuitSolution {
        circuit_type,
        v_rms,
        resistance,
        input,
        triple,
        impedance,
        phase,
        i_rms,
        i_peak: sinusoid_peak(i_rms),
        v_resistor: i_rms * resistance,
        v_reactive: i_rms * x,
    }
}

#[cfg(test)]
mod tests {
    use std::f64::consts::FRAC_PI_4;

    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn mains_rc_reference_values() {
        let s = solve(120.0, 100.0, Some(1.0e-6), None, Some(60.0), CircuitType::RC).unwrap();
        assert_relative_eq!(s.omega(), 376.991, max_relative = 1.0e-5);
        assert_relative_eq!(s.reactance(), 2652.58, max_relative = 1.0e-5);
        assert_relative_eq!(s.impedance(), 2654.46, max_relative = 1.0e-5);
        assert_relative_eq!(s.phase(), -1.533_116, max_relative = 1.0e-5);
        assert_relative_eq!(s.i_rms(), 0.045_206, max_relative = 1.0e-4);
    }

    #[test]
    fn equal_resistance_and_reactance_gives_quarter_pi() {
        let rl = solve(10.0, 100.0, None, Some(100.0), Some(50.0), CircuitType::RL).unwrap();
        assert_relative_eq!(rl.phase(), FRAC_PI_4, epsilon = 1.0e-12);
        let rc = solve(10.0, 100.0, None, Some(100.0), Some(50.0), CircuitType::RC).unwrap();
        assert_relative_eq!(rc.phase(), -FRAC_PI_4, epsilon = 1.0e-12);
        assert_relative_eq!(rl.impedance(), rc.impedance());
    }

    #[test]
    fn peak_current_scales_by_sqrt_two() {
        let s = solve(230.0, 47.0, Some(0.2), None, Some(50.0), CircuitType::RL).unwrap();
        assert_relative_eq!(s.i_peak(), s.i_rms() * 2.0_f64.sqrt(), max_relative = 1.0e-12);
        assert_relative_eq!(s.v_peak(), 230.0 * 2.0_f64.sqrt(), max_relative = 1.0e-12);
    }

    #[test]
    fn component_voltages_add_in_quadrature() {
        let s = solve(12.0, 330.0, Some(4.7e-6), None, Some(100.0), CircuitType::RC).unwrap();
        assert_relative_eq!(s.v_resistor().hypot(s.v_reactive()), 12.0, max_relative = 1.0e-12);
    }

    #[test]
    fn impedance_phasor_matches_magnitude_and_phase() {
        let s = solve(5.0, 10.0, Some(0.01), None, Some(1.0e3), CircuitType::RL).unwrap();
        let z = s.impedance_phasor();
        assert_relative_eq!(z.norm(), s.impedance(), max_relative = 1.0e-12);
        assert_relative_eq!(z.arg(), s.phase(), max_relative = 1.0e-12);
    }

    #[test]
    fn input_is_echoed() {
        let s = solve(1.0, 1.0, Some(1.0e-3), None, Some(1.0e3), CircuitType::RL).unwrap();
        assert_eq!(s.input().component, Some(1.0e-3));
        assert_eq!(s.input().reactance, None);
        assert_relative_eq!(s.input().omega.unwrap(), angular_frequency(1.0e3));
    }

    #[test]
    fn rejects_bad_source_and_resistance() {
        assert!(matches!(
            solve(0.0, 10.0, Some(1.0), None, Some(1.0), CircuitType::RL),
            Err(ValidationError::NonPositive { name: "V_rms", .. })
        ));
        assert!(matches!(
            solve(1.0, -10.0, Some(1.0), None, Some(1.0), CircuitType::RL),
            Err(ValidationError::NonPositive { name: "R", .. })
        ));
        assert!(matches!(
            solve(1.0, 10.0, Some(1.0), None, Some(-60.0), CircuitType::RL),
            Err(ValidationError::NonPositive { name: "f", .. })
        ));
    }

    #[test]
    fn resolution_errors_propagate_unchanged() {
        let direct = crate::circuits::resolver::resolve(Some(1.0), None, None, CircuitType::RC).unwrap_err();
        let via_solve = solve(1.0, 1.0, Some(1.0), None, None, CircuitType::RC).unwrap_err();
        assert_eq!(direct, via_solve);
    }

    #[test]
    fn pre_resolved_triple_gives_same_solution() {
        let s = solve(24.0, 220.0, Some(0.05), None, Some(400.0), CircuitType::RL).unwrap();
        let r = solve_resolved(24.0, 220.0, *s.triple(), CircuitType::RL).unwrap();
        assert_relative_eq!(r.impedance(), s.impedance());
        assert_relative_eq!(r.phase(), s.phase());
        assert_relative_eq!(r.i_rms(), s.i_rms());
    }

    #[test]
    fn resolved_triple_is_checked_for_consistency() {
        // X_C should be 1000 Ω at ω = 1000 rad/s, C = 1 µF.
        let bad = ReactanceTriple {
            component: 1.0e-6,
            reactance: 100.0,
            omega: 1000.0,
        };
        let err = solve_resolved(10.0, 100.0, bad, CircuitType::RC).unwrap_err();
        assert!(matches!(err, ValidationError::Inconsistent { reactance: "X_C", .. }));

        let loose = SolverConfig::with_tolerance(crate::config::Tolerance::relative(0.95));
        assert!(solve_resolved_with(&loose, 10.0, 100.0, bad, CircuitType::RC).is_ok());
    }

    #[test]
    fn resolved_triple_rejects_bad_values() {
        let good = ReactanceTriple {
            component: 0.1,
            reactance: 100.0,
            omega: 1000.0,
        };
        assert!(matches!(
            solve_resolved(0.0, 10.0, good, CircuitType::RL),
            Err(ValidationError::NonPositive { name: "V_rms", .. })
        ));
        assert!(matches!(
            solve_resolved(1.0, f64::NAN, good, CircuitType::RL),
            Err(ValidationError::NonFinite { name: "R", .. })
        ));
        assert!(matches!(
            solve_resolved(1.0, 10.0, ReactanceTriple { component: -0.1, ..good }, CircuitType::RL),
            Err(ValidationError::NonPositive { name: "L", .. })
        ));
        assert!(matches!(
            solve_resolved(1.0, 10.0, ReactanceTriple { omega: f64::NAN, ..good }, CircuitType::RL),
            Err(ValidationError::NonFinite { name: "omega", .. })
        ));
    }

    #[test]
    fn overflowing_frequency_is_reported_as_f() {
        let err = solve(1.0, 1.0, Some(1.0), None, Some(1.0e308), CircuitType::RL).unwrap_err();
        assert!(matches!(err, ValidationError::NonFinite { name: "f", .. }));
    }

    #[test]
    fn extreme_inconsistent_triples_are_rejected() {
        assert!(solve(1.0, 1.0, Some(1.0e200), Some(5.0), Some(1.0e200), CircuitType::RL).is_err());
        assert!(solve(1.0, 1.0, Some(1.0e-200), Some(100.0), Some(1.0e-200), CircuitType::RC).is_err());
    }

    #[test]
    fn display_lists_every_quantity() {
        let s = solve(10.0, 100.0, Some(1.0e-6), None, Some(1.0e3), CircuitType::RC).unwrap();
        let text = s.to_string();
        for key in ["V_rms:", "C:", "X_C:", "Z:", "phi:", "I_rms:", "I_peak:", "V_rms_R:", "V_rms_X:"] {
            assert!(text.lines().any(|l| l.starts_with(key)), "missing {key}");
        }
    }
}
