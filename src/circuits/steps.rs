//! Step-by-step transcript of a solved circuit.

use std::fmt;

use crate::circuits::resolver::Derivation;
use crate::circuits::solver::CircuitSolution;
use crate::constants::frequency_from_angular;
use crate::math::Scalar;
use crate::units::{Ampere, Hertz, Ohm, RadiansPerSecond, Unit, Volt};

/// Relative tolerance of the closing `sqrt(V_R² + V_X²) = V_rms` check.
const VERIFICATION_TOLERANCE: Scalar = 1.0e-5;

/// Ordered, human-readable lines describing how a solution was obtained.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CalculationSteps {
    lines: Vec<String>,
}

impl CalculationSteps {
    /// Individual lines, section headers included.
    #[must_use]
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    fn push(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }
}

impl fmt::Display for CalculationSteps {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.lines.join("\n"))
    }
}

/// Four significant digits, scientific notation outside `[1e-3, 1e5)`.
fn sig4(value: Scalar) -> String {
    if value == 0.0 {
        return "0".into();
    }
    let magnitude = value.abs();
    if !(1.0e-3..1.0e5).contains(&magnitude) {
        return format!("{value:.3e}");
    }
    let decimals = (3 - magnitude.log10().floor() as i32).max(0) as usize;
    let text = format!("{value:.decimals$}");
    if text.contains('.') {
        text.trim_end_matches('0').trim_end_matches('.').to_owned()
    } else {
        text
    }
}

fn given(value: Option<Scalar>, unit: &str) -> String {
    value.map_or_else(|| "not provided".to_owned(), |v| format!("{} {unit}", sig4(v)))
}

/// Builds the transcript for `solution`.
#[must_use]
pub fn calculation_steps(solution: &CircuitSolution) -> CalculationSteps {
    let kind = solution.circuit_type();
    let comp = kind.component_symbol();
    let react = kind.reactance_symbol();
    let comp_unit = kind.component_unit();
    let ohm = Ohm::SYMBOL;
    let input = solution.input();
    let triple = solution.triple();

    let mut steps = CalculationSteps::default();

    steps.push("--- Inputs (SI units) ---");
    steps.push(format!("V_rms = {} {}", sig4(solution.v_rms()), Volt::SYMBOL));
    steps.push(format!("R = {} {ohm}", sig4(solution.resistance())));
    steps.push(format!(
        "f = {}",
        given(input.omega.map(frequency_from_angular), Hertz::SYMBOL)
    ));
    steps.push(format!("{comp} = {}", given(input.component, comp_unit)));
    steps.push(format!("{react} = {}", given(input.reactance, ohm)));

    steps.push("");
    steps.push("--- Calculations ---");

    let w = sig4(triple.omega);
    let c = sig4(triple.component);
    let x = sig4(triple.reactance);
    let rad_s = RadiansPerSecond::SYMBOL;
    let inductive = kind.rules().reactance_sign > 0.0;

    match Derivation::of(input) {
        Derivation::Reactance => {
            steps.push(format!("ω = 2π · f = 2π · {} = {w} {rad_s}", sig4(triple.frequency())));
            if inductive {
                steps.push(format!("{react} = ω · {comp} = {w} · {c} = {x} {ohm}"));
            } else {
                steps.push(format!("{react} = 1 / (ω · {comp}) = 1 / ({w} · {c}) = {x} {ohm}"));
            }
        }
        Derivation::Component => {
            steps.push(format!("ω = 2π · f = 2π · {} = {w} {rad_s}", sig4(triple.frequency())));
            if inductive {
                steps.push(format!("{comp} = {react} / ω = {x} / {w} = {c} {comp_unit}"));
            } else {
                steps.push(format!(
                    "{comp} = 1 / (ω · {react}) = 1 / ({w} · {x}) = {c} {comp_unit}"
                ));
            }
        }
        Derivation::Omega => {
            if inductive {
                steps.push(format!("ω = {react} / {comp} = {x} / {c} = {w} {rad_s}"));
            } else {
                steps.push(format!("ω = 1 / ({comp} · {react}) = 1 / ({c} · {x}) = {w} {rad_s}"));
            }
            steps.push(format!(
                "f = ω / 2π = {w} / 2π = {} {}",
                sig4(triple.frequency()),
                Hertz::SYMBOL
            ));
        }
        Derivation::Verified => {
            steps.push(format!("ω = 2π · f = 2π · {} = {w} {rad_s}", sig4(triple.frequency())));
            steps.push(format!(
                "{react} = {x} {ohm} (consistent with {comp} and f)"
            ));
        }
    }

    let signed_x = kind.rules().reactance_sign * triple.reactance;
    let r = sig4(solution.resistance());
    let z = sig4(solution.impedance());
    steps.push(format!("Z = sqrt(R² + X²) = sqrt({r}² + {x}²) = {z} {ohm}"));
    steps.push(format!(
        "φ = atan2(X_signed, R) = atan2({}, {r}) = {:.4} rad",
        sig4(signed_x),
        solution.phase()
    ));
    steps.push(format!("  = {:.4}°", solution.phase_degrees()));

    let i = sig4(solution.i_rms());
    let amp = Ampere::SYMBOL;
    let volt = Volt::SYMBOL;
    steps.push(format!(
        "I_rms = V_rms / Z = {} / {z} = {i} {amp}",
        sig4(solution.v_rms())
    ));
    steps.push(format!(
        "V_R_rms = I_rms · R = {i} · {r} = {} {volt}",
        sig4(solution.v_resistor())
    ));
    steps.push(format!(
        "V_X_rms = I_rms · X = {i} · {x} = {} {volt}",
        sig4(solution.v_reactive())
    ));

    let check = solution.v_resistor().hypot(solution.v_reactive());
    steps.push("");
    steps.push("--- Verification ---");
    steps.push(format!(
        "sqrt(V_R² + V_X²) = sqrt({}² + {}²) = {} {volt}",
        sig4(solution.v_resistor()),
        sig4(solution.v_reactive()),
        sig4(check)
    ));
    steps.push(format!("Compare with V_rms = {} {volt}", sig4(solution.v_rms())));
    if !crate::math::is_close(check, solution.v_rms(), VERIFICATION_TOLERANCE, 0.0) {
        steps.push("  (slight discrepancy from rounding)");
    }

    steps
}
