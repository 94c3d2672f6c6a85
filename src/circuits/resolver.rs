//! Resolution of the (component, reactance, ω) triple.
//!
//! Any two of the three values determine the third through the topology's
//! relationship (`X_L = ωL`, `X_C = 1/(ωC)`). When all three are supplied the
//! redundant value is checked against the other two instead of being
//! overwritten.

use crate::circuits::kind::CircuitType;
use crate::config::SolverConfig;
use crate::constants::frequency_from_angular;
use crate::errors::{Result, ValidationError};
use crate::math::{relative_difference, Scalar};

/// Partially specified reactance parameters as entered by a user.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ReactanceInput {
    /// Inductance (H) or capacitance (F).
    pub component: Option<Scalar>,
    /// Reactance magnitude in ohms.
    pub reactance: Option<Scalar>,
    /// Angular frequency in rad/s.
    pub omega: Option<Scalar>,
}

impl ReactanceInput {
    /// Bundles the three optional values.
    #[must_use]
    pub const fn new(component: Option<Scalar>, reactance: Option<Scalar>, omega: Option<Scalar>) -> Self {
        Self {
            component,
            reactance,
            omega,
        }
    }

    /// Number of values present.
    #[must_use]
    pub fn supplied(&self) -> usize {
        [self.component, self.reactance, self.omega]
            .iter()
            .filter(|v| v.is_some())
            .count()
    }
}

/// Fully resolved, mutually consistent reactance parameters.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReactanceTriple {
    /// Inductance (H) or capacitance (F).
    pub component: Scalar,
    /// Reactance magnitude in ohms.
    pub reactance: Scalar,
    /// Angular frequency in rad/s.
    pub omega: Scalar,
}

impl ReactanceTriple {
    /// Linear frequency in hertz.
    #[must_use]
    pub fn frequency(&self) -> Scalar {
        frequency_from_angular(self.omega)
    }
}

/// Which member of the triple had to be derived.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Derivation {
    /// Component value computed from reactance and ω.
    Component,
    /// Reactance computed from component value and ω.
    Reactance,
    /// ω computed from component value and reactance.
    Omega,
    /// All three were supplied and agreed.
    Verified,
}

impl Derivation {
    /// Classifies an input that passed resolution.
    #[must_use]
    pub const fn of(input: &ReactanceInput) -> Self {
        match (input.component, input.reactance, input.omega) {
            (None, _, _) => Self::Component,
            (_, None, _) => Self::Reactance,
            (_, _, None) => Self::Omega,
            _ => Self::Verified,
        }
    }
}

/// Resolves the missing member of the triple using the default tolerance.
///
/// # Errors
///
/// Returns [`ValidationError`] when fewer than two values are given, a given
/// value is not a positive finite number, the three given values disagree, or
/// the derived value leaves the positive finite range.
pub fn resolve(
    component: Option<Scalar>,
    reactance: Option<Scalar>,
    omega: Option<Scalar>,
    circuit_type: CircuitType,
) -> Result<ReactanceTriple> {
    resolve_with(
        &SolverConfig::default(),
        ReactanceInput::new(component, reactance, omega),
        circuit_type,
    )
}

/// Resolves the missing member of the triple with an explicit configuration.
///
/// # Errors
///
/// See [`resolve`].
pub fn resolve_with(
    config: &SolverConfig,
    input: ReactanceInput,
    circuit_type: CircuitType,
) -> Result<ReactanceTriple> {
    config.tolerance.validate()?;

    let component_name = circuit_type.component_symbol();
    let reactance_name = circuit_type.reactance_symbol();

    let component = input
        .component
        .map(|v| ValidationError::require_positive(component_name, v))
        .transpose()?;
    let reactance = input
        .reactance
        .map(|v| ValidationError::require_positive(reactance_name, v))
        .transpose()?;
    let omega = input
        .omega
        .map(|v| ValidationError::require_positive("omega", v))
        .transpose()?;

    let triple = match (component, reactance, omega) {
        (Some(component), Some(reactance), Some(omega)) => {
            let expected = derived(reactance_name, circuit_type.reactance(omega, component))?;
            if !config.tolerance.accepts(reactance, expected) {
                return Err(ValidationError::Inconsistent {
                    component: component_name,
                    reactance: reactance_name,
                    supplied: reactance,
                    expected,
                    relative_error: relative_difference(reactance, expected),
                });
            }
            ReactanceTriple {
                component,
                reactance,
                omega,
            }
        }
        (Some(component), None, Some(omega)) => ReactanceTriple {
            component,
            reactance: derived(reactance_name, circuit_type.reactance(omega, component))?,
            omega,
        },
        (None, Some(reactance), Some(omega)) => ReactanceTriple {
            component: derived(component_name, circuit_type.component(reactance, omega))?,
            reactance,
            omega,
        },
        (Some(component), Some(reactance), None) => ReactanceTriple {
            component,
            reactance,
            omega: derived("omega", circuit_type.omega(reactance, component))?,
        },
        _ => {
            return Err(ValidationError::MissingParameters {
                component: component_name,
                reactance: reactance_name,
                supplied: input.supplied(),
            })
        }
    };

    tracing::debug!(
        %circuit_type,
        derivation = ?Derivation::of(&input),
        component = triple.component,
        reactance = triple.reactance,
        omega = triple.omega,
        "resolved reactance parameters"
    );
    Ok(triple)
}

fn derived(name: &'static str, value: Scalar) -> Result<Scalar> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(ValidationError::DerivedOutOfRange { name, value })
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn derives_inductive_reactance() {
        let t = resolve(Some(0.1), None, Some(1000.0), CircuitType::RL).unwrap();
        assert_relative_eq!(t.reactance, 100.0, max_relative = 1.0e-12);
        assert_eq!(t.component, 0.1);
        assert_eq!(t.omega, 1000.0);
    }

    #[test]
    fn derives_capacitance_from_reactance() {
        let t = resolve(None, Some(1000.0), Some(1000.0), CircuitType::RC).unwrap();
        assert_relative_eq!(t.component, 1.0e-6, max_relative = 1.0e-12);
    }

    #[test]
    fn derives_omega_for_both_topologies() {
        let rl = resolve(Some(0.5), Some(50.0), None, CircuitType::RL).unwrap();
        assert_relative_eq!(rl.omega, 100.0, max_relative = 1.0e-12);
        let rc = resolve(Some(1.0e-6), Some(500.0), None, CircuitType::RC).unwrap();
        assert_relative_eq!(rc.omega, 2000.0, max_relative = 1.0e-12);
    }

    #[test]
    fn consistent_triple_is_returned_unchanged() {
        let omega = 377.0;
        let c = 2.2e-6;
        let x = 1.0 / (omega * c);
        let t = resolve(Some(c), Some(x), Some(omega), CircuitType::RC).unwrap();
        assert_eq!(t, ReactanceTriple { component: c, reactance: x, omega });
    }

    #[test]
    fn small_rounding_is_tolerated() {
        let t = resolve(Some(0.1), Some(100.000_01), Some(1000.0), CircuitType::RL);
        assert!(t.is_ok());
    }

    #[test]
    fn inconsistent_triple_is_rejected() {
        let err = resolve(Some(1.0e-6), Some(100.0), Some(1000.0), CircuitType::RC).unwrap_err();
        match err {
            ValidationError::Inconsistent { supplied, expected, .. } => {
                assert_eq!(supplied, 100.0);
                assert_relative_eq!(expected, 1000.0, max_relative = 1.0e-12);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn overflowing_expected_reactance_is_rejected() {
        // ω·L overflows, so X_L would be infinite.
        let err = resolve(Some(1.0e200), Some(5.0), Some(1.0e200), CircuitType::RL).unwrap_err();
        assert!(matches!(err, ValidationError::DerivedOutOfRange { name: "X_L", .. }));
        // ω·C underflows to zero, so X_C would be infinite.
        let err = resolve(Some(1.0e-200), Some(100.0), Some(1.0e-200), CircuitType::RC).unwrap_err();
        assert!(matches!(err, ValidationError::DerivedOutOfRange { name: "X_C", .. }));
    }

    #[test]
    fn underflowing_expected_reactance_is_rejected() {
        // ω·C overflows, so X_C would collapse to zero.
        let err = resolve(Some(1.0e200), Some(1.0e-10), Some(1.0e200), CircuitType::RC).unwrap_err();
        assert!(matches!(err, ValidationError::DerivedOutOfRange { name: "X_C", .. }));
    }

    #[test]
    fn invalid_tolerance_is_reported() {
        let input = ReactanceInput::new(Some(0.1), None, Some(1000.0));
        let config = SolverConfig::with_tolerance(crate::config::Tolerance::new(f64::NAN, 0.0));
        let err = resolve_with(&config, input, CircuitType::RL).unwrap_err();
        assert!(matches!(err, ValidationError::InvalidTolerance { .. }));
        let config = SolverConfig::with_tolerance(crate::config::Tolerance::new(1.0e-6, -1.0));
        assert!(resolve_with(&config, input, CircuitType::RL).is_err());
    }

    #[test]
    fn custom_tolerance_widens_acceptance() {
        let input = ReactanceInput::new(Some(0.1), Some(101.0), Some(1000.0));
        assert!(resolve_with(&SolverConfig::default(), input, CircuitType::RL).is_err());
        let loose = SolverConfig::with_tolerance(crate::config::Tolerance::relative(0.05));
        assert!(resolve_with(&loose, input, CircuitType::RL).is_ok());
    }

    #[test]
    fn single_value_is_insufficient() {
        let err = resolve(Some(0.1), None, None, CircuitType::RL).unwrap_err();
        assert!(matches!(err, ValidationError::MissingParameters { supplied: 1, .. }));
        assert!(err.to_string().contains("at least two"));
        let err = resolve(None, None, None, CircuitType::RC).unwrap_err();
        assert!(matches!(err, ValidationError::MissingParameters { supplied: 0, .. }));
    }

    #[test]
    fn rejects_non_positive_and_non_finite() {
        assert!(matches!(
            resolve(Some(-1.0), None, Some(1.0), CircuitType::RL),
            Err(ValidationError::NonPositive { name: "L", .. })
        ));
        assert!(matches!(
            resolve(Some(1.0e-6), Some(0.0), None, CircuitType::RC),
            Err(ValidationError::NonPositive { name: "X_C", .. })
        ));
        assert!(matches!(
            resolve(Some(1.0), None, Some(f64::INFINITY), CircuitType::RL),
            Err(ValidationError::NonFinite { name: "omega", .. })
        ));
    }

    #[test]
    fn overflowing_derivation_is_rejected() {
        let err = resolve(Some(1.0e-300), Some(1.0e300), None, CircuitType::RL).unwrap_err();
        assert!(matches!(err, ValidationError::DerivedOutOfRange { name: "omega", .. }));
    }

    #[test]
    fn derivation_tracks_missing_member() {
        assert_eq!(Derivation::of(&ReactanceInput::new(None, Some(1.0), Some(1.0))), Derivation::Component);
        assert_eq!(Derivation::of(&ReactanceInput::new(Some(1.0), None, Some(1.0))), Derivation::Reactance);
        assert_eq!(Derivation::of(&ReactanceInput::new(Some(1.0), Some(1.0), None)), Derivation::Omega);
        assert_eq!(Derivation::of(&ReactanceInput::new(Some(1.0), Some(1.0), Some(1.0))), Derivation::Verified);
    }
}
