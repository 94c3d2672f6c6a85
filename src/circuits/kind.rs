//! Circuit topology tag and its per-topology lookup table.

use std::f64::consts::FRAC_PI_2;
use std::fmt;
use std::str::FromStr;

use crate::errors::ValidationError;
use crate::math::Scalar;

/// Series topology with a single reactive element.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CircuitType {
    /// Resistor in series with an inductor (`X_L = ωL`).
    RL,
    /// Resistor in series with a capacitor (`X_C = 1/(ωC)`).
    RC,
}

/// Formulas and conventions for one topology.
#[derive(Debug, Clone, Copy)]
pub struct TopologyRules {
    /// Reactance magnitude from `(omega, component)`.
    pub reactance: fn(Scalar, Scalar) -> Scalar,
    /// Component value from `(reactance, omega)`.
    pub component: fn(Scalar, Scalar) -> Scalar,
    /// Angular frequency from `(reactance, component)`.
    pub omega: fn(Scalar, Scalar) -> Scalar,
    /// Sign applied to the reactance in `Z = R + j·sign·X`.
    pub reactance_sign: Scalar,
    /// Phase of the reactive element's voltage relative to the current.
    pub reactive_voltage_lead: Scalar,
    /// Component symbol.
    pub component_symbol: &'static str,
    /// Reactance symbol.
    pub reactance_symbol: &'static str,
    /// Base unit of the component value.
    pub component_unit: &'static str,
}

const RL_RULES: TopologyRules = TopologyRules {
    reactance: |omega, inductance| omega * inductance,
    component: |reactance, omega| reactance / omega,
    omega: |reactance, inductance| reactance / inductance,
    reactance_sign: 1.0,
    reactive_voltage_lead: FRAC_PI_2,
    component_symbol: "L",
    reactance_symbol: "X_L",
    component_unit: "H",
};

const RC_RULES: TopologyRules = TopologyRules {
    reactance: |omega, capacitance| 1.0 / (omega * capacitance),
    component: |reactance, omega| 1.0 / (omega * reactance),
    omega: |reactance, capacitance| 1.0 / (capacitance * reactance),
    reactance_sign: -1.0,
    reactive_voltage_lead: -FRAC_PI_2,
    component_symbol: "C",
    reactance_symbol: "X_C",
    component_unit: "F",
};

impl CircuitType {
    /// Both topologies, in display order.
    pub const ALL: [Self; 2] = [Self::RL, Self::RC];

    /// Returns the lookup-table entry for this topology.
    #[must_use]
    pub const fn rules(self) -> &'static TopologyRules {
        match self {
            Self::RL => &RL_RULES,
            Self::RC => &RC_RULES,
        }
    }

    /// Reactance magnitude of the element with value `component` at `omega`.
    #[must_use]
    pub fn reactance(self, omega: Scalar, component: Scalar) -> Scalar {
        (self.rules().reactance)(omega, component)
    }

    /// Component value that produces `reactance` at `omega`.
    #[must_use]
    pub fn component(self, reactance: Scalar, omega: Scalar) -> Scalar {
        (self.rules().component)(reactance, omega)
    }

    /// Angular frequency at which `component` has `reactance`.
    #[must_use]
    pub fn omega(self, reactance: Scalar, component: Scalar) -> Scalar {
        (self.rules().omega)(reactance, component)
    }

    /// `L` or `C`.
    #[must_use]
    pub const fn component_symbol(self) -> &'static str {
        self.rules().component_symbol
    }

    /// `X_L` or `X_C`.
    #[must_use]
    pub const fn reactance_symbol(self) -> &'static str {
        self.rules().reactance_symbol
    }

    /// `H` or `F`.
    #[must_use]
    pub const fn component_unit(self) -> &'static str {
        self.rules().component_unit
    }

    /// Short tag used for parsing and display.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::RL => "RL",
            Self::RC => "RC",
        }
    }
}

impl fmt::Display for CircuitType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CircuitType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "RL" => Ok(Self::RL),
            "RC" => Ok(Self::RC),
            _ => Err(ValidationError::InvalidCircuitType(s.to_owned())),
        }
    }
}
