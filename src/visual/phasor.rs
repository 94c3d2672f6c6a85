//! RMS phasor diagram referenced to the source voltage.

use crate::circuits::solver::CircuitSolution;
use crate::math::{phasor, CScalar, Scalar};

/// A single rotating vector, frozen at `t = 0`.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Phasor {
    /// RMS magnitude.
    pub magnitude: Scalar,
    /// Angle in radians relative to the source voltage.
    pub angle: Scalar,
}

impl Phasor {
    /// Angle in degrees.
    #[must_use]
    pub fn angle_degrees(&self) -> Scalar {
        self.angle.to_degrees()
    }

    /// Complex value `magnitude · e^(j·angle)`.
    #[must_use]
    pub fn to_complex(&self) -> CScalar {
        phasor(self.magnitude, self.angle)
    }
}

/// Source voltage, current and element voltages as phasors.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhasorDiagram {
    /// `V_S`, the reference at 0 rad.
    pub source: Phasor,
    /// `I`, at `−φ`.
    pub current: Phasor,
    /// `V_R`, in phase with the current.
    pub resistor: Phasor,
    /// `V_L` at `−φ + π/2` or `V_C` at `−φ − π/2`.
    pub reactive: Phasor,
}

impl PhasorDiagram {
    /// Largest magnitude in the diagram, for scaling plot axes.
    #[must_use]
    pub fn max_magnitude(&self) -> Scalar {
        [self.source, self.current, self.resistor, self.reactive]
            .iter()
            .map(|p| p.magnitude)
            .fold(0.0, Scalar::max)
    }
}

/// Builds the phasor diagram of `solution`.
#[must_use]
pub fn phasor_diagram(solution: &CircuitSolution) -> PhasorDiagram {
    let current_angle = -solution.phase();
    let lead = solution.circuit_type().rules().reactive_voltage_lead;
    PhasorDiagram {
        source: Phasor {
            magnitude: solution.v_rms(),
            angle: 0.0,
        },
        current: Phasor {
            magnitude: solution.i_rms(),
            angle: current_angle,
        },
        resistor: Phasor {
            magnitude: solution.v_resistor(),
            angle: current_angle,
        },
        reactive: Phasor {
            magnitude: solution.v_reactive(),
            angle: current_angle + lead,
        },
    }
}
