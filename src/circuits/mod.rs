//! Series RL/RC circuit model: topology table, parameter resolution and solver.

/// Circuit topology tag and per-topology formulas.
pub mod kind;
/// Resolution of the (component, reactance, ω) triple.
pub mod resolver;
/// Steady-state solver and solution record.
pub mod solver;
/// Human-readable calculation transcript.
pub mod steps;

pub use kind::{CircuitType, TopologyRules};
pub use resolver::{resolve, resolve_with, Derivation, ReactanceInput, ReactanceTriple};
pub use solver::{solve, solve_resolved, solve_resolved_with, solve_with, CircuitSolution};
pub use steps::{calculation_steps, CalculationSteps};
