#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![warn(clippy::all, clippy::cargo, clippy::nursery, missing_docs)]
#![doc = include_str!("../README.md")]

/// Numeric constants and frequency conversions.
pub mod constants;
/// Shared scalar aliases and comparison helpers.
pub mod math;
/// Strongly typed unit helpers and SI prefix parsing.
pub mod units;
/// Tolerance configuration for the resolver and solver.
pub mod config;
/// Series RL/RC resolution and solving.
pub mod circuits;
/// Frequency grids and swept solutions.
pub mod sweep;
/// Waveform and phasor data for plotting front ends.
pub mod visual;
/// Error types shared between modules.
pub mod errors;

/// Common exports for downstream crates.
pub mod prelude;

pub use circuits::{resolve, solve, CircuitSolution, CircuitType, ReactanceTriple};
pub use errors::{Result, ValidationError};
