//! Plot-ready data derived from a solved circuit. Nothing here renders.

/// RMS phasor diagrams.
pub mod phasor;
/// Sampled time-domain waveforms.
pub mod waveform;

pub use phasor::{phasor_diagram, Phasor, PhasorDiagram};
pub use waveform::{waveforms, WaveformConfig, Waveforms};
