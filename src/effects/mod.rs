//! Block-processing audio effects built on the `dsp` primitives.

/// Delay-modulation vibrato.
pub mod vibrato;

pub use vibrato::{Vibrato, VibratoConfig};
