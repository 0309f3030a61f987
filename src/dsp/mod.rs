//! Low-level DSP primitives used by the effects and meters.
//!
//! These components are allocation-free on the audio path and realtime-safe:
//! buffers are sized once when an owning effect initializes, and per-sample
//! work is plain arithmetic. They stay focused on the signal math so the
//! higher layers can handle lifecycle, validation, and block plumbing.

/// Circular delay line with fractional-offset interpolated reads.
pub mod delay;
/// Sinusoidal phase-accumulator modulator.
pub mod lfo;
/// Smoothing-coefficient and decibel conversions.
pub mod level;

pub use delay::DelayLine;
pub use level::SmoothingCoeff;
pub use lfo::SineLfo;
