//! Benchmarks for the low-level DSP units.

mod delay;
mod ppm;
mod vibrato;

pub use delay::bench_delay;
pub use ppm::bench_ppm;
pub use vibrato::bench_vibrato;
