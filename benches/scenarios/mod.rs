//! End-to-end scenario benchmarks.

mod chain;

pub use chain::bench_chain;
