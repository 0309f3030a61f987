//! Benchmarks for delay line reads and writes.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use warble_dsp::dsp::DelayLine;

use crate::BLOCK_SIZES;

pub fn bench_delay(c: &mut Criterion) {
    let mut group = c.benchmark_group("dsp/delay");

    for &size in BLOCK_SIZES {
        let input: Vec<f32> = (0..size).map(|i| (i as f32 * 0.1).sin()).collect();

        // Write-then-read at a fixed integer delay.
        let mut line = DelayLine::new(4800).unwrap();
        group.bench_with_input(BenchmarkId::new("fixed_read", size), &size, |b, _| {
            b.iter(|| {
                let mut sum = 0.0f32;
                for &sample in &input {
                    line.write(black_box(sample));
                    sum += line.read(black_box(480.0));
                }
                sum
            })
        });

        // Modulated fractional delay, the vibrato access pattern.
        let mut line = DelayLine::new(4800).unwrap();
        group.bench_with_input(BenchmarkId::new("modulated_read", size), &size, |b, _| {
            b.iter(|| {
                let mut sum = 0.0f32;
                for (i, &sample) in input.iter().enumerate() {
                    let delay = 480.0 + (i as f32 * 0.1).sin() * 48.0;
                    line.write(black_box(sample));
                    sum += line.read(black_box(delay));
                }
                sum
            })
        });
    }

    group.finish();
}
