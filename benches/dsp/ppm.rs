//! Benchmarks for the peak programme meter.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use warble_dsp::meters::Ppm;

use crate::BLOCK_SIZES;

pub fn bench_ppm(c: &mut Criterion) {
    let mut group = c.benchmark_group("dsp/ppm");

    for &size in BLOCK_SIZES {
        let left: Vec<f32> = (0..size).map(|i| (i as f32 * 0.07).sin() * 0.6).collect();
        let right: Vec<f32> = (0..size).map(|i| (i as f32 * 0.11).sin() * 0.6).collect();
        let mut peaks = [0.0f32; 2];

        let mut ppm = Ppm::new();
        ppm.init(48_000.0, 2).unwrap();

        group.bench_with_input(BenchmarkId::new("stereo", size), &size, |b, _| {
            b.iter(|| {
                let inputs = [left.as_slice(), right.as_slice()];
                ppm.process(black_box(&inputs), size, black_box(&mut peaks))
                    .unwrap();
                peaks[0] + peaks[1]
            })
        });
    }

    group.finish();
}
