//! Benchmarks for the vibrato effect.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use warble_dsp::effects::{Vibrato, VibratoConfig};

use crate::BLOCK_SIZES;

pub fn bench_vibrato(c: &mut Criterion) {
    let mut group = c.benchmark_group("dsp/vibrato");

    for &size in BLOCK_SIZES {
        let left: Vec<f32> = (0..size).map(|i| (i as f32 * 0.07).sin()).collect();
        let right: Vec<f32> = (0..size).map(|i| (i as f32 * 0.11).sin()).collect();
        let mut out_l = vec![0.0f32; size];
        let mut out_r = vec![0.0f32; size];

        let mut vibrato = Vibrato::new();
        vibrato
            .init(VibratoConfig {
                sample_rate: 48_000.0,
                num_channels: 2,
                mod_freq_hz: 5.0,
                max_width_sec: 0.01,
                mod_amp_sec: 0.005,
            })
            .unwrap();

        group.bench_with_input(BenchmarkId::new("stereo", size), &size, |b, _| {
            b.iter(|| {
                let inputs = [left.as_slice(), right.as_slice()];
                let mut outputs = [out_l.as_mut_slice(), out_r.as_mut_slice()];
                vibrato
                    .process(black_box(&inputs), black_box(&mut outputs), size)
                    .unwrap();
            })
        });
    }

    group.finish();
}
