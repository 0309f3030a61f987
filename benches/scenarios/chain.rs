//! Full processing chain: vibrato into the peak meter, the way the demo
//! binary drives a block.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use warble_dsp::effects::{Vibrato, VibratoConfig};
use warble_dsp::meters::Ppm;

use crate::BLOCK_SIZES;

pub fn bench_chain(c: &mut Criterion) {
    let mut group = c.benchmark_group("scenarios/vibrato_into_ppm");

    for &size in BLOCK_SIZES {
        let left: Vec<f32> = (0..size).map(|i| (i as f32 * 0.07).sin() * 0.6).collect();
        let right: Vec<f32> = (0..size).map(|i| (i as f32 * 0.11).sin() * 0.6).collect();
        let mut wet_l = vec![0.0f32; size];
        let mut wet_r = vec![0.0f32; size];
        let mut peaks = [0.0f32; 2];

        let mut vibrato = Vibrato::new();
        vibrato
            .init(VibratoConfig {
                sample_rate: 48_000.0,
                num_channels: 2,
                mod_freq_hz: 5.0,
                max_width_sec: 0.005,
                mod_amp_sec: 0.002,
            })
            .unwrap();
        let mut ppm = Ppm::new();
        ppm.init(48_000.0, 2).unwrap();

        group.bench_with_input(BenchmarkId::new("stereo", size), &size, |b, _| {
            b.iter(|| {
                let inputs = [left.as_slice(), right.as_slice()];
                {
                    let mut outputs = [wet_l.as_mut_slice(), wet_r.as_mut_slice()];
                    vibrato
                        .process(black_box(&inputs), black_box(&mut outputs), size)
                        .unwrap();
                }
                let wet = [wet_l.as_slice(), wet_r.as_slice()];
                ppm.process(black_box(&wet), size, black_box(&mut peaks))
                    .unwrap();
                peaks[0] + peaks[1]
            })
        });
    }

    group.finish();
}
