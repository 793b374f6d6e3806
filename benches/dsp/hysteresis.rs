use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use sigctl::dsp::hysteresis::{Hysteresis, HysteresisConfig};

use crate::BLOCK_SIZES;

pub fn bench_hysteresis(c: &mut Criterion) {
    let mut group = c.benchmark_group("dsp/hysteresis");

    for &size in BLOCK_SIZES {
        // Alternating input flips direction on every call.
        let input: Vec<f64> = (0..size)
            .map(|i| if i % 2 == 0 { 1.0 } else { -1.0 })
            .collect();

        let mut hysteresis = Hysteresis::new(HysteresisConfig {
            sample_rate: 48_000.0,
            lowpass_frequency_up: 2_000.0,
            lowpass_frequency_down: 50.0,
        });
        group.bench_with_input(BenchmarkId::new("alternating", size), &size, |b, _| {
            b.iter(|| {
                let mut last = 0.0;
                for &x in &input {
                    last = hysteresis.process(black_box(x));
                }
                black_box(last)
            })
        });
    }

    group.finish();
}
