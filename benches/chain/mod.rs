//! Benchmarks for composed chains.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use sigctl::{
    Clipper, ClipperConfig, Curve, Hysteresis, HysteresisConfig, Processor, ProcessorExt,
    Scaler, ScalerConfig,
};

use crate::{ramp, BLOCK_SIZES};

pub fn bench_chain(c: &mut Criterion) {
    let mut group = c.benchmark_group("chain");

    for &size in BLOCK_SIZES {
        let input = ramp(size);

        // Scaler -> Hysteresis -> Clipper, the typical controller path.
        let mut chain = Scaler::new(ScalerConfig {
            input_start: -1.0,
            input_end: 1.0,
            output_start: 0.0,
            output_end: 1.0,
            curve: Curve::Exponential,
            base: 10.0,
            ..Default::default()
        })
        .through(Hysteresis::new(HysteresisConfig {
            sample_rate: 48_000.0,
            lowpass_frequency_up: 4_000.0,
            lowpass_frequency_down: 100.0,
        }))
        .through(Clipper::new(ClipperConfig { min: 0.0, max: 1.0 }));

        group.bench_with_input(BenchmarkId::new("scale_smooth_clip", size), &size, |b, _| {
            b.iter(|| {
                let mut last = 0.0;
                for &x in &input {
                    last = chain.process(black_box(x));
                }
                black_box(last)
            })
        });

        let mut boxed: Box<dyn Processor> = Box::new(
            Scaler::default().through(Clipper::new(ClipperConfig { min: 0.0, max: 1.0 })),
        );
        group.bench_with_input(BenchmarkId::new("boxed", size), &size, |b, _| {
            b.iter(|| {
                let mut last = 0.0;
                for &x in &input {
                    last = boxed.process(black_box(x));
                }
                black_box(last)
            })
        });
    }

    group.finish();
}
