use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use sigctl::dsp::scaler::{Curve, Scaler, ScalerConfig};

use crate::{ramp, BLOCK_SIZES};

pub fn bench_scaler(c: &mut Criterion) {
    let mut group = c.benchmark_group("dsp/scaler");

    let curves = [
        ("linear", Curve::Linear, 1.0),
        ("logarithmic", Curve::Logarithmic, 100.0),
        ("exponential", Curve::Exponential, 100.0),
    ];

    for &size in BLOCK_SIZES {
        let input = ramp(size);

        for (name, curve, base) in curves {
            let scaler = Scaler::new(ScalerConfig {
                input_start: -1.0,
                input_end: 1.0,
                output_start: 20.0,
                output_end: 20_000.0,
                clip: true,
                curve,
                base,
            });
            group.bench_with_input(BenchmarkId::new(name, size), &size, |b, _| {
                b.iter(|| {
                    let mut acc = 0.0;
                    for &x in &input {
                        acc += scaler.process(black_box(x));
                    }
                    black_box(acc)
                })
            });
        }
    }

    group.finish();
}
