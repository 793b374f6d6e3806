use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use sigctl::dsp::lowpass::{Lowpass, LowpassConfig};

use crate::{ramp, BLOCK_SIZES};

pub fn bench_lowpass(c: &mut Criterion) {
    let mut group = c.benchmark_group("dsp/lowpass");

    for &size in BLOCK_SIZES {
        let input = ramp(size);

        let mut lowpass = Lowpass::new(LowpassConfig {
            sample_rate: 48_000.0,
            lowpass_frequency: 1_000.0,
        });
        group.bench_with_input(BenchmarkId::new("hertz", size), &size, |b, _| {
            b.iter(|| {
                let mut last = 0.0;
                for &x in &input {
                    last = lowpass.process(black_box(x));
                }
                black_box(last)
            })
        });

        // Seeding path: reset before every block.
        let mut lowpass = Lowpass::default();
        group.bench_with_input(BenchmarkId::new("reset_each_block", size), &size, |b, _| {
            b.iter(|| {
                lowpass.reset();
                let mut last = 0.0;
                for &x in &input {
                    last = lowpass.process(black_box(x));
                }
                black_box(last)
            })
        });
    }

    group.finish();
}
