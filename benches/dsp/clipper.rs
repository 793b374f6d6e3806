use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use sigctl::dsp::clipper::{Clipper, ClipperConfig};

use crate::{ramp, BLOCK_SIZES};

pub fn bench_clipper(c: &mut Criterion) {
    let mut group = c.benchmark_group("dsp/clipper");
    let clipper = Clipper::new(ClipperConfig {
        min: -0.5,
        max: 0.5,
    });

    for &size in BLOCK_SIZES {
        let input = ramp(size);
        group.bench_with_input(BenchmarkId::new("clip", size), &size, |b, _| {
            b.iter(|| {
                let mut acc = 0.0;
                for &x in &input {
                    acc += clipper.process(black_box(x));
                }
                black_box(acc)
            })
        });
    }

    group.finish();
}
