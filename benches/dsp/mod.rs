//! Benchmarks for individual primitives.

mod clipper;
mod hysteresis;
mod lowpass;
mod scaler;

pub use clipper::bench_clipper;
pub use hysteresis::bench_hysteresis;
pub use lowpass::bench_lowpass;
pub use scaler::bench_scaler;
