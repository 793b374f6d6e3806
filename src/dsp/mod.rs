//! Single-sample control primitives.
//!
//! Every component takes one value per call and returns one value, with no
//! allocation and constant work, so they can run at audio or control rate.
//! They never call each other; chain them with
//! [`ProcessorExt::through`](crate::processor::ProcessorExt::through).

/// Hard clamp into a closed interval.
pub mod clipper;
/// Shared one-pole weights.
pub mod coefficients;
/// One-pole smoother with separate rise and fall cutoffs.
pub mod hysteresis;
/// One-pole smoother.
pub mod lowpass;
/// Linear, logarithmic and exponential range mapping.
pub mod scaler;

pub use clipper::{Clipper, ClipperConfig, ClipperUpdate};
pub use coefficients::OnePoleCoefficients;
pub use hysteresis::{Direction, Hysteresis, HysteresisConfig, HysteresisUpdate};
pub use lowpass::{Lowpass, LowpassConfig, LowpassUpdate};
pub use scaler::{Curve, ParseCurveError, Scaler, ScalerConfig, ScalerUpdate};
