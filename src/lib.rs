pub mod dsp; // Clipper, lowpass, hysteresis, scaler
pub mod processor; // Serial composition
pub mod units; // Frequency conversion

pub use dsp::{
    Clipper, ClipperConfig, ClipperUpdate, Curve, Direction, Hysteresis, HysteresisConfig,
    HysteresisUpdate, Lowpass, LowpassConfig, LowpassUpdate, ParseCurveError, Scaler,
    ScalerConfig, ScalerUpdate,
};
pub use processor::{Processor, ProcessorExt, Through};
