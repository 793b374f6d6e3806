//! Range mapping with linear, logarithmic and exponential curves.

use std::fmt;
use std::str::FromStr;

use log::{debug, warn};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::processor::Processor;

/*
Range Scaling
=============

A scaler maps a value from an input interval onto an output interval:

    input_start ... input_end   →   output_start ... output_end

Both intervals may run in either direction (start > end inverts the map).
With t = (input - input_start) / input_range, the curves are:

  linear          output_start + output_range * t

  logarithmic     output_start + output_range * ln((base - 1) * t + 1) / ln(base)
                  Rises quickly, then flattens. Fine control at the top.

  exponential     output_start + output_range * (base^t - 1) / (base - 1)
                  Rises slowly, then steepens. Fine control at the bottom.

Logarithmic and exponential with the same base are inverses of each other,
so a log scaler A → B followed by an exp scaler B → A gives the input back.

A base of 1 makes both curves degenerate (0 / 0), so base 1 always maps
linearly. Negative bases are clamped to 0.

Example: MIDI note to frequency
-------------------------------

    input 69 ... 81, output 440 ... 880, exponential, base 2

    69 → 440
    75 → 622.25   (half an octave)
    81 → 880
    93 → 1760     (clip off: keeps extrapolating)

Zero-width Ranges
-----------------

If either range has zero width the curve cannot be evaluated. The scaler
then acts as a step: output_start up to and including the lower input
bound, output_end above it.

The output is never clipped. `clip` only clamps the input into the input
interval before mapping, which bounds monotonic curves by their endpoints.
Out-of-domain logarithmic inputs produce NaN.
*/

/// Curve used by a [`Scaler`].
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Curve {
    #[default]
    #[cfg_attr(feature = "serde", serde(alias = "lin"))]
    Linear,
    #[cfg_attr(feature = "serde", serde(alias = "log"))]
    Logarithmic,
    #[cfg_attr(feature = "serde", serde(alias = "exp"))]
    Exponential,
}

impl Curve {
    pub fn as_str(&self) -> &'static str {
        match self {
            Curve::Linear => "linear",
            Curve::Logarithmic => "logarithmic",
            Curve::Exponential => "exponential",
        }
    }
}

impl fmt::Display for Curve {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a curve name is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown curve `{0}`, expected linear, logarithmic, exponential (or lin, log, exp)")]
pub struct ParseCurveError(pub String);

impl FromStr for Curve {
    type Err = ParseCurveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "lin" | "linear" => Ok(Curve::Linear),
            "log" | "logarithmic" => Ok(Curve::Logarithmic),
            "exp" | "exponential" => Ok(Curve::Exponential),
            _ => Err(ParseCurveError(s.to_string())),
        }
    }
}

/// Configuration of a [`Scaler`].
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScalerConfig {
    pub input_start: f64,
    pub input_end: f64,
    pub output_start: f64,
    pub output_end: f64,
    /// Clamp the input into the input interval before mapping.
    pub clip: bool,
    pub curve: Curve,
    /// Curve base. Clamped to 0 when negative; 1 maps linearly.
    pub base: f64,
}

impl Default for ScalerConfig {
    fn default() -> Self {
        Self {
            input_start: 0.0,
            input_end: 1.0,
            output_start: 0.0,
            output_end: 1.0,
            clip: false,
            curve: Curve::Linear,
            base: 1.0,
        }
    }
}

/// Partial update for a [`Scaler`].
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ScalerUpdate {
    pub input_start: Option<f64>,
    pub input_end: Option<f64>,
    pub output_start: Option<f64>,
    pub output_end: Option<f64>,
    pub clip: Option<bool>,
    pub curve: Option<Curve>,
    pub base: Option<f64>,
}

impl ScalerUpdate {
    pub fn input(mut self, start: f64, end: f64) -> Self {
        self.input_start = Some(start);
        self.input_end = Some(end);
        self
    }

    pub fn output(mut self, start: f64, end: f64) -> Self {
        self.output_start = Some(start);
        self.output_end = Some(end);
        self
    }

    pub fn input_start(mut self, value: f64) -> Self {
        self.input_start = Some(value);
        self
    }

    pub fn input_end(mut self, value: f64) -> Self {
        self.input_end = Some(value);
        self
    }

    pub fn output_start(mut self, value: f64) -> Self {
        self.output_start = Some(value);
        self
    }

    pub fn output_end(mut self, value: f64) -> Self {
        self.output_end = Some(value);
        self
    }

    pub fn clip(mut self, clip: bool) -> Self {
        self.clip = Some(clip);
        self
    }

    pub fn curve(mut self, curve: Curve) -> Self {
        self.curve = Some(curve);
        self
    }

    pub fn base(mut self, base: f64) -> Self {
        self.base = Some(base);
        self
    }
}

/// Maps values between two intervals. Stateless between calls.
#[derive(Debug, Clone)]
pub struct Scaler {
    config: ScalerConfig,
    input_range: f64,
    output_range: f64,
    input_min: f64,
    input_max: f64,
    log_base: f64,
}

impl Scaler {
    pub fn new(config: ScalerConfig) -> Self {
        let mut scaler = Self {
            config,
            input_range: 0.0,
            output_range: 0.0,
            input_min: 0.0,
            input_max: 0.0,
            log_base: 0.0,
        };
        scaler.derive();
        scaler
    }

    pub fn config(&self) -> &ScalerConfig {
        &self.config
    }

    pub fn set(&mut self, update: ScalerUpdate) {
        let config = &mut self.config;
        if let Some(v) = update.input_start {
            config.input_start = v;
        }
        if let Some(v) = update.input_end {
            config.input_end = v;
        }
        if let Some(v) = update.output_start {
            config.output_start = v;
        }
        if let Some(v) = update.output_end {
            config.output_end = v;
        }
        if let Some(clip) = update.clip {
            config.clip = clip;
        }
        if let Some(curve) = update.curve {
            config.curve = curve;
        }
        if let Some(base) = update.base {
            config.base = base;
        }
        self.derive();
    }

    /// A scaler mapping the output interval back onto the input interval.
    ///
    /// Logarithmic and exponential curves swap so the composition of `self`
    /// and its inverse is the identity over the input interval.
    pub fn inverse(&self) -> Scaler {
        let c = &self.config;
        let curve = match c.curve {
            Curve::Linear => Curve::Linear,
            Curve::Logarithmic => Curve::Exponential,
            Curve::Exponential => Curve::Logarithmic,
        };
        Scaler::new(ScalerConfig {
            input_start: c.output_start,
            input_end: c.output_end,
            output_start: c.input_start,
            output_end: c.input_end,
            clip: c.clip,
            curve,
            base: c.base,
        })
    }

    #[inline]
    pub fn process(&self, input: f64) -> f64 {
        let c = &self.config;

        if self.input_range == 0.0 || self.output_range == 0.0 {
            return if input <= self.input_min {
                c.output_start
            } else {
                c.output_end
            };
        }

        let input = if c.clip {
            if input < self.input_min {
                self.input_min
            } else if input > self.input_max {
                self.input_max
            } else {
                input
            }
        } else {
            input
        };

        let t = (input - c.input_start) / self.input_range;

        if c.base == 1.0 || c.curve == Curve::Linear {
            c.output_start + self.output_range * t
        } else if c.curve == Curve::Logarithmic {
            c.output_start + self.output_range * ((c.base - 1.0) * t + 1.0).ln() / self.log_base
        } else {
            c.output_start + self.output_range * ((self.log_base * t).exp() - 1.0) / (c.base - 1.0)
        }
    }

    fn derive(&mut self) {
        if self.config.base < 0.0 {
            warn!("scaler base {} is negative, clamped to 0", self.config.base);
            self.config.base = 0.0;
        }

        let c = &self.config;
        self.input_range = c.input_end - c.input_start;
        self.output_range = c.output_end - c.output_start;
        self.input_min = c.input_start.min(c.input_end);
        self.input_max = c.input_start.max(c.input_end);
        self.log_base = c.base.ln();

        debug!(
            "scaler [{}, {}] -> [{}, {}] {} base {} clip {}",
            c.input_start, c.input_end, c.output_start, c.output_end, c.curve, c.base, c.clip
        );
    }
}

impl Default for Scaler {
    fn default() -> Self {
        Self::new(ScalerConfig::default())
    }
}

impl From<ScalerConfig> for Scaler {
    fn from(config: ScalerConfig) -> Self {
        Self::new(config)
    }
}

impl Processor for Scaler {
    #[inline]
    fn process(&mut self, value: f64) -> f64 {
        Scaler::process(self, value)
    }
}
