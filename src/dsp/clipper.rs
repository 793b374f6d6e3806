//! Hard clipper for control values.

use log::{debug, warn};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::processor::Processor;

/// Bounds of a [`Clipper`].
///
/// Bounds default to an open interval, so a default clipper is the identity.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClipperConfig {
    pub min: f64,
    pub max: f64,
}

impl Default for ClipperConfig {
    fn default() -> Self {
        Self {
            min: f64::NEG_INFINITY,
            max: f64::INFINITY,
        }
    }
}

/// Partial update for a [`Clipper`]. `None` fields keep their current value.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ClipperUpdate {
    pub min: Option<f64>,
    pub max: Option<f64>,
}

impl ClipperUpdate {
    pub fn min(mut self, min: f64) -> Self {
        self.min = Some(min);
        self
    }

    pub fn max(mut self, max: f64) -> Self {
        self.max = Some(max);
        self
    }
}

/// Clamps every value into `[min, max]`.
///
/// The clamp is `min(max, max(min, x))` written with plain comparisons, so a
/// NaN input comes out as NaN. Inverted bounds are not rejected: with
/// `min > max` every value comes out as `max`.
#[derive(Debug, Clone, Default)]
pub struct Clipper {
    config: ClipperConfig,
}

impl Clipper {
    pub fn new(config: ClipperConfig) -> Self {
        let clipper = Self { config };
        clipper.check_bounds();
        clipper
    }

    pub fn config(&self) -> &ClipperConfig {
        &self.config
    }

    pub fn set(&mut self, update: ClipperUpdate) {
        if let Some(min) = update.min {
            self.config.min = min;
        }
        if let Some(max) = update.max {
            self.config.max = max;
        }
        debug!("clipper bounds [{}, {}]", self.config.min, self.config.max);
        self.check_bounds();
    }

    #[inline]
    pub fn process(&self, value: f64) -> f64 {
        let ClipperConfig { min, max } = self.config;
        let lower = if value < min { min } else { value };
        if lower > max {
            max
        } else {
            lower
        }
    }

    fn check_bounds(&self) {
        if self.config.min > self.config.max {
            warn!(
                "clipper min {} is above max {}, output is pinned to max",
                self.config.min, self.config.max
            );
        }
    }
}

impl From<ClipperConfig> for Clipper {
    fn from(config: ClipperConfig) -> Self {
        Self::new(config)
    }
}

impl Processor for Clipper {
    #[inline]
    fn process(&mut self, value: f64) -> f64 {
        Clipper::process(self, value)
    }
}
