use log::debug;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::dsp::coefficients::OnePoleCoefficients;
use crate::processor::Processor;
use crate::units::NORMALISED_SAMPLE_RATE;

/*
One-Pole Lowpass
================

The simplest smoothing filter there is. Each output is a weighted average of
the new input and the previous output:

    output = input * input_scale + last * feedback_scale
    feedback_scale = 1 - input_scale

Vocabulary
----------

  input_scale     How much of the new input gets through on each call.
                  1.0 = no smoothing, 0.0 = output frozen.

  feedback_scale  How much of the previous output is retained.

  cutoff          The frequency that sets input_scale. Given in Hertz with a
                  real sample rate, or as a fraction of Nyquist with a
                  sample rate of 2 (the default).


Step Response
-------------

Feeding a constant 1.0 after a 0.0 with input_scale = 0.9:

    call   output
    0      0.0        (first call: seeded, passes through)
    1      0.9
    2      0.99
    3      0.999

The distance to the target shrinks by feedback_scale on every call, so the
output approaches the target monotonically and never overshoots.


Seeding
-------

There is no previous output before the first call. Instead of assuming 0.0
(which would make every filter ramp up from silence), the first input seeds
the history, so the first output equals the first input. `reset` goes back
to that unseeded state.

Changing the cutoff with `set` only re-derives the weights. The history is
kept, so smoothing carries on without a jump.
*/

/// Configuration of a [`Lowpass`].
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LowpassConfig {
    /// Sample rate in Hz, or 2 for a normalised cutoff.
    pub sample_rate: f64,
    pub lowpass_frequency: f64,
}

impl Default for LowpassConfig {
    fn default() -> Self {
        Self {
            sample_rate: NORMALISED_SAMPLE_RATE,
            lowpass_frequency: 0.5,
        }
    }
}

/// Partial update for a [`Lowpass`].
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct LowpassUpdate {
    pub sample_rate: Option<f64>,
    pub lowpass_frequency: Option<f64>,
}

impl LowpassUpdate {
    pub fn sample_rate(mut self, sample_rate: f64) -> Self {
        self.sample_rate = Some(sample_rate);
        self
    }

    pub fn lowpass_frequency(mut self, frequency: f64) -> Self {
        self.lowpass_frequency = Some(frequency);
        self
    }
}

/// One-pole lowpass smoother.
#[derive(Debug, Clone)]
pub struct Lowpass {
    config: LowpassConfig,
    coefficients: OnePoleCoefficients,
    output_value_last: Option<f64>,
}

impl Lowpass {
    pub fn new(config: LowpassConfig) -> Self {
        let mut lowpass = Self {
            config,
            coefficients: OnePoleCoefficients::default(),
            output_value_last: None,
        };
        lowpass.update_coefficients();
        lowpass
    }

    pub fn config(&self) -> &LowpassConfig {
        &self.config
    }

    /// Merge `update` into the configuration and re-derive the weights.
    ///
    /// The filter history is kept.
    pub fn set(&mut self, update: LowpassUpdate) {
        if let Some(sample_rate) = update.sample_rate {
            self.config.sample_rate = sample_rate;
        }
        if let Some(frequency) = update.lowpass_frequency {
            self.config.lowpass_frequency = frequency;
        }
        self.update_coefficients();
    }

    #[inline]
    pub fn process(&mut self, input: f64) -> f64 {
        let last = *self.output_value_last.get_or_insert(input);
        let output = self.coefficients.apply(input, last);
        self.output_value_last = Some(output);
        output
    }

    /// Forget the history; the next input passes through unchanged.
    pub fn reset(&mut self) {
        self.output_value_last = None;
    }

    pub fn input_scale(&self) -> f64 {
        self.coefficients.input_scale
    }

    pub fn feedback_scale(&self) -> f64 {
        self.coefficients.feedback_scale
    }

    /// Last output, or `None` before the first call after construction or reset.
    pub fn last_output(&self) -> Option<f64> {
        self.output_value_last
    }

    fn update_coefficients(&mut self) {
        self.coefficients = OnePoleCoefficients::from_cutoff(
            self.config.lowpass_frequency,
            self.config.sample_rate,
        );
        debug!(
            "lowpass cutoff {} @ {}: input scale {}",
            self.config.lowpass_frequency, self.config.sample_rate, self.coefficients.input_scale
        );
    }
}

impl Default for Lowpass {
    fn default() -> Self {
        Self::new(LowpassConfig::default())
    }
}

impl From<LowpassConfig> for Lowpass {
    fn from(config: LowpassConfig) -> Self {
        Self::new(config)
    }
}

impl Processor for Lowpass {
    #[inline]
    fn process(&mut self, value: f64) -> f64 {
        Lowpass::process(self, value)
    }

    fn reset(&mut self) {
        Lowpass::reset(self)
    }
}
