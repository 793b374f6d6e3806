use log::debug;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::dsp::coefficients::OnePoleCoefficients;
use crate::processor::Processor;
use crate::units::NORMALISED_SAMPLE_RATE;

/*
Hysteresis Smoother
===================

A one-pole lowpass with separate rise and fall speeds. Useful for meters and
envelope followers: fast attack, slow release (or the other way round).

    rising  (input >  last)   uses the "up" cutoff
    falling (input <= last)   uses the "down" cutoff

Equality counts as falling. With a constant input the output settles and
stays on the down weights.

    up = 0.9, down = 0.1 (normalised)

    input   1     1     1     0     0     0
    output  0.9   0.99  0.999 0.899 0.809 0.728  (approx.)
            └ fast rise ┘     └── slow fall ───┘

Both weight pairs act on the same history, so switching direction, or
changing either cutoff between calls, never makes the output jump.
*/

/// Which cutoff the last call used.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
}

/// Configuration of a [`Hysteresis`].
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HysteresisConfig {
    /// Sample rate in Hz, or 2 for normalised cutoffs.
    pub sample_rate: f64,
    /// Cutoff applied while the input is above the last output.
    pub lowpass_frequency_up: f64,
    /// Cutoff applied otherwise.
    pub lowpass_frequency_down: f64,
}

impl Default for HysteresisConfig {
    fn default() -> Self {
        Self {
            sample_rate: NORMALISED_SAMPLE_RATE,
            lowpass_frequency_up: 0.5,
            lowpass_frequency_down: 0.5,
        }
    }
}

/// Partial update for a [`Hysteresis`].
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct HysteresisUpdate {
    pub sample_rate: Option<f64>,
    pub lowpass_frequency_up: Option<f64>,
    pub lowpass_frequency_down: Option<f64>,
}

impl HysteresisUpdate {
    pub fn sample_rate(mut self, sample_rate: f64) -> Self {
        self.sample_rate = Some(sample_rate);
        self
    }

    pub fn lowpass_frequency_up(mut self, frequency: f64) -> Self {
        self.lowpass_frequency_up = Some(frequency);
        self
    }

    pub fn lowpass_frequency_down(mut self, frequency: f64) -> Self {
        self.lowpass_frequency_down = Some(frequency);
        self
    }
}

/// One-pole smoother with direction-dependent cutoff.
#[derive(Debug, Clone)]
pub struct Hysteresis {
    config: HysteresisConfig,
    up: OnePoleCoefficients,
    down: OnePoleCoefficients,
    output_value_last: Option<f64>,
    direction: Option<Direction>,
}

impl Hysteresis {
    pub fn new(config: HysteresisConfig) -> Self {
        let mut hysteresis = Self {
            config,
            up: OnePoleCoefficients::default(),
            down: OnePoleCoefficients::default(),
            output_value_last: None,
            direction: None,
        };
        hysteresis.update_coefficients();
        hysteresis
    }

    pub fn config(&self) -> &HysteresisConfig {
        &self.config
    }

    /// Merge `update` into the configuration and re-derive both weight pairs.
    ///
    /// The filter history is kept.
    pub fn set(&mut self, update: HysteresisUpdate) {
        if let Some(sample_rate) = update.sample_rate {
            self.config.sample_rate = sample_rate;
        }
        if let Some(frequency) = update.lowpass_frequency_up {
            self.config.lowpass_frequency_up = frequency;
        }
        if let Some(frequency) = update.lowpass_frequency_down {
            self.config.lowpass_frequency_down = frequency;
        }
        self.update_coefficients();
    }

    #[inline]
    pub fn process(&mut self, input: f64) -> f64 {
        let last = *self.output_value_last.get_or_insert(input);

        let direction = if input > last {
            Direction::Up
        } else {
            Direction::Down
        };
        let coefficients = match direction {
            Direction::Up => &self.up,
            Direction::Down => &self.down,
        };

        let output = coefficients.apply(input, last);
        self.output_value_last = Some(output);
        self.direction = Some(direction);
        output
    }

    /// Forget the history; the next input passes through unchanged.
    pub fn reset(&mut self) {
        self.output_value_last = None;
        self.direction = None;
    }

    /// Weights used while rising.
    pub fn up(&self) -> OnePoleCoefficients {
        self.up
    }

    /// Weights used while falling or holding.
    pub fn down(&self) -> OnePoleCoefficients {
        self.down
    }

    pub fn last_output(&self) -> Option<f64> {
        self.output_value_last
    }

    /// Direction chosen by the last call, `None` right after construction or reset.
    pub fn direction(&self) -> Option<Direction> {
        self.direction
    }

    fn update_coefficients(&mut self) {
        let HysteresisConfig {
            sample_rate,
            lowpass_frequency_up,
            lowpass_frequency_down,
        } = self.config;

        self.up = OnePoleCoefficients::from_cutoff(lowpass_frequency_up, sample_rate);
        self.down = OnePoleCoefficients::from_cutoff(lowpass_frequency_down, sample_rate);
        debug!(
            "hysteresis @ {}: up scale {}, down scale {}",
            sample_rate, self.up.input_scale, self.down.input_scale
        );
    }
}

impl Default for Hysteresis {
    fn default() -> Self {
        Self::new(HysteresisConfig::default())
    }
}

impl From<HysteresisConfig> for Hysteresis {
    fn from(config: HysteresisConfig) -> Self {
        Self::new(config)
    }
}

impl Processor for Hysteresis {
    #[inline]
    fn process(&mut self, value: f64) -> f64 {
        Hysteresis::process(self, value)
    }

    fn reset(&mut self) {
        Hysteresis::reset(self)
    }
}
