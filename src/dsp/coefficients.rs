use log::warn;

use crate::units::hertz_to_normalised;

/// Weights of a one-pole smoother.
///
/// `input_scale` is applied to the incoming sample and `feedback_scale` to
/// the previous output. They always sum to 1.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OnePoleCoefficients {
    pub input_scale: f64,
    pub feedback_scale: f64,
}

impl OnePoleCoefficients {
    /// Derive the weights for a cutoff, clamping the input weight into [0, 1].
    pub fn from_cutoff(frequency: f64, sample_rate: f64) -> Self {
        let raw = hertz_to_normalised(frequency, sample_rate);
        // NaN stays NaN: comparisons against it are false.
        let input_scale = if raw < 0.0 {
            0.0
        } else if raw > 1.0 {
            1.0
        } else {
            raw
        };

        if input_scale != raw && !raw.is_nan() {
            warn!(
                "cutoff {} at sample rate {} gives coefficient {}, clamped to {}",
                frequency, sample_rate, raw, input_scale
            );
        }

        Self {
            input_scale,
            feedback_scale: 1.0 - input_scale,
        }
    }

    #[inline]
    pub fn apply(&self, input: f64, last: f64) -> f64 {
        input * self.input_scale + last * self.feedback_scale
    }
}

impl Default for OnePoleCoefficients {
    fn default() -> Self {
        Self {
            input_scale: 1.0,
            feedback_scale: 0.0,
        }
    }
}
