//! Frequency unit conversion.

/// Sample rate that marks a frequency as already normalised.
///
/// With `sample_rate == 2.0` the Nyquist frequency is `1.0`, so a frequency
/// passed to [`hertz_to_normalised`] comes back unchanged.
pub const NORMALISED_SAMPLE_RATE: f64 = 2.0;

/*
Normalised Frequency
====================

A normalised frequency expresses a cutoff as a fraction of the Nyquist
frequency (half the sample rate) instead of in Hertz:

    normalised = frequency_hz / (sample_rate / 2)

    sample_rate   frequency_hz   normalised
    48000         2400           0.1
    48000         24000          1.0   (Nyquist)
    2             0.9            0.9   (already normalised)

The one-pole filters in `dsp` use the normalised value directly as their
input weight, so a cutoff at Nyquist passes the input straight through and a
cutoff of 0 holds the last output forever.
*/

/// Convert a frequency in Hertz to a fraction of the Nyquist frequency.
///
/// Passing [`NORMALISED_SAMPLE_RATE`] treats `frequency_hz` as already
/// normalised. The result is not clamped.
#[inline]
pub fn hertz_to_normalised(frequency_hz: f64, sample_rate: f64) -> f64 {
    frequency_hz / (sample_rate * 0.5)
}

/// Convert a fraction of the Nyquist frequency back to Hertz.
#[inline]
pub fn normalised_to_hertz(normalised: f64, sample_rate: f64) -> f64 {
    normalised * (sample_rate * 0.5)
}
