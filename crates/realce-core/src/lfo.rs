//! Low-frequency oscillator for modulation.
//!
//! Phase-accumulator oscillator used for delay-time wobble in the echo
//! effect and as both the carrier and the modulator of the FM voice.

use core::f32::consts::PI;
use libm::sinf;

/// LFO waveform.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LfoWaveform {
    /// Smooth sinusoidal modulation.
    #[default]
    Sine,
    /// Linear up/down ramps.
    Triangle,
    /// Binary high/low.
    Square,
}

/// Phase-accumulator oscillator producing values in [-1, 1].
///
/// # Example
///
/// ```rust
/// use realce_core::{Lfo, LfoWaveform};
///
/// let mut lfo = Lfo::new(48000.0, 2.0);
/// lfo.set_waveform(LfoWaveform::Triangle);
/// let value = lfo.next();
/// ```
#[derive(Debug, Clone)]
pub struct Lfo {
    /// Current phase in [0, 1).
    phase: f32,
    /// Phase increment per sample.
    phase_inc: f32,
    sample_rate: f32,
    waveform: LfoWaveform,
}

impl Lfo {
    /// Creates an oscillator at `freq_hz` for the given sample rate.
    pub fn new(sample_rate: f32, freq_hz: f32) -> Self {
        Self {
            phase: 0.0,
            phase_inc: freq_hz / sample_rate,
            sample_rate,
            waveform: LfoWaveform::Sine,
        }
    }

    /// Sets the frequency in Hz. Cheap enough to call per sample, which is
    /// how the FM voice retunes its carrier.
    #[inline]
    pub fn set_frequency(&mut self, freq_hz: f32) {
        self.phase_inc = freq_hz / self.sample_rate;
    }

    /// Current frequency in Hz.
    pub fn frequency(&self) -> f32 {
        self.phase_inc * self.sample_rate
    }

    /// Sets the waveform.
    pub fn set_waveform(&mut self, waveform: LfoWaveform) {
        self.waveform = waveform;
    }

    /// Updates the sample rate, preserving the configured frequency.
    pub fn set_sample_rate(&mut self, sample_rate: f32) {
        let freq = self.frequency();
        self.sample_rate = sample_rate;
        self.phase_inc = freq / sample_rate;
    }

    /// Resets the phase to zero.
    pub fn reset(&mut self) {
        self.phase = 0.0;
    }

    /// Produces the next value and advances the phase.
    #[inline]
    pub fn next(&mut self) -> f32 {
        let output = match self.waveform {
            LfoWaveform::Sine => sinf(self.phase * 2.0 * PI),
            LfoWaveform::Triangle => {
                if self.phase < 0.5 {
                    4.0 * self.phase - 1.0
                } else {
                    3.0 - 4.0 * self.phase
                }
            }
            LfoWaveform::Square => {
                if self.phase < 0.5 {
                    1.0
                } else {
                    -1.0
                }
            }
        };

        self.phase += self.phase_inc;
        if self.phase >= 1.0 {
            self.phase -= 1.0;
        }

        output
    }
}
