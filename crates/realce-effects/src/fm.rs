//! Frequency-modulation tone generator.
//!
//! A sine carrier whose frequency is swept by a slow modulator, up to one
//! octave down and up. Primarily a signal source for exercising the
//! oscillator plumbing; it ignores its input entirely.

use libm::{exp2f, powf};
use realce_core::{Effect, Lfo, ParamDescriptor, ParamUnit, ParameterInfo};

/// FM sweep voice.
///
/// `process` discards the input sample and returns the generated tone;
/// output is bounded by the volume setting, itself clamped to [0, 1].
///
/// # Example
///
/// ```rust
/// use realce_core::Effect;
/// use realce_effects::FmVoice;
///
/// let mut fm = FmVoice::new(48000.0);
/// fm.set_base_freq_hz(440.0);
/// fm.set_mod_rate_hz(3.0);
/// let sample = fm.process(0.0);
/// assert!(sample.abs() <= 1.0);
/// ```
#[derive(Debug, Clone)]
pub struct FmVoice {
    carrier: Lfo,
    modulator: Lfo,
    sample_rate: f32,
    volume: f32,
    base_freq: f32,
    range_octaves: f32,
}

impl FmVoice {
    /// Creates a voice with a 440 Hz base and a 5 Hz modulator.
    pub fn new(sample_rate: f32) -> Self {
        Self {
            carrier: Lfo::new(sample_rate, 440.0),
            modulator: Lfo::new(sample_rate, 5.0),
            sample_rate,
            volume: 0.5,
            base_freq: 440.0,
            range_octaves: 0.5,
        }
    }

    /// Creates a voice from four normalized panel controls.
    ///
    /// * `volume` - output level, 0-1
    /// * `pitch` - base frequency, mapped as `8000^pitch + 100` Hz
    /// * `range` - sweep range in octaves, 0-1
    /// * `rate` - modulator rate, mapped to 1-11 Hz
    pub fn from_controls(sample_rate: f32, volume: f32, pitch: f32, range: f32, rate: f32) -> Self {
        let mut voice = Self::new(sample_rate);
        voice.set_volume(volume);
        voice.set_base_freq_hz(powf(8000.0, pitch.clamp(0.0, 1.0)) + 100.0);
        voice.set_range_octaves(range);
        voice.set_mod_rate_hz(1.0 + 10.0 * rate.clamp(0.0, 1.0));
        voice
    }

    /// Sets the output volume (0-1).
    pub fn set_volume(&mut self, volume: f32) {
        self.volume = volume.clamp(0.0, 1.0);
    }

    /// Sets the carrier base frequency in Hz (100-8100).
    pub fn set_base_freq_hz(&mut self, freq_hz: f32) {
        self.base_freq = freq_hz.clamp(100.0, 8100.0);
    }

    /// Current base frequency in Hz.
    pub fn base_freq_hz(&self) -> f32 {
        self.base_freq
    }

    /// Sets the sweep range in octaves (0-1 each direction).
    pub fn set_range_octaves(&mut self, octaves: f32) {
        self.range_octaves = octaves.clamp(0.0, 1.0);
    }

    /// Sets the modulator rate in Hz (1-11).
    pub fn set_mod_rate_hz(&mut self, rate_hz: f32) {
        self.modulator.set_frequency(rate_hz.clamp(1.0, 11.0));
    }
}

impl Effect for FmVoice {
    #[inline]
    fn process(&mut self, _input: f32) -> f32 {
        let sweep = self.modulator.next();
        let multiplier = exp2f(sweep * self.range_octaves);
        let freq = (self.base_freq * multiplier).min(self.sample_rate * 0.45);
        self.carrier.set_frequency(freq);
        self.carrier.next() * self.volume
    }

    fn set_sample_rate(&mut self, sample_rate: f32) {
        if !(sample_rate > 0.0) || !sample_rate.is_finite() {
            return;
        }
        self.sample_rate = sample_rate;
        self.carrier.set_sample_rate(sample_rate);
        self.modulator.set_sample_rate(sample_rate);
    }

    fn reset(&mut self) {
        self.carrier.reset();
        self.modulator.reset();
    }
}

impl ParameterInfo for FmVoice {
    fn param_count(&self) -> usize {
        4
    }

    fn param_info(&self, index: usize) -> Option<ParamDescriptor> {
        match index {
            0 => Some(ParamDescriptor {
                name: "Volume",
                short_name: "Vol",
                unit: ParamUnit::Percent,
                min: 0.0,
                max: 100.0,
                default: 50.0,
            }),
            1 => Some(ParamDescriptor {
                name: "Base Frequency",
                short_name: "Freq",
                unit: ParamUnit::Hertz,
                min: 100.0,
                max: 8100.0,
                default: 440.0,
            }),
            2 => Some(ParamDescriptor {
                name: "Sweep Range",
                short_name: "Range",
                unit: ParamUnit::None,
                min: 0.0,
                max: 1.0,
                default: 0.5,
            }),
            3 => Some(ParamDescriptor {
                name: "Mod Rate",
                short_name: "Rate",
                unit: ParamUnit::Hertz,
                min: 1.0,
                max: 11.0,
                default: 5.0,
            }),
            _ => None,
        }
    }

    fn get_param(&self, index: usize) -> f32 {
        match index {
            0 => self.volume * 100.0,
            1 => self.base_freq,
            2 => self.range_octaves,
            3 => self.modulator.frequency(),
            _ => 0.0,
        }
    }

    fn set_param(&mut self, index: usize, value: f32) {
        match index {
            0 => self.set_volume(value / 100.0),
            1 => self.set_base_freq_hz(value),
            2 => self.set_range_octaves(value),
            3 => self.set_mod_rate_hz(value),
            _ => {}
        }
    }
}
