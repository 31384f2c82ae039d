//! Single-tap feedback echo with delay-time wobble.
//!
//! A deliberately small effect: one delay tap, a feedback loop whose write
//! is amplitude-limited, and an LFO that wobbles the tap position by a few
//! milliseconds for a subtle tape-like drift. Output is an equal mix of dry
//! and delayed signal.

use realce_core::{
    Effect, InterpolatedDelay, Lfo, ParamDescriptor, ParamUnit, ParameterInfo, limit_value,
};

/// Maximum base delay in milliseconds.
const MAX_DELAY_MS: f32 = 1000.0;

/// Maximum wobble depth in milliseconds.
const MAX_WOBBLE_MS: f32 = 4.0;

/// Single-tap echo.
///
/// The feedback sample written back into the line passes [`limit_value`],
/// so even full feedback cannot grow without bound.
///
/// # Example
///
/// ```rust
/// use realce_core::Effect;
/// use realce_effects::Echo;
///
/// let mut echo = Echo::new(48000.0);
/// echo.set_delay_ms(250.0);
/// echo.set_feedback(0.4);
/// let out = echo.process(0.5);
/// ```
#[derive(Debug, Clone)]
pub struct Echo {
    delay_line: InterpolatedDelay,
    lfo: Lfo,
    sample_rate: f32,
    delay_ms: f32,
    wobble_ms: f32,
    feedback: f32,
}

impl Echo {
    /// Creates an echo with a one-second maximum delay.
    pub fn new(sample_rate: f32) -> Self {
        Self {
            delay_line: Self::make_line(sample_rate),
            lfo: Lfo::new(sample_rate, 0.5),
            sample_rate,
            delay_ms: 300.0,
            wobble_ms: 0.0,
            feedback: 0.3,
        }
    }

    fn make_line(sample_rate: f32) -> InterpolatedDelay {
        // Base delay plus wobble headroom.
        InterpolatedDelay::from_time(sample_rate, (MAX_DELAY_MS + MAX_WOBBLE_MS) / 1000.0 + 0.01)
    }

    /// Sets the base delay time (0-1000 ms).
    pub fn set_delay_ms(&mut self, delay_ms: f32) {
        self.delay_ms = delay_ms.clamp(0.0, MAX_DELAY_MS);
    }

    /// Current base delay in ms.
    pub fn delay_ms(&self) -> f32 {
        self.delay_ms
    }

    /// Sets the wobble depth (0-4 ms of tap movement).
    pub fn set_wobble_ms(&mut self, wobble_ms: f32) {
        self.wobble_ms = wobble_ms.clamp(0.0, MAX_WOBBLE_MS);
    }

    /// Sets the wobble rate in Hz.
    pub fn set_wobble_rate_hz(&mut self, rate_hz: f32) {
        self.lfo.set_frequency(rate_hz.clamp(0.05, 5.0));
    }

    /// Sets the feedback amount (0-1).
    pub fn set_feedback(&mut self, feedback: f32) {
        self.feedback = feedback.clamp(0.0, 1.0);
    }

    /// Current feedback amount.
    pub fn feedback(&self) -> f32 {
        self.feedback
    }
}

impl Effect for Echo {
    #[inline]
    fn process(&mut self, input: f32) -> f32 {
        let base = self.delay_ms * self.sample_rate / 1000.0;
        let wobble = self.wobble_ms * self.sample_rate / 1000.0;
        let tap = (1.0 + base + self.lfo.next() * wobble).max(1.0);

        let delayed = self.delay_line.read(tap);
        self.delay_line
            .write(limit_value(input + delayed * self.feedback));

        (input + delayed) * 0.5
    }

    fn set_sample_rate(&mut self, sample_rate: f32) {
        if !(sample_rate > 0.0) || !sample_rate.is_finite() {
            return;
        }
        self.sample_rate = sample_rate;
        self.lfo.set_sample_rate(sample_rate);
        // Reallocation happens only here, never in the audio path; the
        // fresh line also drops any stale signal, matching reset semantics
        // for a reconfiguration.
        self.delay_line = Self::make_line(sample_rate);
    }

    fn reset(&mut self) {
        self.delay_line.clear();
        self.lfo.reset();
    }
}

impl ParameterInfo for Echo {
    fn param_count(&self) -> usize {
        4
    }

    fn param_info(&self, index: usize) -> Option<ParamDescriptor> {
        match index {
            0 => Some(ParamDescriptor {
                name: "Delay Time",
                short_name: "Time",
                unit: ParamUnit::Milliseconds,
                min: 0.0,
                max: MAX_DELAY_MS,
                default: 300.0,
            }),
            1 => Some(ParamDescriptor {
                name: "Wobble Depth",
                short_name: "Wobble",
                unit: ParamUnit::Milliseconds,
                min: 0.0,
                max: MAX_WOBBLE_MS,
                default: 0.0,
            }),
            2 => Some(ParamDescriptor {
                name: "Wobble Rate",
                short_name: "Rate",
                unit: ParamUnit::Hertz,
                min: 0.05,
                max: 5.0,
                default: 0.5,
            }),
            3 => Some(ParamDescriptor {
                name: "Feedback",
                short_name: "Fdbk",
                unit: ParamUnit::Percent,
                min: 0.0,
                max: 100.0,
                default: 30.0,
            }),
            _ => None,
        }
    }

    fn get_param(&self, index: usize) -> f32 {
        match index {
            0 => self.delay_ms,
            1 => self.wobble_ms,
            2 => self.lfo.frequency(),
            3 => self.feedback * 100.0,
            _ => 0.0,
        }
    }

    fn set_param(&mut self, index: usize, value: f32) {
        match index {
            0 => self.set_delay_ms(value),
            1 => self.set_wobble_ms(value),
            2 => self.set_wobble_rate_hz(value),
            3 => self.set_feedback(value / 100.0),
            _ => {}
        }
    }
}
