//! Parallel-path harmonic exciter.
//!
//! Splits the input into three paths fed from the same sample, so their
//! relative phase is preserved through recombination:
//!
//! ```text
//!          +-> fundamental: HPF (vocal: + LPF)              -> * fund level --+
//! input ---+-> even: |x| -> LPF cascade -> DC block         -> * even level --+-> sum -> * trim -> limit
//!          +-> odd:  shaper -> LPF cascade (vocal: + deemph) -> * odd level --+
//! ```
//!
//! The rectifier path injects 2nd-harmonic "warmth"; the odd path's shaper
//! injects 3rd-harmonic "edge". Each path band-limits its generated content
//! with a cascade fixed by the [`VariantProfile`], and the whole network
//! runs in bounded time with no allocation per sample.

#[cfg(not(feature = "std"))]
extern crate alloc;
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

use realce_core::{Biquad, Effect, ParamDescriptor, ParamUnit, ParameterInfo, limit_value};

use crate::profile::{Nonlinearity, ProfileError, Variant, VariantProfile};

/// Normalized panel controls, each expected in [0, 1].
///
/// Out-of-range values are clamped when the controls are resolved; gains
/// derived from them are therefore always bounded.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Controls {
    /// Dry/fundamental level (linear).
    pub fundamental: f32,
    /// Even-harmonic level (squared response).
    pub even: f32,
    /// Odd-harmonic level (squared response).
    pub odd: f32,
    /// Output trim (maps to [0.5, 1.0]).
    pub trim: f32,
}

impl Controls {
    /// All controls at zero: silence after the filters settle.
    pub const ZERO: Self = Self {
        fundamental: 0.0,
        even: 0.0,
        odd: 0.0,
        trim: 0.0,
    };

    /// Resolves the pots into per-path gains and the output trim.
    ///
    /// The squared curve on the harmonic levels gives finer control at low
    /// settings while keeping the endpoints at 0 and 1.
    pub fn resolve(self) -> Levels {
        let fundamental = self.fundamental.clamp(0.0, 1.0);
        let even = self.even.clamp(0.0, 1.0);
        let odd = self.odd.clamp(0.0, 1.0);
        let trim = self.trim.clamp(0.0, 1.0);
        Levels {
            fundamental,
            even: even * even,
            odd: odd * odd,
            trim: 0.5 + trim * 0.5,
        }
    }
}

/// Resolved path gains. Fundamental and harmonic levels are in [0, 1],
/// trim in [0.5, 1.0].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Levels {
    /// Fundamental path gain.
    pub fundamental: f32,
    /// Even path gain.
    pub even: f32,
    /// Odd path gain.
    pub odd: f32,
    /// Post-sum output trim.
    pub trim: f32,
}

/// One processing path: an optional shaper, an ordered filter cascade,
/// and an output gain.
///
/// Cascade order is fixed when the path is built and is significant (the
/// even path's DC blocker must run after its low-pass sections).
#[derive(Debug)]
struct PathState {
    shaper: Option<Nonlinearity>,
    sections: Vec<Biquad>,
    level: f32,
}

impl PathState {
    #[inline]
    fn process(&mut self, input: f32) -> f32 {
        let mut x = match self.shaper {
            Some(shaper) => shaper.apply(input),
            None => input,
        };
        for section in &mut self.sections {
            x = section.process(x);
        }
        x * self.level
    }

    fn clear(&mut self) {
        for section in &mut self.sections {
            section.clear();
        }
    }
}

/// A configured harmonic exciter instance.
///
/// Created from a [`Variant`] and four [`Controls`]; owns every filter's
/// delay memory exclusively. One instance serves one audio stream; run two
/// instances for two streams, they share nothing.
///
/// # Example
///
/// ```rust
/// use realce_core::Effect;
/// use realce_effects::{Controls, HarmonicExciter, Variant};
///
/// let controls = Controls { fundamental: 0.8, even: 0.5, odd: 0.3, trim: 1.0 };
/// let mut exciter = HarmonicExciter::new(Variant::Bass, controls, 48000.0).unwrap();
/// let out = exciter.process(0.25);
/// assert!(out.abs() <= 1.0);
/// ```
#[derive(Debug)]
pub struct HarmonicExciter {
    variant: Variant,
    controls: Controls,
    levels: Levels,
    sample_rate: f32,
    fundamental: PathState,
    even: PathState,
    odd: PathState,
}

impl HarmonicExciter {
    /// Builds an exciter for `variant` at `sample_rate`.
    ///
    /// Every filter spec in the profile is validated first; a corner at or
    /// above Nyquist or a non-positive Q is a fatal configuration error
    /// (the filter recursion would be undefined), so no instance is
    /// constructed from an ill-conditioned profile.
    pub fn new(
        variant: Variant,
        controls: Controls,
        sample_rate: f32,
    ) -> Result<Self, ProfileError> {
        let profile = variant.profile();
        profile.validate(sample_rate)?;

        let levels = controls.resolve();
        let (fundamental, even, odd) = Self::build_paths(profile, levels, sample_rate);

        #[cfg(feature = "tracing")]
        tracing::debug!(
            variant = profile.name,
            fund = levels.fundamental,
            even = levels.even,
            odd = levels.odd,
            trim = levels.trim,
            "harmonic exciter configured"
        );

        Ok(Self {
            variant,
            controls,
            levels,
            sample_rate,
            fundamental,
            even,
            odd,
        })
    }

    /// Assembles the three paths from a validated profile.
    ///
    /// Corners are clamped below Nyquist so this stays infallible on the
    /// sample-rate-change path; with a validated profile the clamp is a
    /// no-op at construction.
    fn build_paths(
        profile: &VariantProfile,
        levels: Levels,
        sample_rate: f32,
    ) -> (PathState, PathState, PathState) {
        let build = |spec: &realce_core::FilterSpec| spec.build_clamped(sample_rate);

        let mut fund_sections = Vec::with_capacity(2);
        fund_sections.push(build(&profile.fund_hpf));
        if let Some(spec) = &profile.fund_lpf {
            fund_sections.push(build(spec));
        }
        let fundamental = PathState {
            shaper: None,
            sections: fund_sections,
            level: levels.fundamental,
        };

        let mut even_sections: Vec<Biquad> = profile.even_lpf.iter().map(build).collect();
        if let Some(spec) = &profile.even_dc {
            even_sections.push(build(spec));
        }
        let even = PathState {
            shaper: Some(Nonlinearity::Rectify),
            sections: even_sections,
            level: levels.even,
        };

        let mut odd_sections: Vec<Biquad> = profile.odd_lpf.iter().map(build).collect();
        if let Some(spec) = &profile.odd_deemph {
            odd_sections.push(build(spec));
        }
        let odd = PathState {
            shaper: Some(profile.odd_shaper),
            sections: odd_sections,
            level: levels.odd,
        };

        (fundamental, even, odd)
    }

    /// Re-resolves the levels from new control settings.
    ///
    /// Filter memories are untouched: levels only scale path outputs, so
    /// changing them mid-stream cannot leak transient state.
    pub fn set_controls(&mut self, controls: Controls) {
        self.controls = controls;
        self.levels = controls.resolve();
        self.fundamental.level = self.levels.fundamental;
        self.even.level = self.levels.even;
        self.odd.level = self.levels.odd;
    }

    /// The control settings this instance was configured with.
    pub fn controls(&self) -> Controls {
        self.controls
    }

    /// The resolved per-path gains.
    pub fn levels(&self) -> Levels {
        self.levels
    }

    /// The variant this instance is tuned as.
    pub fn variant(&self) -> Variant {
        self.variant
    }

    /// Current sample rate in Hz.
    pub fn sample_rate(&self) -> f32 {
        self.sample_rate
    }
}

impl Effect for HarmonicExciter {
    /// Advances the network by one sample.
    ///
    /// All three paths read the same input sample; the weighted sum is
    /// trimmed and unconditionally clamped to [-1, 1].
    #[inline]
    fn process(&mut self, input: f32) -> f32 {
        let path_a = self.fundamental.process(input);
        let path_b = self.even.process(input);
        let path_c = self.odd.process(input);

        limit_value((path_a + path_b + path_c) * self.levels.trim)
    }

    /// Redesigns every section for the new rate and zeroes all delay
    /// memory, so no transient state survives the reconfiguration. Corners
    /// that a lower rate would push past Nyquist are clamped below it.
    fn set_sample_rate(&mut self, sample_rate: f32) {
        if !(sample_rate > 0.0) || !sample_rate.is_finite() {
            return;
        }
        self.sample_rate = sample_rate;
        let (fundamental, even, odd) =
            Self::build_paths(self.variant.profile(), self.levels, sample_rate);
        self.fundamental = fundamental;
        self.even = even;
        self.odd = odd;
    }

    fn reset(&mut self) {
        self.fundamental.clear();
        self.even.clear();
        self.odd.clear();
    }
}

impl ParameterInfo for HarmonicExciter {
    fn param_count(&self) -> usize {
        4
    }

    fn param_info(&self, index: usize) -> Option<ParamDescriptor> {
        match index {
            0 => Some(ParamDescriptor {
                name: "Fundamental",
                short_name: "Fund",
                unit: ParamUnit::Percent,
                min: 0.0,
                max: 100.0,
                default: 100.0,
            }),
            1 => Some(ParamDescriptor {
                name: "Even Harmonics",
                short_name: "Even",
                unit: ParamUnit::Percent,
                min: 0.0,
                max: 100.0,
                default: 30.0,
            }),
            2 => Some(ParamDescriptor {
                name: "Odd Harmonics",
                short_name: "Odd",
                unit: ParamUnit::Percent,
                min: 0.0,
                max: 100.0,
                default: 20.0,
            }),
            3 => Some(ParamDescriptor {
                name: "Output Trim",
                short_name: "Trim",
                unit: ParamUnit::Percent,
                min: 0.0,
                max: 100.0,
                default: 100.0,
            }),
            _ => None,
        }
    }

    fn get_param(&self, index: usize) -> f32 {
        match index {
            0 => self.controls.fundamental * 100.0,
            1 => self.controls.even * 100.0,
            2 => self.controls.odd * 100.0,
            3 => self.controls.trim * 100.0,
            _ => 0.0,
        }
    }

    fn set_param(&mut self, index: usize, value: f32) {
        let value = value.clamp(0.0, 100.0) / 100.0;
        let mut controls = self.controls;
        match index {
            0 => controls.fundamental = value,
            1 => controls.even = value,
            2 => controls.odd = value,
            3 => controls.trim = value,
            _ => return,
        }
        self.set_controls(controls);
    }
}
