//! Tuning profiles for the harmonic exciter.
//!
//! One [`VariantProfile`] per supported instrument category. A profile fixes
//! every corner frequency, Q, and nonlinearity choice; the engine topology
//! is identical across variants. Profiles are const data and are never
//! mutated at runtime.

use realce_core::{
    FilterDesignError, FilterSpec, cubic_soft_clip, full_wave_rectify, hard_clip, knee_saturate,
};

/// Instrument category a profile is tuned for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variant {
    /// Electric or synth bass: harmonics tuned for small-speaker audibility
    /// while keeping low-frequency authority.
    Bass,
    /// Clean electric guitar: harmonic density and articulation without
    /// traditional distortion fizz.
    Guitar,
    /// Lead vocals and spoken word: intelligibility and density with
    /// sibilance protection.
    Vocal,
    /// Polyphonic synths and pads: analog-style richness with gentle
    /// nonlinearities that preserve modulation detail.
    Synth,
}

impl Variant {
    /// All supported variants.
    pub const ALL: [Self; 4] = [Self::Bass, Self::Guitar, Self::Vocal, Self::Synth];

    /// The const tuning record for this variant.
    pub fn profile(self) -> &'static VariantProfile {
        match self {
            Self::Bass => &BASS,
            Self::Guitar => &GUITAR,
            Self::Vocal => &VOCAL,
            Self::Synth => &SYNTH,
        }
    }
}

/// Harmonic generator selection for a path.
///
/// Symmetry determines the harmonic series: the even-symmetric rectifier
/// yields even multiples, the odd-symmetric shapers yield odd multiples.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Nonlinearity {
    /// Full-wave rectification (`|x|`) - 2nd harmonic dominant.
    Rectify,
    /// Symmetric clamp at the threshold - 3rd harmonic dominant.
    HardClip {
        /// Clip level.
        threshold: f32,
    },
    /// `x - k*x^3` - subtle 3rd harmonic, no discontinuities.
    Polynomial {
        /// Cubic coefficient.
        k: f32,
    },
    /// Three-region soft-to-hard saturation with an asymptotic top.
    SoftKnee,
}

impl Nonlinearity {
    /// Applies the shaper to one sample.
    #[inline]
    pub fn apply(self, x: f32) -> f32 {
        match self {
            Self::Rectify => full_wave_rectify(x),
            Self::HardClip { threshold } => hard_clip(x, threshold),
            Self::Polynomial { k } => cubic_soft_clip(x, k),
            Self::SoftKnee => knee_saturate(x),
        }
    }
}

/// Complete tuning record for one variant.
///
/// Cascade entries are ordered; the order is fixed at construction of an
/// exciter and never reordered afterwards.
#[derive(Debug)]
pub struct VariantProfile {
    /// Short name for diagnostics and error messages.
    pub name: &'static str,
    /// Fundamental-path high-pass corner.
    pub fund_hpf: FilterSpec,
    /// Optional fundamental-path top-end rolloff (vocal only).
    pub fund_lpf: Option<FilterSpec>,
    /// Even-path low-pass cascade, applied after rectification.
    pub even_lpf: &'static [FilterSpec],
    /// Even-path DC blocker, removing the rectifier's offset.
    pub even_dc: Option<FilterSpec>,
    /// Odd-path harmonic generator.
    pub odd_shaper: Nonlinearity,
    /// Odd-path low-pass cascade, applied after the shaper.
    pub odd_lpf: &'static [FilterSpec],
    /// Optional de-emphasis section taming sibilance range (vocal only).
    pub odd_deemph: Option<FilterSpec>,
}

impl VariantProfile {
    /// Every filter spec in cascade order, labeled by stage.
    ///
    /// Iteration order matches processing order within each path.
    pub fn stages(&self) -> impl Iterator<Item = (&'static str, FilterSpec)> + '_ {
        [("fund_hpf", Some(self.fund_hpf)), ("fund_lpf", self.fund_lpf)]
            .into_iter()
            .chain(self.even_lpf.iter().map(|s| ("even_lpf", Some(*s))))
            .chain([("even_dc", self.even_dc)])
            .chain(self.odd_lpf.iter().map(|s| ("odd_lpf", Some(*s))))
            .chain([("odd_deemph", self.odd_deemph)])
            .filter_map(|(stage, spec)| spec.map(|s| (stage, s)))
    }

    /// Validates every section against the sample rate.
    ///
    /// Must pass before an exciter is built: the biquad step recursion is
    /// undefined for ill-conditioned coefficients.
    pub fn validate(&self, sample_rate: f32) -> Result<(), ProfileError> {
        if !(sample_rate > 0.0) || !sample_rate.is_finite() {
            return Err(ProfileError::InvalidSampleRate(sample_rate));
        }
        for (stage, spec) in self.stages() {
            spec.validate(sample_rate)
                .map_err(|source| ProfileError::Filter {
                    variant: self.name,
                    stage,
                    source,
                })?;
        }
        Ok(())
    }
}

/// Fatal configuration error raised while building an exciter.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ProfileError {
    /// Sample rate must be finite and positive.
    #[error("invalid sample rate: {0}")]
    InvalidSampleRate(f32),
    /// A filter stage cannot be designed at this sample rate.
    #[error("{variant} profile, {stage} stage: {source}")]
    Filter {
        /// Profile name.
        variant: &'static str,
        /// Stage label within the profile.
        stage: &'static str,
        /// Underlying design error.
        #[source]
        source: FilterDesignError,
    },
}

const BUTTERWORTH_Q: f32 = 0.707;

// Two sections at these Qs approximate a 4th-order Butterworth response.
const STAGGER_Q_LOW: f32 = 0.54;
const STAGGER_Q_HIGH: f32 = 1.31;

/// Bass: fundamental anchored at 70 Hz, thickness region 180-250 Hz,
/// edge region 300-450 Hz with a firm 0.5 clip.
pub static BASS: VariantProfile = VariantProfile {
    name: "bass",
    fund_hpf: FilterSpec::highpass(70.0, BUTTERWORTH_Q),
    fund_lpf: None,
    even_lpf: &[
        FilterSpec::lowpass(215.0, BUTTERWORTH_Q),
        FilterSpec::lowpass(215.0, BUTTERWORTH_Q),
    ],
    even_dc: Some(FilterSpec::highpass(7.5, BUTTERWORTH_Q)),
    odd_shaper: Nonlinearity::HardClip { threshold: 0.5 },
    odd_lpf: &[
        FilterSpec::lowpass(375.0, STAGGER_Q_LOW),
        FilterSpec::lowpass(375.0, STAGGER_Q_HIGH),
    ],
    odd_deemph: None,
};

/// Guitar: body/bloom centered at 650 Hz, pick articulation up to 2 kHz
/// with an earlier 0.4 clip.
pub static GUITAR: VariantProfile = VariantProfile {
    name: "guitar",
    fund_hpf: FilterSpec::highpass(80.0, BUTTERWORTH_Q),
    fund_lpf: None,
    even_lpf: &[
        FilterSpec::lowpass(650.0, BUTTERWORTH_Q),
        FilterSpec::lowpass(650.0, BUTTERWORTH_Q),
    ],
    even_dc: None,
    odd_shaper: Nonlinearity::HardClip { threshold: 0.4 },
    odd_lpf: &[FilterSpec::lowpass(2000.0, BUTTERWORTH_Q)],
    odd_deemph: None,
};

/// Vocal: chest warmth at 1.5 kHz, presence at 4 kHz through the knee
/// saturator, de-emphasis above 6 kHz against sibilance.
pub static VOCAL: VariantProfile = VariantProfile {
    name: "vocal",
    fund_hpf: FilterSpec::highpass(100.0, BUTTERWORTH_Q),
    fund_lpf: Some(FilterSpec::lowpass(11000.0, BUTTERWORTH_Q)),
    even_lpf: &[
        FilterSpec::lowpass(1500.0, STAGGER_Q_LOW),
        FilterSpec::lowpass(1500.0, STAGGER_Q_HIGH),
    ],
    even_dc: Some(FilterSpec::highpass(10.0, BUTTERWORTH_Q)),
    odd_shaper: Nonlinearity::SoftKnee,
    odd_lpf: &[FilterSpec::lowpass(4000.0, BUTTERWORTH_Q)],
    odd_deemph: Some(FilterSpec::lowpass(6000.0, 0.5)),
};

/// Synth: thickness up to 1 kHz, movement up to 3 kHz through the gentle
/// cubic curve that keeps modulation detail intact.
pub static SYNTH: VariantProfile = VariantProfile {
    name: "synth",
    fund_hpf: FilterSpec::highpass(50.0, BUTTERWORTH_Q),
    fund_lpf: None,
    even_lpf: &[
        FilterSpec::lowpass(1000.0, STAGGER_Q_LOW),
        FilterSpec::lowpass(1000.0, STAGGER_Q_HIGH),
    ],
    even_dc: Some(FilterSpec::highpass(5.0, BUTTERWORTH_Q)),
    odd_shaper: Nonlinearity::Polynomial { k: 0.15 },
    odd_lpf: &[FilterSpec::lowpass(3000.0, BUTTERWORTH_Q)],
    odd_deemph: None,
};
