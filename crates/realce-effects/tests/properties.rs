//! Property-based tests for the realce effects.
//!
//! Verifies the fundamental invariants for arbitrary inputs and control
//! settings: finite bounded output, exact level-mapping curves, and the
//! symmetry properties the harmonic generators rely on.

use proptest::prelude::*;
use realce_core::{Effect, ParameterInfo, full_wave_rectify};
use realce_effects::{Controls, Echo, FmVoice, HarmonicExciter, Nonlinearity, Variant};

const SAMPLE_RATE: f32 = 48000.0;

/// Set every parameter from a normalized position within its declared
/// range, then check the effect still produces finite output.
fn sweep_params<E: Effect + ParameterInfo>(effect: &mut E, positions: &[f32; 4]) {
    for i in 0..effect.param_count() {
        let desc = effect.param_info(i).unwrap();
        let t = positions[i % 4];
        effect.set_param(i, desc.min + t * (desc.max - desc.min));
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// Resolved levels follow the exact mapping curves for any control
    /// position: linear fundamental, squared harmonics, half-range trim.
    #[test]
    fn level_mapping_is_exact(c in prop::array::uniform4(0.0f32..=1.0)) {
        let levels = Controls {
            fundamental: c[0],
            even: c[1],
            odd: c[2],
            trim: c[3],
        }
        .resolve();
        prop_assert_eq!(levels.fundamental, c[0]);
        prop_assert_eq!(levels.even, c[1] * c[1]);
        prop_assert_eq!(levels.odd, c[2] * c[2]);
        prop_assert_eq!(levels.trim, 0.5 + 0.5 * c[3]);
        prop_assert!(levels.trim >= 0.5 && levels.trim <= 1.0);
    }

    /// Every variant yields finite output inside the limiter range for
    /// any control settings and any bounded input.
    #[test]
    fn exciter_output_finite_and_limited(
        input in prop::collection::vec(-1.0f32..=1.0, 64),
        c in prop::array::uniform4(0.0f32..=1.0),
        variant_idx in 0usize..4,
    ) {
        let variant = Variant::ALL[variant_idx];
        let controls = Controls {
            fundamental: c[0],
            even: c[1],
            odd: c[2],
            trim: c[3],
        };
        let mut exciter = HarmonicExciter::new(variant, controls, SAMPLE_RATE).unwrap();

        for &sample in &input {
            let out = exciter.process(sample);
            prop_assert!(out.is_finite(), "{:?} produced {}", variant, out);
            prop_assert!(out.abs() <= 1.0, "{:?} escaped the limiter: {}", variant, out);
        }
    }

    /// Output stays inside the limiter even for inputs far past nominal
    /// full scale.
    #[test]
    fn exciter_survives_hot_input(
        gain in 1.0f32..=10.0,
        variant_idx in 0usize..4,
    ) {
        let variant = Variant::ALL[variant_idx];
        let controls = Controls { fundamental: 1.0, even: 1.0, odd: 1.0, trim: 1.0 };
        let mut exciter = HarmonicExciter::new(variant, controls, SAMPLE_RATE).unwrap();

        for i in 0..256 {
            let t = i as f32 / SAMPLE_RATE;
            let x = (2.0 * std::f32::consts::PI * 150.0 * t).sin() * gain;
            let out = exciter.process(x);
            prop_assert!(out.is_finite());
            prop_assert!(out.abs() <= 1.0);
        }
    }

    /// The odd-path generators are odd functions at the nonlinearity
    /// stage, which is what guarantees even-harmonic-free output.
    #[test]
    fn odd_shapers_are_odd_functions(x in -10.0f32..=10.0) {
        for shaper in [
            Nonlinearity::HardClip { threshold: 0.5 },
            Nonlinearity::HardClip { threshold: 0.4 },
            Nonlinearity::Polynomial { k: 0.15 },
            Nonlinearity::SoftKnee,
        ] {
            let pos = shaper.apply(x);
            let neg = shaper.apply(-x);
            prop_assert!(
                (pos + neg).abs() < 1e-4,
                "{:?} broke symmetry at {}: {} vs {}",
                shaper, x, pos, neg
            );
        }
    }

    /// The even-path rectifier never outputs a negative sample.
    #[test]
    fn rectifier_is_nonnegative(x in -10.0f32..=10.0) {
        prop_assert!(full_wave_rectify(x) >= 0.0);
        prop_assert!(Nonlinearity::Rectify.apply(x) >= 0.0);
    }

    /// Sweeping every declared parameter across its range never produces
    /// non-finite output from any of the three effects.
    #[test]
    fn param_sweep_keeps_all_effects_finite(positions in prop::array::uniform4(0.0f32..=1.0)) {
        let controls = Controls { fundamental: 0.5, even: 0.5, odd: 0.5, trim: 0.5 };

        let mut exciter = HarmonicExciter::new(Variant::Vocal, controls, SAMPLE_RATE).unwrap();
        sweep_params(&mut exciter, &positions);
        let mut echo = Echo::new(SAMPLE_RATE);
        sweep_params(&mut echo, &positions);
        let mut fm = FmVoice::new(SAMPLE_RATE);
        sweep_params(&mut fm, &positions);

        for i in 0..128 {
            let x = (i as f32 * 0.1).sin() * 0.8;
            prop_assert!(exciter.process(x).is_finite());
            prop_assert!(echo.process(x).is_finite());
            prop_assert!(fm.process(x).is_finite());
        }
    }
}
