//! Waveshaping primitives and level utilities.
//!
//! The shapers here are the harmonic generators of the enhancement paths.
//! Which harmonics a shaper injects follows from its symmetry:
//!
//! | Function | Symmetry | Harmonics | Character |
//! |----------|----------|-----------|-----------|
//! | [`full_wave_rectify`] | even | 2nd dominant | warmth, body |
//! | [`hard_clip`] | odd | 3rd dominant | bite, edge |
//! | [`cubic_soft_clip`] | odd | subtle 3rd | analog sheen |
//! | [`knee_saturate`] | odd | 3rd, compressed | presence without sibilance |
//!
//! [`limit_value`] is the output safety clamp; every effect output passes
//! through it exactly once.

use libm::{expf, logf};

/// Convert decibels to linear gain.
///
/// 0 dB → 1.0, -6 dB → 0.5, +6 dB → 2.0.
#[inline]
pub fn db_to_linear(db: f32) -> f32 {
    const FACTOR: f32 = core::f32::consts::LN_10 / 20.0;
    expf(db * FACTOR)
}

/// Convert linear gain to decibels.
#[inline]
pub fn linear_to_db(linear: f32) -> f32 {
    const FACTOR: f32 = 20.0 / core::f32::consts::LN_10;
    logf(linear.max(1e-10)) * FACTOR
}

/// Linear interpolation between `a` (t=0) and `b` (t=1).
#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Clamp a sample to the valid output range [-1, 1].
///
/// The final safety net of every effect: whatever the internal gain
/// staging does, the returned sample is always bounded.
#[inline]
pub fn limit_value(x: f32) -> f32 {
    x.clamp(-1.0, 1.0)
}

/// Full-wave rectification: `|x|`.
///
/// Breaks odd symmetry, so a periodic input comes out with energy moved to
/// even multiples of its frequency. The result is never negative and
/// carries a DC offset that must be blocked downstream.
#[inline]
pub fn full_wave_rectify(x: f32) -> f32 {
    x.abs()
}

/// Symmetric hard clip at `±threshold`.
///
/// Preserves odd symmetry: only odd harmonics are generated, with no
/// 2nd-harmonic leakage.
#[inline]
pub fn hard_clip(x: f32, threshold: f32) -> f32 {
    x.clamp(-threshold, threshold)
}

/// Gentle polynomial saturation: `x - k·x³`.
///
/// A smooth odd function for subtle 3rd-harmonic content. Small `k`
/// (0.1-0.2) keeps amplitude-modulation detail intact; there is no
/// discontinuity anywhere on the curve.
#[inline]
pub fn cubic_soft_clip(x: f32, k: f32) -> f32 {
    x - k * x * x * x
}

/// Three-region soft-to-hard saturation.
///
/// - `|x| < 0.3`: linear passthrough
/// - `0.3 <= |x| < 0.7`: quadratic-knee gain reduction
/// - `|x| >= 0.7`: asymptotic curve approaching (but never reaching) ~0.8
///
/// The high-amplitude branch is a soft limiter, not a true hard clip: the
/// output ceiling is an asymptote. Odd-symmetric, so only odd harmonics.
#[inline]
pub fn knee_saturate(x: f32) -> f32 {
    let ax = x.abs();
    if ax < 0.3 {
        x
    } else if ax < 0.7 {
        let t = (ax - 0.3) / 0.4;
        let gain = 1.0 - 0.3 * t * t;
        x * gain
    } else {
        let sign = if x > 0.0 { 1.0 } else { -1.0 };
        sign * (0.7 + 0.1 * (1.0 - 1.0 / (1.0 + (ax - 0.7))))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn db_linear_roundtrip() {
        let original = 0.5;
        let back = db_to_linear(linear_to_db(original));
        assert!((original - back).abs() < 1e-5);
        assert!((db_to_linear(0.0) - 1.0).abs() < 1e-6);
        assert!((db_to_linear(-6.0206) - 0.5).abs() < 0.001);
    }

    #[test]
    fn limit_value_bounds() {
        assert_eq!(limit_value(0.5), 0.5);
        assert_eq!(limit_value(3.7), 1.0);
        assert_eq!(limit_value(-12.0), -1.0);
    }

    #[test]
    fn rectifier_never_negative() {
        for i in -100..=100 {
            let x = i as f32 * 0.03;
            assert!(full_wave_rectify(x) >= 0.0);
        }
    }

    #[test]
    fn hard_clip_is_odd() {
        for i in 0..=100 {
            let x = i as f32 * 0.02;
            assert_eq!(hard_clip(-x, 0.4), -hard_clip(x, 0.4));
        }
        assert_eq!(hard_clip(0.9, 0.5), 0.5);
        assert_eq!(hard_clip(-0.9, 0.5), -0.5);
        assert_eq!(hard_clip(0.3, 0.5), 0.3);
    }

    #[test]
    fn cubic_soft_clip_is_odd() {
        for i in 0..=100 {
            let x = i as f32 * 0.02;
            let pos = cubic_soft_clip(x, 0.15);
            let neg = cubic_soft_clip(-x, 0.15);
            assert!((pos + neg).abs() < 1e-6);
        }
        // Near zero the curve is essentially linear.
        assert!((cubic_soft_clip(0.01, 0.15) - 0.01).abs() < 1e-5);
    }

    #[test]
    fn knee_regions() {
        // Linear region passes through untouched.
        assert_eq!(knee_saturate(0.2), 0.2);
        assert_eq!(knee_saturate(-0.2), -0.2);
        // Knee region compresses.
        let mid = knee_saturate(0.5);
        assert!(mid < 0.5 && mid > 0.4);
        // Continuity at the 0.3 boundary.
        assert!((knee_saturate(0.3) - 0.3).abs() < 1e-3);
    }

    #[test]
    fn knee_is_odd() {
        for i in 0..=150 {
            let x = i as f32 * 0.02;
            assert!((knee_saturate(x) + knee_saturate(-x)).abs() < 1e-6);
        }
    }

    // The top region reads like a hard clip but is an asymptote toward
    // 0.8; pinned here so nobody "fixes" it into a true ceiling.
    #[test]
    fn knee_asymptote_stays_below_ceiling() {
        let mut prev = knee_saturate(0.7);
        for i in 1..=200 {
            let x = 0.7 + i as f32 * 0.5;
            let y = knee_saturate(x);
            assert!(y < 0.8, "ceiling exceeded at {x}: {y}");
            assert!(y >= prev, "curve must be monotonic, broke at {x}");
            prev = y;
        }
        // Far into the asymptote we are close to, but still below, 0.8.
        assert!(knee_saturate(100.0) > 0.799);
    }
}
