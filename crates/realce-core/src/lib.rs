//! Realce Core - DSP primitives for harmonic enhancement effects
//!
//! This crate provides the building blocks the `realce-effects` crate is
//! assembled from, designed for real-time audio processing with zero
//! allocation in the audio path.
//!
//! # Core Abstractions
//!
//! ## Effect System
//!
//! - [`Effect`] - Object-safe trait for all audio effects
//! - [`EffectExt`] - Extension trait for effect chaining
//! - [`Chain`] - Zero-cost effect chain combinator
//!
//! ## Filters
//!
//! - [`Biquad`] - Second-order IIR section with RBJ cookbook coefficients
//! - [`FilterSpec`] - Design-time corner/Q record, validated against the
//!   sample rate before a section is built
//!
//! ## Delay & Modulation
//!
//! - [`InterpolatedDelay`] - Fixed-capacity delay line with fractional reads
//! - [`Lfo`] - Low-frequency oscillator (sine, triangle, square)
//!
//! ## Parameters
//!
//! - [`ParameterInfo`] - Index-based parameter discovery for panel mapping
//!
//! ## Utilities
//!
//! - Waveshapers: [`full_wave_rectify`], [`hard_clip`], [`cubic_soft_clip`],
//!   [`knee_saturate`]
//! - Output safety: [`limit_value`]
//! - Level conversions: [`db_to_linear`], [`linear_to_db`]
//!
//! # no_std Support
//!
//! This crate is `no_std` compatible for embedded targets. Disable the
//! default `std` feature:
//!
//! ```toml
//! [dependencies]
//! realce-core = { version = "0.1", default-features = false }
//! ```
//!
//! # Design Principles
//!
//! - **Real-time safe**: no allocations once an effect is constructed
//! - **Explicit ownership**: every filter's delay memory belongs to exactly
//!   one effect instance; nothing lives in module-scope statics
//! - **Build-time validation**: ill-conditioned filter designs are rejected
//!   before a section ever processes a sample

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

pub mod biquad;
pub mod delay;
pub mod effect;
pub mod lfo;
pub mod math;
pub mod param_info;

// Re-export main types at crate root
pub use biquad::{
    Biquad, FilterDesignError, FilterKind, FilterSpec, highpass_coefficients,
    lowpass_coefficients,
};
pub use delay::InterpolatedDelay;
pub use effect::{Chain, Effect, EffectExt};
pub use lfo::{Lfo, LfoWaveform};
pub use math::{
    cubic_soft_clip, db_to_linear, full_wave_rectify, hard_clip, knee_saturate, lerp, limit_value,
    linear_to_db,
};
pub use param_info::{ParamDescriptor, ParamUnit, ParameterInfo};
