//! Realce Effects - harmonic enhancement built on realce-core
//!
//! The centerpiece is [`HarmonicExciter`], a parallel-path harmonic
//! synthesis engine that adds controlled 2nd- and 3rd-harmonic content to a
//! mono stream without the artifacts of plain distortion. Four tuning
//! profiles cover the supported sources:
//!
//! - [`Variant::Bass`] - audibility on small speakers, low-end kept intact
//! - [`Variant::Guitar`] - density and articulation without fizz
//! - [`Variant::Vocal`] - intelligibility with sibilance protection
//! - [`Variant::Synth`] - analog-style richness, modulation detail kept
//!
//! Two structurally simpler effects ship alongside it: [`Echo`]
//! (single-tap feedback delay with wobble) and [`FmVoice`] (an FM sweep
//! tone source).
//!
//! ## Example
//!
//! ```rust
//! use realce_core::Effect;
//! use realce_effects::{Controls, HarmonicExciter, Variant};
//!
//! let controls = Controls { fundamental: 1.0, even: 0.4, odd: 0.2, trim: 1.0 };
//! let mut exciter = HarmonicExciter::new(Variant::Guitar, controls, 48000.0)?;
//!
//! let mut buffer = [0.1_f32, 0.2, -0.1, -0.3];
//! exciter.process_block_inplace(&mut buffer);
//! # Ok::<(), realce_effects::ProfileError>(())
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

pub mod echo;
pub mod exciter;
pub mod fm;
pub mod profile;

// Re-export main types at crate root
pub use echo::Echo;
pub use exciter::{Controls, HarmonicExciter, Levels};
pub use fm::FmVoice;
pub use profile::{Nonlinearity, ProfileError, Variant, VariantProfile};
