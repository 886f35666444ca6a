// SPDX-License-Identifier: LGPL-3.0-or-later

//! # fourier-fft
//!
//! Low-level fast Fourier transform primitives over complex `f64` buffers.
//!
//! This crate provides the foundational operations used by `fourier-conv`
//! to build streaming frequency-domain processors. It includes:
//!
//! - **FFT**: in-place radix-2 decimation-in-time forward and inverse
//!   transforms for power-of-two lengths
//! - **Spectrum helpers**: bit-reversal reordering, magnitude conversion
//! - **Complex arithmetic**: bulk multiply-accumulate, copy, and zeroing
//!   of complex buffers
//! - **Twiddle factors**: a process-wide cache of trigonometric tables,
//!   built lazily and shared across transforms of the same size
//!
//! ## Design
//!
//! Transforms operate in place and allocate nothing once the twiddle table
//! for a given size exists, so they are safe to call from a real-time
//! audio path after a warm-up transform. Bulk buffer operations use
//! runtime SIMD dispatch via the `multiversion` crate.
//!
//! Note the asymmetric transform pair: [`fft::forward`] is an ordinary
//! unnormalized DFT, while [`fft::inverse`] scales by `1/N` **and zeroes
//! the imaginary parts** of its output. See [`fft::inverse`] for the
//! rationale and limits of that choice.

pub mod complex;
pub mod error;
pub mod fft;
pub mod math;

mod twiddle;

pub use error::{Error, Result};
pub use num_complex::Complex64;
