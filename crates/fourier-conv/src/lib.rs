// SPDX-License-Identifier: LGPL-3.0-or-later

//! # fourier-conv
//!
//! Streaming frequency-domain FIR convolution, built on [`fourier_fft`].
//!
//! This crate provides:
//!
//! - **Convolver**: stateful uniformly-partitioned overlap-add
//!   convolution of arbitrarily long sample streams against long impulse
//!   responses, with interleaved multichannel support and no per-call
//!   allocation
//! - **Filters**: windowed-sinc FIR kernel designers (low-pass,
//!   high-pass, band-pass, band-reject)
//! - **Windows**: Blackman, Hann, Hamming, Lanczos, and Bartlett
//!   windowing functions for kernel design
//!
//! ## Example
//! ```
//! use fourier_conv::Convolver;
//!
//! let ir = vec![1.0, 0.5, 0.25]; // simple decaying impulse response
//! let mut conv = Convolver::new(64, &ir)?;
//!
//! let input = vec![1.0; 64];
//! let mut output = vec![0.0; 64];
//! conv.convolve(&mut output, &input, 64)?;
//! # Ok::<(), fourier_conv::Error>(())
//! ```

pub mod convolver;
pub mod error;
pub mod filter;
pub mod windows;

pub use convolver::{Convolver, MAX_IR_SAMPLES};
pub use error::{Error, Result};
