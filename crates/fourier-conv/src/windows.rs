// SPDX-License-Identifier: LGPL-3.0-or-later

//! Windowing functions for FIR kernel design.
//!
//! Each function maps a tap position `x` within an `n`-tap kernel to a
//! weighting factor; the kernel designers in [`crate::filter`] apply one
//! of these across the sinc taps to control the filter's stop-band
//! ripple and transition width.

use std::f64::consts::PI;

/// A windowing function: tap position `x` in an `n`-tap kernel to a
/// weighting factor.
pub type Window = fn(x: f64, n: usize) -> f64;

/// Blackman window.
pub fn blackman(x: f64, n: usize) -> f64 {
    let n = n as f64;
    0.42 - 0.5 * (2.0 * PI * x / n).cos() + 0.08 * (4.0 * PI * x / n).cos()
}

/// Hann window (raised cosine).
pub fn hann(x: f64, n: usize) -> f64 {
    hann_hamming(0.5, x, n)
}

/// Hamming window.
pub fn hamming(x: f64, n: usize) -> f64 {
    hann_hamming(0.53836, x, n)
}

fn hann_hamming(a: f64, x: f64, n: usize) -> f64 {
    a - (1.0 - a) * (2.0 * x * PI / n as f64).cos()
}

/// Lanczos window (central lobe of the sinc function).
pub fn lanczos(x: f64, n: usize) -> f64 {
    sinc(2.0 * x / n as f64 - 1.0)
}

/// Bartlett (triangular) window.
pub fn bartlett(x: f64, n: usize) -> f64 {
    let n = n as f64;
    1.0 - 2.0 * (x - n / 2.0).abs() / n
}

/// The cardinal sinc function, `sin(pi x) / (pi x)` with `sinc(0) = 1`.
pub fn sinc(x: f64) -> f64 {
    if x == 0.0 {
        return 1.0;
    }
    (PI * x).sin() / (PI * x)
}
