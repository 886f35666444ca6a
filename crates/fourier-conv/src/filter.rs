// SPDX-License-Identifier: LGPL-3.0-or-later

//! Builders for common FIR filter kernels.
//!
//! All designs are windowed-sinc kernels centered at `n / 2`, normalized
//! to unity gain, and ready to load into a
//! [`Convolver`](crate::Convolver). Frequencies are normalized to the
//! sample rate: a `cutoff` of `0.25` sits at half of Nyquist.

use crate::windows::Window;
use std::f64::consts::PI;

/// Fill `h` with a low-pass kernel attenuating frequencies above
/// `cutoff`.
///
/// `cutoff` is the normalized cutoff frequency in `(0, 0.5)`.
pub fn make_low_pass(h: &mut [f64], window: Window, cutoff: f64) {
    let n = h.len();
    for (i, tap) in h.iter_mut().enumerate() {
        let x = 2.0 * PI * cutoff;
        if i == n / 2 {
            *tap = x;
        } else {
            let y = i as f64 - n as f64 / 2.0;
            *tap = (x * y).sin() / y * window(i as f64, n);
        }
    }
    normalize(h);
}

/// Fill `h` with a high-pass kernel attenuating frequencies below
/// `cutoff`.
pub fn make_high_pass(h: &mut [f64], window: Window, cutoff: f64) {
    make_low_pass(h, window, cutoff);
    for tap in h.iter_mut() {
        *tap = -*tap;
    }
}

/// Fill `h` with a band-reject kernel attenuating frequencies between
/// `stop1` and `stop2`.
pub fn make_band_reject(h: &mut [f64], window: Window, stop1: f64, stop2: f64) {
    let mut low = vec![0.0; h.len()];
    let mut high = vec![0.0; h.len()];
    make_low_pass(&mut low, window, stop1);
    make_high_pass(&mut high, window, stop2);
    for (i, tap) in h.iter_mut().enumerate() {
        *tap = low[i] + high[i];
    }
}

/// Fill `h` with a band-pass kernel passing frequencies between `stop1`
/// and `stop2`.
pub fn make_band_pass(h: &mut [f64], window: Window, stop1: f64, stop2: f64) {
    make_band_reject(h, window, stop1, stop2);
    for tap in h.iter_mut() {
        *tap = -*tap;
    }
}

// Scale the kernel so its taps sum to one (unity gain at DC).
fn normalize(h: &mut [f64]) {
    let sum: f64 = h.iter().sum();
    let scale = 1.0 / sum;
    for tap in h.iter_mut() {
        *tap *= scale;
    }
}
