// SPDX-License-Identifier: LGPL-3.0-or-later
//
// End-to-end filtering: design a windowed-sinc kernel, run a composite
// signal through the convolver, and verify in the frequency domain that
// the stop-band carrier is gone.

use fourier_conv::{filter, windows, Convolver};
use fourier_fft::{fft, Complex64};
use std::f64::consts::PI;

fn add_carrier(dst: &mut [f64], fc: f64, fs: f64) {
    for (i, v) in dst.iter_mut().enumerate() {
        *v += (i as f64 * 2.0 * PI * fc / fs).cos();
    }
}

/// Bins whose magnitude exceeds 0.2.
fn spikes(buf: &[f64]) -> Vec<usize> {
    let mut freq: Vec<Complex64> = buf.iter().map(|&v| Complex64::new(v, 0.0)).collect();
    fft::forward(&mut freq).unwrap();

    let mut mags = vec![0.0; freq.len()];
    fft::magnitude(&mut mags, &freq).unwrap();

    mags.iter()
        .enumerate()
        .filter(|(_, &m)| m > 0.2)
        .map(|(i, _)| i)
        .collect()
}

#[test]
fn low_pass_removes_high_carrier() {
    let block_size = 256;
    let sample_rate = 320.0;
    let cutoff = 30.0;

    // Two summed cosine carriers, one at 10 Hz and another at 90 Hz.
    let mut input = vec![0.0; block_size];
    add_carrier(&mut input, 10.0, sample_rate);
    add_carrier(&mut input, 90.0, sample_rate);

    // Both carriers and their negative-frequency mirrors are visible
    // before filtering.
    assert_eq!(spikes(&input), vec![8, 72, 184, 248]);

    // A 32-tap kernel rejecting everything above 30 Hz.
    let mut kernel = vec![0.0; 32];
    filter::make_low_pass(&mut kernel, windows::lanczos, cutoff / sample_rate);

    let mut conv = Convolver::new(block_size, &kernel).unwrap();
    let mut output = vec![0.0; block_size];
    conv.convolve(&mut output, &input, block_size).unwrap();

    // Only the 10 Hz carrier survives.
    assert_eq!(spikes(&output), vec![8, 248]);
}
