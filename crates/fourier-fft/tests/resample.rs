// SPDX-License-Identifier: LGPL-3.0-or-later
//
// Frequency-domain zero-pad resampling: forward-transform a signal,
// copy the two spectral halves to the ends of a longer buffer (leaving
// zeros in the middle), and inverse-transform. Exercises the full
// forward + spectrum-manipulation + inverse pipeline.

use fourier_fft::{fft, Complex64};

fn upsample(src: &[f64], scale: usize) -> Vec<f64> {
    let len = src.len();

    // Pre-scale amplitudes to compensate for the 1/N normalization of the
    // longer inverse transform.
    let mut spectrum: Vec<Complex64> = src
        .iter()
        .map(|&v| Complex64::new(v * scale as f64, 0.0))
        .collect();
    fft::forward(&mut spectrum).unwrap();

    let mut padded = vec![Complex64::new(0.0, 0.0); len * scale];
    for i in 0..len / 2 {
        padded[i] = spectrum[i];
        let last = padded.len() - 1 - i;
        padded[last] = spectrum[len - 1 - i];
    }
    fft::inverse(&mut padded).unwrap();

    padded.iter().map(|c| c.re).collect()
}

fn assert_samples_eq(expected: &[f64], actual: &[f64]) {
    assert_eq!(expected.len(), actual.len());
    for (i, (e, a)) in expected.iter().zip(actual.iter()).enumerate() {
        assert!(
            (e - a).abs() < 1e-12,
            "sample {}: expected {}, got {}",
            i,
            e,
            a
        );
    }
}

#[test]
fn identity_scale_returns_source() {
    let src = [1.0, 0.5, 1.0, 0.5, 1.0, 0.5, 1.0, 0.5];
    assert_samples_eq(&src, &upsample(&src, 1));
}

#[test]
fn doubled_scale_interpolates() {
    let src = [1.0, 0.5, 1.0, 0.5, 1.0, 0.5, 1.0, 0.5];
    let expected = [
        1.0, 0.75, 0.5, 0.75, 1.0, 0.75, 0.5, 0.75, 1.0, 0.75, 0.5, 0.75, 1.0, 0.75, 0.5, 0.75,
    ];
    assert_samples_eq(&expected, &upsample(&src, 2));
}

#[test]
fn octupled_scale_stays_periodic() {
    let src = [1.0, 0.5, 1.0, 0.5, 1.0, 0.5, 1.0, 0.5];
    let out = upsample(&src, 8);
    assert_eq!(out.len(), 64);

    // The source alternates with period 2, so the result has period 16
    // and passes through the original extremes.
    for i in 0..16 {
        for rep in 1..4 {
            assert!(
                (out[i] - out[i + 16 * rep]).abs() < 1e-12,
                "period break at {} (+{})",
                i,
                16 * rep
            );
        }
    }
    assert!((out[0] - 1.0).abs() < 1e-12);
    assert!((out[8] - 0.5).abs() < 1e-12);
}
