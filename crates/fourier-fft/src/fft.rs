// SPDX-License-Identifier: LGPL-3.0-or-later

//! In-place radix-2 decimation-in-time FFT.
//!
//! The transform pair follows the conventions of the streaming convolver
//! built on top of it:
//!
//! - [`forward`] is an ordinary unnormalized DFT.
//! - [`inverse`] conjugates, runs the forward pipeline, then scales by
//!   `1/N` while zeroing the imaginary parts of the result.
//!
//! Buffer lengths must be powers of two. Twiddle factors come from the
//! process-wide cache, so after a warm-up transform of a given size the
//! hot path performs no allocation.

use crate::error::{Error, Result};
use crate::math::reverse_bits;
use crate::twiddle;
use num_complex::Complex64;

/// Perform a forward FFT in place via Cooley-Tukey radix-2 DIT.
///
/// A length-2 buffer is returned unchanged; callers work with lengths of
/// at least 4 (the convolver's transform size is never smaller).
///
/// # Errors
/// [`Error::InvalidLength`] when the length is not a power of two.
///
/// # Examples
/// ```
/// use fourier_fft::{fft, Complex64};
///
/// let mut buf: Vec<Complex64> = (1..=4).map(|v| Complex64::new(v as f64, 0.0)).collect();
/// fft::forward(&mut buf)?;
/// assert_eq!(buf[0], Complex64::new(10.0, 0.0));
/// # Ok::<(), fourier_fft::Error>(())
/// ```
pub fn forward(v: &mut [Complex64]) -> Result<()> {
    let n = v.len();
    if n == 2 {
        return Ok(());
    }
    if !n.is_power_of_two() {
        return Err(Error::InvalidLength(n));
    }

    let table = twiddle::twiddle_table(n);

    // Reorder the input in preparation for the butterfly.
    reorder(v);

    let mut size = 2;
    while size <= n {
        let half = size / 2;
        let step = n / size;

        let mut i = 0;
        while i < n {
            let mut k = 0;
            for j in i..i + half {
                let l = j + half;
                let (cos, sin) = (table.cos[k], table.sin[k]);
                // v[l] * (cos - i*sin), the conjugate twiddle
                let tw = Complex64::new(
                    v[l].re * cos + v[l].im * sin,
                    -v[l].re * sin + v[l].im * cos,
                );

                v[l] = v[j] - tw;
                v[j] += tw;

                k += step;
            }
            i += size;
        }
        size *= 2;
    }
    Ok(())
}

/// Perform an inverse FFT in place.
///
/// The result is scaled by `1/N` and its **imaginary parts are zeroed**.
/// The spectra fed to this function within this library are conjugate
/// symmetric (transforms of real signals and their products), so any
/// imaginary component of the inverse is numerical noise. This is not a
/// general-purpose inverse DFT: round-tripping an arbitrary complex
/// spectrum through it discards the imaginary half of the result.
///
/// # Errors
/// [`Error::InvalidLength`] when the length is not a power of two.
pub fn inverse(v: &mut [Complex64]) -> Result<()> {
    for x in v.iter_mut() {
        *x = x.conj();
    }
    forward(v)?;
    normalize(v);
    Ok(())
}

// Scale by the buffer length, discarding imaginary noise.
fn normalize(v: &mut [Complex64]) {
    let scale = 1.0 / v.len() as f64;
    for x in v.iter_mut() {
        *x = Complex64::new(x.re * scale, 0.0);
    }
}

/// Reorder a buffer into bit-reversed index order, the input permutation
/// of the radix-2 DIT butterfly. The length must be a power of two.
pub fn reorder<T>(v: &mut [T]) {
    let n = v.len();
    if n < 2 {
        return;
    }
    debug_assert!(n.is_power_of_two());

    let bits = n.ilog2();
    for i in 0..n {
        let j = reverse_bits(i, bits);
        if j > i {
            v.swap(i, j);
        }
    }
}

/// Convert a spectrum to real magnitudes.
///
/// Magnitudes are scaled by the half-spectrum length `N/2`, so a
/// unit-amplitude carrier sitting exactly on a bin reads `1.0` there
/// (a real carrier splits its energy between the positive-frequency bin
/// and its negative-frequency mirror).
///
/// # Errors
/// [`Error::LengthMismatch`] when `dst` and `src` lengths differ.
pub fn magnitude(dst: &mut [f64], src: &[Complex64]) -> Result<()> {
    if dst.len() != src.len() {
        return Err(Error::LengthMismatch {
            dst: dst.len(),
            src: src.len(),
        });
    }

    let scale = 2.0 / src.len() as f64;
    for (d, s) in dst.iter_mut().zip(src.iter()) {
        *d = s.norm() * scale;
    }
    Ok(())
}
