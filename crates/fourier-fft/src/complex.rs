// SPDX-License-Identifier: LGPL-3.0-or-later

//! Bulk arithmetic on complex buffers.
//!
//! These are the inner loops of the frequency-domain convolver: whole
//! spectra are multiplied, accumulated, and copied per block. Each entry
//! point validates buffer lengths and forwards to a loop dispatched
//! through `multiversion`.

use crate::error::{Error, Result};
use multiversion::multiversion;
use num_complex::Complex64;

#[multiversion(targets("x86_64+avx2+fma", "x86_64+avx", "x86_64+sse4.1", "aarch64+neon",))]
fn multiply_add_loop(dst: &mut [Complex64], a: &[Complex64], b: &[Complex64]) {
    for i in 0..dst.len() {
        dst[i] += a[i] * b[i];
    }
}

#[multiversion(targets("x86_64+avx2+fma", "x86_64+avx", "x86_64+sse4.1", "aarch64+neon",))]
fn copy_real_loop(dst: &mut [Complex64], src: &[f64]) {
    for i in 0..dst.len() {
        dst[i] = Complex64::new(src[i], 0.0);
    }
}

/// Multiply-accumulate: `dst[i] += a[i] * b[i]`.
///
/// # Errors
/// [`Error::LengthMismatch`] when the buffer lengths disagree.
pub fn multiply_add(dst: &mut [Complex64], a: &[Complex64], b: &[Complex64]) -> Result<()> {
    if a.len() != dst.len() {
        return Err(Error::LengthMismatch {
            dst: dst.len(),
            src: a.len(),
        });
    }
    if b.len() != dst.len() {
        return Err(Error::LengthMismatch {
            dst: dst.len(),
            src: b.len(),
        });
    }
    multiply_add_loop(dst, a, b);
    Ok(())
}

/// Copy one complex buffer into another.
///
/// # Errors
/// [`Error::LengthMismatch`] when the buffer lengths disagree.
pub fn copy(dst: &mut [Complex64], src: &[Complex64]) -> Result<()> {
    if src.len() != dst.len() {
        return Err(Error::LengthMismatch {
            dst: dst.len(),
            src: src.len(),
        });
    }
    dst.copy_from_slice(src);
    Ok(())
}

/// Copy a real buffer into a complex buffer, zeroing the imaginary parts.
///
/// # Errors
/// [`Error::LengthMismatch`] when the buffer lengths disagree.
pub fn copy_real(dst: &mut [Complex64], src: &[f64]) -> Result<()> {
    if src.len() != dst.len() {
        return Err(Error::LengthMismatch {
            dst: dst.len(),
            src: src.len(),
        });
    }
    copy_real_loop(dst, src);
    Ok(())
}

/// Zero a complex buffer.
pub fn zero(dst: &mut [Complex64]) {
    dst.fill(Complex64::new(0.0, 0.0));
}
