// SPDX-License-Identifier: LGPL-3.0-or-later

//! FFT-based uniformly-partitioned convolution (overlap-add method).
//!
//! Implements a frequency-domain convolver that splits a long impulse
//! response into equal partitions and convolves it against an arbitrarily
//! long, chunked stream of real samples.
//!
//! The algorithm:
//! 1. The impulse response is split into partitions of `F - B` samples
//!    (`B` the block size, `F` the transform size), each zero-padded to
//!    `F` and transformed once up front.
//! 2. Input samples accumulate into blocks of `B`; each block is
//!    zero-padded to `F`, transformed, and stored in a ring of past input
//!    spectra.
//! 3. Per block, the current input spectrum is multiplied with the first
//!    impulse partition, older ring entries are multiplied with the
//!    deeper partitions, everything is accumulated, inverse-transformed,
//!    and the tail beyond `B` carries over into the next block
//!    (overlap-add).
//!
//! The contribution of the older ring entries only changes at block
//! boundaries, so it is computed once per block and cached; calls that
//! feed less than a full block reuse it and still produce the same output
//! as one large call.
//!
//! Small blocks (`B <= 128`) use a deeper `4 * B` transform and an
//! oversubscribed input ring for finer-grained delayed-segment lookup;
//! larger blocks use the classical doubled window.
//!
//! # Examples
//! ```
//! use fourier_conv::Convolver;
//!
//! let ir = vec![1.0, 1.0, 1.0, 1.0];
//! let mut conv = Convolver::new(8, &ir)?;
//!
//! let input: Vec<f64> = (1..=8).map(f64::from).collect();
//! let mut output = vec![0.0; 8];
//! conv.convolve(&mut output, &input, 8)?;
//! assert!((output[3] - 10.0).abs() < 1e-9);
//! # Ok::<(), fourier_conv::Error>(())
//! ```

use crate::error::{Error, Result};
use fourier_fft::{complex, fft, Complex64};

/// Maximum impulse response length: 20 seconds at 96 kHz. Longer impulse
/// responses are silently truncated.
pub const MAX_IR_SAMPLES: usize = 20 * 96_000;

/// Streaming FIR convolver using uniformly-partitioned overlap-add in
/// the frequency domain.
///
/// All buffers are allocated at construction and on
/// [`set_impulse_response`](Convolver::set_impulse_response); the
/// [`convolve`](Convolver::convolve) path allocates nothing.
///
/// A convolver is single-stream: calls on one instance are strictly
/// ordered and its state is not safe for concurrent mutation. For
/// parallel streams, construct one convolver per stream; they share the
/// process-wide twiddle tables.
#[derive(Debug, Clone)]
pub struct Convolver {
    /// Processing block size in samples (power of two).
    block_size: usize,
    /// Transform length used for every segment.
    fft_size: usize,

    /// Ring of past input-block spectra; the newest entry is at
    /// `input_segment_pos` and the ring steps backward on block
    /// completion.
    input_segments: Vec<Vec<Complex64>>,
    /// Pre-transformed impulse response partitions. Read-only between
    /// impulse response swaps.
    impulse_segments: Vec<Vec<Complex64>>,
    /// Accumulator for the current block's output spectrum.
    output: Vec<Complex64>,
    /// Cached tail sum: older ring entries against impulse partitions
    /// `1..`, computed once per block.
    temp: Vec<Complex64>,
    /// Time-domain samples of the block under construction, zero-padded
    /// to `fft_size`.
    input: Vec<f64>,
    /// Saved tail of the previous block's inverse transform.
    overlap: Vec<f64>,

    /// Position of the newest segment in the input ring.
    input_segment_pos: usize,
    /// Samples accumulated into the current block so far.
    input_pos: usize,
    /// Interleave lane this instance reads and writes.
    channel: usize,
    /// Interleave stride of the caller's buffers.
    num_channels: usize,
}

impl Convolver {
    /// Create a convolver for a mono (non-interleaved) stream.
    ///
    /// `desired_block_size` is quantized up to the next power of two;
    /// ideally it is the number of samples the caller processes per
    /// [`convolve`](Convolver::convolve) call. Impulse responses longer
    /// than [`MAX_IR_SAMPLES`] are truncated.
    ///
    /// # Errors
    /// [`Error::InvalidBlockSize`] for a zero block size,
    /// [`Error::EmptyImpulseResponse`] for an empty impulse response.
    pub fn new(desired_block_size: usize, ir: &[f64]) -> Result<Self> {
        Self::build(desired_block_size, ir, 0, 1)
    }

    /// Create a convolver targeting one lane of an interleaved stream.
    ///
    /// The convolver reads and writes only the indices of `channel`
    /// within buffers carrying `num_channels` interleaved lanes. Each
    /// lane gets its own convolver; instances can share the caller's
    /// input and output buffers without collision.
    ///
    /// # Errors
    /// [`Error::InvalidChannel`] when `num_channels` is zero or `channel`
    /// is out of range, plus the [`new`](Convolver::new) failure modes.
    pub fn for_channel(
        desired_block_size: usize,
        ir: &[f64],
        channel: usize,
        num_channels: usize,
    ) -> Result<Self> {
        if num_channels < 1 || channel >= num_channels {
            return Err(Error::InvalidChannel {
                channel,
                num_channels,
            });
        }
        Self::build(desired_block_size, ir, channel, num_channels)
    }

    fn build(
        desired_block_size: usize,
        ir: &[f64],
        channel: usize,
        num_channels: usize,
    ) -> Result<Self> {
        if desired_block_size == 0 {
            return Err(Error::InvalidBlockSize);
        }

        let (block_size, fft_size) = partition_sizes(desired_block_size);
        let mut conv = Self {
            block_size,
            fft_size,
            input_segments: Vec::new(),
            impulse_segments: Vec::new(),
            output: vec![Complex64::new(0.0, 0.0); fft_size],
            temp: vec![Complex64::new(0.0, 0.0); fft_size],
            input: vec![0.0; fft_size],
            overlap: vec![0.0; fft_size],
            input_segment_pos: 0,
            input_pos: 0,
            channel,
            num_channels,
        };
        conv.set_impulse_response(ir)?;
        Ok(conv)
    }

    /// The actual processing block size: the requested size rounded up
    /// to a power of two.
    pub fn block_size(&self) -> usize {
        self.block_size
    }

    /// The transform length used for each segment.
    pub fn fft_size(&self) -> usize {
        self.fft_size
    }

    /// Replace the impulse response, keeping the block and transform
    /// sizes chosen at construction.
    ///
    /// Streaming state is reset: the input ring is cleared and the next
    /// [`convolve`](Convolver::convolve) call starts a fresh block.
    /// Callers mixing this into a live stream should swap at block
    /// boundaries.
    ///
    /// Impulse responses longer than [`MAX_IR_SAMPLES`] are truncated;
    /// NaN samples are loaded as zero.
    ///
    /// # Errors
    /// [`Error::EmptyImpulseResponse`] when `ir` has no samples.
    pub fn set_impulse_response(&mut self, ir: &[f64]) -> Result<()> {
        if ir.is_empty() {
            return Err(Error::EmptyImpulseResponse);
        }

        let fft_size = self.fft_size;
        let segment_len = fft_size - self.block_size;
        let ir_size = ir.len().min(MAX_IR_SAMPLES);
        let num_impulse_segments = ir_size / segment_len + 1;
        let num_input_segments = if self.block_size <= 128 {
            3 * num_impulse_segments
        } else {
            num_impulse_segments
        };

        let mut impulse_segments =
            vec![vec![Complex64::new(0.0, 0.0); fft_size]; num_impulse_segments];

        // Split the impulse response into segments and transform each to
        // the frequency domain. The first cell is seeded with a unit
        // impulse before the samples land on top of it.
        for (i, segment) in impulse_segments.iter_mut().enumerate() {
            if i == 0 {
                segment[0] = Complex64::new(1.0, 0.0);
            }

            for j in 0..segment_len {
                let ir_idx = j + i * segment_len;
                if ir_idx < ir.len() {
                    let v = ir[ir_idx];
                    segment[j] = Complex64::new(if v.is_nan() { 0.0 } else { v }, 0.0);
                }
            }

            fft::forward(segment)?;
        }

        self.input_segments = vec![vec![Complex64::new(0.0, 0.0); fft_size]; num_input_segments];
        self.impulse_segments = impulse_segments;
        self.input.fill(0.0);
        self.overlap.fill(0.0);
        self.input_segment_pos = 0;
        self.input_pos = 0;

        Ok(())
    }

    /// Convolve a chunk of input against the loaded impulse response.
    ///
    /// With an interleaved configuration (see
    /// [`for_channel`](Convolver::for_channel)), `input` holds
    /// `num_samples * num_channels` samples and only the configured lane
    /// is read; `output` is written in the same layout, again only on
    /// the configured lane.
    ///
    /// Input positions past `input.len()` are read as zero, so feeding
    /// zero-length input flushes the convolution tail. Output positions
    /// past `output.len()` are skipped, so a caller that does not want
    /// the full `input + ir - 1` tail may pass a shorter buffer.
    ///
    /// The call may span any number of internal blocks; chunked calls
    /// produce the same samples as one large call.
    pub fn convolve(&mut self, output: &mut [f64], input: &[f64], num_samples: usize) -> Result<()> {
        let num_impulse_segments = self.impulse_segments.len();
        let num_input_segments = self.input_segments.len();
        let step = num_input_segments / num_impulse_segments;
        let mut num_processed = 0;

        while num_processed < num_samples {
            let num_to_process =
                (num_samples - num_processed).min(self.block_size - self.input_pos);

            // Stage input samples from the configured lane, zero past the
            // end of the caller's buffer.
            for i in 0..num_to_process {
                let in_idx = self.channel + num_processed + i * self.num_channels;
                self.input[self.input_pos + i] = input.get(in_idx).copied().unwrap_or(0.0);
            }

            let segment = &mut self.input_segments[self.input_segment_pos];
            complex::copy_real(segment, &self.input)?;
            fft::forward(segment)?;

            // The tail sum over older segments only changes when a new
            // block starts; reuse the cached value inside a block.
            if self.input_pos == 0 {
                complex::zero(&mut self.temp);

                let mut index = self.input_segment_pos;
                for i in 1..num_impulse_segments {
                    index += step;
                    if index >= num_input_segments {
                        index -= num_input_segments;
                    }

                    complex::multiply_add(
                        &mut self.temp,
                        &self.input_segments[index],
                        &self.impulse_segments[i],
                    )?;
                }
            }

            complex::copy(&mut self.output, &self.temp)?;
            complex::multiply_add(
                &mut self.output,
                &self.input_segments[self.input_segment_pos],
                &self.impulse_segments[0],
            )?;

            fft::inverse(&mut self.output)?;

            // Emit with the carried overlap; silently skip positions the
            // caller's output buffer cannot hold.
            for i in 0..num_to_process {
                let out_idx = num_processed + self.channel + i * self.num_channels;
                let pos = self.input_pos + i;
                if let Some(slot) = output.get_mut(out_idx) {
                    *slot = self.output[pos].re + self.overlap[pos];
                }
            }

            self.input_pos += num_to_process;

            if self.input_pos == self.block_size {
                self.input_pos = 0;
                self.input.fill(0.0);

                // Overlap reaching past the block end; present only when
                // the transform is deeper than the doubled window.
                for i in 0..self.fft_size - 2 * self.block_size {
                    let idx = self.block_size + i;
                    self.output[idx].re += self.overlap[idx];
                }

                // Save the tail beyond the block as the next overlap.
                for i in 0..self.fft_size - self.block_size {
                    self.overlap[i] = self.output[self.block_size + i].re;
                }

                // Step the ring backward so the newest segment stays at
                // `input_segment_pos`.
                self.input_segment_pos = if self.input_segment_pos > 0 {
                    self.input_segment_pos - 1
                } else {
                    num_input_segments - 1
                };
            }

            num_processed += num_to_process;
        }

        Ok(())
    }
}

/// Quantize the requested block size up to a power of two and choose the
/// transform length: `4 * B` for small blocks (deeper per-partition
/// overlap), `2 * B` for larger ones (the classical doubled window).
fn partition_sizes(desired_block_size: usize) -> (usize, usize) {
    let block_size = desired_block_size.next_power_of_two();
    if block_size <= 128 {
        (block_size, 4 * block_size)
    } else {
        (block_size, 2 * block_size)
    }
}
