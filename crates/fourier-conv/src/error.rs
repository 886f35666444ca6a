// SPDX-License-Identifier: LGPL-3.0-or-later

//! Error handling for the convolution crate.

use std::fmt;

/// A specialized Result type for convolution operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for convolution operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// Convolver constructed with a zero block size.
    InvalidBlockSize,

    /// Impulse response with no samples.
    EmptyImpulseResponse,

    /// Interleaved-channel configuration out of range.
    InvalidChannel { channel: usize, num_channels: usize },

    /// Transform failure or internal buffer-length mismatch. Not
    /// reachable through a successfully constructed convolver.
    Fft(fourier_fft::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidBlockSize => write!(f, "block size cannot be zero"),
            Error::EmptyImpulseResponse => {
                write!(f, "impulse response length cannot be zero")
            }
            Error::InvalidChannel {
                channel,
                num_channels,
            } => write!(
                f,
                "channel {} out of range for {} interleaved channel(s)",
                channel, num_channels
            ),
            Error::Fft(err) => write!(f, "transform failed: {}", err),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Fft(err) => Some(err),
            _ => None,
        }
    }
}

impl From<fourier_fft::Error> for Error {
    fn from(err: fourier_fft::Error) -> Self {
        Error::Fft(err)
    }
}
