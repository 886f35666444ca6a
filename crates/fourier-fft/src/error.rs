// SPDX-License-Identifier: LGPL-3.0-or-later

//! Error handling for transform primitives.

use std::fmt;

/// A specialized Result type for transform operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for transform operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// Transform buffer length is not a power of two.
    InvalidLength(usize),

    /// Buffer lengths disagree in a bulk operation.
    LengthMismatch { dst: usize, src: usize },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidLength(len) => {
                write!(f, "buffer length {} is not a power of two", len)
            }
            Error::LengthMismatch { dst, src } => {
                write!(f, "buffer lengths do not match: dst={} src={}", dst, src)
            }
        }
    }
}

impl std::error::Error for Error {}
