//! Unified error type for the mirage-merge public API.
//!
//! [`MergeError`] covers every failure the core can report, for
//! convenient `?` propagation in application code.

use std::fmt;

/// Unified error type for the mirage-merge public API.
///
/// # Example
///
/// ```
/// use mirage_merge::{MergeError, TriTonePalette};
///
/// fn palette_for(mid: u8) -> Result<TriTonePalette, MergeError> {
///     let palette = TriTonePalette::new(mid)?;
///     Ok(palette)
/// }
///
/// assert!(palette_for(100).is_ok());
/// assert!(palette_for(255).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MergeError {
    /// Inner and cover frames handed to the merge have different sizes.
    DimensionMismatch {
        /// Inner frame `(width, height)`
        inner: (u32, u32),
        /// Cover frame `(width, height)`
        cover: (u32, u32),
    },
    /// A sample buffer cannot describe a frame of the given size, or the
    /// size itself is empty.
    Geometry {
        /// Requested width
        width: u32,
        /// Requested height
        height: u32,
        /// Number of samples supplied
        samples: usize,
    },
    /// A frame claimed to be binary holds a value other than 0 or 255.
    NotBinary {
        /// Column of the offending sample
        x: u32,
        /// Row of the offending sample
        y: u32,
        /// The offending value
        value: u8,
    },
    /// The mid-tone collides with black or white.
    InvalidMidTone(u8),
    /// A merge mode string or parameter is out of range.
    InvalidMergeMode(String),
    /// Unknown dithering algorithm name.
    UnknownAlgorithm(String),
}

impl fmt::Display for MergeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MergeError::DimensionMismatch { inner, cover } => write!(
                f,
                "frame size mismatch: inner is {}x{}, cover is {}x{}",
                inner.0, inner.1, cover.0, cover.1
            ),
            MergeError::Geometry {
                width,
                height,
                samples,
            } => write!(
                f,
                "invalid frame geometry: {}x{} with {} samples",
                width, height, samples
            ),
            MergeError::NotBinary { x, y, value } => {
                write!(f, "sample {} at ({}, {}) is neither 0 nor 255", value, x, y)
            }
            MergeError::InvalidMidTone(mid) => {
                write!(f, "mid-tone {} must differ from 0 and 255", mid)
            }
            MergeError::InvalidMergeMode(reason) => write!(f, "invalid merge mode: {}", reason),
            MergeError::UnknownAlgorithm(name) => {
                write!(f, "unknown dithering algorithm: {}", name)
            }
        }
    }
}

impl std::error::Error for MergeError {}
