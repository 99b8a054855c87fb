//! Two-tone frame produced by binarization.

use super::Frame;
use crate::api::MergeError;

/// A frame whose every sample is exactly 0 or 255.
///
/// Produced by a [`Binarize`](crate::dither::Binarize) implementation, or
/// from an existing [`Frame`] through the checked [`TryFrom`] conversion.
///
/// # Example
///
/// ```
/// use mirage_merge::{BinaryFrame, Frame};
///
/// let frame = Frame::new(2, 1, vec![0, 255]).unwrap();
/// let binary = BinaryFrame::try_from(frame).unwrap();
/// assert!(!binary.bit(0, 0));
/// assert!(binary.bit(1, 0));
///
/// let grey = Frame::new(1, 1, vec![128]).unwrap();
/// assert!(BinaryFrame::try_from(grey).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BinaryFrame {
    frame: Frame,
}

impl BinaryFrame {
    /// Wrap a frame already known to be two-tone.
    pub(crate) fn from_two_tone(frame: Frame) -> Self {
        debug_assert!(frame.samples().iter().all(|&s| s == 0 || s == 255));
        Self { frame }
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.frame.width()
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.frame.height()
    }

    #[inline]
    pub fn dimensions(&self) -> (u32, u32) {
        self.frame.dimensions()
    }

    /// Samples, each 0 or 255.
    #[inline]
    pub fn samples(&self) -> &[u8] {
        self.frame.samples()
    }

    /// Whether the pixel at `(x, y)` is white.
    #[inline]
    pub fn bit(&self, x: u32, y: u32) -> bool {
        self.frame.get(x, y) != 0
    }

    /// Whether the pixel at row-major offset `index` is white.
    #[inline]
    pub(crate) fn bit_at(&self, index: usize) -> bool {
        self.frame.samples()[index] != 0
    }

    /// Number of white pixels.
    pub fn white_count(&self) -> usize {
        self.samples().iter().filter(|&&s| s != 0).count()
    }

    pub fn as_frame(&self) -> &Frame {
        &self.frame
    }

    pub fn into_frame(self) -> Frame {
        self.frame
    }
}

impl TryFrom<Frame> for BinaryFrame {
    type Error = MergeError;

    fn try_from(frame: Frame) -> Result<Self, Self::Error> {
        let width = frame.width() as usize;
        if let Some((i, &value)) = frame
            .samples()
            .iter()
            .enumerate()
            .find(|(_, &s)| s != 0 && s != 255)
        {
            return Err(MergeError::NotBinary {
                x: (i % width) as u32,
                y: (i / width) as u32,
                value,
            });
        }
        Ok(Self { frame })
    }
}
