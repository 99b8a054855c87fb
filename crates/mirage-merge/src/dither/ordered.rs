//! Bayer ordered dithering.
//!
//! Each pixel is compared against a threshold picked from a 4x4 matrix by
//! `(y & 3, x & 3)`. No state carries between pixels, so the output at a
//! coordinate depends only on that pixel's value and its position modulo 4.

use super::Binarize;
use crate::frame::{BinaryFrame, Frame};

/// 4x4 Bayer index matrix, row `y & 3`, column `x & 3`.
///
/// Thresholds are `MATRIX[y][x] * 255 / 16`, i.e. 0, 15.94, ..., 239.06.
pub const BAYER_4X4: [[u8; 4]; 4] = [
    [0, 8, 2, 10],
    [12, 4, 14, 6],
    [3, 11, 1, 9],
    [15, 7, 13, 5],
];

/// Ordered dithering with the [`BAYER_4X4`] matrix.
///
/// A pixel turns white when its value is strictly above the cell threshold.
/// Pure black therefore stays black everywhere, and any value above 239
/// turns white everywhere.
///
/// # Example
///
/// ```
/// use mirage_merge::{Binarize, Frame, OrderedDither};
///
/// let frame = Frame::filled(4, 4, 255).unwrap();
/// let binary = OrderedDither.binarize(&frame);
/// assert_eq!(binary.white_count(), 16);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct OrderedDither;

impl OrderedDither {
    /// Threshold for the cell at `(x, y)`, in the 0..255 range.
    pub fn threshold(x: u32, y: u32) -> f32 {
        BAYER_4X4[(y & 3) as usize][(x & 3) as usize] as f32 * 255.0 / 16.0
    }

    /// Binarize one sample at `(x, y)`.
    ///
    /// `value > m * 255 / 16` is evaluated as `16 * value > 255 * m` to stay
    /// exact in integers.
    #[inline]
    pub fn sample(value: u8, x: u32, y: u32) -> u8 {
        let m = BAYER_4X4[(y & 3) as usize][(x & 3) as usize] as u32;
        if value as u32 * 16 > m * 255 {
            255
        } else {
            0
        }
    }
}

impl Binarize for OrderedDither {
    fn binarize(&self, frame: &Frame) -> BinaryFrame {
        let width = frame.width() as usize;
        let samples = frame
            .samples()
            .iter()
            .enumerate()
            .map(|(i, &value)| Self::sample(value, (i % width) as u32, (i / width) as u32))
            .collect();
        BinaryFrame::from_two_tone(frame.with_samples(samples))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matrix_is_permutation() {
        let mut seen = [false; 16];
        for row in BAYER_4X4 {
            for m in row {
                assert!(!seen[m as usize], "duplicate entry {m}");
                seen[m as usize] = true;
            }
        }
    }

    #[test]
    fn test_thresholds() {
        assert_eq!(OrderedDither::threshold(0, 0), 0.0);
        assert_eq!(OrderedDither::threshold(1, 0), 127.5);
        assert_eq!(OrderedDither::threshold(0, 3), 239.0625);
        // Period 4 on both axes
        assert_eq!(OrderedDither::threshold(5, 6), OrderedDither::threshold(1, 2));
    }

    #[test]
    fn test_strict_comparison() {
        // Threshold at (0,0) is 0: value 0 stays black, 1 turns white
        assert_eq!(OrderedDither::sample(0, 0, 0), 0);
        assert_eq!(OrderedDither::sample(1, 0, 0), 255);
        // Threshold at (1,0) is 127.5
        assert_eq!(OrderedDither::sample(127, 1, 0), 0);
        assert_eq!(OrderedDither::sample(128, 1, 0), 255);
        // Threshold at (0,3) is 239.0625
        assert_eq!(OrderedDither::sample(239, 0, 3), 0);
        assert_eq!(OrderedDither::sample(240, 0, 3), 255);
    }

    #[test]
    fn test_solid_black_and_white() {
        let black = OrderedDither.binarize(&Frame::filled(8, 8, 0).unwrap());
        assert_eq!(black.white_count(), 0);

        let white = OrderedDither.binarize(&Frame::filled(8, 8, 255).unwrap());
        assert_eq!(white.white_count(), 64);
    }

    #[test]
    fn test_mid_grey_fills_half_of_each_tile() {
        // 128 exceeds the thresholds for m = 0..=8 (127.5 included)
        let binary = OrderedDither.binarize(&Frame::filled(4, 4, 128).unwrap());
        assert_eq!(binary.white_count(), 9);
    }

    #[test]
    fn test_grey_levels_are_monotonic() {
        let mut previous = 0;
        for v in (0..=255u32).step_by(5) {
            let binary = OrderedDither.binarize(&Frame::filled(4, 4, v as u8).unwrap());
            assert!(binary.white_count() >= previous);
            previous = binary.white_count();
        }
    }
}
