//! Floyd-Steinberg error diffusion binarization.
//!
//! Pixels are visited in row-major order. Each is thresholded at 127, and
//! the quantization error is pushed to the not-yet-visited neighbours. A
//! frame has to be processed sequentially; separate frames are independent.

use super::Binarize;
use crate::frame::{BinaryFrame, Frame};

/// Floyd-Steinberg error diffusion to black/white.
///
/// # Algorithm
///
/// ```text
///        X   7
///    3   5   1
/// ```
///
/// Weights: 7/16 right, 3/16 bottom-left, 5/16 bottom, 1/16 bottom-right.
/// Each share is computed as `error * w / 16` in integers, truncating toward
/// zero, and the rounding residue is dropped rather than carried. Neighbours
/// outside the frame are skipped.
///
/// The accumulated value is not clamped, so a long run of error can push a
/// pixel below 0 or above 255 before it is thresholded.
///
/// # Example
///
/// ```
/// use mirage_merge::{Binarize, FloydSteinberg, Frame};
///
/// let frame = Frame::filled(8, 8, 0).unwrap();
/// assert_eq!(FloydSteinberg.binarize(&frame).white_count(), 0);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct FloydSteinberg;

impl Binarize for FloydSteinberg {
    fn binarize(&self, frame: &Frame) -> BinaryFrame {
        let w = frame.width() as usize;
        let h = frame.height() as usize;

        // Working buffer in i32 to hold negative and overflowing error
        let mut buffer: Vec<i32> = frame.samples().iter().map(|&v| v as i32).collect();
        let mut output = vec![0u8; w * h];

        for y in 0..h {
            for x in 0..w {
                let idx = y * w + x;
                let old_val = buffer[idx];
                let new_val = if old_val > 127 { 255 } else { 0 };
                output[idx] = new_val as u8;

                let error = old_val - new_val;
                if x + 1 < w {
                    buffer[idx + 1] += error * 7 / 16;
                }
                if y + 1 < h {
                    if x > 0 {
                        buffer[idx + w - 1] += error * 3 / 16;
                    }
                    buffer[idx + w] += error * 5 / 16;
                    if x + 1 < w {
                        buffer[idx + w + 1] += error / 16;
                    }
                }
            }
        }

        BinaryFrame::from_two_tone(frame.with_samples(output))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_black_and_white() {
        let black = FloydSteinberg.binarize(&Frame::filled(5, 3, 0).unwrap());
        assert_eq!(black.white_count(), 0);

        let white = FloydSteinberg.binarize(&Frame::filled(5, 3, 255).unwrap());
        assert_eq!(white.white_count(), 15);
    }

    #[test]
    fn test_threshold_is_127() {
        let low = FloydSteinberg.binarize(&Frame::filled(1, 1, 127).unwrap());
        assert_eq!(low.samples(), &[0]);
        let high = FloydSteinberg.binarize(&Frame::filled(1, 1, 128).unwrap());
        assert_eq!(high.samples(), &[255]);
    }

    #[test]
    fn test_known_row() {
        // Single row: only the right neighbour receives error.
        // 100 -> 0 (err 100, +43), 143 -> 255 (err -112, -49),
        // 51 -> 0 (err 51, +22), 122 -> 0
        let frame = Frame::new(4, 1, vec![100, 100, 100, 100]).unwrap();
        let binary = FloydSteinberg.binarize(&frame);
        assert_eq!(binary.samples(), &[0, 255, 0, 0]);
    }

    #[test]
    fn test_truncation_toward_zero() {
        // Error 1 yields 7/16 == 0 in integers: nothing reaches the neighbour.
        let frame = Frame::new(2, 1, vec![1, 127]).unwrap();
        assert_eq!(FloydSteinberg.binarize(&frame).samples(), &[0, 0]);

        // Error -1 must truncate toward zero as well, not floor to -1.
        let frame = Frame::new(2, 1, vec![254, 128]).unwrap();
        // 254 -> 255 gives error -1, share -7/16 == 0, so 128 stays above 127
        assert_eq!(FloydSteinberg.binarize(&frame).samples(), &[255, 255]);
    }

    #[test]
    fn test_error_reaches_next_row() {
        // 2x2, top-left 120 pushes 5/16 of its error straight down.
        // 120 * 5 / 16 = 37, so 100 + 37 = 137 turns white.
        let frame = Frame::new(2, 2, vec![120, 0, 100, 0]).unwrap();
        let binary = FloydSteinberg.binarize(&frame);
        assert!(!binary.bit(0, 0));
        assert!(binary.bit(0, 1));
    }

    #[test]
    fn test_mid_grey_roughly_half_white() {
        let binary = FloydSteinberg.binarize(&Frame::filled(16, 16, 128).unwrap());
        let ratio = binary.white_count() as f32 / 256.0;
        assert!((ratio - 0.5).abs() < 0.1, "white ratio {ratio}");
    }
}
