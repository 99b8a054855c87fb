//! Grayscale frame and color reduction.

use crate::api::MergeError;

/// A grayscale frame, one `u8` sample per pixel in row-major order.
///
/// Width and height are always non-zero and `samples.len() == width * height`.
///
/// # Example
///
/// ```
/// use mirage_merge::Frame;
///
/// let frame = Frame::new(2, 1, vec![0, 255]).unwrap();
/// assert_eq!(frame.get(1, 0), 255);
/// assert!(Frame::new(2, 2, vec![0; 3]).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    width: u32,
    height: u32,
    samples: Vec<u8>,
}

impl Frame {
    /// Create a frame from raw gray samples.
    pub fn new(width: u32, height: u32, samples: Vec<u8>) -> Result<Self, MergeError> {
        check_geometry(width, height, samples.len(), 1)?;
        Ok(Self {
            width,
            height,
            samples,
        })
    }

    /// Create a frame where every sample has the same value.
    pub fn filled(width: u32, height: u32, value: u8) -> Result<Self, MergeError> {
        let len = (width as usize) * (height as usize);
        Self::new(width, height, vec![value; len])
    }

    /// Reduce RGB triples to gray.
    pub fn from_rgb(width: u32, height: u32, rgb: &[u8]) -> Result<Self, MergeError> {
        check_geometry(width, height, rgb.len(), 3)?;
        let samples = rgb.chunks_exact(3).map(|p| luma(p[0], p[1], p[2])).collect();
        Ok(Self {
            width,
            height,
            samples,
        })
    }

    /// Reduce RGBA quadruples to gray, alpha-compositing against white.
    ///
    /// Fully transparent pixels become white, so empty regions of an
    /// animation frame read as background rather than as ink.
    pub fn from_rgba(width: u32, height: u32, rgba: &[u8]) -> Result<Self, MergeError> {
        check_geometry(width, height, rgba.len(), 4)?;
        let samples = rgba
            .chunks_exact(4)
            .map(|p| {
                let (r, g, b, a) = (p[0], p[1], p[2], p[3]);
                match a {
                    255 => luma(r, g, b),
                    0 => 255,
                    _ => luma(over_white(r, a), over_white(g, a), over_white(b, a)),
                }
            })
            .collect();
        Ok(Self {
            width,
            height,
            samples,
        })
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// `(width, height)`
    #[inline]
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    #[inline]
    pub fn samples(&self) -> &[u8] {
        &self.samples
    }

    /// A frame of the same size holding `samples`.
    pub(crate) fn with_samples(&self, samples: Vec<u8>) -> Frame {
        debug_assert_eq!(samples.len(), self.samples.len());
        Frame {
            width: self.width,
            height: self.height,
            samples,
        }
    }

    pub fn into_samples(self) -> Vec<u8> {
        self.samples
    }

    /// Sample at `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics if the coordinate lies outside the frame.
    #[inline]
    pub fn get(&self, x: u32, y: u32) -> u8 {
        assert!(x < self.width && y < self.height, "({x}, {y}) out of bounds");
        self.samples[y as usize * self.width as usize + x as usize]
    }
}

fn check_geometry(
    width: u32,
    height: u32,
    len: usize,
    channels: usize,
) -> Result<(), MergeError> {
    let expected = (width as usize) * (height as usize) * channels;
    if width == 0 || height == 0 || len != expected {
        return Err(MergeError::Geometry {
            width,
            height,
            samples: len / channels,
        });
    }
    Ok(())
}

/// BT.601 luma in 16-bit fixed point, rounded.
#[inline]
fn luma(r: u8, g: u8, b: u8) -> u8 {
    ((r as u32 * 19595 + g as u32 * 38470 + b as u32 * 7471 + 0x8000) >> 16) as u8
}

#[inline]
fn over_white(c: u8, a: u8) -> u8 {
    let a = a as u16;
    ((c as u16 * a + 255 * (255 - a)) / 255) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_wrong_length() {
        let err = Frame::new(3, 2, vec![0; 5]).unwrap_err();
        assert_eq!(
            err,
            MergeError::Geometry {
                width: 3,
                height: 2,
                samples: 5
            }
        );
    }

    #[test]
    fn test_new_rejects_empty_dimensions() {
        assert!(Frame::new(0, 4, Vec::new()).is_err());
        assert!(Frame::new(4, 0, Vec::new()).is_err());
        assert!(Frame::filled(0, 0, 10).is_err());
    }

    #[test]
    fn test_get_is_row_major() {
        let frame = Frame::new(3, 2, vec![0, 1, 2, 3, 4, 5]).unwrap();
        assert_eq!(frame.get(0, 0), 0);
        assert_eq!(frame.get(2, 0), 2);
        assert_eq!(frame.get(0, 1), 3);
        assert_eq!(frame.get(2, 1), 5);
    }

    #[test]
    fn test_luma_extremes_and_grey() {
        assert_eq!(luma(0, 0, 0), 0);
        assert_eq!(luma(255, 255, 255), 255);
        // Neutral grey maps to itself
        for v in [1u8, 17, 100, 128, 200, 254] {
            assert_eq!(luma(v, v, v), v);
        }
    }

    #[test]
    fn test_luma_weights_green_heaviest() {
        assert!(luma(0, 255, 0) > luma(255, 0, 0));
        assert!(luma(255, 0, 0) > luma(0, 0, 255));
        assert_eq!(luma(255, 0, 0), 76);
        assert_eq!(luma(0, 255, 0), 150);
        assert_eq!(luma(0, 0, 255), 29);
    }

    #[test]
    fn test_from_rgb() {
        let frame = Frame::from_rgb(2, 1, &[0, 0, 0, 255, 255, 255]).unwrap();
        assert_eq!(frame.samples(), &[0, 255]);
        assert!(Frame::from_rgb(2, 1, &[0, 0, 0]).is_err());
    }

    #[test]
    fn test_from_rgba_composites_against_white() {
        let rgba = [
            0, 0, 0, 255, // opaque black
            0, 0, 0, 0, // transparent
            0, 0, 0, 128, // half-covered black
        ];
        let frame = Frame::from_rgba(3, 1, &rgba).unwrap();
        assert_eq!(frame.get(0, 0), 0);
        assert_eq!(frame.get(1, 0), 255);
        assert_eq!(frame.get(2, 0), 127);
    }
}
