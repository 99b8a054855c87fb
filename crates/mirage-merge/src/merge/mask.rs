//! Spatial selection masks.
//!
//! A mask answers, for each coordinate, whether the cover or the inner
//! image controls the pixel. It is a pure function of `(x, y)`: no storage,
//! recomputed per pixel.

use std::fmt;
use std::str::FromStr;

use crate::api::MergeError;

/// Decides per pixel whether the cover source is in control.
///
/// Any `Fn(u32, u32) -> bool` closure is a mask:
///
/// ```
/// use mirage_merge::SelectionMask;
///
/// let checkerboard = |x: u32, y: u32| (x + y) % 2 == 0;
/// assert!(checkerboard.is_cover(0, 0));
/// assert!(!checkerboard.is_cover(1, 0));
/// ```
pub trait SelectionMask: Send + Sync {
    /// `true` if the cover frame controls `(x, y)`.
    fn is_cover(&self, x: u32, y: u32) -> bool;
}

impl<F> SelectionMask for F
where
    F: Fn(u32, u32) -> bool + Send + Sync,
{
    #[inline]
    fn is_cover(&self, x: u32, y: u32) -> bool {
        self(x, y)
    }
}

/// Axis along which [`MergeMode`] bands run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BandDirection {
    /// Bands advance with `x`, sheared by `y / slope`.
    Row,
    /// Bands advance with `y`, sheared by `x / slope`.
    Column,
}

/// Banded selection mask, written `S<slope>W<width><R|C>`.
///
/// With `period = 2 * width`:
///
/// | slope | Row | Column |
/// |-------|-----|--------|
/// | 0 | `y % period < width` | `x % period < width` |
/// | n | `(y / n + x) % period < width` | `(x / n + y) % period < width` |
///
/// Half of every period is cover-controlled. The default `S3W2R` is
/// `((y / 3) + x) % 4 < 2`: diagonal bands two pixels wide that step one
/// pixel sideways every three rows.
///
/// # Example
///
/// ```
/// use mirage_merge::{MergeMode, SelectionMask};
///
/// let mode: MergeMode = "S3W2R".parse().unwrap();
/// assert_eq!(mode, MergeMode::default());
/// for y in 0..12 {
///     for x in 0..12 {
///         assert_eq!(mode.is_cover(x, y), (y / 3 + x) % 4 < 2);
///     }
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MergeMode {
    slope: u32,
    width: u32,
    direction: BandDirection,
}

impl MergeMode {
    /// Largest accepted slope.
    pub const MAX_SLOPE: u32 = 4;
    /// Largest accepted band width.
    pub const MAX_WIDTH: u32 = 4;

    /// Create a mode. `slope` must be in `0..=4`, `width` in `1..=4`.
    pub fn new(slope: u32, width: u32, direction: BandDirection) -> Result<Self, MergeError> {
        if slope > Self::MAX_SLOPE {
            return Err(MergeError::InvalidMergeMode(format!(
                "slope {} exceeds {}",
                slope,
                Self::MAX_SLOPE
            )));
        }
        if width == 0 || width > Self::MAX_WIDTH {
            return Err(MergeError::InvalidMergeMode(format!(
                "width {} outside 1..={}",
                width,
                Self::MAX_WIDTH
            )));
        }
        Ok(Self {
            slope,
            width,
            direction,
        })
    }

    pub fn slope(&self) -> u32 {
        self.slope
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn direction(&self) -> BandDirection {
        self.direction
    }
}

impl Default for MergeMode {
    fn default() -> Self {
        Self {
            slope: 3,
            width: 2,
            direction: BandDirection::Row,
        }
    }
}

impl SelectionMask for MergeMode {
    #[inline]
    fn is_cover(&self, x: u32, y: u32) -> bool {
        let period = self.width * 2;
        let band = match (self.slope, self.direction) {
            (0, BandDirection::Row) => y,
            (0, BandDirection::Column) => x,
            (slope, BandDirection::Row) => y / slope + x,
            (slope, BandDirection::Column) => x / slope + y,
        };
        band % period < self.width
    }
}

impl fmt::Display for MergeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let dir = match self.direction {
            BandDirection::Row => 'R',
            BandDirection::Column => 'C',
        };
        write!(f, "S{}W{}{}", self.slope, self.width, dir)
    }
}

impl FromStr for MergeMode {
    type Err = MergeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bad = || {
            MergeError::InvalidMergeMode(format!("{s:?} does not match S<0-4>W<1-4><R|C>"))
        };

        let upper = s.trim().to_ascii_uppercase();
        let chars: Vec<char> = upper.chars().collect();
        if chars.len() != 5 || chars[0] != 'S' || chars[2] != 'W' {
            return Err(bad());
        }
        let slope = chars[1].to_digit(10).ok_or_else(bad)?;
        let width = chars[3].to_digit(10).ok_or_else(bad)?;
        let direction = match chars[4] {
            'R' => BandDirection::Row,
            'C' => BandDirection::Column,
            _ => return Err(bad()),
        };
        Self::new(slope, width, direction)
    }
}
