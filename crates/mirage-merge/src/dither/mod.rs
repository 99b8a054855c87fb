//! Binarization: grayscale to strict black/white.
//!
//! # Algorithms
//!
//! - **Ordered**: 4x4 Bayer threshold matrix, no error propagation (default)
//! - **Floyd-Steinberg**: classic error diffusion, 100% nominal propagation
//!   with truncating integer weight shares
//!
//! | Aspect | Ordered | Floyd-Steinberg |
//! |--------|---------|-----------------|
//! | Parallelizable | Yes (per-pixel) | Per frame only |
//! | Pattern | Regular cross-hatch | Organic |
//! | Depends on | value, `x & 3`, `y & 3` | whole preceding scan |
//!
//! Both implement the [`Binarize`] trait and are selected pipeline-wide via
//! [`DitherAlgorithm`].

mod floyd_steinberg;
mod ordered;

pub use floyd_steinberg::FloydSteinberg;
pub use ordered::OrderedDither;

use std::fmt;
use std::str::FromStr;

use crate::api::MergeError;
use crate::frame::{BinaryFrame, Frame};

/// Trait for grayscale-to-binary conversions.
pub trait Binarize {
    /// Convert `frame` to a frame holding only 0 and 255.
    ///
    /// The output has the same dimensions as the input.
    fn binarize(&self, frame: &Frame) -> BinaryFrame;
}

/// Binarization algorithm selection.
///
/// # Example
///
/// ```
/// use mirage_merge::DitherAlgorithm;
///
/// let alg: DitherAlgorithm = "floyd-steinberg".parse().unwrap();
/// assert_eq!(alg, DitherAlgorithm::FloydSteinberg);
/// assert_eq!(alg.to_string(), "floyd-steinberg");
/// assert_eq!(DitherAlgorithm::default(), DitherAlgorithm::Ordered);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DitherAlgorithm {
    /// 4x4 Bayer ordered dithering.
    #[default]
    Ordered,

    /// Floyd-Steinberg error diffusion.
    FloydSteinberg,
}

impl DitherAlgorithm {
    /// Binarize one frame with this algorithm.
    pub fn binarize(&self, frame: &Frame) -> BinaryFrame {
        match self {
            DitherAlgorithm::Ordered => OrderedDither.binarize(frame),
            DitherAlgorithm::FloydSteinberg => FloydSteinberg.binarize(frame),
        }
    }

    /// Canonical lowercase name, accepted by [`FromStr`].
    pub fn name(&self) -> &'static str {
        match self {
            DitherAlgorithm::Ordered => "ordered",
            DitherAlgorithm::FloydSteinberg => "floyd-steinberg",
        }
    }

    /// Whether pixels can be processed independently of each other.
    pub fn is_per_pixel(&self) -> bool {
        matches!(self, DitherAlgorithm::Ordered)
    }
}

impl fmt::Display for DitherAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for DitherAlgorithm {
    type Err = MergeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        if name.eq_ignore_ascii_case("ordered") || name.eq_ignore_ascii_case("bayer") {
            Ok(DitherAlgorithm::Ordered)
        } else if name.eq_ignore_ascii_case("floyd-steinberg")
            || name.eq_ignore_ascii_case("fs")
            || name.eq_ignore_ascii_case("error-diffusion")
        {
            Ok(DitherAlgorithm::FloydSteinberg)
        } else {
            Err(MergeError::UnknownAlgorithm(s.to_string()))
        }
    }
}
