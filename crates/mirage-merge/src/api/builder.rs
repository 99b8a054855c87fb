//! MirageMerger builder -- the primary ergonomic entry point for the crate.
//!
//! [`MirageMerger`] bundles the run-wide configuration (palette, algorithm,
//! mask) so every frame of a run is processed identically.

use std::fmt;
use std::sync::Arc;

use crate::api::MergeError;
use crate::dither::DitherAlgorithm;
use crate::frame::{BinaryFrame, Frame};
use crate::merge::{merge_frames, MergeMode, SelectionMask};
use crate::output::MergedFrame;
use crate::palette::TriTonePalette;

/// High-level merge builder.
///
/// # Design
///
/// - Configuration methods consume and return `self` (standard builder pattern)
/// - [`binarize()`](Self::binarize) and [`merge()`](Self::merge) take `&self`,
///   so one merger serves every frame of a run, from any number of threads
/// - No global state: two mergers with different settings can run side by side
///
/// # Example
///
/// ```
/// use mirage_merge::{DitherAlgorithm, Frame, MirageMerger};
///
/// let merger = MirageMerger::new()
///     .mid_tone(80)
///     .unwrap()
///     .algorithm(DitherAlgorithm::FloydSteinberg)
///     .mode("S2W1C".parse().unwrap());
///
/// let inner = merger.binarize(&Frame::filled(3, 3, 10).unwrap());
/// let cover = merger.binarize(&Frame::filled(3, 3, 250).unwrap());
/// let merged = merger.merge(&inner, &cover).unwrap();
/// assert!(merged.samples().iter().all(|&s| s == 0 || s == 80 || s == 255));
/// ```
#[derive(Clone)]
pub struct MirageMerger {
    palette: TriTonePalette,
    algorithm: DitherAlgorithm,
    mask: Arc<dyn SelectionMask>,
    /// Set when the mask is a built-in [`MergeMode`].
    mode: Option<MergeMode>,
}

impl MirageMerger {
    /// Create a merger with defaults: mid-tone 100, ordered dithering,
    /// `S3W2R` mask.
    pub fn new() -> Self {
        let mode = MergeMode::default();
        Self {
            palette: TriTonePalette::default(),
            algorithm: DitherAlgorithm::default(),
            mask: Arc::new(mode),
            mode: Some(mode),
        }
    }

    /// Set the mid-tone. Fails for 0 and 255.
    pub fn mid_tone(mut self, mid: u8) -> Result<Self, MergeError> {
        self.palette = TriTonePalette::new(mid)?;
        Ok(self)
    }

    /// Set the palette directly.
    #[inline]
    pub fn palette(mut self, palette: TriTonePalette) -> Self {
        self.palette = palette;
        self
    }

    /// Set the binarization algorithm.
    #[inline]
    pub fn algorithm(mut self, algorithm: DitherAlgorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    /// Use one of the built-in banded masks.
    pub fn mode(mut self, mode: MergeMode) -> Self {
        self.mask = Arc::new(mode);
        self.mode = Some(mode);
        self
    }

    /// Use a custom mask.
    pub fn mask(mut self, mask: impl SelectionMask + 'static) -> Self {
        self.mask = Arc::new(mask);
        self.mode = None;
        self
    }

    pub fn current_palette(&self) -> &TriTonePalette {
        &self.palette
    }

    pub fn current_algorithm(&self) -> DitherAlgorithm {
        self.algorithm
    }

    /// The built-in mode in use, `None` for a custom mask.
    pub fn current_mode(&self) -> Option<MergeMode> {
        self.mode
    }

    /// Binarize one frame with the configured algorithm.
    pub fn binarize(&self, frame: &Frame) -> BinaryFrame {
        self.algorithm.binarize(frame)
    }

    /// Merge a binarized inner and cover frame.
    pub fn merge(&self, inner: &BinaryFrame, cover: &BinaryFrame) -> Result<MergedFrame, MergeError> {
        merge_frames(inner, cover, self.mask.as_ref(), &self.palette)
    }

    /// Binarize both grayscale frames, then merge them.
    pub fn merge_gray(&self, inner: &Frame, cover: &Frame) -> Result<MergedFrame, MergeError> {
        if inner.dimensions() != cover.dimensions() {
            return Err(MergeError::DimensionMismatch {
                inner: inner.dimensions(),
                cover: cover.dimensions(),
            });
        }
        self.merge(&self.binarize(inner), &self.binarize(cover))
    }
}

impl Default for MirageMerger {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for MirageMerger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mask = match self.mode {
            Some(mode) => mode.to_string(),
            None => "custom".to_string(),
        };
        f.debug_struct("MirageMerger")
            .field("palette", &self.palette)
            .field("algorithm", &self.algorithm)
            .field("mask", &mask)
            .finish()
    }
}
