//! MergedFrame: one tri-tone frame of the output animation.

use crate::palette::TriTonePalette;

/// A merged frame whose every sample is 0, the palette mid-tone, or 255.
///
/// Created once per frame index by [`merge_frames`](crate::merge_frames)
/// and handed to the container encoder, which only needs
/// [`indices()`](MergedFrame::indices).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergedFrame {
    samples: Vec<u8>,
    width: u32,
    height: u32,
    palette: TriTonePalette,
}

impl MergedFrame {
    pub(crate) fn new(samples: Vec<u8>, width: u32, height: u32, palette: TriTonePalette) -> Self {
        debug_assert_eq!(samples.len(), width as usize * height as usize);
        debug_assert!(samples.iter().all(|&s| palette.index_of(s).is_some()));
        Self {
            samples,
            width,
            height,
            palette,
        }
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Gray samples, row-major.
    #[inline]
    pub fn samples(&self) -> &[u8] {
        &self.samples
    }

    #[inline]
    pub fn palette(&self) -> &TriTonePalette {
        &self.palette
    }

    /// Palette indices, row-major: 0 black, 1 mid-tone, 2 white.
    pub fn indices(&self) -> Vec<u8> {
        let mid = self.palette.mid();
        self.samples
            .iter()
            .map(|&s| match s {
                0 => TriTonePalette::BLACK_INDEX,
                s if s == mid => TriTonePalette::MID_INDEX,
                _ => TriTonePalette::WHITE_INDEX,
            })
            .collect()
    }

    /// Count of samples per palette index.
    pub fn histogram(&self) -> [usize; 3] {
        let mut counts = [0usize; 3];
        for idx in self.indices() {
            counts[idx as usize] += 1;
        }
        counts
    }
}
