//! Black / mid-tone / white palette.

use crate::api::MergeError;

/// Default near-black mid-tone.
pub const DEFAULT_MID_TONE: u8 = 100;

/// Three-entry palette with an engineered mid-tone.
///
/// | Index | Color |
/// |-------|-------|
/// | 0 | `(0, 0, 0)` |
/// | 1 | `(mid, mid, mid)`, transparent |
/// | 2 | `(255, 255, 255)` |
///
/// Built once per merge run and shared read-only by every frame.
///
/// # Example
///
/// ```
/// use mirage_merge::TriTonePalette;
///
/// let palette = TriTonePalette::default();
/// assert_eq!(palette.mid(), 100);
/// assert_eq!(palette.transparent_index(), 1);
/// assert_eq!(&palette.to_color_table(4)[..9], &[0, 0, 0, 100, 100, 100, 255, 255, 255]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TriTonePalette {
    mid: u8,
}

impl TriTonePalette {
    pub const BLACK_INDEX: u8 = 0;
    pub const MID_INDEX: u8 = 1;
    pub const WHITE_INDEX: u8 = 2;
    /// Number of entries in use.
    pub const LEN: usize = 3;

    /// Create a palette around `mid`, which must differ from 0 and 255.
    pub fn new(mid: u8) -> Result<Self, MergeError> {
        if mid == 0 || mid == 255 {
            return Err(MergeError::InvalidMidTone(mid));
        }
        Ok(Self { mid })
    }

    #[inline]
    pub fn mid(&self) -> u8 {
        self.mid
    }

    /// Index the container must declare transparent.
    #[inline]
    pub fn transparent_index(&self) -> u8 {
        Self::MID_INDEX
    }

    /// The three used colors in index order.
    pub fn colors(&self) -> [[u8; 3]; 3] {
        let m = self.mid;
        [[0, 0, 0], [m, m, m], [255, 255, 255]]
    }

    /// Palette index of a merged sample, `None` if the sample is not one of
    /// the three tones.
    #[inline]
    pub fn index_of(&self, sample: u8) -> Option<u8> {
        match sample {
            0 => Some(Self::BLACK_INDEX),
            255 => Some(Self::WHITE_INDEX),
            s if s == self.mid => Some(Self::MID_INDEX),
            _ => None,
        }
    }

    /// Flat `[R, G, B, ...]` table with `entries` slots.
    ///
    /// Slots past the third are zero-filled. `entries` below 3 is raised
    /// to 3.
    pub fn to_color_table(&self, entries: usize) -> Vec<u8> {
        let mut table = vec![0u8; entries.max(Self::LEN) * 3];
        for (slot, rgb) in table.chunks_exact_mut(3).zip(self.colors()) {
            slot.copy_from_slice(&rgb);
        }
        table
    }
}

impl Default for TriTonePalette {
    fn default() -> Self {
        Self {
            mid: DEFAULT_MID_TONE,
        }
    }
}
