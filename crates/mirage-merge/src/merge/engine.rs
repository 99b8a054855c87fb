//! The per-pixel merge rule.

use super::SelectionMask;
use crate::api::MergeError;
use crate::frame::BinaryFrame;
use crate::output::MergedFrame;
use crate::palette::TriTonePalette;

/// Merge one inner and one cover frame into a tri-tone frame.
///
/// For each pixel, independently:
///
/// 1. `is_cover = mask.is_cover(x, y)`
/// 2. `bit` is the cover pixel if `is_cover`, else the inner pixel
///    (white = `true`)
/// 3. `bit == is_cover` → mid-tone
/// 4. otherwise white where `is_cover`, black elsewhere
///
/// So cover cells show white cover pixels as mid-tone and black ones as
/// white; inner cells show black inner pixels as mid-tone and white ones as
/// black.
///
/// # Errors
///
/// [`MergeError::DimensionMismatch`] if the frames differ in size.
///
/// # Example
///
/// ```
/// use mirage_merge::{merge_frames, Binarize, Frame, MergeMode, OrderedDither, TriTonePalette};
///
/// let white = OrderedDither.binarize(&Frame::filled(2, 2, 255).unwrap());
/// let palette = TriTonePalette::default();
/// let merged = merge_frames(&white, &white, &MergeMode::default(), &palette).unwrap();
/// assert_eq!(merged.samples(), &[100, 100, 100, 100]);
/// ```
pub fn merge_frames(
    inner: &BinaryFrame,
    cover: &BinaryFrame,
    mask: &dyn SelectionMask,
    palette: &TriTonePalette,
) -> Result<MergedFrame, MergeError> {
    if inner.dimensions() != cover.dimensions() {
        return Err(MergeError::DimensionMismatch {
            inner: inner.dimensions(),
            cover: cover.dimensions(),
        });
    }

    let (width, height) = inner.dimensions();
    let w = width as usize;
    let mid = palette.mid();

    let samples = (0..w * height as usize)
        .map(|i| {
            let is_cover = mask.is_cover((i % w) as u32, (i / w) as u32);
            let bit = if is_cover {
                cover.bit_at(i)
            } else {
                inner.bit_at(i)
            };
            if bit == is_cover {
                mid
            } else if is_cover {
                255
            } else {
                0
            }
        })
        .collect();

    Ok(MergedFrame::new(samples, width, height, *palette))
}
