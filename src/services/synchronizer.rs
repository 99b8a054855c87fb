use image::imageops::{self, FilterType};
use image::RgbaImage;
use rayon::prelude::*;

use crate::error::MirageError;
use crate::models::FrameSequence;

/// Inner and cover frames brought to one size, one frame count and one
/// frame duration
#[derive(Debug, Clone)]
pub struct SyncedPair {
    pub inner: Vec<RgbaImage>,
    pub cover: Vec<RgbaImage>,
    pub width: u32,
    pub height: u32,
    pub duration_ms: u32,
}

impl SyncedPair {
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

/// Resizes, crops and loops two sequences until they line up frame for frame
#[derive(Debug, Clone, Copy)]
pub struct FrameSynchronizer {
    max_size: u32,
    max_frames: usize,
}

impl FrameSynchronizer {
    pub fn new(max_size: u32, max_frames: usize) -> Self {
        Self {
            max_size,
            max_frames,
        }
    }

    pub fn synchronize(
        &self,
        inner: FrameSequence,
        cover: FrameSequence,
    ) -> Result<SyncedPair, MirageError> {
        let (inner_w, inner_h) = inner.dimensions().ok_or(MirageError::Geometry {
            width: 0,
            height: 0,
        })?;
        let (cover_w, cover_h) = cover.dimensions().ok_or(MirageError::Geometry {
            width: 0,
            height: 0,
        })?;

        let (width, height) = fit_within(inner_w, inner_h, self.max_size)?;
        let crop = cover_crop(cover_w, cover_h, width, height)?;
        let count = self.frame_count(inner.len(), cover.len());

        tracing::debug!(
            inner = ?(inner_w, inner_h),
            cover = ?(cover_w, cover_h),
            output = ?(width, height),
            crop = ?crop,
            frames = count,
            "Synchronizing sequences"
        );

        // Only the frames the loop will actually show need resizing
        let inner_frames: Vec<RgbaImage> = inner
            .frames
            .into_par_iter()
            .take(count)
            .map(|f| resize_exact(&f, width, height))
            .collect();
        let cover_frames: Vec<RgbaImage> = cover
            .frames
            .into_par_iter()
            .take(count)
            .map(|f| {
                let (x, y, w, h) = crop;
                let cropped = imageops::crop_imm(&f, x, y, w, h).to_image();
                resize_exact(&cropped, width, height)
            })
            .collect();

        Ok(SyncedPair {
            inner: wrap_to(&inner_frames, count),
            cover: wrap_to(&cover_frames, count),
            width,
            height,
            duration_ms: inner.duration_ms.max(cover.duration_ms),
        })
    }

    /// Output frame count: the longer source, capped
    pub fn frame_count(&self, inner_len: usize, cover_len: usize) -> usize {
        inner_len.max(cover_len).min(self.max_frames)
    }
}

/// Shrink `(width, height)` so neither side exceeds `max_size`, keeping the
/// aspect ratio. Never enlarges, and never shrinks a side below one pixel.
pub fn fit_within(width: u32, height: u32, max_size: u32) -> Result<(u32, u32), MirageError> {
    if width == 0 || height == 0 {
        return Err(MirageError::Geometry { width, height });
    }
    if width <= max_size && height <= max_size {
        return Ok((width, height));
    }

    let (w, h, m) = (width as u64, height as u64, max_size as u64);
    let (fw, fh) = if w >= h {
        (m, (h * m + w / 2) / w)
    } else {
        ((w * m + h / 2) / h, m)
    };
    // A thin strip keeps at least one pixel across
    Ok(((fw as u32).max(1), (fh as u32).max(1)))
}

/// Centred crop `(x, y, width, height)` of a `cover_w x cover_h` frame
/// matching the aspect ratio of `target_w x target_h`.
///
/// The crop keeps the full extent of one axis and trims the other.
pub fn cover_crop(
    cover_w: u32,
    cover_h: u32,
    target_w: u32,
    target_h: u32,
) -> Result<(u32, u32, u32, u32), MirageError> {
    if cover_w == 0 || cover_h == 0 {
        return Err(MirageError::Geometry {
            width: cover_w,
            height: cover_h,
        });
    }

    let cover_ratio = cover_w as f64 / cover_h as f64;
    let target_ratio = target_w as f64 / target_h as f64;

    let crop = if target_ratio > cover_ratio {
        let new_h = ((cover_w as f64 / target_ratio) as u32).min(cover_h);
        let top = (cover_h - new_h) / 2;
        let bottom = (cover_h + new_h) / 2;
        (0, top, cover_w, bottom - top)
    } else {
        let new_w = ((cover_h as f64 * target_ratio) as u32).min(cover_w);
        let left = (cover_w - new_w) / 2;
        let right = (cover_w + new_w) / 2;
        (left, 0, right - left, cover_h)
    };

    if crop.2 == 0 || crop.3 == 0 {
        return Err(MirageError::Geometry {
            width: crop.2,
            height: crop.3,
        });
    }
    Ok(crop)
}

fn resize_exact(frame: &RgbaImage, width: u32, height: u32) -> RgbaImage {
    if frame.dimensions() == (width, height) {
        frame.clone()
    } else {
        imageops::resize(frame, width, height, FilterType::Lanczos3)
    }
}

/// Repeat `frames` end to end and cut at `count`
fn wrap_to(frames: &[RgbaImage], count: usize) -> Vec<RgbaImage> {
    frames.iter().cycle().take(count).cloned().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;
    use pretty_assertions::assert_eq;

    fn solid(width: u32, height: u32, level: u8) -> RgbaImage {
        RgbaImage::from_pixel(width, height, Rgba([level, level, level, 255]))
    }

    fn sequence(width: u32, height: u32, count: usize, duration_ms: u32) -> FrameSequence {
        let frames = (0..count).map(|i| solid(width, height, i as u8 * 10)).collect();
        FrameSequence::new(frames, duration_ms)
    }

    fn levels(frames: &[RgbaImage]) -> Vec<u8> {
        frames.iter().map(|f| f.get_pixel(0, 0)[0]).collect()
    }

    #[test]
    fn test_fit_within() {
        assert_eq!(fit_within(100, 50, 500).unwrap(), (100, 50));
        assert_eq!(fit_within(1000, 500, 500).unwrap(), (500, 250));
        assert_eq!(fit_within(300, 900, 500).unwrap(), (167, 500));
        assert_eq!(fit_within(640, 480, 100).unwrap(), (100, 75));
        assert!(matches!(
            fit_within(0, 10, 500),
            Err(MirageError::Geometry { .. })
        ));
    }

    #[test]
    fn test_fit_within_keeps_thin_strips() {
        assert_eq!(fit_within(1000, 1, 10).unwrap(), (10, 1));
        assert_eq!(fit_within(3, 2000, 100).unwrap(), (1, 100));
        // Cover is cropped to a 10:1 strip and scaled to match
        let sync = FrameSynchronizer::new(10, 1);
        let pair = sync
            .synchronize(
                FrameSequence::new(vec![solid(1000, 1, 0)], 0),
                FrameSequence::new(vec![solid(40, 40, 255)], 0),
            )
            .unwrap();
        assert_eq!((pair.width, pair.height), (10, 1));
        assert_eq!(pair.cover[0].dimensions(), (10, 1));
    }

    #[test]
    fn test_cover_crop_trims_height() {
        // Wide inner, square cover: keep width, crop height to 100 / 2 = 50
        assert_eq!(cover_crop(100, 100, 200, 100).unwrap(), (0, 25, 100, 50));
    }

    #[test]
    fn test_cover_crop_trims_width() {
        // Tall inner, square cover: keep height, crop width to 100 * 0.5 = 50
        assert_eq!(cover_crop(100, 100, 50, 100).unwrap(), (25, 0, 50, 100));
    }

    #[test]
    fn test_cover_crop_odd_remainder() {
        // 101 * (1 / 2) = 50 rows, centred as rows 25..75
        assert_eq!(cover_crop(101, 101, 2, 1).unwrap(), (0, 25, 101, 50));
        // Same ratio keeps everything
        assert_eq!(cover_crop(80, 60, 40, 30).unwrap(), (0, 0, 80, 60));
    }

    #[test]
    fn test_inner_shorter_wraps() {
        let sync = FrameSynchronizer::new(500, 10);
        let pair = sync
            .synchronize(sequence(8, 8, 3, 40), sequence(8, 8, 5, 60))
            .unwrap();
        assert_eq!(pair.len(), 5);
        assert_eq!(levels(&pair.inner), vec![0, 10, 20, 0, 10]);
        assert_eq!(levels(&pair.cover), vec![0, 10, 20, 30, 40]);
        assert_eq!(pair.duration_ms, 60);
    }

    #[test]
    fn test_capped_by_max_frames() {
        let sync = FrameSynchronizer::new(500, 10);
        let pair = sync
            .synchronize(sequence(8, 8, 20, 100), sequence(8, 8, 3, 20))
            .unwrap();
        assert_eq!(pair.len(), 10);
        assert_eq!(pair.cover.len(), 10);
        assert_eq!(levels(&pair.inner), (0..10).map(|i| i * 10).collect::<Vec<u8>>());
        assert_eq!(levels(&pair.cover), vec![0, 10, 20, 0, 10, 20, 0, 10, 20, 0]);
        assert_eq!(pair.duration_ms, 100);
    }

    #[test]
    fn test_cover_matches_inner_size() {
        let sync = FrameSynchronizer::new(40, 5);
        let pair = sync
            .synchronize(sequence(80, 60, 1, 0), sequence(33, 77, 2, 0))
            .unwrap();
        assert_eq!((pair.width, pair.height), (40, 30));
        for frame in pair.inner.iter().chain(&pair.cover) {
            assert_eq!(frame.dimensions(), (40, 30));
        }
        assert_eq!(pair.len(), 2);
    }

    #[test]
    fn test_solid_levels_survive_resize() {
        let sync = FrameSynchronizer::new(16, 1);
        let inner = FrameSequence::new(vec![solid(64, 32, 200)], 0);
        let cover = FrameSequence::new(vec![solid(50, 50, 30)], 0);
        let pair = sync.synchronize(inner, cover).unwrap();
        assert!(pair.inner[0].pixels().all(|p| p[0] == 200));
        assert!(pair.cover[0].pixels().all(|p| p[0] == 30));
    }

    #[test]
    fn test_empty_sequence_is_geometry_error() {
        let sync = FrameSynchronizer::new(16, 1);
        let err = sync
            .synchronize(FrameSequence::new(Vec::new(), 0), sequence(4, 4, 1, 0))
            .unwrap_err();
        assert!(matches!(err, MirageError::Geometry { .. }));
    }
}
