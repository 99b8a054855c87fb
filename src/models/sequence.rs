use image::RgbaImage;
use mirage_merge::{MergedFrame, TriTonePalette};

/// Decoded frames of one source plus its native frame duration
#[derive(Debug, Clone)]
pub struct FrameSequence {
    pub frames: Vec<RgbaImage>,
    /// Display time of the first frame in milliseconds (0 for stills)
    pub duration_ms: u32,
}

impl FrameSequence {
    pub fn new(frames: Vec<RgbaImage>, duration_ms: u32) -> Self {
        Self {
            frames,
            duration_ms,
        }
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Dimensions of the first frame
    pub fn dimensions(&self) -> Option<(u32, u32)> {
        self.frames.first().map(|f| f.dimensions())
    }
}

/// Merged tri-tone frames ready for encoding
#[derive(Debug, Clone)]
pub struct MergedAnimation {
    pub frames: Vec<MergedFrame>,
    pub width: u32,
    pub height: u32,
    /// Uniform per-frame duration in milliseconds
    pub duration_ms: u32,
    pub palette: TriTonePalette,
}

impl MergedAnimation {
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }
}
