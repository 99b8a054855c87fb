use std::io::Cursor;
use std::path::Path;

use image::codecs::gif::GifDecoder;
use image::codecs::png::PngDecoder;
use image::codecs::webp::WebPDecoder;
use image::{AnimationDecoder, ImageFormat, RgbaImage};

use crate::error::MirageError;
use crate::models::FrameSequence;

/// Decodes source images into RGBA frame sequences.
///
/// Animated GIF, WebP and APNG yield every composited frame; any other
/// format `image` can read yields a single frame.
#[derive(Debug, Clone, Copy)]
pub struct FrameSource {
    frame_limit: usize,
}

impl FrameSource {
    /// Decode at most `frame_limit` frames per source.
    ///
    /// Frames past the output frame cap are never used, so there is no
    /// point decoding them.
    pub fn new(frame_limit: usize) -> Self {
        Self {
            frame_limit: frame_limit.max(1),
        }
    }

    /// Read and decode a file
    pub fn load(&self, path: &Path) -> Result<FrameSequence, MirageError> {
        let bytes = std::fs::read(path).map_err(|e| MirageError::decode(path, e))?;
        self.decode(&bytes, path)
    }

    /// Decode an in-memory file. `origin` is only used in errors and logs.
    pub fn decode(&self, bytes: &[u8], origin: &Path) -> Result<FrameSequence, MirageError> {
        let format = image::guess_format(bytes).map_err(|e| MirageError::decode(origin, e))?;

        let (frames, duration_ms) = match format {
            ImageFormat::Gif => {
                let decoder =
                    GifDecoder::new(Cursor::new(bytes)).map_err(|e| MirageError::decode(origin, e))?;
                self.collect(decoder, origin)?
            }
            ImageFormat::WebP => {
                let decoder = WebPDecoder::new(Cursor::new(bytes))
                    .map_err(|e| MirageError::decode(origin, e))?;
                if decoder.has_animation() {
                    self.collect(decoder, origin)?
                } else {
                    (vec![still(bytes, format, origin)?], 0)
                }
            }
            ImageFormat::Png => {
                let decoder =
                    PngDecoder::new(Cursor::new(bytes)).map_err(|e| MirageError::decode(origin, e))?;
                if decoder.is_apng().map_err(|e| MirageError::decode(origin, e))? {
                    let apng = decoder.apng().map_err(|e| MirageError::decode(origin, e))?;
                    self.collect(apng, origin)?
                } else {
                    (vec![still(bytes, format, origin)?], 0)
                }
            }
            _ => (vec![still(bytes, format, origin)?], 0),
        };

        if frames.is_empty() {
            return Err(MirageError::decode(origin, "no frames"));
        }

        let (width, height) = frames[0].dimensions();
        tracing::info!(
            source = %origin.display(),
            format = ?format,
            frames = frames.len(),
            width,
            height,
            duration_ms,
            "Decoded source"
        );

        Ok(FrameSequence::new(frames, duration_ms))
    }

    fn collect<'a>(
        &self,
        decoder: impl AnimationDecoder<'a>,
        origin: &Path,
    ) -> Result<(Vec<RgbaImage>, u32), MirageError> {
        let frames = decoder
            .into_frames()
            .take(self.frame_limit)
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| MirageError::decode(origin, e))?;

        let duration_ms = frames.first().map_or(0, |f| {
            let (numer, denom) = f.delay().numer_denom_ms();
            if denom == 0 {
                0
            } else {
                numer / denom
            }
        });

        Ok((frames.into_iter().map(|f| f.into_buffer()).collect(), duration_ms))
    }
}

fn still(bytes: &[u8], format: ImageFormat, origin: &Path) -> Result<RgbaImage, MirageError> {
    image::load_from_memory_with_format(bytes, format)
        .map(|img| img.to_rgba8())
        .map_err(|e| MirageError::decode(origin, e))
}
