use std::borrow::Cow;

use gif::{Encoder, Frame, Repeat};

use crate::error::MirageError;
use crate::models::{Disposal, MergedAnimation};

/// Entries in the global color table: the three tones padded to the
/// smallest size GIF can declare
pub const COLOR_TABLE_ENTRIES: usize = 4;

/// Encodes a merged animation as a looping GIF89a.
///
/// Every frame covers the full canvas, uses the global tri-tone table, marks
/// the mid-tone index transparent and carries the same delay. The whole
/// file is built in memory; nothing touches disk here.
pub fn encode_gif(animation: &MergedAnimation, disposal: Disposal) -> Result<Vec<u8>, MirageError> {
    if animation.is_empty() {
        return Err(MirageError::Encode("no frames to encode".into()));
    }
    let width = u16::try_from(animation.width).map_err(|_| too_large(animation))?;
    let height = u16::try_from(animation.height).map_err(|_| too_large(animation))?;
    let delay = u16::try_from(animation.duration_ms / 10).map_err(|_| {
        MirageError::Encode(format!(
            "frame duration {}ms exceeds the GIF delay field",
            animation.duration_ms
        ))
    })?;

    let table = animation.palette.to_color_table(COLOR_TABLE_ENTRIES);
    let transparent = animation.palette.transparent_index();

    let mut buf = Vec::new();
    let mut encoder = Encoder::new(&mut buf, width, height, &table)?;
    encoder.set_repeat(Repeat::Infinite)?;

    for merged in &animation.frames {
        if merged.dimensions() != (animation.width, animation.height) {
            return Err(MirageError::Encode(format!(
                "frame is {}x{}, canvas is {}x{}",
                merged.width(),
                merged.height(),
                animation.width,
                animation.height
            )));
        }
        let frame = Frame {
            width,
            height,
            delay,
            dispose: disposal.into(),
            transparent: Some(transparent),
            buffer: Cow::Owned(merged.indices()),
            ..Frame::default()
        };
        encoder.write_frame(&frame)?;
    }
    encoder.into_inner()?;

    tracing::debug!(
        frames = animation.len(),
        width,
        height,
        delay_cs = delay,
        disposal = %disposal,
        bytes = buf.len(),
        "Encoded GIF"
    );
    Ok(buf)
}

fn too_large(animation: &MergedAnimation) -> MirageError {
    MirageError::Encode(format!(
        "{}x{} exceeds the GIF canvas limit of {}",
        animation.width,
        animation.height,
        u16::MAX
    ))
}
