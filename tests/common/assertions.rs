//! Assertion helpers for tests.

use pretty_assertions::assert_eq;

/// A GIF read back with raw palette indices
pub struct DecodedGif {
    pub width: u16,
    pub height: u16,
    pub palette: Vec<u8>,
    pub repeat: gif::Repeat,
    pub frames: Vec<gif::Frame<'static>>,
}

/// Decode a GIF without applying its palette
pub fn decode_gif(bytes: &[u8]) -> DecodedGif {
    let mut options = gif::DecodeOptions::new();
    options.set_color_output(gif::ColorOutput::Indexed);
    let mut decoder = options.read_info(bytes).expect("Output is not a GIF");
    let palette = decoder
        .global_palette()
        .expect("Output has no global color table")
        .to_vec();
    let mut frames = Vec::new();
    while let Some(frame) = decoder.read_next_frame().expect("Corrupt GIF frame") {
        frames.push(frame.clone());
    }
    DecodedGif {
        width: decoder.width(),
        height: decoder.height(),
        palette,
        repeat: decoder.repeat(),
        frames,
    }
}

/// Assert the container-level properties every mirage GIF shares
pub fn assert_mirage_gif(gif: &DecodedGif, mid: u8, delay_cs: u16, dispose: gif::DisposalMethod) {
    assert_eq!(
        gif.palette,
        vec![0, 0, 0, mid, mid, mid, 255, 255, 255, 0, 0, 0],
        "Unexpected global color table"
    );
    assert_eq!(gif.repeat, gif::Repeat::Infinite, "GIF should loop forever");
    assert!(!gif.frames.is_empty(), "GIF has no frames");
    for (i, frame) in gif.frames.iter().enumerate() {
        assert_eq!(frame.transparent, Some(1), "frame {i} transparency");
        assert_eq!(frame.delay, delay_cs, "frame {i} delay");
        assert_eq!(frame.dispose, dispose, "frame {i} disposal");
        assert_eq!((frame.left, frame.top), (0, 0), "frame {i} offset");
        assert_eq!((frame.width, frame.height), (gif.width, gif.height), "frame {i} size");
        assert!(
            frame.buffer.iter().all(|&idx| idx < 3),
            "frame {i} uses an index outside the tri-tone palette"
        );
    }
}
