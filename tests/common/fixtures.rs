//! Test fixtures: scratch directories and generated source animations.

use std::borrow::Cow;
use std::path::{Path, PathBuf};

use mirage_merge::{Frame, MirageMerger};
use tempfile::TempDir;

/// Scratch directory that is removed when dropped
pub struct Workspace {
    dir: TempDir,
}

impl Workspace {
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().expect("Failed to create temp dir"),
        }
    }

    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    /// Write a GIF with one solid gray frame per level
    pub fn solid_gif(&self, name: &str, width: u16, height: u16, levels: &[u8], delay_cs: u16) -> PathBuf {
        let path = self.path(name);
        std::fs::write(&path, solid_gif_bytes(width, height, levels, delay_cs))
            .expect("Failed to write fixture");
        path
    }

    pub fn write(&self, name: &str, contents: impl AsRef<[u8]>) -> PathBuf {
        let path = self.path(name);
        std::fs::write(&path, contents).expect("Failed to write fixture");
        path
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }
}

/// Encode solid gray frames with a full 256-level gray palette
pub fn solid_gif_bytes(width: u16, height: u16, levels: &[u8], delay_cs: u16) -> Vec<u8> {
    let palette: Vec<u8> = (0..=255u8).flat_map(|v| [v, v, v]).collect();
    let mut buf = Vec::new();
    {
        let mut encoder =
            gif::Encoder::new(&mut buf, width, height, &palette).expect("encoder");
        encoder.set_repeat(gif::Repeat::Infinite).expect("repeat");
        for &level in levels {
            let frame = gif::Frame {
                width,
                height,
                delay: delay_cs,
                buffer: Cow::Owned(vec![level; width as usize * height as usize]),
                ..Default::default()
            };
            encoder.write_frame(&frame).expect("frame");
        }
    }
    buf
}

/// Palette indices the default merger produces for one pair of solid levels
pub fn expected_indices(width: u32, height: u32, inner: u8, cover: u8) -> Vec<u8> {
    expected_indices_with(&MirageMerger::new(), width, height, inner, cover)
}

pub fn expected_indices_with(
    merger: &MirageMerger,
    width: u32,
    height: u32,
    inner: u8,
    cover: u8,
) -> Vec<u8> {
    merger
        .merge_gray(
            &Frame::filled(width, height, inner).unwrap(),
            &Frame::filled(width, height, cover).unwrap(),
        )
        .unwrap()
        .indices()
}
