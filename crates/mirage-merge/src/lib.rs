//! mirage-merge: tri-tone merging for dual-appearance ("mirage") images
//!
//! This library holds the pixel-level core of the mirage pipeline: it turns
//! two grayscale frames into strictly black/white frames, fuses them into a
//! single frame made of three tones, and describes the palette that makes the
//! result show one picture on a light background and another on a dark one.
//!
//! Decoding, resizing and container encoding live in the calling
//! application; this crate only sees in-memory frames.
//!
//! # Quick Start
//!
//! The [`MirageMerger`] builder is the primary entry point:
//!
//! ```
//! use mirage_merge::{Frame, MirageMerger};
//!
//! let inner = Frame::filled(4, 4, 30).unwrap();
//! let cover = Frame::filled(4, 4, 220).unwrap();
//!
//! let merger = MirageMerger::new();
//! let merged = merger.merge_gray(&inner, &cover).unwrap();
//!
//! assert_eq!(merged.width(), 4);
//! assert!(merged
//!     .samples()
//!     .iter()
//!     .all(|&s| s == 0 || s == merger.current_palette().mid() || s == 255));
//! ```
//!
//! # Pipeline
//!
//! ```text
//! Frame (gray)  --Binarize-->  BinaryFrame (0 / 255)
//!                                   |
//!     inner BinaryFrame ----+       |
//!                           v       v
//!                 merge_frames(mask, palette)
//!                           |
//!                           v
//!              MergedFrame (0 / MID / 255)  --indices()-->  0 / 1 / 2
//! ```
//!
//! # The Merge Rule
//!
//! A [`SelectionMask`] splits the pixel grid into "cover" and "inner" cells.
//! At a cover cell the cover bit decides: white becomes the mid-tone, black
//! becomes white. At an inner cell the inner bit decides: black becomes the
//! mid-tone, white becomes black. The mid-tone is marked transparent in the
//! output palette, so it takes on whatever background the viewer shows the
//! image against. On white the cover silhouette survives; on black the inner
//! one does.
//!
//! # Binarization
//!
//! Two algorithms are available via [`DitherAlgorithm`]:
//!
//! - Ordered (4x4 Bayer matrix): per-pixel, parallel-friendly (default)
//! - Floyd-Steinberg error diffusion: sequential within a frame

pub mod api;
pub mod dither;
pub mod frame;
pub mod merge;
pub mod output;
pub mod palette;
pub mod progress;


pub use api::{MergeError, MirageMerger};
pub use dither::{Binarize, DitherAlgorithm, FloydSteinberg, OrderedDither};
pub use frame::{BinaryFrame, Frame};
pub use merge::{merge_frames, BandDirection, MergeMode, SelectionMask};
pub use output::MergedFrame;
pub use palette::{TriTonePalette, DEFAULT_MID_TONE};
pub use progress::{NoProgress, Progress, ProgressCounter};
