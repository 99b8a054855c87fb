//! The three-tone output palette.
//!
//! Index order is fixed: black, mid-tone, white. The mid-tone entry is the
//! one the container marks as transparent.

mod tritone;

pub use tritone::{TriTonePalette, DEFAULT_MID_TONE};
