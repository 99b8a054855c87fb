//! Fusing two binary frames into one tri-tone frame.
//!
//! - [`SelectionMask`]: which source controls each pixel
//! - [`MergeMode`]: the built-in family of banded masks
//! - [`merge_frames`]: the per-pixel merge rule

mod engine;
mod mask;

pub use engine::merge_frames;
pub use mask::{BandDirection, MergeMode, SelectionMask};
