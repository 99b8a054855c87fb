//! Output types for the merge stage.
//!
//! [`MergedFrame`] stores tri-tone samples with dimension metadata and the
//! [`TriTonePalette`](crate::palette::TriTonePalette) they were produced
//! with, offering two views:
//!
//! - **Samples** ([`MergedFrame::samples`]): 0 / mid / 255 gray values
//! - **Indices** ([`MergedFrame::indices`]): 0 / 1 / 2 palette indices

mod merged_frame;

pub use merged_frame::MergedFrame;
