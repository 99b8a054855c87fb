pub mod config;
pub mod sequence;

pub use config::{Disposal, MergeConfig};
pub use sequence::{FrameSequence, MergedAnimation};
