pub mod frame_source;
pub mod pipeline;
pub mod progress;
pub mod synchronizer;

pub use frame_source::FrameSource;
pub use pipeline::{MergePipeline, MergeReport};
pub use progress::TracingProgress;
pub use synchronizer::{FrameSynchronizer, SyncedPair};
