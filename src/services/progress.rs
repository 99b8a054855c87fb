use mirage_merge::Progress;

/// Progress observer that logs through `tracing` at roughly every tenth of
/// the run, plus the final unit.
#[derive(Debug, Clone, Copy)]
pub struct TracingProgress {
    stage: &'static str,
}

/// Stage label for a whole merge run, which counts both binarizations and
/// the merge of every frame
pub const MERGE_RUN_STAGE: &str = "dither+merge";

impl TracingProgress {
    pub fn new(stage: &'static str) -> Self {
        Self { stage }
    }

    /// Observer for [`MergePipeline`](crate::services::MergePipeline) runs
    pub fn for_merge_run() -> Self {
        Self::new(MERGE_RUN_STAGE)
    }

    pub fn stage(&self) -> &'static str {
        self.stage
    }

    /// Whether `completed` falls on a reporting step
    fn is_step(completed: usize, total: usize) -> bool {
        let step = (total / 10).max(1);
        completed == total || completed % step == 0
    }
}

impl Progress for TracingProgress {
    fn update(&self, completed: usize, total: usize) {
        if Self::is_step(completed, total) {
            tracing::info!(stage = self.stage, completed, total, "Progress");
        } else {
            tracing::trace!(stage = self.stage, completed, total, "Progress");
        }
    }
}
