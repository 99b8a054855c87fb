use std::path::Path;
use std::sync::Arc;

use mirage_merge::{BinaryFrame, Frame, MergedFrame, MirageMerger, Progress, ProgressCounter};
use rayon::prelude::*;
use serde::Serialize;
use sha2::{Digest, Sha256};

use crate::error::MirageError;
use crate::models::{FrameSequence, MergeConfig, MergedAnimation};
use crate::rendering::encode_gif;
use crate::services::{FrameSource, FrameSynchronizer};

/// Summary of a finished merge run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MergeReport {
    pub width: u32,
    pub height: u32,
    pub frames: usize,
    pub duration_ms: u32,
    /// Size of the encoded GIF
    pub bytes: usize,
    /// Hex SHA-256 of the encoded GIF
    pub sha256: String,
}

/// Decode → synchronize → binarize → merge → encode
pub struct MergePipeline {
    config: MergeConfig,
    merger: MirageMerger,
    pool: rayon::ThreadPool,
    progress: Option<Arc<dyn Progress>>,
}

impl MergePipeline {
    pub fn new(config: MergeConfig) -> Result<Self, MirageError> {
        config.validate()?;
        let merger = MirageMerger::new()
            .mid_tone(config.mid_tone)?
            .algorithm(config.dither)
            .mode(config.mode);
        let pool = build_thread_pool(config.threads)?;

        Ok(Self {
            config,
            merger,
            pool,
            progress: None,
        })
    }

    /// Attach a progress observer. Ignored when `progress` is off in the
    /// config.
    pub fn with_progress(mut self, observer: impl Progress + 'static) -> Self {
        self.progress = Some(Arc::new(observer));
        self
    }

    pub fn config(&self) -> &MergeConfig {
        &self.config
    }

    /// Merge two files into a GIF at `output`.
    ///
    /// The output file is written only once the full GIF is encoded.
    pub fn run(&self, inner: &Path, cover: &Path, output: &Path) -> Result<MergeReport, MirageError> {
        let source = FrameSource::new(self.config.max_frames);
        let inner = source.load(inner)?;
        let cover = source.load(cover)?;

        let animation = self.run_sequences(inner, cover)?;
        let bytes = encode_gif(&animation, self.config.disposal)?;
        std::fs::write(output, &bytes)?;

        let report = MergeReport {
            width: animation.width,
            height: animation.height,
            frames: animation.len(),
            duration_ms: animation.duration_ms,
            bytes: bytes.len(),
            sha256: hex::encode(Sha256::digest(&bytes)),
        };
        tracing::info!(
            output = %output.display(),
            width = report.width,
            height = report.height,
            frames = report.frames,
            duration_ms = report.duration_ms,
            bytes = report.bytes,
            "Wrote mirage GIF"
        );
        Ok(report)
    }

    /// Merge two decoded sequences in memory
    pub fn run_sequences(
        &self,
        inner: FrameSequence,
        cover: FrameSequence,
    ) -> Result<MergedAnimation, MirageError> {
        let synchronizer = FrameSynchronizer::new(self.config.max_size, self.config.max_frames);
        let pair = self.pool.install(|| synchronizer.synchronize(inner, cover))?;
        let count = pair.len();
        let duration_ms = self.config.duration_ms.unwrap_or(pair.duration_ms);

        tracing::info!(
            width = pair.width,
            height = pair.height,
            frames = count,
            duration_ms,
            dither = %self.merger.current_algorithm(),
            "Merging sequences"
        );

        let observer = self.progress.as_deref().filter(|_| self.config.progress);
        // Two binarizations and one merge per output frame
        let counter = ProgressCounter::new(observer, count * 3);

        let (inner_bits, cover_bits) = self.pool.install(|| {
            rayon::join(
                || self.binarize_all(&pair.inner, &counter),
                || self.binarize_all(&pair.cover, &counter),
            )
        });
        let (inner_bits, cover_bits) = (inner_bits?, cover_bits?);

        let frames: Vec<MergedFrame> = self.pool.install(|| {
            inner_bits
                .par_iter()
                .zip(cover_bits.par_iter())
                .map(|(inner, cover)| {
                    let merged = self.merger.merge(inner, cover);
                    counter.tick();
                    merged
                })
                .collect::<Result<Vec<_>, _>>()
        })?;

        Ok(MergedAnimation {
            frames,
            width: pair.width,
            height: pair.height,
            duration_ms,
            palette: *self.merger.current_palette(),
        })
    }

    fn binarize_all(
        &self,
        frames: &[image::RgbaImage],
        counter: &ProgressCounter<'_>,
    ) -> Result<Vec<BinaryFrame>, MirageError> {
        frames
            .par_iter()
            .map(|rgba| -> Result<BinaryFrame, MirageError> {
                let gray = Frame::from_rgba(rgba.width(), rgba.height(), rgba.as_raw())?;
                let bits = self.merger.binarize(&gray);
                counter.tick();
                Ok(bits)
            })
            .collect()
    }
}

fn build_thread_pool(threads: Option<usize>) -> Result<rayon::ThreadPool, MirageError> {
    if threads == Some(0) {
        return Err(MirageError::Config(
            "threads must be at least 1 when set".into(),
        ));
    }

    let mut builder = rayon::ThreadPoolBuilder::new();
    if let Some(n) = threads {
        builder = builder.num_threads(n);
    }
    builder
        .build()
        .map_err(|e| MirageError::Config(format!("failed to build thread pool: {e}")))
}
