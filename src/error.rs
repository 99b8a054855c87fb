use std::path::PathBuf;

use mirage_merge::MergeError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MirageError {
    #[error("Failed to decode {}: {reason}", path.display())]
    Decode { path: PathBuf, reason: String },

    #[error("Degenerate geometry: {width}x{height}")]
    Geometry { width: u32, height: u32 },

    #[error(
        "Frame size mismatch: inner {}x{}, cover {}x{}",
        inner.0,
        inner.1,
        cover.0,
        cover.1
    )]
    DimensionMismatch { inner: (u32, u32), cover: (u32, u32) },

    #[error("GIF encode error: {0}")]
    Encode(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Merge error: {0}")]
    Merge(MergeError),
}

impl MirageError {
    pub(crate) fn decode(path: impl Into<PathBuf>, reason: impl ToString) -> Self {
        MirageError::Decode {
            path: path.into(),
            reason: reason.to_string(),
        }
    }
}

impl From<MergeError> for MirageError {
    fn from(e: MergeError) -> Self {
        match e {
            MergeError::DimensionMismatch { inner, cover } => {
                MirageError::DimensionMismatch { inner, cover }
            }
            MergeError::Geometry { width, height, .. } => MirageError::Geometry { width, height },
            other => MirageError::Merge(other),
        }
    }
}

impl From<gif::EncodingError> for MirageError {
    fn from(e: gif::EncodingError) -> Self {
        MirageError::Encode(e.to_string())
    }
}
