use std::fmt;
use std::path::Path;
use std::str::FromStr;

use mirage_merge::{DitherAlgorithm, MergeMode, DEFAULT_MID_TONE};
use serde::{Deserialize, Serialize};

use crate::error::MirageError;

/// Merge run configuration, loaded from YAML and overridden by CLI flags
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MergeConfig {
    /// Longest side of the inner image after downscaling
    pub max_size: u32,

    /// Cap on the number of output frames
    pub max_frames: usize,

    /// Binarization algorithm
    #[serde(with = "text")]
    pub dither: DitherAlgorithm,

    /// Gray level of the transparent palette entry
    pub mid_tone: u8,

    /// Selection mask, `S<slope>W<width><R|C>`
    #[serde(with = "text")]
    pub mode: MergeMode,

    /// Fixed frame duration in milliseconds, replacing the longer native
    /// duration of the two sources
    pub duration_ms: Option<u32>,

    /// GIF disposal method written on every frame
    pub disposal: Disposal,

    /// Worker threads for the frame-parallel stages (all cores if unset)
    pub threads: Option<usize>,

    /// Report dither/merge progress
    pub progress: bool,
}

impl Default for MergeConfig {
    fn default() -> Self {
        Self {
            max_size: 500,
            max_frames: 100,
            dither: DitherAlgorithm::default(),
            mid_tone: DEFAULT_MID_TONE,
            mode: MergeMode::default(),
            duration_ms: None,
            disposal: Disposal::default(),
            threads: None,
            progress: true,
        }
    }
}

impl MergeConfig {
    /// Load and validate configuration from a YAML file
    pub fn load(path: &Path) -> Result<Self, MirageError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| MirageError::Config(format!("{}: {e}", path.display())))?;
        let config: Self = serde_yaml::from_str(&content)
            .map_err(|e| MirageError::Config(format!("{}: {e}", path.display())))?;
        config.validate()?;
        tracing::info!(
            path = %path.display(),
            max_size = config.max_size,
            max_frames = config.max_frames,
            dither = %config.dither,
            mode = %config.mode,
            "Loaded configuration"
        );
        Ok(config)
    }

    /// Parse and validate configuration from a YAML string
    pub fn from_yaml(content: &str) -> Result<Self, MirageError> {
        let config: Self =
            serde_yaml::from_str(content).map_err(|e| MirageError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values no merge run can work with
    pub fn validate(&self) -> Result<(), MirageError> {
        if self.max_size == 0 {
            return Err(MirageError::Config("max_size must be at least 1".into()));
        }
        if self.max_frames == 0 {
            return Err(MirageError::Config("max_frames must be at least 1".into()));
        }
        if self.mid_tone == 0 || self.mid_tone == 255 {
            return Err(MirageError::Config(format!(
                "mid_tone {} must differ from 0 and 255",
                self.mid_tone
            )));
        }
        if self.threads == Some(0) {
            return Err(MirageError::Config(
                "threads must be at least 1 when set".into(),
            ));
        }
        Ok(())
    }
}

/// What a viewer does with a frame before drawing the next one
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Disposal {
    /// No disposal specified
    Any,
    /// Leave the frame in place
    Keep,
    /// Restore the frame area to the background
    #[default]
    Background,
    /// Restore what was there before the frame
    Previous,
}

impl Disposal {
    pub fn name(&self) -> &'static str {
        match self {
            Disposal::Any => "any",
            Disposal::Keep => "keep",
            Disposal::Background => "background",
            Disposal::Previous => "previous",
        }
    }

    /// GIF graphic control extension code (0-3)
    pub fn code(&self) -> u8 {
        match self {
            Disposal::Any => 0,
            Disposal::Keep => 1,
            Disposal::Background => 2,
            Disposal::Previous => 3,
        }
    }
}

impl fmt::Display for Disposal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Accepts the names above or the numeric codes 0-3
impl FromStr for Disposal {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "0" | "any" | "none" => Ok(Disposal::Any),
            "1" | "keep" => Ok(Disposal::Keep),
            "2" | "background" => Ok(Disposal::Background),
            "3" | "previous" => Ok(Disposal::Previous),
            other => Err(format!(
                "unknown disposal {other:?} (expected any, keep, background, previous or 0-3)"
            )),
        }
    }
}

impl From<Disposal> for gif::DisposalMethod {
    fn from(d: Disposal) -> Self {
        match d {
            Disposal::Any => gif::DisposalMethod::Any,
            Disposal::Keep => gif::DisposalMethod::Keep,
            Disposal::Background => gif::DisposalMethod::Background,
            Disposal::Previous => gif::DisposalMethod::Previous,
        }
    }
}

/// Serde adapter for core types that round-trip through `Display`/`FromStr`
mod text {
    use std::fmt::Display;
    use std::str::FromStr;

    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<T: Display, S: Serializer>(value: &T, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(value)
    }

    pub fn deserialize<'de, T, D>(deserializer: D) -> Result<T, D::Error>
    where
        T: FromStr,
        T::Err: Display,
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(de::Error::custom)
    }
}
