use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use gif_mirage::models::{Disposal, MergeConfig};
use gif_mirage::services::{MergePipeline, TracingProgress};
use mirage_merge::{DitherAlgorithm, MergeMode};

#[derive(Parser)]
#[command(name = "gif-mirage")]
#[command(version)]
#[command(about = "Merge two animations into a GIF that shows the cover on light backgrounds and the inner image on dark ones")]
struct Cli {
    /// Image revealed on a dark background
    inner: PathBuf,

    /// Image shown on a light background
    cover: PathBuf,

    /// Output GIF file path
    #[arg(short, long, default_value = "output.gif")]
    output: PathBuf,

    /// YAML configuration file (flags override its values)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Longest side of the inner image after downscaling [default: 500]
    #[arg(long)]
    max_size: Option<u32>,

    /// Maximum number of output frames [default: 100]
    #[arg(long)]
    max_frames: Option<usize>,

    /// Dithering algorithm: ordered or floyd-steinberg [default: ordered]
    #[arg(short, long)]
    dither: Option<DitherAlgorithm>,

    /// Gray level of the transparent mid-tone, 1-254 [default: 100]
    #[arg(long)]
    mid_tone: Option<u8>,

    /// Merge mask S<slope 0-4>W<width 1-4><R|C> [default: S3W2R]
    #[arg(short, long)]
    mode: Option<MergeMode>,

    /// Fixed frame duration in milliseconds [default: longer of the two sources]
    #[arg(long)]
    duration: Option<u32>,

    /// Frame disposal: any, keep, background, previous or 0-3 [default: background]
    #[arg(long)]
    disposal: Option<Disposal>,

    /// Worker threads [default: all cores]
    #[arg(short = 'j', long)]
    threads: Option<usize>,

    /// Do not log progress
    #[arg(long)]
    no_progress: bool,

    /// Print the run report as JSON on stdout
    #[arg(long)]
    json: bool,
}

impl Cli {
    /// Start from the config file (or defaults) and apply flag overrides
    fn merge_config(&self) -> anyhow::Result<MergeConfig> {
        let mut config = match &self.config {
            Some(path) => MergeConfig::load(path)?,
            None => MergeConfig::default(),
        };

        if let Some(v) = self.max_size {
            config.max_size = v;
        }
        if let Some(v) = self.max_frames {
            config.max_frames = v;
        }
        if let Some(v) = self.dither {
            config.dither = v;
        }
        if let Some(v) = self.mid_tone {
            config.mid_tone = v;
        }
        if let Some(v) = self.mode {
            config.mode = v;
        }
        if let Some(v) = self.duration {
            config.duration_ms = Some(v);
        }
        if let Some(v) = self.disposal {
            config.disposal = v;
        }
        if let Some(v) = self.threads {
            config.threads = Some(v);
        }
        if self.no_progress {
            config.progress = false;
        }

        config.validate()?;
        Ok(config)
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "gif_mirage=info".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();

    let config = cli.merge_config().context("Invalid configuration")?;
    tracing::debug!(?config, "Effective configuration");

    let pipeline = MergePipeline::new(config)?.with_progress(TracingProgress::for_merge_run());
    let report = pipeline
        .run(&cli.inner, &cli.cover, &cli.output)
        .with_context(|| {
            format!(
                "Failed to merge {} and {}",
                cli.inner.display(),
                cli.cover.display()
            )
        })?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!(
            "Merged {} ({}x{}, {} frames, {}ms, {} bytes)",
            cli.output.display(),
            report.width,
            report.height,
            report.frames,
            report.duration_ms,
            report.bytes
        );
    }

    Ok(())
}
