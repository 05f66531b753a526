use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Args;
use indicatif::{ProgressBar, ProgressStyle};
use toolscope_core::consts::{DEFAULT_R1, DEFAULT_R2};
use toolscope_core::inspect::inspect;

use crate::summary::print_inspection_summary;

#[derive(Args)]
pub struct SnapshotArgs {
    /// Output PNG file
    pub output: PathBuf,

    /// Viewport width in pixels
    #[arg(long, default_value = "640")]
    pub width: u32,

    /// Viewport height in pixels
    #[arg(long, default_value = "480")]
    pub height: u32,

    /// Inner guide ring radius in pixels
    #[arg(long, default_value_t = DEFAULT_R1)]
    pub r1: u32,

    /// Outer guide ring radius in pixels
    #[arg(long, default_value_t = DEFAULT_R2)]
    pub r2: u32,

    /// Camera snapshot URL (overrides settings)
    #[arg(long)]
    pub camera: Option<String>,

    /// Read the frame from an image file instead of a camera
    #[arg(long)]
    pub input: Option<PathBuf>,

    /// Settings file (TOML)
    #[arg(long)]
    pub settings: Option<PathBuf>,
}

pub fn run(args: &SnapshotArgs) -> Result<()> {
    let settings = super::load_settings(args.settings.as_ref())?;
    let source = super::resolve_source(args.input.as_ref(), args.camera.as_deref(), &settings);

    let pb = ProgressBar::new_spinner();
    pb.set_style(ProgressStyle::default_spinner().template("{spinner} {msg}")?);
    pb.set_message(format!("Grabbing frame from {}", source.label()));
    pb.enable_steady_tick(Duration::from_millis(100));

    let inspection = inspect(source.as_ref(), args.width, args.height, args.r1, args.r2)?;

    pb.finish_and_clear();

    let png = inspection.snapshot.encode_png()?;
    std::fs::write(&args.output, &png)
        .with_context(|| format!("Failed to write image to {}", args.output.display()))?;

    print_inspection_summary(&inspection, &source.label(), args.r1, args.r2, &args.output);

    Ok(())
}
