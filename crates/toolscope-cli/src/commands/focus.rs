use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use indicatif::{ProgressBar, ProgressStyle};
use toolscope_core::consts::{DEFAULT_R1, DEFAULT_R2};
use toolscope_core::inspect::score_frame;

#[derive(Args)]
pub struct FocusArgs {
    /// Number of frames to sample
    #[arg(long, default_value = "10")]
    pub samples: usize,

    /// Inner guide ring radius in pixels
    #[arg(long, default_value_t = DEFAULT_R1)]
    pub r1: u32,

    /// Outer guide ring radius in pixels
    #[arg(long, default_value_t = DEFAULT_R2)]
    pub r2: u32,

    /// Camera snapshot URL (overrides settings)
    #[arg(long)]
    pub camera: Option<String>,

    /// Read frames from an image file instead of a camera
    #[arg(long)]
    pub input: Option<PathBuf>,

    /// Settings file (TOML)
    #[arg(long)]
    pub settings: Option<PathBuf>,
}

pub fn run(args: &FocusArgs) -> Result<()> {
    let settings = super::load_settings(args.settings.as_ref())?;
    let source = super::resolve_source(args.input.as_ref(), args.camera.as_deref(), &settings);

    let pb = ProgressBar::new(args.samples as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{msg} [{bar:40}] {pos}/{len}")?
            .progress_chars("=> "),
    );
    pb.set_message("Sampling focus");

    let mut scores = Vec::with_capacity(args.samples);
    for sample in 0..args.samples {
        let frame = source.fetch()?;
        let score = score_frame(&frame, args.r1, args.r2);
        tracing::debug!(sample, score, "Frame scored");
        scores.push((sample, score));
        pb.set_position(sample as u64 + 1);
    }
    pb.finish_with_message("Done");

    scores.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap());

    println!(
        "\nFocus samples (best first, ring {}..{} px):",
        args.r1, args.r2
    );
    println!("{:>5}  {:>8}  {:>12}", "Rank", "Sample", "Variance");
    println!("{}", "-".repeat(29));

    for (rank, (sample, score)) in scores.iter().enumerate() {
        println!("{:>5}  {:>8}  {:>12.2}", rank + 1, sample, score);
    }

    if !scores.is_empty() {
        println!("\nBest variance:  {:.2}", scores.first().unwrap().1);
        println!("Worst variance: {:.2}", scores.last().unwrap().1);
    }

    Ok(())
}
