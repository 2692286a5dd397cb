use anyhow::Context;
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use itertools::Itertools;
use logo_kit::kit::PNG_SIZES;
use logo_kit::{generate_with_progress, KitConfig};
use std::path::PathBuf;
use std::time::Instant;

/// Generate the BorrowPower logo kit: SVGs, PNG icons, README and a zip of all of it.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Directory the assets are written to
    #[arg(short, long, default_value = "borrowpower_logo")]
    out_dir: PathBuf,

    /// Path of the zip archive
    #[arg(short, long, default_value = "borrowpower-logo-kit.zip")]
    archive: PathBuf,

    /// PNG icon sizes, comma separated
    #[arg(long, value_delimiter = ',', default_values_t = PNG_SIZES)]
    sizes: Vec<u32>,
}

impl From<Args> for KitConfig {
    fn from(args: Args) -> Self {
        KitConfig {
            out_dir: args.out_dir,
            archive: args.archive,
            png_sizes: args.sizes.into_iter().unique().collect(),
        }
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let config: KitConfig = Args::parse().into();

    let start_time = Instant::now();
    let pb = ProgressBar::new(config.png_sizes.len() as u64).with_style(
        ProgressStyle::with_template("{elapsed_precise} {wide_bar} {pos}/{len} {msg}")?,
    );

    let report = generate_with_progress(&config, &pb)
        .with_context(|| format!("generating kit in {}", config.out_dir.display()))?;
    pb.finish_and_clear();

    println!(
        "{}:\t{:#?}\t{} files\t{} archive entries",
        report.archive.display(),
        start_time.elapsed(),
        report.files.len(),
        report.entries.len()
    );
    Ok(())
}
