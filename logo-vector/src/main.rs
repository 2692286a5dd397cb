use anyhow::Context;
use clap::Parser;
use logo_vector::{save_icon, save_lockup, IconStyle};
use std::path::PathBuf;

/// Write a single vector mark, for previewing geometry changes.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Output file
    #[arg(default_value = "image.svg")]
    output: PathBuf,

    /// Canvas size (height, for the lockup)
    #[arg(short, long, default_value = "256")]
    size: u32,

    /// Outline stroke width
    #[arg(long, default_value = "24")]
    stroke: u32,

    /// Render the icon + wordmark lockup instead of the bare icon
    #[arg(long)]
    lockup: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    if args.lockup {
        save_lockup(&args.output, args.size)
    } else {
        let style = IconStyle {
            size: args.size,
            stroke: args.stroke,
            ..Default::default()
        };
        save_icon(&args.output, &style)
    }
    .with_context(|| format!("writing {}", args.output.display()))?;

    log::info!("wrote {}", args.output.display());
    Ok(())
}
