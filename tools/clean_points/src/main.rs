/// Point list cleaner: drops malformed records and negative heights,
/// rewriting the header as the number of records kept.
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;
use xyz_core::clean::clean;

#[derive(Parser, Debug)]
#[command(name = "clean_points", about = "Remove malformed and negative-height records from an XYZ point list")]
struct Args {
    /// Input point list.
    #[arg(short, long, default_value = "AmesState.xyz")]
    input: PathBuf,

    /// Cleaned output (replaced atomically).
    #[arg(short, long, default_value = "cleaned_AmesState.xyz")]
    output: PathBuf,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let report = clean(&args.input, &args.output)
        .with_context(|| format!("cleaning {} -> {}", args.input.display(), args.output.display()))?;

    for line in report.summary_lines() {
        println!("{line}");
    }
    Ok(())
}
