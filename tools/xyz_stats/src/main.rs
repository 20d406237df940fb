/// Height summary for an XYZ point list: extremes with their locations,
/// the mean, and the grid shape the points appear to fill.
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;
use xyz_core::stats::stats_file;

#[derive(Parser, Debug)]
#[command(name = "xyz_stats", about = "Report min/max/mean heights of an XYZ point list")]
struct Args {
    /// Point list to summarise.
    input: PathBuf,

    /// Print the full statistics as JSON instead of the text report.
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let stats = stats_file(&args.input).with_context(|| format!("reading {}", args.input.display()))?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
        return Ok(());
    }

    match stats {
        Some(s) => {
            for line in s.report_lines() {
                println!("{line}");
            }
            if let Some(g) = s.grid {
                tracing::info!(rows = g.rows, cols = g.cols, x_step = g.x_step, y_step = g.y_step, "inferred grid");
            }
        }
        None => println!("No data points found in the input."),
    }
    Ok(())
}
