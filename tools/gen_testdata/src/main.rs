/// Fixture generator: a small grid with a known minimum (0), maximum (10)
/// and mean height (1), for checking terrain statistics code.
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;
use xyz_core::fixture::{generate, FixtureParams};

#[derive(Parser, Debug)]
#[command(name = "gen_testdata", about = "Write a small XYZ fixture with engineered min/max/mean heights")]
struct Args {
    /// Output point list.
    #[arg(short, long, default_value = "test_partb.xyz")]
    output: PathBuf,

    /// Grid columns.
    #[arg(long, default_value = "4")]
    width: usize,

    /// Grid rows.
    #[arg(long, default_value = "4")]
    height: usize,
}

impl Args {
    fn params(&self) -> FixtureParams {
        FixtureParams { width: self.width, height: self.height, ..FixtureParams::default() }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    generate(&args.params(), &args.output)
        .with_context(|| format!("writing fixture to {}", args.output.display()))?;
    Ok(())
}
