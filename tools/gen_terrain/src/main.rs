/// Synthetic terrain generator: a dense grid of layered sinusoidal heights
/// written as an XYZ point list.
///
/// The header is the grid width by default, not the record count; pass
/// `--header point-count` for consumers that expect the count.
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;
use xyz_core::terrain::{generate, TerrainParams};
use xyz_core::HeaderConvention;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum HeaderArg {
    GridWidth,
    PointCount,
}

impl From<HeaderArg> for HeaderConvention {
    fn from(h: HeaderArg) -> Self {
        match h {
            HeaderArg::GridWidth => HeaderConvention::GridWidth,
            HeaderArg::PointCount => HeaderConvention::PointCount,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "gen_terrain", about = "Write a synthetic sinusoidal terrain grid as an XYZ point list")]
struct Args {
    /// Output point list.
    #[arg(short, long, default_value = "terrain.xyz")]
    output: PathBuf,

    /// JSON parameter file; flags below override its values.
    #[arg(short, long)]
    params: Option<PathBuf>,

    /// Grid columns [default: 1000].
    #[arg(long)]
    width: Option<usize>,

    /// Grid rows [default: 1000].
    #[arg(long)]
    height: Option<usize>,

    /// Easting of the first column [default: 445000.5].
    #[arg(long)]
    base_x: Option<f64>,

    /// Northing of the first row [default: 4650999.5].
    #[arg(long)]
    base_y: Option<f64>,

    /// Height the wave layers oscillate around [default: 304.0].
    #[arg(long)]
    base_height: Option<f64>,

    /// Meaning of the header line [default: grid-width].
    #[arg(long, value_enum)]
    header: Option<HeaderArg>,
}

impl Args {
    fn resolve_params(&self) -> Result<TerrainParams> {
        let mut p = match &self.params {
            Some(path) => TerrainParams::load(path)?,
            None => TerrainParams::default(),
        };
        if let Some(v) = self.width {
            p.width = v;
        }
        if let Some(v) = self.height {
            p.height = v;
        }
        if let Some(v) = self.base_x {
            p.base_x = v;
        }
        if let Some(v) = self.base_y {
            p.base_y = v;
        }
        if let Some(v) = self.base_height {
            p.base_height = v;
        }
        if let Some(v) = self.header {
            p.header = v.into();
        }
        Ok(p)
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let params = args.resolve_params()?;
    generate(&params, &args.output)
        .with_context(|| format!("writing terrain to {}", args.output.display()))?;
    Ok(())
}
