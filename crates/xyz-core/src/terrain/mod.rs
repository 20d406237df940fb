//! Synthetic terrain: a dense grid of layered sinusoidal heights.
//!
//! No randomness is involved; a given [`TerrainParams`] always produces the
//! same bytes.

pub mod params;

use std::path::Path;

use tracing::info;

use crate::error::Result;
use crate::format::write_xyz_file;
use crate::grid::HeightGrid;

pub use params::{TerrainParams, WaveLayer};

/// Height at grid cell `(row, col)`.
///
/// Layers are accumulated first and added to the base last, in the same
/// order as the reference output, so results are bit-identical.
pub fn height_at(params: &TerrainParams, row: usize, col: usize) -> f64 {
    let (r, c) = (row as f64, col as f64);
    let variation = params.layers.iter().fold(0.0f64, |acc, l| {
        acc + l.amplitude * (c / l.wavelength).sin() * (r / l.wavelength).cos()
    });
    params.base_height + variation
}

/// Evaluate the whole grid. Spacing is one unit per cell.
pub fn build_grid(params: &TerrainParams) -> Result<HeightGrid> {
    params.validate()?;
    Ok(HeightGrid::from_fn(
        params.width,
        params.height,
        params.base_x,
        params.base_y,
        1.0,
        |r, c| height_at(params, r, c),
    ))
}

/// Generate the terrain and write it to `path`. Returns the record count,
/// which differs from the header under [`HeaderConvention::GridWidth`].
///
/// [`HeaderConvention::GridWidth`]: crate::format::HeaderConvention::GridWidth
pub fn generate(params: &TerrainParams, path: impl AsRef<Path>) -> Result<usize> {
    let grid = build_grid(params)?;
    info!(
        width = grid.width,
        height = grid.height,
        min = grid.min_height(),
        max = grid.max_height(),
        "terrain grid evaluated"
    );
    write_xyz_file(path, params.header_value(), grid.points())
}
