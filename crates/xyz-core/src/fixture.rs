//! Small deterministic fixture with a known minimum, maximum and mean height.
//!
//! The minimum sits at `(0, 0)` and the maximum at the far corner. Every other
//! cell shares what is left of the height budget, so that the mean over the
//! whole grid lands on `target_mean`.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, XyzError};
use crate::format::{write_xyz_file, HeaderConvention};
use crate::point::Point;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FixtureParams {
    pub width: usize,
    pub height: usize,
    pub min_height: f64,
    pub max_height: f64,
    pub target_mean: f64,
}

impl Default for FixtureParams {
    fn default() -> Self {
        Self { width: 4, height: 4, min_height: 0.0, max_height: 10.0, target_mean: 1.0 }
    }
}

impl FixtureParams {
    pub fn point_count(&self) -> usize {
        self.width * self.height
    }

    /// Height budget shared by the cells that are neither minimum nor maximum.
    pub fn filler_budget(&self) -> f64 {
        self.target_mean * self.point_count() as f64 - self.min_height - self.max_height
    }

    pub fn validate(&self) -> Result<()> {
        if self.width < 2 || self.height < 2 {
            return Err(XyzError::InvalidParams(format!(
                "fixture grid must be at least 2x2, got {}x{}",
                self.width, self.height
            )));
        }
        if self.width.checked_mul(self.height).is_none() {
            return Err(XyzError::InvalidParams(format!(
                "fixture grid {}x{} has too many cells",
                self.width, self.height
            )));
        }
        if !(self.min_height < self.max_height) {
            return Err(XyzError::InvalidParams(format!(
                "min height {} must be below max height {}",
                self.min_height, self.max_height
            )));
        }
        // Fillers sit strictly between the extremes so each extreme occurs once.
        let filler = self.filler_budget() / (self.point_count() - 2) as f64;
        if !(filler > self.min_height && filler < self.max_height) {
            return Err(XyzError::InvalidParams(format!(
                "mean {} needs filler height {filler:.6}, outside ({}, {})",
                self.target_mean, self.min_height, self.max_height
            )));
        }
        Ok(())
    }
}

/// Build the fixture points in output order: minimum, maximum, then the
/// remaining cells row by row.
pub fn build_points(params: &FixtureParams) -> Result<Vec<Point>> {
    params.validate()?;

    let total = params.point_count();
    let low = (0, 0);
    let high = (params.width - 1, params.height - 1);

    let mut points = Vec::with_capacity(total);
    points.push(Point::new(low.0 as f64, low.1 as f64, params.min_height));
    points.push(Point::new(high.0 as f64, high.1 as f64, params.max_height));

    // Each placed height is drawn from the budget, and the divisor counts
    // the cells still waiting, so the fillers always sum to the budget.
    let fillers = total - 2;
    let mut budget = params.filler_budget();
    for y in 0..params.height {
        for x in 0..params.width {
            if (x, y) == low || (x, y) == high {
                continue;
            }
            let unplaced = fillers - (points.len() - 2);
            let h = budget / unplaced as f64;
            budget -= h;
            points.push(Point::new(x as f64, y as f64, h));
        }
    }
    Ok(points)
}

/// Write the fixture to `path`. The header is the true record count.
pub fn generate(params: &FixtureParams, path: impl AsRef<Path>) -> Result<usize> {
    let points = build_points(params)?;
    let header = HeaderConvention::PointCount.header_value(params.width, points.len());
    write_xyz_file(path, header, points)
}
