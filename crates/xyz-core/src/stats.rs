//! Height statistics over a point list.
//!
//! Extremes record where they first occur; later ties do not move them.

use std::path::Path;

use serde::Serialize;

use crate::error::Result;
use crate::format::read_xyz_file;
use crate::point::Point;

/// A height and the location it was found at.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Extreme {
    pub height: f64,
    pub x: f64,
    pub y: f64,
}

impl Extreme {
    fn at(p: &Point) -> Self {
        Self { height: p.height, x: p.x, y: p.y }
    }
}

/// Lattice shape inferred by assuming the points fill a square grid.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GridShape {
    pub rows: usize,
    pub cols: usize,
    pub x_step: f64,
    pub y_step: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PointStats {
    pub count: usize,
    pub min: Extreme,
    pub max: Extreme,
    pub mean_height: f64,
    pub x_range: (f64, f64),
    pub y_range: (f64, f64),
    pub grid: Option<GridShape>,
}

impl PointStats {
    pub fn report_lines(&self) -> [String; 3] {
        [
            format!(
                "Minimum height: {:.2} at grid location ({:.1}, {:.1})",
                self.min.height, self.min.x, self.min.y
            ),
            format!(
                "Maximum height: {:.2} at grid location ({:.1}, {:.1})",
                self.max.height, self.max.x, self.max.y
            ),
            format!("Average height of all data points: {:.2}", self.mean_height),
        ]
    }
}

/// Summarise `points`. `None` when there are no points.
pub fn compute_stats(points: &[Point]) -> Option<PointStats> {
    let first = points.first()?;

    let mut min = Extreme::at(first);
    let mut max = Extreme::at(first);
    let mut x_range = (first.x, first.x);
    let mut y_range = (first.y, first.y);
    let mut sum = 0.0f64;

    for p in points {
        if p.height < min.height {
            min = Extreme::at(p);
        }
        if p.height > max.height {
            max = Extreme::at(p);
        }
        x_range = (x_range.0.min(p.x), x_range.1.max(p.x));
        y_range = (y_range.0.min(p.y), y_range.1.max(p.y));
        sum += p.height;
    }

    let count = points.len();
    Some(PointStats {
        count,
        min,
        max,
        mean_height: sum / count as f64,
        x_range,
        y_range,
        grid: infer_grid(count, x_range, y_range),
    })
}

/// Side length of a square lattice holding `count` points gives the step;
/// the step then gives the number of columns and rows spanned by each range.
fn infer_grid(count: usize, x_range: (f64, f64), y_range: (f64, f64)) -> Option<GridShape> {
    if count < 2 {
        return None;
    }
    let x_span = x_range.1 - x_range.0;
    let y_span = y_range.1 - y_range.0;
    if !(x_span > 0.0 && y_span > 0.0) {
        return None;
    }
    let side = (count as f64).sqrt() - 1.0;
    let x_step = x_span / side;
    let y_step = y_span / side;
    Some(GridShape {
        cols: (x_span / x_step + 0.5) as usize + 1,
        rows: (y_span / y_step + 0.5) as usize + 1,
        x_step,
        y_step,
    })
}

/// Read `path` (skipping malformed lines) and summarise it.
pub fn stats_file(path: impl AsRef<Path>) -> Result<Option<PointStats>> {
    let scan = read_xyz_file(path)?;
    Ok(compute_stats(&scan.points))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixture::{build_points, FixtureParams};
    use approx::assert_relative_eq;
    use std::fs;

    #[test]
    fn empty_input_has_no_stats() {
        assert_eq!(compute_stats(&[]), None);
    }

    #[test]
    fn extremes_keep_first_occurrence() {
        let pts = [
            Point::new(0.0, 0.0, 5.0),
            Point::new(1.0, 0.0, 1.0),
            Point::new(2.0, 0.0, 9.0),
            Point::new(3.0, 0.0, 1.0),
            Point::new(4.0, 0.0, 9.0),
        ];
        let s = compute_stats(&pts).unwrap();
        assert_eq!(s.min, Extreme { height: 1.0, x: 1.0, y: 0.0 });
        assert_eq!(s.max, Extreme { height: 9.0, x: 2.0, y: 0.0 });
        assert_relative_eq!(s.mean_height, 5.0);
        assert_eq!(s.x_range, (0.0, 4.0));
    }

    #[test]
    fn fixture_reports_engineered_values() {
        let pts = build_points(&FixtureParams::default()).unwrap();
        let s = compute_stats(&pts).unwrap();
        assert_eq!(s.count, 16);
        assert_eq!(s.min, Extreme { height: 0.0, x: 0.0, y: 0.0 });
        assert_eq!(s.max, Extreme { height: 10.0, x: 3.0, y: 3.0 });
        assert_relative_eq!(s.mean_height, 1.0, epsilon = 1e-9);

        let grid = s.grid.unwrap();
        assert_eq!((grid.rows, grid.cols), (4, 4));
        assert_relative_eq!(grid.x_step, 1.0);
        assert_relative_eq!(grid.y_step, 1.0);
    }

    #[test]
    fn report_lines_use_two_decimals() {
        let pts = build_points(&FixtureParams::default()).unwrap();
        let lines = compute_stats(&pts).unwrap().report_lines();
        assert_eq!(lines[0], "Minimum height: 0.00 at grid location (0.0, 0.0)");
        assert_eq!(lines[1], "Maximum height: 10.00 at grid location (3.0, 3.0)");
        assert_eq!(lines[2], "Average height of all data points: 1.00");
    }

    #[test]
    fn collinear_points_have_no_grid() {
        let pts = [Point::new(0.0, 1.0, 0.0), Point::new(1.0, 1.0, 0.0)];
        assert!(compute_stats(&pts).unwrap().grid.is_none());
    }

    #[test]
    fn stats_file_skips_malformed_lines() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pts.xyz");
        fs::write(&path, "2\n1 1 4\ngarbage\n2 2 8\n").unwrap();
        let s = stats_file(&path).unwrap().unwrap();
        assert_eq!(s.count, 2);
        assert_relative_eq!(s.mean_height, 6.0);

        fs::write(&path, "").unwrap();
        assert!(stats_file(&path).unwrap().is_none());
    }
}
