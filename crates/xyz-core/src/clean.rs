//! Drop malformed and negative-height records from a point list.

use std::path::Path;

use serde::Serialize;
use tracing::info;

use crate::error::Result;
use crate::format::{read_xyz_file, write_xyz_file, XyzScan};
use crate::point::Point;

/// Tally of one cleaning run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CleanReport {
    /// Lines after the header, valid or not.
    pub original: usize,
    /// Records kept.
    pub valid: usize,
    /// `original - valid`: malformed lines plus negative heights.
    pub removed: usize,
}

impl CleanReport {
    pub fn summary_lines(&self) -> [String; 3] {
        [
            format!("Original number of points: {}", self.original),
            format!("Valid points after cleaning: {}", self.valid),
            format!("Removed {} points with negative heights", self.removed),
        ]
    }
}

/// Keep the records with a non-negative height, in their original order.
pub fn filter_scan(scan: XyzScan) -> (Vec<Point>, CleanReport) {
    let original = scan.record_lines;
    let kept: Vec<Point> = scan.points.into_iter().filter(Point::has_valid_height).collect();
    let report = CleanReport { original, valid: kept.len(), removed: original - kept.len() };
    (kept, report)
}

/// Clean `input` into `output`. The output header is the number of records kept.
pub fn clean(input: impl AsRef<Path>, output: impl AsRef<Path>) -> Result<CleanReport> {
    let scan = read_xyz_file(input.as_ref())?;
    let malformed = scan.skipped;
    let (kept, report) = filter_scan(scan);

    write_xyz_file(output.as_ref(), kept.len(), kept)?;

    info!(
        original = report.original,
        valid = report.valid,
        malformed,
        negative = report.removed - malformed,
        "cleaned point list"
    );
    Ok(report)
}
