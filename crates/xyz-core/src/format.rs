//! XYZ point list text format.
//!
//! ```text
//! <header integer>
//! <x:.1> <y:.1> <height:.15>
//! ...
//! ```
//!
//! Fields are separated by a single space and records by `\n`. The header is
//! read but never trusted: consumers count the records that actually parse.
//! Planar coordinates carry one decimal digit and heights fifteen; downstream
//! tooling compares files byte for byte, so the asymmetry is part of the format.

use std::fs::{self, File, Permissions};
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use serde::{Deserialize, Serialize};
use tempfile::NamedTempFile;
use tracing::{debug, info};

use crate::error::{Result, XyzError};
use crate::point::Point;

// ── Header convention ─────────────────────────────────────────────────────────

/// What the leading integer of a file means.
///
/// Producers disagree: the cleaner and the fixture generator write the record
/// count, the large terrain generator writes its grid width. Both are kept
/// so existing consumers see the values they were built against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum HeaderConvention {
    /// Number of grid columns.
    GridWidth,
    /// Number of records that follow.
    PointCount,
}

impl HeaderConvention {
    /// Header value for a grid of `width` columns holding `count` records.
    pub fn header_value(self, width: usize, count: usize) -> usize {
        match self {
            HeaderConvention::GridWidth => width,
            HeaderConvention::PointCount => count,
        }
    }
}

// ── Records ───────────────────────────────────────────────────────────────────

/// Parse one record line. Anything other than exactly three
/// whitespace-separated reals yields `None`.
pub fn parse_record(line: &str) -> Option<Point> {
    let mut fields = line.split_whitespace();
    let x = fields.next()?.parse::<f64>().ok()?;
    let y = fields.next()?.parse::<f64>().ok()?;
    let height = fields.next()?.parse::<f64>().ok()?;
    if fields.next().is_some() {
        return None;
    }
    Some(Point::new(x, y, height))
}

pub fn format_record(p: &Point) -> String {
    format!("{:.1} {:.1} {:.15}", p.x, p.y, p.height)
}

#[inline]
pub fn write_record<W: Write>(w: &mut W, p: &Point) -> io::Result<()> {
    writeln!(w, "{:.1} {:.1} {:.15}", p.x, p.y, p.height)
}

// ── Reading ───────────────────────────────────────────────────────────────────

/// Everything a consumer learns from one pass over a file.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct XyzScan {
    /// Leading integer, if present and parseable.
    pub header: Option<i64>,
    /// Lines after the header, valid or not.
    pub record_lines: usize,
    /// Well-formed records in file order.
    pub points: Vec<Point>,
    /// Lines that did not parse as a record.
    pub skipped: usize,
}

/// Read a point list. A completely empty input is zero records, not an error.
///
/// Lines are split on raw bytes; a line that is not UTF-8 is malformed like
/// any other and gets skipped. Only failures of the reader itself are errors.
pub fn read_xyz<R: BufRead>(reader: R) -> io::Result<XyzScan> {
    let mut lines = reader.split(b'\n');
    let header = match lines.next() {
        Some(line) => decode_line(&line?).and_then(|h| h.trim().parse::<i64>().ok()),
        None => return Ok(XyzScan::default()),
    };

    let mut scan = XyzScan { header, ..XyzScan::default() };
    for (idx, line) in lines.enumerate() {
        let line = line?;
        scan.record_lines += 1;
        match decode_line(&line).and_then(parse_record) {
            Some(p) => scan.points.push(p),
            None => {
                scan.skipped += 1;
                debug!(line = idx + 2, "skipping malformed record");
            }
        }
    }

    if let Some(h) = scan.header {
        if h != scan.points.len() as i64 {
            debug!(header = h, records = scan.points.len(), "header does not match record count");
        }
    }
    Ok(scan)
}

/// Strip a trailing `\r` and decode; `None` for bytes that are not UTF-8.
fn decode_line(raw: &[u8]) -> Option<&str> {
    let raw = raw.strip_suffix(b"\r").unwrap_or(raw);
    std::str::from_utf8(raw).ok()
}

pub fn read_xyz_file(path: impl AsRef<Path>) -> Result<XyzScan> {
    let path = path.as_ref();
    let read_err = |source| XyzError::Read { path: path.to_path_buf(), source };
    let file = File::open(path).map_err(read_err)?;
    read_xyz(BufReader::new(file)).map_err(read_err)
}

// ── Writing ───────────────────────────────────────────────────────────────────

/// Write a header followed by every point. Returns the number of records.
pub fn write_xyz<W, I>(w: &mut W, header: usize, points: I) -> io::Result<usize>
where
    W: Write,
    I: IntoIterator<Item = Point>,
{
    writeln!(w, "{header}")?;
    let mut written = 0usize;
    for p in points {
        write_record(w, &p)?;
        written += 1;
    }
    Ok(written)
}

/// Write a point list to `path`.
///
/// Records go to a temporary file beside the target, which replaces the
/// target only once everything is flushed; a failed run leaves any existing
/// file untouched.
pub fn write_xyz_file<I>(path: impl AsRef<Path>, header: usize, points: I) -> Result<usize>
where
    I: IntoIterator<Item = Point>,
{
    let path = path.as_ref();
    let write_err = |source| XyzError::Write { path: path.to_path_buf(), source };

    let dir = match path.parent() {
        Some(d) if !d.as_os_str().is_empty() => d,
        _ => Path::new("."),
    };
    let mut tmp = NamedTempFile::new_in(dir).map_err(write_err)?;

    let written = {
        let mut w = BufWriter::new(tmp.as_file_mut());
        let n = write_xyz(&mut w, header, points).map_err(write_err)?;
        w.flush().map_err(write_err)?;
        n
    };
    if let Some(perms) = output_permissions(path).map_err(write_err)? {
        tmp.as_file().set_permissions(perms).map_err(write_err)?;
    }
    tmp.persist(path).map_err(|e| write_err(e.error))?;

    info!(path = %path.display(), header, records = written, "wrote point list");
    Ok(written)
}

/// Mode the committed file should carry. An existing target keeps its own;
/// a new file is world-readable on unix instead of the temp file's 0600.
fn output_permissions(path: &Path) -> io::Result<Option<Permissions>> {
    match fs::metadata(path) {
        Ok(meta) => Ok(Some(meta.permissions())),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(default_permissions()),
        Err(e) => Err(e),
    }
}

#[cfg(unix)]
fn default_permissions() -> Option<Permissions> {
    use std::os::unix::fs::PermissionsExt;
    Some(Permissions::from_mode(0o644))
}

#[cfg(not(unix))]
fn default_permissions() -> Option<Permissions> {
    None
}
