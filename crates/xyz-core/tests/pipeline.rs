//! End-to-end runs across the producers and consumers of the XYZ format.

use std::fs;

use xyz_core::clean::clean;
use xyz_core::fixture::{self, FixtureParams};
use xyz_core::format::read_xyz_file;
use xyz_core::stats::stats_file;
use xyz_core::terrain::{self, TerrainParams};

#[test]
fn fixture_survives_cleaning_unchanged() {
    let dir = tempfile::tempdir().unwrap();
    let raw = dir.path().join("test_partb.xyz");
    let cleaned = dir.path().join("cleaned.xyz");

    fixture::generate(&FixtureParams::default(), &raw).unwrap();
    let report = clean(&raw, &cleaned).unwrap();

    assert_eq!((report.original, report.valid, report.removed), (16, 16, 0));
    assert_eq!(fs::read(&raw).unwrap(), fs::read(&cleaned).unwrap());

    let stats = stats_file(&cleaned).unwrap().unwrap();
    assert_eq!(stats.min.height, 0.0);
    assert_eq!(stats.max.height, 10.0);
    assert!((stats.mean_height - 1.0).abs() < 0.2);
}

#[test]
fn cleaning_terrain_keeps_every_record_but_rewrites_header() {
    let dir = tempfile::tempdir().unwrap();
    let raw = dir.path().join("terrain.xyz");
    let cleaned = dir.path().join("cleaned.xyz");
    let params = TerrainParams { width: 30, height: 20, ..TerrainParams::default() };

    terrain::generate(&params, &raw).unwrap();
    let report = clean(&raw, &cleaned).unwrap();
    assert_eq!(report.valid, 600);

    let before = read_xyz_file(&raw).unwrap();
    let after = read_xyz_file(&cleaned).unwrap();
    assert_eq!(before.header, Some(30));
    assert_eq!(after.header, Some(600));
    assert_eq!(before.points, after.points);
}

#[test]
fn stats_over_terrain_see_base_height_at_origin_band() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("terrain.xyz");
    let params = TerrainParams { width: 50, height: 50, ..TerrainParams::default() };
    terrain::generate(&params, &path).unwrap();

    let stats = stats_file(&path).unwrap().unwrap();
    assert_eq!(stats.count, 2500);
    assert_eq!(stats.x_range, (445000.5, 445049.5));
    assert_eq!(stats.y_range, (4650950.5, 4650999.5));
    let grid = stats.grid.unwrap();
    assert_eq!((grid.rows, grid.cols), (50, 50));
}
