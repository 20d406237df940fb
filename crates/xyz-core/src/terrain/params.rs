use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, XyzError};
use crate::format::HeaderConvention;

/// One sinusoidal component: `amplitude · sin(col/wavelength) · cos(row/wavelength)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WaveLayer {
    pub amplitude: f64,
    /// Length scale in grid cells.
    pub wavelength: f64,
}

impl WaveLayer {
    pub const fn new(amplitude: f64, wavelength: f64) -> Self {
        Self { amplitude, wavelength }
    }
}

/// Full parameter set for the synthetic terrain grid.
/// Defaults reproduce the reference `terrain.xyz`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TerrainParams {
    /// Columns.
    pub width: usize,
    /// Rows.
    pub height: usize,
    /// Easting of column 0.
    pub base_x: f64,
    /// Northing of row 0; rows step south.
    pub base_y: f64,
    pub base_height: f64,
    /// Summed in order: large, medium, small features.
    pub layers: Vec<WaveLayer>,
    pub header: HeaderConvention,
}

impl Default for TerrainParams {
    fn default() -> Self {
        Self {
            width: 1000,
            height: 1000,
            base_x: 445000.5,
            base_y: 4650999.5,
            base_height: 304.0,
            layers: vec![
                WaveLayer::new(30.0, 100.0),
                WaveLayer::new(15.0, 20.0),
                WaveLayer::new(5.0, 5.0),
            ],
            header: HeaderConvention::GridWidth,
        }
    }
}

impl TerrainParams {
    /// Load parameters from a JSON file. Omitted fields keep their defaults.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)
            .map_err(|source| XyzError::Read { path: path.to_path_buf(), source })?;
        serde_json::from_str(&text).map_err(|source| XyzError::Config { path: path.to_path_buf(), source })
    }

    pub fn validate(&self) -> Result<()> {
        if self.width == 0 || self.height == 0 {
            return Err(XyzError::InvalidParams(format!(
                "terrain grid must be at least 1x1, got {}x{}",
                self.width, self.height
            )));
        }
        if self.width.checked_mul(self.height).is_none() {
            return Err(XyzError::InvalidParams(format!(
                "terrain grid {}x{} has too many cells",
                self.width, self.height
            )));
        }
        if !self.base_x.is_finite() || !self.base_y.is_finite() || !self.base_height.is_finite() {
            return Err(XyzError::InvalidParams("base coordinates and height must be finite".into()));
        }
        for (i, layer) in self.layers.iter().enumerate() {
            if !layer.amplitude.is_finite() || !layer.wavelength.is_finite() || layer.wavelength == 0.0 {
                return Err(XyzError::InvalidParams(format!(
                    "layer {i} needs a finite amplitude and a finite non-zero wavelength"
                )));
            }
        }
        Ok(())
    }

    pub fn point_count(&self) -> usize {
        self.width * self.height
    }

    pub fn header_value(&self) -> usize {
        self.header.header_value(self.width, self.point_count())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_write_width_as_header() {
        let p = TerrainParams::default();
        assert_eq!(p.point_count(), 1_000_000);
        assert_eq!(p.header_value(), 1000);
        assert!(p.validate().is_ok());
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let p: TerrainParams = serde_json::from_str(r#"{"width": 8, "header": "point-count"}"#).unwrap();
        assert_eq!(p.width, 8);
        assert_eq!(p.height, 1000);
        assert_eq!(p.layers.len(), 3);
        assert_eq!(p.header_value(), 8000);
    }

    #[test]
    fn zero_wavelength_is_rejected() {
        let p = TerrainParams { layers: vec![WaveLayer::new(1.0, 0.0)], ..TerrainParams::default() };
        assert!(matches!(p.validate(), Err(XyzError::InvalidParams(_))));
    }

    #[test]
    fn empty_grid_is_rejected() {
        let p = TerrainParams { height: 0, ..TerrainParams::default() };
        assert!(p.validate().is_err());
    }

    #[test]
    fn overflowing_cell_count_is_rejected() {
        let p = TerrainParams { width: usize::MAX / 2, height: 3, ..TerrainParams::default() };
        assert!(matches!(p.validate(), Err(XyzError::InvalidParams(_))));
    }

    #[test]
    fn load_reads_json_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("params.json");
        fs::write(&path, r#"{"base_height": 100.0, "layers": []}"#).unwrap();
        let p = TerrainParams::load(&path).unwrap();
        assert_eq!(p.base_height, 100.0);
        assert!(p.layers.is_empty());

        fs::write(&path, "{ not json").unwrap();
        assert!(matches!(TerrainParams::load(&path), Err(XyzError::Config { .. })));
    }
}
