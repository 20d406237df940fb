//! Preparation of XYZ elevation point lists for terrain processing.
//!
//! Four stateless operations share one flat text format (see [`format`]):
//! cleaning a surveyed point list, synthesising a large sinusoidal terrain,
//! synthesising a small statistics fixture, and summarising heights.

pub mod clean;
pub mod error;
pub mod fixture;
pub mod format;
pub mod grid;
pub mod point;
pub mod stats;
pub mod terrain;

pub use error::{Result, XyzError};
pub use format::HeaderConvention;
pub use point::Point;
