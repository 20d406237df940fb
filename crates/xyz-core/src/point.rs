use serde::{Deserialize, Serialize};

/// A single elevation sample. Planar coordinates and height share units
/// with whatever survey produced them; nothing here assumes a projection.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
    pub height: f64,
}

impl Point {
    pub fn new(x: f64, y: f64, height: f64) -> Self {
        Self { x, y, height }
    }

    /// True for heights at or above zero. NaN is never kept.
    #[inline]
    pub fn has_valid_height(&self) -> bool {
        self.height >= 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_height_is_valid() {
        assert!(Point::new(1.0, 2.0, 0.0).has_valid_height());
        assert!(Point::new(1.0, 2.0, -0.0).has_valid_height());
    }

    #[test]
    fn negative_and_nan_heights_are_invalid() {
        assert!(!Point::new(1.0, 2.0, -0.001).has_valid_height());
        assert!(!Point::new(1.0, 2.0, f64::NAN).has_valid_height());
    }
}
