use crate::point::Point;

/// A regular lattice of heights, row-major.
///
/// Column `c` sits at `origin_x + c * spacing`; row `r` sits at
/// `origin_y - r * spacing`, so row 0 is the northern edge and rows advance
/// southwards the way a raster is stored.
#[derive(Debug, Clone)]
pub struct HeightGrid {
    /// Row-major height values.
    pub data: Vec<f64>,
    pub width: usize,
    pub height: usize,
    pub origin_x: f64,
    pub origin_y: f64,
    pub spacing: f64,
}

impl HeightGrid {
    /// Build a grid by evaluating `f(row, col)` at every cell.
    pub fn from_fn<F>(width: usize, height: usize, origin_x: f64, origin_y: f64, spacing: f64, mut f: F) -> Self
    where
        F: FnMut(usize, usize) -> f64,
    {
        let mut data = Vec::with_capacity(width * height);
        for r in 0..height {
            for c in 0..width {
                data.push(f(r, c));
            }
        }
        Self { data, width, height, origin_x, origin_y, spacing }
    }

    #[inline]
    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.data[row * self.width + col]
    }

    /// The sample at `(row, col)` in world coordinates.
    pub fn point(&self, row: usize, col: usize) -> Point {
        Point::new(
            self.origin_x + col as f64 * self.spacing,
            self.origin_y - row as f64 * self.spacing,
            self.get(row, col),
        )
    }

    /// All samples, row 0 first, columns left to right within a row.
    pub fn points(&self) -> impl Iterator<Item = Point> + '_ {
        (0..self.height).flat_map(move |r| (0..self.width).map(move |c| self.point(r, c)))
    }

    pub fn min_height(&self) -> f64 {
        self.data.iter().cloned().fold(f64::INFINITY, f64::min)
    }

    pub fn max_height(&self) -> f64 {
        self.data.iter().cloned().fold(f64::NEG_INFINITY, f64::max)
    }
}
