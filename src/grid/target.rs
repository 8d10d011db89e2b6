use ndarray::Array2;

/// A snapshot of a curvilinear target grid: 2-D vertex-bound arrays of
/// shape `(gny + 1, gnx + 1)`, plus the coordinate reference system they
/// are expressed in.
#[derive(Debug, Clone, PartialEq)]
pub struct TargetGrid {
    pub x_bounds: Array2<f64>,
    pub y_bounds: Array2<f64>,
    pub crs_id: String,
}

impl TargetGrid {
    pub fn new(x_bounds: Array2<f64>, y_bounds: Array2<f64>, crs_id: impl Into<String>) -> Self {
        Self {
            x_bounds,
            y_bounds,
            crs_id: crs_id.into(),
        }
    }

    /// Number of target cells along (y, x).
    pub fn shape(&self) -> (usize, usize) {
        let (ny, nx) = self.x_bounds.dim();
        (ny - 1, nx - 1)
    }
}
