use ndarray::Array1;

/// A snapshot of a rectilinear source grid: 1-D monotonic point
/// coordinates and their cell bounds along each spatial axis, plus the
/// coordinate reference system they are expressed in.
#[derive(Debug, Clone, PartialEq)]
pub struct SourceGrid {
    pub x_points: Array1<f64>,
    pub y_points: Array1<f64>,
    pub x_bounds: Array1<f64>,
    pub y_bounds: Array1<f64>,
    pub crs_id: String,
}

impl SourceGrid {
    pub fn new(
        x_points: Array1<f64>,
        y_points: Array1<f64>,
        x_bounds: Array1<f64>,
        y_bounds: Array1<f64>,
        crs_id: impl Into<String>,
    ) -> Self {
        Self {
            x_points,
            y_points,
            x_bounds,
            y_bounds,
            crs_id: crs_id.into(),
        }
    }

    pub fn nx(&self) -> usize {
        self.x_points.len()
    }

    pub fn ny(&self) -> usize {
        self.y_points.len()
    }
}
