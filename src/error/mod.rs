use std::error;
use std::fmt;

/// The single error type this crate ever returns, following the flat,
/// hand-rolled `enum` + `Display` + `Error` pattern used throughout the
/// wider `ndarray`-based numerics this crate grew out of (no
/// `thiserror`/`anyhow`).
#[derive(Debug, Clone, PartialEq)]
pub enum RegridError {
    BoundsSize {
        axis: &'static str,
        bounds_len: usize,
        points_len: usize,
    },
    DataRankTooLow {
        ndim: usize,
    },
    AxisOutOfRange {
        axis_name: &'static str,
        axis: isize,
        ndim: usize,
    },
    AxisSizeMismatch {
        axis_name: &'static str,
        data_len: usize,
        points_len: usize,
        axis: usize,
    },
    AxesNotDistinct {
        axis: usize,
    },
    TargetBoundsShapeMismatch {
        x_shape: Vec<usize>,
        y_shape: Vec<usize>,
    },
    IrregularGrid {
        axis: &'static str,
        max_relative_deviation: f64,
        tolerance: f64,
    },
    VertexArrayShape {
        name: &'static str,
        got: (usize, usize),
    },
    MissingCrs {
        grid: &'static str,
    },
    GridMismatch,
}

impl fmt::Display for RegridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RegridError::BoundsSize {
                axis,
                bounds_len,
                points_len,
            } => write!(
                f,
                "Invalid number of src {}-coordinate bounds, got {} expected {}.",
                axis,
                bounds_len,
                points_len + 1
            ),
            RegridError::DataRankTooLow { ndim } => {
                write!(f, "Expected at least a 2-d src data array, got {}-d.", ndim)
            }
            RegridError::AxisOutOfRange {
                axis_name,
                axis,
                ndim,
            } => write!(
                f,
                "Invalid {} dimension {}, expected an axis within 0..{} of the src data array.",
                axis_name, axis, ndim
            ),
            RegridError::AxisSizeMismatch {
                axis_name,
                data_len,
                points_len,
                axis,
            } => write!(
                f,
                "The src {} coordinate ({} points) does not align with src data dimension {} (length {}).",
                axis_name, points_len, axis, data_len
            ),
            RegridError::AxesNotDistinct { axis } => write!(
                f,
                "sx_dim and sy_dim must reference distinct axes, both resolved to axis {}.",
                axis
            ),
            RegridError::TargetBoundsShapeMismatch { x_shape, y_shape } => write!(
                f,
                "Misaligned target grid bounds, x-coordinate bounds have shape {:?} but y-coordinate bounds have shape {:?}.",
                x_shape, y_shape
            ),
            RegridError::IrregularGrid {
                axis,
                max_relative_deviation,
                tolerance,
            } => write!(
                f,
                "Expected src {}-coordinate points to be regular, got a relative deviation of {} against a tolerance of {}.",
                axis, max_relative_deviation, tolerance
            ),
            RegridError::VertexArrayShape { name, got } => write!(
                f,
                "Expected a 2x2 vertex array for {}, got shape {:?}.",
                name, got
            ),
            RegridError::MissingCrs { grid } => {
                write!(f, "The {} grid has no coordinate reference system.", grid)
            }
            RegridError::GridMismatch => write!(
                f,
                "The supplied data is not defined on the grid this regridder was built from."
            ),
        }
    }
}

impl error::Error for RegridError {}
