//! The input validator (spec component C): every fallible precondition
//! the aggregator depends on is checked up front, before any rasterising
//! or aggregation work begins.
//!
//! Coordinate point/bounds arrays are accepted as statically 1-D
//! (`ArrayView1`) and target bounds as statically 2-D (`ArrayView2`), so
//! the original implementation's "is this the right rank" checks are
//! subsumed by the type system here; only the checks that remain
//! meaningful under static typing are performed at runtime.

use ndarray::{ArrayView1, ArrayView2};

use crate::error::RegridError;

/// The two spatial axes resolved to non-negative indices into the
/// source data's shape.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedAxes {
    pub sx_dim: usize,
    pub sy_dim: usize,
}

/// Check that `bounds` has exactly one more element than `points`.
pub fn validate_coordinate_bounds(
    points: ArrayView1<f64>,
    bounds: ArrayView1<f64>,
    axis: &'static str,
) -> Result<(), RegridError> {
    if bounds.len() != points.len() + 1 {
        return Err(RegridError::BoundsSize {
            axis,
            bounds_len: bounds.len(),
            points_len: points.len(),
        });
    }
    Ok(())
}

/// Resolve `sx_dim`/`sy_dim` (which may be negative, Python-style, to
/// index from the end) against `data`'s rank and shape, checking that
/// they are distinct and that the source coordinate lengths align with
/// the data shape along those axes.
pub fn validate_data_dims(
    ndim: usize,
    sx_dim: isize,
    sy_dim: isize,
    shape: &[usize],
    snx: usize,
    sny: usize,
) -> Result<ResolvedAxes, RegridError> {
    if ndim < 2 {
        return Err(RegridError::DataRankTooLow { ndim });
    }

    let resolve = |axis: isize, name: &'static str| -> Result<usize, RegridError> {
        let normalised = if axis < 0 { axis + ndim as isize } else { axis };
        if normalised < 0 || normalised as usize >= ndim {
            return Err(RegridError::AxisOutOfRange {
                axis_name: name,
                axis,
                ndim,
            });
        }
        Ok(normalised as usize)
    };

    let rsx = resolve(sx_dim, "sx_dim")?;
    let rsy = resolve(sy_dim, "sy_dim")?;

    if rsx == rsy {
        return Err(RegridError::AxesNotDistinct { axis: rsx });
    }

    if shape[rsx] != snx {
        return Err(RegridError::AxisSizeMismatch {
            axis_name: "x",
            data_len: shape[rsx],
            points_len: snx,
            axis: rsx,
        });
    }
    if shape[rsy] != sny {
        return Err(RegridError::AxisSizeMismatch {
            axis_name: "y",
            data_len: shape[rsy],
            points_len: sny,
            axis: rsy,
        });
    }

    Ok(ResolvedAxes {
        sx_dim: rsx,
        sy_dim: rsy,
    })
}

/// Check that the target grid's x and y vertex-bound arrays have the
/// same shape.
pub fn validate_target_bounds(
    gx_bounds: ArrayView2<f64>,
    gy_bounds: ArrayView2<f64>,
) -> Result<(), RegridError> {
    if gx_bounds.shape() != gy_bounds.shape() {
        return Err(RegridError::TargetBoundsShapeMismatch {
            x_shape: gx_bounds.shape().to_vec(),
            y_shape: gy_bounds.shape().to_vec(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::Array1;

    #[test]
    fn rejects_mismatched_bounds_length() {
        let points = Array1::linspace(0.5, 3.5, 4);
        let bounds = Array1::linspace(0.0, 4.0, 4);
        let err = validate_coordinate_bounds(points.view(), bounds.view(), "x").unwrap_err();
        assert_eq!(
            err,
            RegridError::BoundsSize {
                axis: "x",
                bounds_len: 4,
                points_len: 4
            }
        );
    }

    #[test]
    fn resolves_negative_axes() {
        let resolved = validate_data_dims(3, -1, -2, &[4, 6, 8], 8, 6).unwrap();
        assert_eq!(resolved.sx_dim, 2);
        assert_eq!(resolved.sy_dim, 1);
    }

    #[test]
    fn rejects_non_distinct_axes() {
        let err = validate_data_dims(3, 1, 1, &[4, 6, 8], 6, 6).unwrap_err();
        assert_eq!(err, RegridError::AxesNotDistinct { axis: 1 });
    }
}
