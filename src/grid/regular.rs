use ndarray::ArrayView1;

use crate::error::RegridError;

/// The default relative-tolerance used to decide whether a coordinate
/// axis is regularly spaced, matching the original implementation's
/// `rtol`.
pub const DEFAULT_REGULAR_RTOL: f64 = 2e-3;

/// Verify that `points` is regularly spaced (to within `rtol` of the mean
/// spacing) and return its `(origin, step)` affine mapping.
///
/// # Description
///
/// `origin` is the minimum of `bounds` and `step` is the mean spacing
/// between consecutive `points`. Together they map a physical coordinate
/// `x` to fractional grid-index space via `(x - origin) / step`.
///
/// # Arguments
///
/// * `points`: The monotonic cell-centre coordinates along one spatial
///    axis.
/// * `bounds`: The `points.len() + 1` cell-edge coordinates for the same
///    axis.
/// * `axis`: The axis name (`"x"` or `"y"`), used only for error messages.
/// * `rtol`: The relative tolerance, as a fraction of the mean spacing.
///
/// # Returns
///
/// * `Ok((f64, f64))`: The `(origin, step)` pair.
/// * `Err(RegridError::IrregularGrid)`: If any spacing deviates from the
///    mean by more than `rtol`.
pub fn origin_and_step(
    points: ArrayView1<f64>,
    bounds: ArrayView1<f64>,
    axis: &'static str,
    rtol: f64,
) -> Result<(f64, f64), RegridError> {
    let deltas: Vec<f64> = points
        .iter()
        .zip(points.iter().skip(1))
        .map(|(a, b)| b - a)
        .collect();

    let mean_delta = deltas.iter().sum::<f64>() / deltas.len() as f64;
    let atol = mean_delta.abs() * rtol;
    let max_dev = deltas
        .iter()
        .map(|d| (d - mean_delta).abs())
        .fold(0.0_f64, f64::max);

    if max_dev > atol {
        return Err(RegridError::IrregularGrid {
            axis,
            max_relative_deviation: max_dev / mean_delta.abs(),
            tolerance: rtol,
        });
    }

    let origin = bounds.iter().cloned().fold(f64::INFINITY, f64::min);
    Ok((origin, mean_delta))
}
