//! The aggregator driver (spec component E): orchestrates the input
//! validator (C), the regularity check (B) and the dimension normaliser
//! (D), then rasterises and weight-averages every target cell
//! independently, in parallel over target rows — the same independent,
//! per-output-element `rayon` pattern `phasor::time_domain::image` uses
//! for per-pixel work, generalised from an elementwise `Zip` to an
//! explicit row-parallel loop because each target cell's source window
//! has a different, data-dependent size.

use ndarray::{Array2, Array3, ArrayView1, ArrayView2, ArrayViewD, s};
use rayon::prelude::*;

use crate::dimension::{self, Permutation};
use crate::error::RegridError;
use crate::grid::regular::{self, DEFAULT_REGULAR_RTOL};
use crate::masked::MaskedArray;
use crate::raster::{self, RasterOptions};
use crate::traits::numeric::ToFloat64;
use crate::validate;

/// Per target-cell, per-batch-element outcome: the weighted-mean value
/// and whether any source weight contributed to it.
struct CellOutcome {
    values: Vec<f64>,
    valid: Vec<bool>,
}

/// Regrid `data`, defined on a rectilinear source grid, onto a
/// curvilinear target grid via conservative area-weighted aggregation.
///
/// # Description
///
/// Validates every input (component C), checks both source axes are
/// regularly spaced (component B), normalises `data`'s axis order so the
/// spatial axes trail (component D), then for every target cell:
/// rasterises its quadrilateral footprint against the overlapping source
/// cells (component A) and takes the rasterised-coverage-weighted mean
/// of the corresponding source values, skipping any source cell marked
/// invalid by `mask`. A target cell with no source overlap, or whose
/// overlap contains only invalid source cells, is itself masked.
///
/// # Arguments
///
/// * `data`: The source data, rank >= 2.
/// * `mask`: An optional validity mask, `true` marking an invalid
///    element, the same shape as `data`.
/// * `sx_points`/`sx_bounds`: The source x cell-centres and cell-edges.
/// * `sy_points`/`sy_bounds`: The source y cell-centres and cell-edges.
/// * `sx_dim`/`sy_dim`: The axes of `data` the x/y coordinates vary
///    along; may be negative to index from the end.
/// * `gx_bounds`/`gy_bounds`: The target grid's vertex-bound arrays,
///    shape `(gny + 1, gnx + 1)`, in the same coordinate reference system
///    as the source grid.
///
/// # Returns
///
/// * `Ok(MaskedArray<f64>)`: The regridded data, with `sx_dim`/`sy_dim`
///    replaced by the target grid's `(gny, gnx)` shape and every other
///    axis unchanged, in `data`'s original axis order.
#[allow(clippy::too_many_arguments)]
pub fn aggregate<T>(
    data: ArrayViewD<T>,
    mask: Option<ArrayViewD<bool>>,
    sx_points: ArrayView1<f64>,
    sx_bounds: ArrayView1<f64>,
    sy_points: ArrayView1<f64>,
    sy_bounds: ArrayView1<f64>,
    sx_dim: isize,
    sy_dim: isize,
    gx_bounds: ArrayView2<f64>,
    gy_bounds: ArrayView2<f64>,
) -> Result<MaskedArray<f64>, RegridError>
where
    T: ToFloat64,
{
    validate::validate_coordinate_bounds(sx_points, sx_bounds, "x")?;
    validate::validate_coordinate_bounds(sy_points, sy_bounds, "y")?;
    let axes = validate::validate_data_dims(
        data.ndim(),
        sx_dim,
        sy_dim,
        data.shape(),
        sx_points.len(),
        sy_points.len(),
    )?;
    validate::validate_target_bounds(gx_bounds, gy_bounds)?;

    let (sx0, sdx) = regular::origin_and_step(sx_points, sx_bounds, "x", DEFAULT_REGULAR_RTOL)?;
    let (sy0, sdy) = regular::origin_and_step(sy_points, sy_bounds, "y", DEFAULT_REGULAR_RTOL)?;

    let snx = sx_points.len();
    let sny = sy_points.len();
    let ndim = data.ndim();
    let perm = Permutation::for_spatial_axes(ndim, axes.sx_dim, axes.sy_dim);
    let leading_shape: Vec<usize> = perm.order[..ndim - 2]
        .iter()
        .map(|&d| data.shape()[d])
        .collect();

    let permuted = dimension::permute_to_batch(data, &perm, sny, snx);
    let permuted_mask = mask.map(|m| dimension::permute_to_batch(m, &perm, sny, snx));

    let (gny, gnx) = (gx_bounds.shape()[0] - 1, gx_bounds.shape()[1] - 1);
    let batch = permuted.shape()[0];

    let rows: Vec<Vec<CellOutcome>> = (0..gny)
        .into_par_iter()
        .map(|yi| {
            (0..gnx)
                .map(|xi| {
                    compute_target_cell(
                        &permuted,
                        permuted_mask.as_ref(),
                        sx0,
                        sdx,
                        sy0,
                        sdy,
                        snx,
                        sny,
                        gx_bounds,
                        gy_bounds,
                        yi,
                        xi,
                    )
                })
                .collect()
        })
        .collect();

    let mut result = Array3::<f64>::zeros((batch, gny, gnx));
    let mut result_mask = Array3::<bool>::from_elem((batch, gny, gnx), true);
    for (yi, row) in rows.into_iter().enumerate() {
        for (xi, outcome) in row.into_iter().enumerate() {
            for b in 0..batch {
                result[[b, yi, xi]] = outcome.values[b];
                result_mask[[b, yi, xi]] = !outcome.valid[b];
            }
        }
    }

    let out_data = dimension::unpermute_from_batch(result, &perm, &leading_shape, gny, gnx);
    let out_mask = dimension::unpermute_from_batch(result_mask, &perm, &leading_shape, gny, gnx);

    Ok(MaskedArray::new(out_data, out_mask))
}

#[allow(clippy::too_many_arguments)]
fn compute_target_cell<T: ToFloat64>(
    data: &Array3<T>,
    mask: Option<&Array3<bool>>,
    sx0: f64,
    sdx: f64,
    sy0: f64,
    sdy: f64,
    snx: usize,
    sny: usize,
    gx_bounds: ArrayView2<f64>,
    gy_bounds: ArrayView2<f64>,
    yi: usize,
    xi: usize,
) -> CellOutcome {
    let batch = data.shape()[0];

    let cell_x = [
        gx_bounds[[yi, xi]],
        gx_bounds[[yi, xi + 1]],
        gx_bounds[[yi + 1, xi]],
        gx_bounds[[yi + 1, xi + 1]],
    ];
    let cell_y = [
        gy_bounds[[yi, xi]],
        gy_bounds[[yi, xi + 1]],
        gy_bounds[[yi + 1, xi]],
        gy_bounds[[yi + 1, xi + 1]],
    ];

    let cell_xi: Vec<f64> = cell_x.iter().map(|&x| (x - sx0) / sdx).collect();
    let cell_yi: Vec<f64> = cell_y.iter().map(|&y| (y - sy0) / sdy).collect();

    let xi_min = cell_xi.iter().cloned().fold(f64::INFINITY, f64::min);
    let xi_max = cell_xi.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
    let yi_min = cell_yi.iter().cloned().fold(f64::INFINITY, f64::min);
    let yi_max = cell_yi.iter().cloned().fold(f64::NEG_INFINITY, f64::max);

    // out-of-bounds: closed rectangle test on the four vertices' aggregate
    // min/max against [0, snx] x [0, sny], not a per-vertex test
    if xi_min < 0.0 || yi_min < 0.0 || xi_max > snx as f64 || yi_max > sny as f64 {
        return CellOutcome {
            values: vec![0.0; batch],
            valid: vec![false; batch],
        };
    }

    let xi_lo = xi_min.floor() as usize;
    let xi_hi = xi_max.ceil() as usize;
    let yi_lo = yi_min.floor() as usize;
    let yi_hi = yi_max.ceil() as usize;

    let mut xi_arr = Array2::<f64>::zeros((2, 2));
    let mut yi_arr = Array2::<f64>::zeros((2, 2));
    for r in 0..2 {
        for c in 0..2 {
            xi_arr[[r, c]] = cell_xi[r * 2 + c] - xi_lo as f64;
            yi_arr[[r, c]] = cell_yi[r * 2 + c] - yi_lo as f64;
        }
    }

    let mut coverage = Array2::<u8>::zeros((yi_hi - yi_lo, xi_hi - xi_lo));
    raster::rasterise(
        &mut coverage.view_mut(),
        xi_arr.view(),
        yi_arr.view(),
        RasterOptions::default(),
    )
    .expect("locally-shifted quad vertices always fit the (2, 2) rasteriser contract");

    let weights = coverage.mapv(|c| c as f64 / 255.0);
    let window = data.slice(s![.., yi_lo..yi_hi, xi_lo..xi_hi]);
    let mask_window = mask.map(|m| m.slice(s![.., yi_lo..yi_hi, xi_lo..xi_hi]));

    let mut values = Vec::with_capacity(batch);
    let mut valid = Vec::with_capacity(batch);
    for b in 0..batch {
        let mut num = 0.0;
        let mut den = 0.0;
        for r in 0..weights.shape()[0] {
            for c in 0..weights.shape()[1] {
                let w = weights[[r, c]];
                if w == 0.0 {
                    continue;
                }
                let is_valid = mask_window.as_ref().map_or(true, |m| !m[[b, r, c]]);
                if !is_valid {
                    continue;
                }
                let v: f64 = window[[b, r, c]].into();
                num += v * w;
                den += w;
            }
        }
        if den == 0.0 {
            values.push(0.0);
            valid.push(false);
        } else {
            values.push(num / den);
            valid.push(true);
        }
    }

    CellOutcome { values, valid }
}
