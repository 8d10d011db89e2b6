//! The rasteriser (spec component A): turns a single curvilinear
//! quadrilateral into an 8-bit fractional-area-overlap coverage buffer
//! against the unit source cells it spans.

mod geometry;

use ndarray::{Array2, ArrayView2, ArrayViewMut2};

use crate::error::RegridError;
use geometry::{clip_to_rect, polygon_area};

/// Reserved super-sampling depth for the rasteriser; see
/// [`RasterOptions::buffer_depth`].
pub const DEFAULT_BUFFER_DEPTH: u32 = 4;

/// Options controlling the rasteriser's internal precision.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RasterOptions {
    /// Reserved for a future sub-cell super-sampling extension; the exact
    /// polygon-clip implementation is already exact, so this has no
    /// effect at its default value of 4.
    pub buffer_depth: u32,
}

impl Default for RasterOptions {
    fn default() -> Self {
        Self {
            buffer_depth: DEFAULT_BUFFER_DEPTH,
        }
    }
}

/// Fill `buffer` with the 8-bit fractional area overlap of the
/// quadrilateral given by vertex arrays `xi`/`yi` (indexed `[top/bottom,
/// left/right]`) against each unit source cell `buffer` covers.
///
/// # Description
///
/// The quadrilateral is split into two triangles along the
/// top-left/bottom-right diagonal. Each triangle's area contribution to
/// every cell it touches is accumulated as an exact `f64` before the
/// total per-cell coverage is quantised to `u8` by truncation — a cell
/// fully inside the quadrilateral receives exactly `255`, never wraps,
/// and the sum across all cells a unit-area quadrilateral touches is at
/// most `255`.
///
/// # Arguments
///
/// * `buffer`: The coverage buffer to fill, one `u8` per source cell.
/// * `xi`: The quadrilateral's x vertex coordinates, in buffer-local
///    fractional index space, shape `(2, 2)`.
/// * `yi`: The quadrilateral's y vertex coordinates, shape `(2, 2)`.
/// * `options`: Rasteriser precision options.
///
/// # Returns
///
/// * `Err(RegridError::VertexArrayShape)`: If `xi` or `yi` is not `(2, 2)`.
pub fn rasterise(
    buffer: &mut ArrayViewMut2<u8>,
    xi: ArrayView2<f64>,
    yi: ArrayView2<f64>,
    _options: RasterOptions,
) -> Result<(), RegridError> {
    if xi.dim() != (2, 2) {
        return Err(RegridError::VertexArrayShape {
            name: "xi",
            got: xi.dim(),
        });
    }
    if yi.dim() != (2, 2) {
        return Err(RegridError::VertexArrayShape {
            name: "yi",
            got: yi.dim(),
        });
    }

    let (h, w) = buffer.dim();
    let tl = (xi[[0, 0]], yi[[0, 0]]);
    let tr = (xi[[0, 1]], yi[[0, 1]]);
    let bl = (xi[[1, 0]], yi[[1, 0]]);
    let br = (xi[[1, 1]], yi[[1, 1]]);

    // split along the tl-br diagonal
    let tri_a = [tl, tr, br];
    let tri_b = [tl, br, bl];

    let mut area = Array2::<f64>::zeros((h, w));
    accumulate_triangle(&mut area, &tri_a, w, h);
    accumulate_triangle(&mut area, &tri_b, w, h);

    buffer.indexed_iter_mut().for_each(|((j, i), v)| {
        let frac = area[[j, i]];
        *v = (255.0 * frac).floor().clamp(0.0, 255.0) as u8;
    });

    Ok(())
}

fn accumulate_triangle(area: &mut Array2<f64>, tri: &[(f64, f64); 3], w: usize, h: usize) {
    let xmin = tri.iter().map(|p| p.0).fold(f64::INFINITY, f64::min);
    let xmax = tri.iter().map(|p| p.0).fold(f64::NEG_INFINITY, f64::max);
    let ymin = tri.iter().map(|p| p.1).fold(f64::INFINITY, f64::min);
    let ymax = tri.iter().map(|p| p.1).fold(f64::NEG_INFINITY, f64::max);

    let i0 = xmin.floor().max(0.0) as usize;
    let i1 = (xmax.ceil() as isize).clamp(0, w as isize) as usize;
    let j0 = ymin.floor().max(0.0) as usize;
    let j1 = (ymax.ceil() as isize).clamp(0, h as isize) as usize;

    for j in j0..j1 {
        for i in i0..i1 {
            let clipped = clip_to_rect(tri, i as f64, i as f64 + 1.0, j as f64, j as f64 + 1.0);
            if clipped.len() >= 3 {
                area[[j, i]] += polygon_area(&clipped);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn full_coverage_quad_is_255_everywhere() {
        let mut buffer = Array2::<u8>::zeros((6, 8));
        let xi = array![[0.0, 8.0], [0.0, 8.0]];
        let yi = array![[0.0, 0.0], [6.0, 6.0]];
        rasterise(
            &mut buffer.view_mut(),
            xi.view(),
            yi.view(),
            RasterOptions::default(),
        )
        .unwrap();
        assert!(buffer.iter().all(|&v| v == 255));
    }

    #[test]
    fn inset_quad_matches_hand_computed_weights() {
        let mut buffer = Array2::<u8>::zeros((6, 8));
        let xi = array![[0.5, 7.5], [0.5, 7.5]];
        let yi = array![[0.5, 0.5], [5.5, 5.5]];
        rasterise(
            &mut buffer.view_mut(),
            xi.view(),
            yi.view(),
            RasterOptions::default(),
        )
        .unwrap();

        // corner cells: 0.5 * 0.5 coverage
        assert_eq!(buffer[[0, 0]], 63);
        assert_eq!(buffer[[0, 7]], 63);
        assert_eq!(buffer[[5, 0]], 63);
        assert_eq!(buffer[[5, 7]], 63);
        // edge cells: 0.5 * 1.0 coverage
        assert_eq!(buffer[[0, 3]], 127);
        assert_eq!(buffer[[3, 0]], 127);
        // interior cells: fully covered
        assert_eq!(buffer[[2, 3]], 255);
    }

    #[test]
    fn rejects_malformed_vertex_arrays() {
        let mut buffer = Array2::<u8>::zeros((2, 2));
        let xi = array![[0.0, 1.0, 2.0], [0.0, 1.0, 2.0]];
        let yi = array![[0.0, 0.0], [1.0, 1.0]];
        let err = rasterise(
            &mut buffer.view_mut(),
            xi.view(),
            yi.view(),
            RasterOptions::default(),
        )
        .unwrap_err();
        assert_eq!(
            err,
            RegridError::VertexArrayShape {
                name: "xi",
                got: (2, 3)
            }
        );
    }
}
