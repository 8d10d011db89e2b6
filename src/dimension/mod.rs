//! The dimension normaliser (spec component D): moves the two spatial
//! axes to the trailing `(y, x)` position so the aggregator can work on
//! a uniform `(batch, sny, snx)` / `(batch, gny, gnx)` shape, and
//! restores the caller's original axis order on the way out.
//!
//! The permutation construction follows the original implementation's
//! `dmap`/`regrid_order`/`result_order`: non-spatial axes keep their
//! relative order and are moved ahead of `(y, x)`; the inverse
//! permutation used to restore the caller's axis order is derived from
//! the forward one, not recomputed independently.

use ndarray::{Array3, ArrayD, ArrayViewD, IxDyn};

/// A forward/inverse axis permutation moving `sy_dim`/`sx_dim` to the
/// trailing two positions.
#[derive(Debug, Clone, PartialEq)]
pub struct Permutation {
    /// `order[k]` is the original axis that ends up at position `k`.
    pub order: Vec<usize>,
    /// `inverse[k]` is the position original axis `k` ends up at.
    pub inverse: Vec<usize>,
}

impl Permutation {
    pub fn for_spatial_axes(ndim: usize, sx_dim: usize, sy_dim: usize) -> Self {
        let mut order: Vec<usize> = (0..ndim).filter(|&d| d != sx_dim && d != sy_dim).collect();
        order.push(sy_dim);
        order.push(sx_dim);

        let mut inverse = vec![0usize; ndim];
        for (pos, &orig) in order.iter().enumerate() {
            inverse[orig] = pos;
        }

        Self { order, inverse }
    }
}

/// Permute `data` so its trailing two axes are `(y, x)`, then collapse
/// every leading axis into a single batch axis.
pub fn permute_to_batch<T: Clone>(
    data: ArrayViewD<T>,
    perm: &Permutation,
    sny: usize,
    snx: usize,
) -> Array3<T> {
    let permuted = data.permuted_axes(perm.order.clone());
    let contiguous = permuted.as_standard_layout().into_owned();
    let batch = contiguous.len() / (sny * snx);
    Array3::from_shape_vec((batch, sny, snx), contiguous.into_raw_vec())
        .expect("permuted source data always reshapes to batch * sny * snx contiguous elements")
}

/// Invert [`permute_to_batch`]: expand the batch axis back into
/// `leading_shape` and restore the caller's original axis order.
pub fn unpermute_from_batch<T: Clone>(
    result: Array3<T>,
    perm: &Permutation,
    leading_shape: &[usize],
    gny: usize,
    gnx: usize,
) -> ArrayD<T> {
    let mut shape = leading_shape.to_vec();
    shape.push(gny);
    shape.push(gnx);
    let reshaped = ArrayD::from_shape_vec(IxDyn(&shape), result.into_raw_vec())
        .expect("regridded batch always reshapes to leading_shape * gny * gnx elements");
    reshaped.permuted_axes(perm.inverse.clone())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_spatial_axes_keep_relative_order() {
        // ndim=4, spatial axes at 1 (y) and 3 (x); non-spatial axes 0, 2
        // should end up first, in their original relative order.
        let perm = Permutation::for_spatial_axes(4, 3, 1);
        assert_eq!(perm.order, vec![0, 2, 1, 3]);
    }

    #[test]
    fn inverse_round_trips() {
        let perm = Permutation::for_spatial_axes(5, 4, 0);
        for axis in 0..5 {
            assert_eq!(perm.order[perm.inverse[axis]], axis);
        }
    }
}
