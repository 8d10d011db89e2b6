//! The regridder façade (spec component F): snapshots a source and
//! target grid once, then reuses the (potentially expensive) projected
//! target-vertex bounds across every subsequent regrid call.

use std::sync::OnceLock;

use ndarray::{Array2, ArrayView1, ArrayViewD};

use crate::aggregate;
use crate::error::RegridError;
use crate::grid::{SourceGrid, TargetGrid};
use crate::masked::MaskedArray;
use crate::traits::numeric::ToFloat64;

/// External collaborator that projects target-grid vertex arrays from
/// one coordinate reference system into another.
///
/// Deliberately left abstract: coordinate-reference-system transforms
/// are out of scope for this crate — the host supplies an implementation
/// backed by whatever CRS library it already depends on.
pub trait Projector {
    fn project(
        &self,
        from_crs: &str,
        to_crs: &str,
        x: &Array2<f64>,
        y: &Array2<f64>,
    ) -> (Array2<f64>, Array2<f64>);
}

/// A no-op projector for the common case where source and target grids
/// already share a coordinate reference system.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentityProjector;

impl Projector for IdentityProjector {
    fn project(
        &self,
        _from_crs: &str,
        _to_crs: &str,
        x: &Array2<f64>,
        y: &Array2<f64>,
    ) -> (Array2<f64>, Array2<f64>) {
        (x.clone(), y.clone())
    }
}

struct RegridderCache {
    gx_bounds: Array2<f64>,
    gy_bounds: Array2<f64>,
}

/// A façade over [`aggregate::aggregate`] that snapshots a source and
/// target grid once so that later mutation of whatever coordinate
/// objects the host derived them from cannot corrupt a live regridder.
///
/// # Description
///
/// The first call to [`Regridder::regrid`] projects the target grid's
/// bounds into the source grid's coordinate reference system via
/// `projector` and caches the result in a [`OnceLock`]; every later call
/// reuses it, so repeated calls on the same façade only pay the
/// projection cost once.
pub struct Regridder<P> {
    src_grid: SourceGrid,
    tgt_grid: TargetGrid,
    projector: P,
    cache: OnceLock<RegridderCache>,
}

impl<P: Projector> Regridder<P> {
    /// Create a regridder from source and target grid snapshots.
    ///
    /// # Returns
    ///
    /// * `Err(RegridError::MissingCrs)`: If either grid has no native CRS.
    pub fn new(src_grid: SourceGrid, tgt_grid: TargetGrid, projector: P) -> Result<Self, RegridError> {
        if src_grid.crs_id.is_empty() {
            return Err(RegridError::MissingCrs { grid: "source" });
        }
        if tgt_grid.crs_id.is_empty() {
            return Err(RegridError::MissingCrs { grid: "target" });
        }
        Ok(Self {
            src_grid,
            tgt_grid,
            projector,
            cache: OnceLock::new(),
        })
    }

    fn cache(&self) -> &RegridderCache {
        self.cache.get_or_init(|| {
            let (gx_bounds, gy_bounds) = if self.src_grid.crs_id == self.tgt_grid.crs_id {
                (self.tgt_grid.x_bounds.clone(), self.tgt_grid.y_bounds.clone())
            } else {
                self.projector.project(
                    &self.tgt_grid.crs_id,
                    &self.src_grid.crs_id,
                    &self.tgt_grid.x_bounds,
                    &self.tgt_grid.y_bounds,
                )
            };
            RegridderCache { gx_bounds, gy_bounds }
        })
    }

    /// Regrid `data`, defined on the x/y coordinates of this regridder's
    /// source grid, onto the target grid.
    ///
    /// # Returns
    ///
    /// * `Err(RegridError::GridMismatch)`: If `sx_points`/`sy_points`
    ///    differ from the grid this regridder was constructed with.
    pub fn regrid<T>(
        &self,
        data: ArrayViewD<T>,
        mask: Option<ArrayViewD<bool>>,
        sx_points: ArrayView1<f64>,
        sy_points: ArrayView1<f64>,
        sx_dim: isize,
        sy_dim: isize,
    ) -> Result<MaskedArray<f64>, RegridError>
    where
        T: ToFloat64,
    {
        if sx_points != self.src_grid.x_points.view() || sy_points != self.src_grid.y_points.view() {
            return Err(RegridError::GridMismatch);
        }

        let cache = self.cache();
        aggregate::aggregate(
            data,
            mask,
            self.src_grid.x_points.view(),
            self.src_grid.x_bounds.view(),
            self.src_grid.y_points.view(),
            self.src_grid.y_bounds.view(),
            sx_dim,
            sy_dim,
            cache.gx_bounds.view(),
            cache.gy_bounds.view(),
        )
    }
}

/// Build a [`Regridder`] from source and target grid snapshots.
pub fn make_regridder<P: Projector>(
    src_grid: SourceGrid,
    tgt_grid: TargetGrid,
    projector: P,
) -> Result<Regridder<P>, RegridError> {
    Regridder::new(src_grid, tgt_grid, projector)
}
