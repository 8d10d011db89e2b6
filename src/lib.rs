//! Conservative, area-weighted regridding between a rectilinear source
//! grid and a curvilinear target grid.
//!
//! A source cell's value is redistributed onto every target cell it
//! overlaps in proportion to the overlap area — the same operation
//! climate and atmospheric model pipelines use to translate gridded
//! data between map projections, backed by an exact polygon-clip
//! rasteriser rather than resampling or interpolation.
//!
//! ## Crate Status
//!
//! This crate is being iterated on and is constantly evolving.

pub mod error;
pub mod grid;
pub mod masked;
pub mod raster;
pub mod regridder;
pub mod traits;

mod aggregate;
mod dimension;
mod validate;

pub use aggregate::aggregate;
pub use error::RegridError;
pub use grid::{SourceGrid, TargetGrid};
pub use masked::MaskedArray;
pub use raster::{RasterOptions, rasterise};
pub use regridder::{IdentityProjector, Projector, Regridder, make_regridder};
