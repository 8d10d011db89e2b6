//! Grid descriptors and the source-grid regularity check (spec component
//! B) that underlies the whole crate's physical-to-index-space mapping.

pub mod regular;
mod source;
mod target;

pub use regular::{DEFAULT_REGULAR_RTOL, origin_and_step};
pub use source::SourceGrid;
pub use target::TargetGrid;
