use std::cmp::PartialOrd;
use std::fmt::Debug;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Div, Mul, MulAssign, Sub};

/// Blanket bound for source-data element types the aggregator can
/// average, carried over from the numerics this crate was grown from
/// (`statistics::sum`, `phasor::time_domain` there): any `Copy` numeric
/// type that converts losslessly enough into `f64` for weighted-mean
/// arithmetic, and that can cross a `rayon` thread boundary since the
/// aggregator driver parallelises over target cells.
pub trait ToFloat64:
    Copy
    + Add<Output = Self>
    + Div<Output = Self>
    + Mul<Output = Self>
    + Sub<Output = Self>
    + AddAssign
    + MulAssign
    + Sum
    + Debug
    + Default
    + Into<f64>
    + PartialOrd
    + Send
    + Sync
{
}

impl<T> ToFloat64 for T where
    T: Copy
        + Add<Output = T>
        + Div<Output = T>
        + Mul<Output = T>
        + Sub<Output = T>
        + AddAssign
        + MulAssign
        + Sum
        + Debug
        + Default
        + Into<f64>
        + PartialOrd
        + Send
        + Sync
{
}
