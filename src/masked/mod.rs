use ndarray::ArrayD;

/// An N-dimensional array paired with a validity mask of the same shape.
///
/// `mask[i] == true` marks element `i` as invalid, following the
/// `numpy.ma` convention the original host (gridded-data cubes) relies
/// on — a masked entry carries no weight in any downstream aggregation.
#[derive(Debug, Clone, PartialEq)]
pub struct MaskedArray<T> {
    pub data: ArrayD<T>,
    pub mask: ArrayD<bool>,
}

impl<T: Clone> MaskedArray<T> {
    /// Wrap `data` with an explicit mask of the same shape.
    pub fn new(data: ArrayD<T>, mask: ArrayD<bool>) -> Self {
        debug_assert_eq!(
            data.shape(),
            mask.shape(),
            "mask shape must match data shape"
        );
        Self { data, mask }
    }

    /// Wrap fully-valid data (mask everywhere `false`).
    pub fn all_valid(data: ArrayD<T>) -> Self {
        let mask = ArrayD::from_elem(data.raw_dim(), false);
        Self { data, mask }
    }

    /// Number of masked (invalid) elements.
    pub fn masked_count(&self) -> usize {
        self.mask.iter().filter(|&&m| m).count()
    }
}
