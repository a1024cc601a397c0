use std::fmt::Debug;

/// Defines the order in which a `DataLoader` visits dataset indices.
pub trait Sampler: Debug + Send + Sync {
    /// Returns the indices for one pass over a dataset of `dataset_len` items.
    /// Called once per epoch.
    fn iter(&self, dataset_len: usize) -> Box<dyn Iterator<Item = usize> + Send + Sync>;

    /// Number of indices `iter` yields for a dataset of `dataset_len` items.
    fn len(&self, dataset_len: usize) -> usize;
}
