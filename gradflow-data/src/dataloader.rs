//! # DataLoader
//!
//! Groups dataset items into batches, in the order chosen by a [`Sampler`].
//!
//! ```rust
//! use gradflow_core::Tensor;
//! use gradflow_data::{collate_labeled, DataLoader, RandomSampler, TensorDataset};
//!
//! let inputs = Tensor::new(vec![0.0; 12], vec![6, 2]).unwrap();
//! let dataset = TensorDataset::new(&inputs, vec![0, 1, 0, 1, 0, 1]).unwrap();
//! let loader = DataLoader::with_collate(
//!     dataset,
//!     4,
//!     RandomSampler::new(false, None),
//!     false,
//!     Box::new(collate_labeled),
//! );
//! for batch in &loader {
//!     let batch = batch.unwrap();
//!     assert_eq!(batch.inputs.shape()[1], 2);
//! }
//! ```

use crate::datasets::Dataset;
use crate::samplers::Sampler;
use gradflow_core::{GradFlowError, Tensor};

/// Turns the items of one batch into the value yielded by the loader.
pub type CollateFn<D, B> =
    Box<dyn Fn(Vec<<D as Dataset>::Item>) -> Result<B, GradFlowError> + Send + Sync>;

/// Batches from `D`, visited in the order produced by `S`, collated into `B`.
///
/// Each call to [`DataLoader::iter`] starts a new epoch and asks the sampler
/// for a fresh order. Every batch holds `batch_size` items except possibly the
/// last one, which is dropped when `drop_last` is set. A `batch_size` of 0
/// yields no batches.
pub struct DataLoader<D: Dataset, S: Sampler, B = Vec<<D as Dataset>::Item>> {
    dataset: D,
    batch_size: usize,
    sampler: S,
    drop_last: bool,
    collate_fn: CollateFn<D, B>,
}

impl<D: Dataset, S: Sampler> DataLoader<D, S> {
    /// Creates a loader yielding `Vec`s of items, or whatever `collate_fn`
    /// returns for them when one is given.
    pub fn new(
        dataset: D,
        batch_size: usize,
        sampler: S,
        drop_last: bool,
        collate_fn: Option<CollateFn<D, Vec<D::Item>>>,
    ) -> Self {
        let collate_fn: CollateFn<D, Vec<D::Item>> = match collate_fn {
            Some(collate_fn) => collate_fn,
            None => Box::new(|batch: Vec<D::Item>| Ok(batch)),
        };
        Self::with_collate(dataset, batch_size, sampler, drop_last, collate_fn)
    }
}

impl<D: Dataset, S: Sampler, B> DataLoader<D, S, B> {
    /// Creates a loader whose batches are built by `collate_fn`, e.g.
    /// [`collate_labeled`].
    pub fn with_collate(
        dataset: D,
        batch_size: usize,
        sampler: S,
        drop_last: bool,
        collate_fn: CollateFn<D, B>,
    ) -> Self {
        if batch_size == 0 {
            log::warn!("DataLoader created with batch_size 0; it will yield no batches");
        }
        Self {
            dataset,
            batch_size,
            sampler,
            drop_last,
            collate_fn,
        }
    }

    pub fn dataset(&self) -> &D {
        &self.dataset
    }

    pub fn batch_size(&self) -> usize {
        self.batch_size
    }

    pub fn drop_last(&self) -> bool {
        self.drop_last
    }

    /// Number of batches in one epoch.
    pub fn len(&self) -> usize {
        if self.batch_size == 0 {
            return 0;
        }
        let num_samples = self.sampler.len(self.dataset.len());
        if self.drop_last {
            num_samples / self.batch_size
        } else {
            num_samples.div_ceil(self.batch_size)
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Starts a new epoch.
    pub fn iter(&self) -> BatchIter<'_, D, S, B> {
        log::debug!(
            "DataLoader epoch: {} samples in {} batches (batch_size={}, drop_last={})",
            self.sampler.len(self.dataset.len()),
            self.len(),
            self.batch_size,
            self.drop_last
        );
        BatchIter {
            loader: self,
            indices: self.sampler.iter(self.dataset.len()),
        }
    }
}

impl<'a, D: Dataset, S: Sampler, B> IntoIterator for &'a DataLoader<D, S, B> {
    type Item = Result<B, GradFlowError>;
    type IntoIter = BatchIter<'a, D, S, B>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// One epoch over a [`DataLoader`].
pub struct BatchIter<'a, D: Dataset, S: Sampler, B> {
    loader: &'a DataLoader<D, S, B>,
    indices: Box<dyn Iterator<Item = usize> + Send + Sync>,
}

impl<'a, D: Dataset, S: Sampler, B> Iterator for BatchIter<'a, D, S, B> {
    type Item = Result<B, GradFlowError>;

    /// `Some(Err(_))` if fetching an item or collating fails; iteration can
    /// continue with the next batch.
    fn next(&mut self) -> Option<Self::Item> {
        let batch_size = self.loader.batch_size;
        let epoch_len = self.loader.sampler.len(self.loader.dataset.len());
        let mut batch = Vec::with_capacity(batch_size.min(epoch_len));
        for index in self.indices.by_ref().take(batch_size) {
            match self.loader.dataset.get(index) {
                Ok(item) => batch.push(item),
                Err(e) => return Some(Err(e)),
            }
        }
        if batch.is_empty() || (self.loader.drop_last && batch.len() < batch_size) {
            return None;
        }
        Some((self.loader.collate_fn)(batch))
    }
}

/// A batch of labeled samples: `inputs` has shape `[B, ...]`.
#[derive(Debug, Clone)]
pub struct Batch {
    pub inputs: Tensor,
    pub labels: Vec<usize>,
}

impl Batch {
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

/// Stacks `(input, label)` samples along a new leading axis.
///
/// # Errors
/// `ShapeMismatch` if the inputs do not all have the same shape,
/// `UnsupportedOperation` for an empty batch.
pub fn collate_labeled(samples: Vec<(Tensor, usize)>) -> Result<Batch, GradFlowError> {
    let sample_shape = match samples.first() {
        Some((input, _)) => input.shape(),
        None => {
            return Err(GradFlowError::UnsupportedOperation(
                "collate of an empty batch".to_string(),
            ))
        }
    };
    let mut values = Vec::with_capacity(samples.len() * sample_shape.iter().product::<usize>());
    let mut labels = Vec::with_capacity(samples.len());
    for (input, label) in &samples {
        let shape = input.shape();
        if shape != sample_shape {
            return Err(GradFlowError::ShapeMismatch {
                expected: sample_shape,
                actual: shape,
                operation: "collate_labeled".to_string(),
            });
        }
        values.extend(input.to_vec());
        labels.push(*label);
    }

    let mut batch_shape = Vec::with_capacity(sample_shape.len() + 1);
    batch_shape.push(samples.len());
    batch_shape.extend_from_slice(&sample_shape);
    Ok(Batch {
        inputs: Tensor::new(values, batch_shape)?,
        labels,
    })
}

#[cfg(test)]
#[path = "dataloader_test.rs"]
mod tests;
