//! Datasets, samplers and batching for feeding `gradflow-core` models.

pub mod dataloader;
pub mod datasets;
pub mod samplers;

pub use dataloader::{collate_labeled, Batch, DataLoader};
pub use datasets::{Dataset, TensorDataset, VecDataset};
pub use samplers::{RandomSampler, Sampler, SequentialSampler};
