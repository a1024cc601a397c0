use super::*;
use crate::datasets::{TensorDataset, VecDataset};
use crate::samplers::{RandomSampler, SequentialSampler};
use approx::assert_relative_eq;

fn labeled_dataset(n: usize) -> TensorDataset {
    let values: Vec<f32> = (0..n * 2).map(|v| v as f32).collect();
    let inputs = Tensor::new(values, vec![n, 2]).unwrap();
    TensorDataset::new(&inputs, (0..n).map(|i| i % 3).collect()).unwrap()
}

#[test]
fn test_dataloader_sequential() {
    let loader = DataLoader::new(VecDataset::new(vec![1, 2, 3, 4, 5, 6]), 2, SequentialSampler::new(), false, None);
    assert_eq!(loader.len(), 3);
    let batches: Vec<Vec<i32>> = loader.iter().map(|b| b.unwrap()).collect();
    assert_eq!(batches, vec![vec![1, 2], vec![3, 4], vec![5, 6]]);
}

#[test]
fn test_dataloader_partial_last_batch() {
    let loader = DataLoader::new(VecDataset::new(vec![1, 2, 3, 4, 5]), 2, SequentialSampler::new(), false, None);
    assert_eq!(loader.len(), 3);
    let batches: Vec<Vec<i32>> = loader.iter().map(|b| b.unwrap()).collect();
    assert_eq!(batches.last(), Some(&vec![5]));
}

#[test]
fn test_dataloader_drop_last() {
    let loader = DataLoader::new(VecDataset::new(vec![1, 2, 3, 4, 5]), 2, SequentialSampler::new(), true, None);
    assert_eq!(loader.len(), 2);
    let batches: Vec<Vec<i32>> = loader.iter().map(|b| b.unwrap()).collect();
    assert_eq!(batches, vec![vec![1, 2], vec![3, 4]]);
}

#[test]
fn test_dataloader_zero_batch_size_yields_nothing() {
    let loader = DataLoader::new(VecDataset::new(vec![1, 2]), 0, SequentialSampler::new(), false, None);
    assert!(loader.is_empty());
    assert_eq!(loader.iter().count(), 0);
}

#[test]
fn test_dataloader_batch_size_larger_than_dataset() {
    let loader = DataLoader::new(VecDataset::new(vec![1, 2, 3]), usize::MAX / 2, SequentialSampler::new(), false, None);
    assert_eq!(loader.len(), 1);
    let batches: Vec<Vec<i32>> = loader.iter().map(|b| b.unwrap()).collect();
    assert_eq!(batches, vec![vec![1, 2, 3]]);

    let huge = DataLoader::new(VecDataset::new(vec![1, 2, 3]), usize::MAX, SequentialSampler::new(), true, None);
    assert_eq!(huge.len(), 0);
    assert_eq!(huge.iter().count(), 0);
}

#[test]
fn test_dataloader_custom_collate() {
    let collate: CollateFn<VecDataset<i32>, Vec<i32>> = Box::new(|batch: Vec<i32>| Ok(vec![batch.iter().sum::<i32>()]));
    let loader = DataLoader::new(VecDataset::new(vec![1, 2, 3, 4]), 2, SequentialSampler::new(), false, Some(collate));
    let batches: Vec<Vec<i32>> = loader.iter().map(|b| b.unwrap()).collect();
    assert_eq!(batches, vec![vec![3], vec![7]]);
}

#[test]
fn test_dataloader_collate_labeled_batches() {
    let loader = DataLoader::with_collate(labeled_dataset(5), 2, SequentialSampler::new(), false, Box::new(collate_labeled));
    let batches: Vec<Batch> = loader.iter().collect::<Result<_, _>>().unwrap();
    assert_eq!(batches.len(), 3);
    assert_eq!(batches[0].inputs.shape(), vec![2, 2]);
    assert_eq!(batches[0].labels, vec![0, 1]);
    let second = batches[1].inputs.to_vec();
    for (actual, expected) in second.iter().zip([4.0, 5.0, 6.0, 7.0]) {
        assert_relative_eq!(*actual, expected);
    }
    assert_eq!(batches[2].inputs.shape(), vec![1, 2]);
    assert_eq!(batches[2].len(), 1);
}

#[test]
fn test_dataloader_shuffled_epoch_covers_every_sample_once() {
    let n = 10;
    let loader = DataLoader::with_collate(labeled_dataset(n), 3, RandomSampler::new(false, None), false, Box::new(collate_labeled));
    for _epoch in 0..2 {
        let mut firsts = Vec::new();
        for batch in &loader {
            let batch = batch.unwrap();
            let values = batch.inputs.to_vec();
            // Each row is [2i, 2i + 1]; recover i from the first column.
            firsts.extend(values.chunks(2).map(|row| row[0] as usize / 2));
        }
        firsts.sort_unstable();
        assert_eq!(firsts, (0..n).collect::<Vec<_>>());
    }
}

#[test]
fn test_collate_labeled_rejects_mixed_shapes() {
    let a = Tensor::new(vec![1.0, 2.0], vec![2]).unwrap();
    let b = Tensor::new(vec![1.0, 2.0, 3.0], vec![3]).unwrap();
    match collate_labeled(vec![(a, 0), (b, 1)]) {
        Err(GradFlowError::ShapeMismatch { expected, actual, .. }) => {
            assert_eq!(expected, vec![2]);
            assert_eq!(actual, vec![3]);
        }
        other => panic!("Expected ShapeMismatch, got {:?}", other),
    }
}

#[test]
fn test_collate_labeled_empty_batch() {
    assert!(matches!(
        collate_labeled(Vec::new()),
        Err(GradFlowError::UnsupportedOperation(_))
    ));
}

/// Fails on odd indices.
#[derive(Debug)]
struct EvenOnly;

impl Dataset for EvenOnly {
    type Item = usize;

    fn get(&self, index: usize) -> Result<usize, GradFlowError> {
        if index % 2 == 1 {
            return Err(GradFlowError::IndexOutOfBounds { index, len: 0 });
        }
        Ok(index)
    }

    fn len(&self) -> usize {
        4
    }
}

#[test]
fn test_dataloader_propagates_dataset_errors() {
    let loader = DataLoader::new(EvenOnly, 1, SequentialSampler::new(), false, None);
    let results: Vec<Result<Vec<usize>, GradFlowError>> = loader.iter().collect();
    assert_eq!(results.len(), 4);
    assert_eq!(results[0], Ok(vec![0]));
    assert_eq!(results[1], Err(GradFlowError::IndexOutOfBounds { index: 1, len: 0 }));
    assert_eq!(results[2], Ok(vec![2]));
}
