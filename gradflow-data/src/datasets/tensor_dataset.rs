use super::traits::Dataset;
use gradflow_core::{GradFlowError, Tensor};

/// Labeled samples stored as one `[N, ...]` input tensor and `N` class labels.
///
/// `get(i)` returns row `i` of the inputs as a tensor of shape `[...]`
/// together with its label. The values are copied out of `inputs` once, at
/// construction, so later changes to that tensor are not seen here.
#[derive(Debug, Clone)]
pub struct TensorDataset {
    values: Vec<f32>,
    sample_shape: Vec<usize>,
    labels: Vec<usize>,
}

impl TensorDataset {
    /// # Errors
    ///
    /// - `RankMismatch` if `inputs` is a scalar.
    /// - `ShapeMismatch` if `labels.len()` differs from the first dimension of `inputs`.
    pub fn new(inputs: &Tensor, labels: Vec<usize>) -> Result<Self, GradFlowError> {
        let shape = inputs.shape();
        if shape.is_empty() {
            return Err(GradFlowError::RankMismatch {
                expected: 1,
                actual: 0,
                operation: "TensorDataset::new".to_string(),
            });
        }
        if shape[0] != labels.len() {
            return Err(GradFlowError::ShapeMismatch {
                expected: vec![shape[0]],
                actual: vec![labels.len()],
                operation: "TensorDataset::new (labels)".to_string(),
            });
        }
        Ok(Self {
            values: inputs.to_vec(),
            sample_shape: shape[1..].to_vec(),
            labels,
        })
    }

    /// Shape of a single input sample.
    pub fn sample_shape(&self) -> &[usize] {
        &self.sample_shape
    }

    pub fn labels(&self) -> &[usize] {
        &self.labels
    }
}

impl Dataset for TensorDataset {
    type Item = (Tensor, usize);

    fn get(&self, index: usize) -> Result<Self::Item, GradFlowError> {
        let label = *self.labels.get(index).ok_or(GradFlowError::IndexOutOfBounds {
            index,
            len: self.labels.len(),
        })?;
        let stride: usize = self.sample_shape.iter().product();
        let row = self.values[index * stride..(index + 1) * stride].to_vec();
        Ok((Tensor::new(row, self.sample_shape.clone())?, label))
    }

    fn len(&self) -> usize {
        self.labels.len()
    }
}

#[cfg(test)]
#[path = "tensor_dataset_test.rs"]
mod tests;
