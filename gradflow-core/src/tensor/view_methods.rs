use crate::error::GradFlowError;
use crate::tensor::Tensor;

impl Tensor {
    /// Returns a tensor with `new_shape` sharing this tensor's values.
    /// Delegates to [`ops::view::reshape::reshape_op`](crate::ops::view::reshape::reshape_op).
    ///
    /// # Example
    /// ```
    /// use gradflow_core::Tensor;
    ///
    /// let images = Tensor::new(vec![0.0; 2 * 28 * 28], vec![2, 1, 28, 28]).unwrap();
    /// let flat = images.reshape(vec![2, 784]).unwrap();
    /// assert_eq!(flat.shape(), vec![2, 784]);
    /// ```
    pub fn reshape(&self, new_shape: Vec<usize>) -> Result<Tensor, GradFlowError> {
        crate::ops::view::reshape::reshape_op(self, new_shape)
    }

    /// Collapses all dimensions after the first: `[N, ...] -> [N, rest]`.
    pub fn flatten_batch(&self) -> Result<Tensor, GradFlowError> {
        let shape = self.shape();
        match shape.split_first() {
            Some((&batch, rest)) => self.reshape(vec![batch, rest.iter().product()]),
            None => Err(GradFlowError::RankMismatch {
                expected: 1,
                actual: 0,
                operation: "flatten_batch".to_string(),
            }),
        }
    }

    /// Swaps the axes of a 2-D tensor.
    pub fn transpose(&self) -> Result<Tensor, GradFlowError> {
        crate::ops::linalg::transpose::transpose_op(self)
    }
}
