use crate::{error::GradFlowError, tensor::Tensor};

impl Tensor {
    /// Sum of all elements as a scalar tensor.
    /// Delegates to `ops::reduction::sum::sum_op`.
    pub fn sum(&self) -> Result<Tensor, GradFlowError> {
        crate::ops::reduction::sum::sum_op(self)
    }

    /// Mean of all elements as a scalar tensor.
    /// Delegates to `ops::reduction::mean::mean_op`.
    pub fn mean(&self) -> Result<Tensor, GradFlowError> {
        crate::ops::reduction::mean::mean_op(self)
    }
}
