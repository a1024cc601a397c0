use crate::error::GradFlowError;
use crate::ops::activation::{log_softmax_op, relu_op, sigmoid_op};
use crate::ops::loss::{cross_entropy_op, nll_loss_op, Reduction};
use crate::tensor::Tensor;

/// Activations and classification losses.
impl Tensor {
    pub fn relu(&self) -> Result<Tensor, GradFlowError> {
        relu_op(self)
    }

    pub fn sigmoid(&self) -> Result<Tensor, GradFlowError> {
        sigmoid_op(self)
    }

    /// Log-softmax over the last axis of a 1-D or 2-D tensor.
    pub fn log_softmax(&self) -> Result<Tensor, GradFlowError> {
        log_softmax_op(self)
    }

    /// Negative log-likelihood, treating `self` as `[batch, classes]` log-probabilities.
    pub fn nll_loss(&self, labels: &[usize], reduction: Reduction) -> Result<Tensor, GradFlowError> {
        nll_loss_op(self, labels, reduction)
    }

    /// Cross-entropy, treating `self` as `[batch, classes]` raw scores.
    pub fn cross_entropy(&self, labels: &[usize], reduction: Reduction) -> Result<Tensor, GradFlowError> {
        cross_entropy_op(self, labels, reduction)
    }
}
