use crate::error::GradFlowError;
use crate::nn::losses::Reduction;
use crate::tensor::Tensor;

/// Negative log-likelihood over `[batch, classes]` log-probabilities,
/// typically the output of a [`LogSoftmax`](crate::nn::LogSoftmax) layer.
#[derive(Debug, Clone, Default)]
pub struct NLLLoss {
    reduction: Reduction,
}

impl NLLLoss {
    pub fn new(reduction: Reduction) -> Self {
        NLLLoss { reduction }
    }

    pub fn reduction(&self) -> Reduction {
        self.reduction
    }

    pub fn calculate(&self, log_probs: &Tensor, labels: &[usize]) -> Result<Tensor, GradFlowError> {
        log_probs.nll_loss(labels, self.reduction)
    }
}

#[cfg(test)]
#[path = "nll_test.rs"]
mod tests;
