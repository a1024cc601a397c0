use crate::error::GradFlowError;
use crate::nn::losses::Reduction;
use crate::tensor::Tensor;

/// Cross-entropy over raw `[batch, classes]` scores. Equivalent to
/// `LogSoftmax` followed by `NLLLoss`, computed in one fused node.
#[derive(Debug, Clone, Default)]
pub struct CrossEntropyLoss {
    reduction: Reduction,
}

impl CrossEntropyLoss {
    pub fn new(reduction: Reduction) -> Self {
        CrossEntropyLoss { reduction }
    }

    pub fn reduction(&self) -> Reduction {
        self.reduction
    }

    pub fn calculate(&self, scores: &Tensor, labels: &[usize]) -> Result<Tensor, GradFlowError> {
        scores.cross_entropy(labels, self.reduction)
    }
}

#[cfg(test)]
#[path = "cross_entropy_test.rs"]
mod tests;
