use std::str::FromStr;

use crate::error::GradFlowError;
use crate::nn::losses::Reduction;
use crate::tensor::Tensor;

/// Mean squared error between a prediction and a target of the same shape.
///
/// Built from differentiable primitives (`sub`, `pow_scalar`, `mean`/`sum`),
/// so both operands receive gradients when they require them.
#[derive(Debug, Clone, Default)]
pub struct MSELoss {
    reduction: Reduction,
}

impl MSELoss {
    pub fn new(reduction: Reduction) -> Self {
        MSELoss { reduction }
    }

    /// Creates the loss from a reduction name (`"mean"` or `"sum"`).
    pub fn from_reduction_str(reduction: &str) -> Result<Self, GradFlowError> {
        Ok(Self::new(Reduction::from_str(reduction)?))
    }

    pub fn reduction(&self) -> Reduction {
        self.reduction
    }

    pub fn calculate(&self, input: &Tensor, target: &Tensor) -> Result<Tensor, GradFlowError> {
        if input.shape() != target.shape() {
            return Err(GradFlowError::ShapeMismatch {
                expected: target.shape(),
                actual: input.shape(),
                operation: "MSELoss calculate".to_string(),
            });
        }
        let squared_diff = input.sub(target)?.pow_scalar(2.0)?;
        match self.reduction {
            Reduction::Mean => squared_diff.mean(),
            Reduction::Sum => squared_diff.sum(),
        }
    }
}

#[cfg(test)]
#[path = "mse_test.rs"]
mod tests;
