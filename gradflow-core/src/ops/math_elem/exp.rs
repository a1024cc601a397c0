use std::sync::Arc;

use crate::autograd::BackwardOp;
use crate::error::GradFlowError;
use crate::ops::record_shared;
use crate::tensor::Tensor;

/// Element-wise `e^a`. Turns log-probabilities back into probabilities.
pub fn exp_op(a: &Tensor) -> Result<Tensor, GradFlowError> {
    let output: Arc<Vec<f32>> = Arc::new(a.buffer().iter().map(|x| x.exp()).collect());
    let saved = Arc::clone(&output);
    record_shared(output, a.shape(), &[a], move || BackwardOp::Exp { output: saved })
}

#[cfg(test)]
#[path = "exp_test.rs"]
mod tests;
