use std::sync::Arc;

use crate::autograd::BackwardOp;
use crate::error::GradFlowError;
use crate::ops::record_shared;
use crate::tensor::Tensor;

/// Logistic function evaluated without overflowing `exp` for large `|x|`.
pub(crate) fn stable_sigmoid(x: f32) -> f32 {
    if x >= 0.0 {
        1.0 / (1.0 + (-x).exp())
    } else {
        let e = x.exp();
        e / (1.0 + e)
    }
}

/// Element-wise `1 / (1 + e^-x)`. The output is saved for the backward pass.
pub fn sigmoid_op(a: &Tensor) -> Result<Tensor, GradFlowError> {
    let output: Arc<Vec<f32>> = Arc::new(a.buffer().iter().map(|&x| stable_sigmoid(x)).collect());
    let saved = Arc::clone(&output);
    record_shared(output, a.shape(), &[a], move || BackwardOp::Sigmoid { output: saved })
}

#[cfg(test)]
#[path = "sigmoid_test.rs"]
mod tests;
