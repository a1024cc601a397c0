use crate::autograd::BackwardOp;
use crate::error::GradFlowError;
use crate::ops::record;
use crate::tensor::Tensor;

/// Rectified linear unit: `max(0, x)` element-wise.
///
/// The gradient at exactly `0` is taken as `0`.
pub fn relu_op(a: &Tensor) -> Result<Tensor, GradFlowError> {
    let input = a.buffer();
    let data = input.iter().map(|&x| if x > 0.0 { x } else { 0.0 }).collect();
    record(data, a.shape(), &[a], move || BackwardOp::Relu { input })
}

#[cfg(test)]
#[path = "relu_test.rs"]
mod tests;
