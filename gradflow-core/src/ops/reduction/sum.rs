use crate::autograd::BackwardOp;
use crate::error::GradFlowError;
use crate::ops::record;
use crate::tensor::Tensor;

/// Sum of all elements. An empty tensor sums to `0`.
pub fn sum_op(a: &Tensor) -> Result<Tensor, GradFlowError> {
    let buffer = a.buffer();
    let total: f32 = buffer.iter().sum();
    let numel = buffer.len();
    record(vec![total], vec![], &[a], move || BackwardOp::Sum { numel })
}

#[cfg(test)]
#[path = "sum_test.rs"]
mod tests;
