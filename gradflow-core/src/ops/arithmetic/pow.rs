use crate::autograd::BackwardOp;
use crate::error::GradFlowError;
use crate::ops::record;
use crate::tensor::Tensor;

/// Element-wise `a ^ exponent` for a scalar exponent.
///
/// Negative bases with a non-integer exponent yield NaN, as `f32::powf` does.
pub fn pow_scalar_op(a: &Tensor, exponent: f32) -> Result<Tensor, GradFlowError> {
    let input = a.buffer();
    let data = input.iter().map(|x| x.powf(exponent)).collect();
    record(data, a.shape(), &[a], move || BackwardOp::Pow { input, exponent })
}

#[cfg(test)]
#[path = "pow_test.rs"]
mod tests;
