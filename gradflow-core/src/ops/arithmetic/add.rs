use crate::autograd::BackwardOp;
use crate::error::GradFlowError;
use crate::ops::arithmetic::broadcast_operands;
use crate::ops::record;
use crate::tensor::Tensor;

/// Element-wise `a + b` with broadcasting.
///
/// # Errors
/// `BroadcastError` if the shapes are incompatible.
pub fn add_op(a: &Tensor, b: &Tensor) -> Result<Tensor, GradFlowError> {
    let operands = broadcast_operands(a, b)?;
    let data = operands.zip_map(|x, y| x + y);
    let output_shape = operands.output_shape.clone();
    record(data, output_shape, &[a, b], move || BackwardOp::Add {
        lhs_shape: operands.lhs_shape,
        rhs_shape: operands.rhs_shape,
        output_shape: operands.output_shape,
    })
}

/// `a + value` for every element.
pub fn add_scalar_op(a: &Tensor, value: f32) -> Result<Tensor, GradFlowError> {
    let data = a.buffer().iter().map(|x| x + value).collect();
    record(data, a.shape(), &[a], || BackwardOp::AddScalar)
}

#[cfg(test)]
#[path = "add_test.rs"]
mod tests;
