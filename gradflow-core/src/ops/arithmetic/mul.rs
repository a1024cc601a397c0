use crate::autograd::BackwardOp;
use crate::error::GradFlowError;
use crate::ops::arithmetic::broadcast_operands;
use crate::ops::record;
use crate::tensor::Tensor;

/// Element-wise `a * b` with broadcasting.
///
/// Both operands are saved, expanded to the output shape.
pub fn mul_op(a: &Tensor, b: &Tensor) -> Result<Tensor, GradFlowError> {
    let operands = broadcast_operands(a, b)?;
    let data = operands.zip_map(|x, y| x * y);
    let output_shape = operands.output_shape.clone();
    record(data, output_shape, &[a, b], move || BackwardOp::Mul {
        lhs: operands.lhs,
        rhs: operands.rhs,
        lhs_shape: operands.lhs_shape,
        rhs_shape: operands.rhs_shape,
        output_shape: operands.output_shape,
    })
}

/// `a * factor` for every element.
pub fn mul_scalar_op(a: &Tensor, factor: f32) -> Result<Tensor, GradFlowError> {
    let data = a.buffer().iter().map(|x| x * factor).collect();
    record(data, a.shape(), &[a], || BackwardOp::MulScalar { factor })
}

#[cfg(test)]
#[path = "mul_test.rs"]
mod tests;
