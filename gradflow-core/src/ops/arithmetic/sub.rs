use crate::autograd::BackwardOp;
use crate::error::GradFlowError;
use crate::ops::arithmetic::broadcast_operands;
use crate::ops::record;
use crate::tensor::Tensor;

/// Element-wise `a - b` with broadcasting.
pub fn sub_op(a: &Tensor, b: &Tensor) -> Result<Tensor, GradFlowError> {
    let operands = broadcast_operands(a, b)?;
    let data = operands.zip_map(|x, y| x - y);
    let output_shape = operands.output_shape.clone();
    record(data, output_shape, &[a, b], move || BackwardOp::Sub {
        lhs_shape: operands.lhs_shape,
        rhs_shape: operands.rhs_shape,
        output_shape: operands.output_shape,
    })
}

#[cfg(test)]
#[path = "sub_test.rs"]
mod tests;
