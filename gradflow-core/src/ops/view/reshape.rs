use crate::autograd::BackwardOp;
use crate::error::GradFlowError;
use crate::ops::record_shared;
use crate::tensor::Tensor;

/// Returns a tensor with `new_shape` sharing `a`'s value buffer.
///
/// # Errors
/// `ShapeMismatch` if `new_shape` does not hold the same number of elements.
pub fn reshape_op(a: &Tensor, new_shape: Vec<usize>) -> Result<Tensor, GradFlowError> {
    let shape = a.shape();
    let new_numel: usize = new_shape.iter().product();
    if new_numel != a.numel() {
        return Err(GradFlowError::ShapeMismatch {
            expected: shape,
            actual: new_shape,
            operation: "reshape (element count)".to_string(),
        });
    }
    record_shared(a.buffer(), new_shape, &[a], || BackwardOp::Reshape)
}

#[cfg(test)]
#[path = "reshape_test.rs"]
mod tests;
