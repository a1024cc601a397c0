use crate::autograd::BackwardOp;
use crate::error::GradFlowError;
use crate::ops::record;
use crate::tensor::Tensor;

/// Arithmetic mean of all elements.
///
/// # Errors
/// `UnsupportedOperation` for an empty tensor.
pub fn mean_op(a: &Tensor) -> Result<Tensor, GradFlowError> {
    let buffer = a.buffer();
    let numel = buffer.len();
    if numel == 0 {
        return Err(GradFlowError::UnsupportedOperation(
            "mean of an empty tensor".to_string(),
        ));
    }
    let mean = buffer.iter().sum::<f32>() / numel as f32;
    record(vec![mean], vec![], &[a], move || BackwardOp::Mean { numel })
}

#[cfg(test)]
#[path = "mean_test.rs"]
mod tests;
