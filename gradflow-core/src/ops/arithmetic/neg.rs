use crate::autograd::BackwardOp;
use crate::error::GradFlowError;
use crate::ops::record;
use crate::tensor::Tensor;

/// Element-wise negation.
pub fn neg_op(a: &Tensor) -> Result<Tensor, GradFlowError> {
    let data = a.buffer().iter().map(|x| -x).collect();
    record(data, a.shape(), &[a], || BackwardOp::Neg)
}

#[cfg(test)]
#[path = "neg_test.rs"]
mod tests;
