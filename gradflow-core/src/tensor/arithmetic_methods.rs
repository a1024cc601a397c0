use crate::error::GradFlowError;
use crate::ops::arithmetic::{add_op, add_scalar_op, mul_op, mul_scalar_op, neg_op, pow_scalar_op, sub_op};
use crate::ops::linalg::matmul_op;
use crate::ops::math_elem::exp_op;
use crate::tensor::Tensor;

/// Element-wise arithmetic and matrix product. Each method delegates to the
/// matching `ops` function, which records the graph node when needed.
impl Tensor {
    /// `self + other`, broadcasting both operands.
    pub fn add(&self, other: &Tensor) -> Result<Tensor, GradFlowError> {
        add_op(self, other)
    }

    /// `self - other`, broadcasting both operands.
    pub fn sub(&self, other: &Tensor) -> Result<Tensor, GradFlowError> {
        sub_op(self, other)
    }

    /// Element-wise `self * other`, broadcasting both operands.
    pub fn mul(&self, other: &Tensor) -> Result<Tensor, GradFlowError> {
        mul_op(self, other)
    }

    pub fn neg(&self) -> Result<Tensor, GradFlowError> {
        neg_op(self)
    }

    pub fn add_scalar(&self, value: f32) -> Result<Tensor, GradFlowError> {
        add_scalar_op(self, value)
    }

    pub fn sub_scalar(&self, value: f32) -> Result<Tensor, GradFlowError> {
        add_scalar_op(self, -value)
    }

    pub fn mul_scalar(&self, factor: f32) -> Result<Tensor, GradFlowError> {
        mul_scalar_op(self, factor)
    }

    /// Divides every element by `divisor` (recorded as a scalar multiplication).
    pub fn div_scalar(&self, divisor: f32) -> Result<Tensor, GradFlowError> {
        mul_scalar_op(self, 1.0 / divisor)
    }

    /// Element-wise `self ^ exponent`.
    pub fn pow_scalar(&self, exponent: f32) -> Result<Tensor, GradFlowError> {
        pow_scalar_op(self, exponent)
    }

    pub fn exp(&self) -> Result<Tensor, GradFlowError> {
        exp_op(self)
    }

    /// Matrix product of two 2-D tensors.
    pub fn matmul(&self, other: &Tensor) -> Result<Tensor, GradFlowError> {
        matmul_op(self, other)
    }
}
