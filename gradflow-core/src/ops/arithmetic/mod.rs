//! Element-wise arithmetic with NumPy-style broadcasting.

use std::sync::Arc;

use crate::error::GradFlowError;
use crate::tensor::broadcast_utils::{broadcast_index_map, broadcast_shapes};
use crate::tensor::Tensor;

pub mod add;
pub mod mul;
pub mod neg;
pub mod pow;
pub mod sub;

pub use add::{add_op, add_scalar_op};
pub use mul::{mul_op, mul_scalar_op};
pub use neg::neg_op;
pub use pow::pow_scalar_op;
pub use sub::sub_op;

/// Both operands of a binary op, expanded to the broadcast output shape.
pub(crate) struct Broadcasted {
    pub(crate) lhs_shape: Vec<usize>,
    pub(crate) rhs_shape: Vec<usize>,
    pub(crate) output_shape: Vec<usize>,
    pub(crate) lhs: Arc<Vec<f32>>,
    pub(crate) rhs: Arc<Vec<f32>>,
}

impl Broadcasted {
    pub(crate) fn zip_map<F>(&self, f: F) -> Vec<f32>
    where
        F: Fn(f32, f32) -> f32,
    {
        self.lhs.iter().zip(self.rhs.iter()).map(|(&a, &b)| f(a, b)).collect()
    }
}

/// Validates that `a` and `b` broadcast together and expands both.
/// An operand already of the output shape shares its buffer.
pub(crate) fn broadcast_operands(a: &Tensor, b: &Tensor) -> Result<Broadcasted, GradFlowError> {
    let lhs_shape = a.shape();
    let rhs_shape = b.shape();
    let output_shape = broadcast_shapes(&lhs_shape, &rhs_shape)?;
    let lhs = expand(a.buffer(), &lhs_shape, &output_shape);
    let rhs = expand(b.buffer(), &rhs_shape, &output_shape);
    Ok(Broadcasted {
        lhs_shape,
        rhs_shape,
        output_shape,
        lhs,
        rhs,
    })
}

fn expand(buffer: Arc<Vec<f32>>, shape: &[usize], output_shape: &[usize]) -> Arc<Vec<f32>> {
    if shape == output_shape {
        return buffer;
    }
    Arc::new(
        broadcast_index_map(shape, output_shape)
            .into_iter()
            .map(|i| buffer[i])
            .collect(),
    )
}
