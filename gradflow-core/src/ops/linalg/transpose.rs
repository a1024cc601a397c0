use crate::autograd::BackwardOp;
use crate::error::GradFlowError;
use crate::ops::record;
use crate::tensor::Tensor;

/// Transposes a row-major `[rows, cols]` buffer into `[cols, rows]`.
pub(crate) fn transpose_kernel(data: &[f32], rows: usize, cols: usize) -> Vec<f32> {
    let mut out = vec![0.0f32; rows * cols];
    for r in 0..rows {
        for c in 0..cols {
            out[c * rows + r] = data[r * cols + c];
        }
    }
    out
}

/// Swaps the two axes of a 2-D tensor. The result owns a copied buffer.
pub fn transpose_op(a: &Tensor) -> Result<Tensor, GradFlowError> {
    let shape = a.shape();
    let (rows, cols) = match shape.as_slice() {
        [rows, cols] => (*rows, *cols),
        _ => {
            return Err(GradFlowError::RankMismatch {
                expected: 2,
                actual: shape.len(),
                operation: "transpose".to_string(),
            })
        }
    };
    let data = transpose_kernel(&a.buffer(), rows, cols);
    record(data, vec![cols, rows], &[a], move || BackwardOp::Transpose { rows, cols })
}

#[cfg(test)]
#[path = "transpose_test.rs"]
mod tests;
