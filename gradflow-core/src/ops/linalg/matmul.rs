use crate::autograd::BackwardOp;
use crate::error::GradFlowError;
use crate::ops::record;
use crate::tensor::Tensor;

/// Row-major product of an `[m, k]` and a `[k, n]` matrix.
pub(crate) fn matmul_kernel(a: &[f32], b: &[f32], m: usize, k: usize, n: usize) -> Vec<f32> {
    let mut out = vec![0.0f32; m * n];
    for i in 0..m {
        let a_row = &a[i * k..(i + 1) * k];
        let out_row = &mut out[i * n..(i + 1) * n];
        for (p, &a_ip) in a_row.iter().enumerate() {
            let b_row = &b[p * n..(p + 1) * n];
            for (o, &b_pj) in out_row.iter_mut().zip(b_row) {
                *o += a_ip * b_pj;
            }
        }
    }
    out
}

/// Matrix product of two 2-D tensors: `[m, k] · [k, n] -> [m, n]`.
///
/// # Errors
/// - `RankMismatch` if either operand is not 2-D.
/// - `ShapeMismatch` if the inner dimensions differ.
///
/// Both checks run before anything is recorded.
pub fn matmul_op(a: &Tensor, b: &Tensor) -> Result<Tensor, GradFlowError> {
    let a_shape = a.shape();
    let b_shape = b.shape();
    for shape in [&a_shape, &b_shape] {
        if shape.len() != 2 {
            return Err(GradFlowError::RankMismatch {
                expected: 2,
                actual: shape.len(),
                operation: "matmul".to_string(),
            });
        }
    }
    let (m, k) = (a_shape[0], a_shape[1]);
    let n = b_shape[1];
    if b_shape[0] != k {
        return Err(GradFlowError::ShapeMismatch {
            expected: vec![k, n],
            actual: b_shape,
            operation: "matmul (inner dim)".to_string(),
        });
    }

    let lhs = a.buffer();
    let rhs = b.buffer();
    let data = matmul_kernel(&lhs, &rhs, m, k, n);
    record(data, vec![m, n], &[a, b], move || BackwardOp::MatMul { lhs, rhs, m, k, n })
}

#[cfg(test)]
#[path = "matmul_test.rs"]
mod tests;
