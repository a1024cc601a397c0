use crate::error::GradFlowError;
use crate::tensor::utils::{calculate_strides, index_to_coord};
use std::cmp::max;

/// Determines the output shape resulting from broadcasting two input shapes.
///
/// Follows NumPy/PyTorch broadcasting rules:
/// 1. If the shapes have different ranks, prepend 1s to the shorter shape.
/// 2. Compare dimensions element-wise from right to left.
/// 3. Dimensions are compatible if they are equal, or one of them is 1.
pub fn broadcast_shapes(shape_a: &[usize], shape_b: &[usize]) -> Result<Vec<usize>, GradFlowError> {
    let rank_a = shape_a.len();
    let rank_b = shape_b.len();
    let max_rank = max(rank_a, rank_b);
    let mut result_shape = vec![0; max_rank];

    for i in 0..max_rank {
        let dim_a = if i < rank_a { shape_a[rank_a - 1 - i] } else { 1 };
        let dim_b = if i < rank_b { shape_b[rank_b - 1 - i] } else { 1 };

        result_shape[max_rank - 1 - i] = if dim_a == dim_b || dim_b == 1 {
            dim_a
        } else if dim_a == 1 {
            dim_b
        } else {
            return Err(GradFlowError::BroadcastError {
                shape1: shape_a.to_vec(),
                shape2: shape_b.to_vec(),
            });
        };
    }
    Ok(result_shape)
}

/// For every element of `out_shape`, the flat index of the element of
/// `in_shape` it reads when `in_shape` is broadcast to `out_shape`.
///
/// The caller guarantees that `in_shape` broadcasts to `out_shape`.
pub fn broadcast_index_map(in_shape: &[usize], out_shape: &[usize]) -> Vec<usize> {
    let numel: usize = out_shape.iter().product();
    if in_shape == out_shape {
        return (0..numel).collect();
    }

    let out_strides = calculate_strides(out_shape);
    let in_strides = calculate_strides(in_shape);
    let rank_diff = out_shape.len() - in_shape.len();

    (0..numel)
        .map(|i| {
            let out_coord = index_to_coord(i, &out_strides, out_shape);
            in_shape
                .iter()
                .enumerate()
                .map(|(dim, &size)| {
                    let c = if size == 1 { 0 } else { out_coord[rank_diff + dim] };
                    c * in_strides[dim]
                })
                .sum()
        })
        .collect()
}

/// Sums a gradient of shape `out_shape` down to `in_shape`, undoing a broadcast.
pub fn reduce_to_shape(grad: &[f32], out_shape: &[usize], in_shape: &[usize]) -> Vec<f32> {
    if in_shape == out_shape {
        return grad.to_vec();
    }
    let mut reduced = vec![0.0; in_shape.iter().product()];
    for (g, target) in grad.iter().zip(broadcast_index_map(in_shape, out_shape)) {
        reduced[target] += *g;
    }
    reduced
}

#[cfg(test)]
#[path = "broadcast_utils_test.rs"]
mod tests;
