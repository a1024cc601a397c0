use std::sync::Arc;

use crate::autograd::BackwardOp;
use crate::error::GradFlowError;
use crate::ops::record_shared;
use crate::tensor::utils::as_rows_cols;
use crate::tensor::Tensor;

/// `ln(sum(exp(row)))` computed as `max + ln(sum(exp(row - max)))`.
pub(crate) fn log_sum_exp(row: &[f32]) -> f32 {
    let max = row.iter().copied().fold(f32::NEG_INFINITY, f32::max);
    if max == f32::NEG_INFINITY {
        return max;
    }
    max + row.iter().map(|x| (x - max).exp()).sum::<f32>().ln()
}

/// Splits a 1-D or 2-D shape into rows of classes, or fails with `RankMismatch`.
pub(crate) fn class_rows(shape: &[usize], operation: &str) -> Result<(usize, usize), GradFlowError> {
    as_rows_cols(shape).ok_or_else(|| GradFlowError::RankMismatch {
        expected: 2,
        actual: shape.len(),
        operation: operation.to_string(),
    })
}

/// Log-softmax over the last axis of a 1-D or 2-D tensor.
pub fn log_softmax_op(a: &Tensor) -> Result<Tensor, GradFlowError> {
    let shape = a.shape();
    let (rows, cols) = class_rows(&shape, "log_softmax")?;
    let input = a.buffer();
    let mut output = Vec::with_capacity(rows * cols);
    for row in input.chunks(cols.max(1)).take(rows) {
        let lse = log_sum_exp(row);
        output.extend(row.iter().map(|x| x - lse));
    }
    let output = Arc::new(output);
    let saved = Arc::clone(&output);
    record_shared(output, shape, &[a], move || BackwardOp::LogSoftmax {
        output: saved,
        rows,
        cols,
    })
}

#[cfg(test)]
#[path = "log_softmax_test.rs"]
mod tests;
