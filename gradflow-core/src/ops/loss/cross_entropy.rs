use crate::autograd::BackwardOp;
use crate::error::GradFlowError;
use crate::ops::activation::log_softmax::{class_rows, log_sum_exp};
use crate::ops::loss::{validate_labels, Reduction};
use crate::ops::record;
use crate::tensor::Tensor;

/// Cross-entropy of raw class `scores` against `labels`: log-softmax and
/// negative log-likelihood fused into a single node.
///
/// Saves the softmax probabilities; the gradient w.r.t. the scores is
/// `softmax(scores) - one_hot(labels)`, scaled by the reduction.
pub fn cross_entropy_op(scores: &Tensor, labels: &[usize], reduction: Reduction) -> Result<Tensor, GradFlowError> {
    let (rows, cols) = class_rows(&scores.shape(), "cross_entropy")?;
    validate_labels(rows, cols, labels, reduction, "cross_entropy")?;

    let values = scores.buffer();
    let mut probs = Vec::with_capacity(rows * cols);
    let mut total = 0.0f32;
    for (row, &label) in labels.iter().enumerate() {
        let scores_row = &values[row * cols..(row + 1) * cols];
        let lse = log_sum_exp(scores_row);
        total += lse - scores_row[label];
        probs.extend(scores_row.iter().map(|x| (x - lse).exp()));
    }
    let loss = total * reduction.scale(rows);
    let labels = labels.to_vec();
    record(vec![loss], vec![], &[scores], move || BackwardOp::CrossEntropy {
        probs,
        labels,
        cols,
        reduction,
    })
}

#[cfg(test)]
#[path = "cross_entropy_test.rs"]
mod tests;
