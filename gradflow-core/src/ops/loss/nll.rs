use crate::autograd::BackwardOp;
use crate::error::GradFlowError;
use crate::ops::activation::log_softmax::class_rows;
use crate::ops::loss::{validate_labels, Reduction};
use crate::ops::record;
use crate::tensor::Tensor;

/// Negative log-likelihood of `labels` under the log-probabilities
/// `log_probs` (`[batch, classes]`, or `[classes]` for a single sample).
///
/// # Errors
/// - `RankMismatch` for inputs that are not 1-D or 2-D.
/// - `ShapeMismatch` if there is not exactly one label per row.
/// - `InvalidLabel` if a label is not a valid class index.
pub fn nll_loss_op(log_probs: &Tensor, labels: &[usize], reduction: Reduction) -> Result<Tensor, GradFlowError> {
    let (rows, cols) = class_rows(&log_probs.shape(), "nll_loss")?;
    validate_labels(rows, cols, labels, reduction, "nll_loss")?;

    let values = log_probs.buffer();
    let total: f32 = labels
        .iter()
        .enumerate()
        .map(|(row, &label)| -values[row * cols + label])
        .sum();
    let loss = total * reduction.scale(rows);
    let labels = labels.to_vec();
    record(vec![loss], vec![], &[log_probs], move || BackwardOp::NllLoss {
        labels,
        cols,
        reduction,
    })
}

#[cfg(test)]
#[path = "nll_test.rs"]
mod tests;
