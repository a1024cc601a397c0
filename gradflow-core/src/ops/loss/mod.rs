// src/ops/loss/mod.rs

//! # Loss Functions
//!
//! Classification criteria over `[batch, classes]` inputs and integer labels.
//! Both reduce to a scalar (shape `[]`).

use std::str::FromStr;

use crate::error::GradFlowError;

pub mod cross_entropy;
pub mod nll;

pub use cross_entropy::cross_entropy_op;
pub use nll::nll_loss_op;

/// Specifies how per-sample losses are combined: `"mean"` | `"sum"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Reduction {
    #[default]
    Mean,
    Sum,
}

impl Reduction {
    /// Factor applied to the summed per-sample losses.
    pub(crate) fn scale(self, batch: usize) -> f32 {
        match self {
            Reduction::Mean => 1.0 / batch as f32,
            Reduction::Sum => 1.0,
        }
    }
}

impl FromStr for Reduction {
    type Err = GradFlowError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "mean" => Ok(Reduction::Mean),
            "sum" => Ok(Reduction::Sum),
            _ => Err(GradFlowError::UnsupportedOperation(format!(
                "Unsupported reduction type: {}",
                s
            ))),
        }
    }
}

/// Checks the batch against the labels: one label per row, each a valid class.
/// A mean over an empty batch is rejected.
pub(crate) fn validate_labels(
    rows: usize,
    cols: usize,
    labels: &[usize],
    reduction: Reduction,
    operation: &str,
) -> Result<(), GradFlowError> {
    if labels.len() != rows {
        return Err(GradFlowError::ShapeMismatch {
            expected: vec![rows],
            actual: vec![labels.len()],
            operation: format!("{} (labels)", operation),
        });
    }
    if let Some(&label) = labels.iter().find(|&&label| label >= cols) {
        return Err(GradFlowError::InvalidLabel {
            label,
            num_classes: cols,
        });
    }
    if rows == 0 && reduction == Reduction::Mean {
        return Err(GradFlowError::UnsupportedOperation(format!(
            "{} with mean reduction over an empty batch",
            operation
        )));
    }
    Ok(())
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
