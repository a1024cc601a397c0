use std::sync::Arc;

use crate::error::GradFlowError;
use crate::ops::linalg::matmul::matmul_kernel;
use crate::ops::linalg::transpose::transpose_kernel;
use crate::ops::loss::Reduction;
use crate::tensor::broadcast_utils::reduce_to_shape;

/// Local-gradient rule of one recorded operation, together with the
/// intermediate values saved during the forward pass.
///
/// Every variant knows how many inputs its node has; [`BackwardOp::backward`]
/// returns one gradient buffer per input, in input order, each with the
/// element count of that input.
#[derive(Debug, Clone)]
pub enum BackwardOp {
    Add {
        lhs_shape: Vec<usize>,
        rhs_shape: Vec<usize>,
        output_shape: Vec<usize>,
    },
    Sub {
        lhs_shape: Vec<usize>,
        rhs_shape: Vec<usize>,
        output_shape: Vec<usize>,
    },
    Mul {
        lhs: Arc<Vec<f32>>,
        rhs: Arc<Vec<f32>>,
        lhs_shape: Vec<usize>,
        rhs_shape: Vec<usize>,
        output_shape: Vec<usize>,
    },
    AddScalar,
    MulScalar {
        factor: f32,
    },
    Neg,
    Pow {
        input: Arc<Vec<f32>>,
        exponent: f32,
    },
    Exp {
        output: Arc<Vec<f32>>,
    },
    Sum {
        numel: usize,
    },
    Mean {
        numel: usize,
    },
    MatMul {
        lhs: Arc<Vec<f32>>,
        rhs: Arc<Vec<f32>>,
        m: usize,
        k: usize,
        n: usize,
    },
    Transpose {
        rows: usize,
        cols: usize,
    },
    Reshape,
    Sigmoid {
        output: Arc<Vec<f32>>,
    },
    Relu {
        input: Arc<Vec<f32>>,
    },
    LogSoftmax {
        output: Arc<Vec<f32>>,
        rows: usize,
        cols: usize,
    },
    NllLoss {
        labels: Vec<usize>,
        cols: usize,
        reduction: Reduction,
    },
    CrossEntropy {
        probs: Vec<f32>,
        labels: Vec<usize>,
        cols: usize,
        reduction: Reduction,
    },
}

impl BackwardOp {
    /// Operation tag, used in `Debug` output and error messages.
    pub fn name(&self) -> &'static str {
        match self {
            BackwardOp::Add { .. } => "AddBackward",
            BackwardOp::Sub { .. } => "SubBackward",
            BackwardOp::Mul { .. } => "MulBackward",
            BackwardOp::AddScalar => "AddScalarBackward",
            BackwardOp::MulScalar { .. } => "MulScalarBackward",
            BackwardOp::Neg => "NegBackward",
            BackwardOp::Pow { .. } => "PowBackward",
            BackwardOp::Exp { .. } => "ExpBackward",
            BackwardOp::Sum { .. } => "SumBackward",
            BackwardOp::Mean { .. } => "MeanBackward",
            BackwardOp::MatMul { .. } => "MatMulBackward",
            BackwardOp::Transpose { .. } => "TransposeBackward",
            BackwardOp::Reshape => "ReshapeBackward",
            BackwardOp::Sigmoid { .. } => "SigmoidBackward",
            BackwardOp::Relu { .. } => "ReluBackward",
            BackwardOp::LogSoftmax { .. } => "LogSoftmaxBackward",
            BackwardOp::NllLoss { .. } => "NllLossBackward",
            BackwardOp::CrossEntropy { .. } => "CrossEntropyBackward",
        }
    }

    /// Computes the gradients w.r.t. each input from the gradient flowing
    /// into the output.
    pub fn backward(&self, grad_output: &[f32]) -> Result<Vec<Vec<f32>>, GradFlowError> {
        let grads = match self {
            BackwardOp::Add {
                lhs_shape,
                rhs_shape,
                output_shape,
            } => vec![
                reduce_to_shape(grad_output, output_shape, lhs_shape),
                reduce_to_shape(grad_output, output_shape, rhs_shape),
            ],
            BackwardOp::Sub {
                lhs_shape,
                rhs_shape,
                output_shape,
            } => {
                let negated: Vec<f32> = grad_output.iter().map(|g| -g).collect();
                vec![
                    reduce_to_shape(grad_output, output_shape, lhs_shape),
                    reduce_to_shape(&negated, output_shape, rhs_shape),
                ]
            }
            BackwardOp::Mul {
                lhs,
                rhs,
                lhs_shape,
                rhs_shape,
                output_shape,
            } => {
                // Saved operands are the broadcast-expanded values, one per output element.
                let grad_lhs: Vec<f32> = grad_output.iter().zip(rhs.iter()).map(|(g, r)| g * r).collect();
                let grad_rhs: Vec<f32> = grad_output.iter().zip(lhs.iter()).map(|(g, l)| g * l).collect();
                vec![
                    reduce_to_shape(&grad_lhs, output_shape, lhs_shape),
                    reduce_to_shape(&grad_rhs, output_shape, rhs_shape),
                ]
            }
            BackwardOp::AddScalar => vec![grad_output.to_vec()],
            BackwardOp::MulScalar { factor } => {
                vec![grad_output.iter().map(|g| g * factor).collect()]
            }
            BackwardOp::Neg => vec![grad_output.iter().map(|g| -g).collect()],
            // x^0 is constant; skip the rule so x = 0 does not give 0 * inf.
            BackwardOp::Pow { exponent, .. } if *exponent == 0.0 => vec![vec![0.0; grad_output.len()]],
            BackwardOp::Pow { input, exponent } => vec![grad_output
                .iter()
                .zip(input.iter())
                .map(|(g, x)| g * exponent * x.powf(exponent - 1.0))
                .collect()],
            BackwardOp::Exp { output } => {
                vec![grad_output.iter().zip(output.iter()).map(|(g, y)| g * y).collect()]
            }
            BackwardOp::Sum { numel } => {
                let g = scalar_grad(grad_output, "sum")?;
                vec![vec![g; *numel]]
            }
            BackwardOp::Mean { numel } => {
                let g = scalar_grad(grad_output, "mean")?;
                vec![vec![g / *numel as f32; *numel]]
            }
            BackwardOp::MatMul { lhs, rhs, m, k, n } => {
                let (m, k, n) = (*m, *k, *n);
                // dX = G · Wᵗ, dW = Xᵗ · G
                let rhs_t = transpose_kernel(rhs, k, n);
                let lhs_t = transpose_kernel(lhs, m, k);
                vec![
                    matmul_kernel(grad_output, &rhs_t, m, n, k),
                    matmul_kernel(&lhs_t, grad_output, k, m, n),
                ]
            }
            BackwardOp::Transpose { rows, cols } => {
                // The output was [cols, rows].
                vec![transpose_kernel(grad_output, *cols, *rows)]
            }
            BackwardOp::Reshape => vec![grad_output.to_vec()],
            BackwardOp::Sigmoid { output } => vec![grad_output
                .iter()
                .zip(output.iter())
                .map(|(g, s)| g * s * (1.0 - s))
                .collect()],
            BackwardOp::Relu { input } => vec![grad_output
                .iter()
                .zip(input.iter())
                .map(|(g, x)| if *x > 0.0 { *g } else { 0.0 })
                .collect()],
            BackwardOp::LogSoftmax { output, rows, cols } => {
                let mut grad_input = vec![0.0f32; rows * cols];
                for r in 0..*rows {
                    let span = r * cols..(r + 1) * cols;
                    let grad_row = &grad_output[span.clone()];
                    let out_row = &output[span.clone()];
                    let row_sum: f32 = grad_row.iter().sum();
                    for ((dst, g), y) in grad_input[span].iter_mut().zip(grad_row).zip(out_row) {
                        *dst = g - y.exp() * row_sum;
                    }
                }
                vec![grad_input]
            }
            BackwardOp::NllLoss {
                labels,
                cols,
                reduction,
            } => {
                let g = scalar_grad(grad_output, "nll_loss")?;
                let scale = reduction.scale(labels.len());
                let mut grad_input = vec![0.0f32; labels.len() * cols];
                for (row, &label) in labels.iter().enumerate() {
                    grad_input[row * cols + label] = -g * scale;
                }
                vec![grad_input]
            }
            BackwardOp::CrossEntropy {
                probs,
                labels,
                cols,
                reduction,
            } => {
                let g = scalar_grad(grad_output, "cross_entropy")?;
                let scale = g * reduction.scale(labels.len());
                let mut grad_input: Vec<f32> = probs.iter().map(|p| p * scale).collect();
                for (row, &label) in labels.iter().enumerate() {
                    grad_input[row * cols + label] -= scale;
                }
                vec![grad_input]
            }
        };
        Ok(grads)
    }
}

fn scalar_grad(grad_output: &[f32], operation: &str) -> Result<f32, GradFlowError> {
    match grad_output {
        [g] => Ok(*g),
        _ => Err(GradFlowError::ShapeMismatch {
            expected: vec![],
            actual: vec![grad_output.len()],
            operation: format!("{} backward", operation),
        }),
    }
}

#[cfg(test)]
#[path = "backward_op_test.rs"]
mod tests;
