//! Finite-difference verification of analytical gradients.

use thiserror::Error;

use crate::error::GradFlowError;
use crate::tensor::Tensor;

/// Error type specifically for gradient checking failures.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GradCheckError {
    #[error("Gradient check failed for input {input_index}, element {element_index}: analytical {analytical_grad} != numerical {numerical_grad} (difference {difference})")]
    GradientMismatch {
        input_index: usize,
        element_index: usize,
        analytical_grad: f64,
        numerical_grad: f64,
        difference: f64,
    },
    #[error("Forward function execution failed during gradient check: {0}")]
    ForwardPassError(GradFlowError),
    #[error("Backward pass execution failed during gradient check: {0}")]
    BackwardPassError(GradFlowError),
    #[error("Tensor error during intermediate calculation: {0}")]
    TensorError(GradFlowError),
    #[error("Input tensor {input_index} requires grad but has no gradient after backward pass.")]
    MissingAnalyticalGrad { input_index: usize },
    #[error("Numerical gradient is NaN or infinite for input {input_index}, element {element_index} (loss+ {loss_plus}, loss- {loss_minus})")]
    NumericalGradNaNOrInfinite {
        input_index: usize,
        element_index: usize,
        loss_plus: f64,
        loss_minus: f64,
    },
    #[error("Gradient check input tensor must be a leaf node (no grad_fn). Input index: {input_index}")]
    InputNotLeaf { input_index: usize },
    #[error("Function did not propagate requires_grad correctly.")]
    RequiresGradPropagationError,
}

impl From<GradFlowError> for GradCheckError {
    fn from(err: GradFlowError) -> Self {
        GradCheckError::TensorError(err)
    }
}

/// Checks analytical gradients against central finite differences.
///
/// The scalar objective is `sum(func(inputs) * output_grad)`, evaluated in
/// `f64`. Inputs that do not require grad are left alone. Accumulators of the
/// inputs are cleared before the analytical pass.
pub fn check_grad<F>(
    func: F,
    inputs: &[Tensor],
    output_grad: &Tensor,
    epsilon: f64,
    tolerance: f64,
) -> Result<(), GradCheckError>
where
    F: Fn(&[Tensor]) -> Result<Tensor, GradFlowError>,
{
    for (i, input) in inputs.iter().enumerate() {
        if !input.is_leaf() {
            return Err(GradCheckError::InputNotLeaf { input_index: i });
        }
        input.zero_grad();
    }

    let output = func(inputs).map_err(GradCheckError::ForwardPassError)?;
    if inputs.iter().any(|t| t.requires_grad()) && !output.requires_grad() {
        return Err(GradCheckError::RequiresGradPropagationError);
    }
    if output.requires_grad() {
        output
            .backward_with(Some(output_grad), false)
            .map_err(GradCheckError::BackwardPassError)?;
    }

    let weights = output_grad.to_vec();
    for (i, original) in inputs.iter().enumerate() {
        if !original.requires_grad() {
            continue;
        }
        let analytical = original
            .grad()
            .ok_or(GradCheckError::MissingAnalyticalGrad { input_index: i })?
            .to_vec();
        let base: Vec<f64> = original.to_vec().iter().map(|&x| x as f64).collect();

        for elem_idx in 0..base.len() {
            let loss_plus = perturbed_loss(&func, inputs, i, &base, elem_idx, epsilon, &weights)?;
            let loss_minus = perturbed_loss(&func, inputs, i, &base, elem_idx, -epsilon, &weights)?;
            let numerical_grad = (loss_plus - loss_minus) / (2.0 * epsilon);
            if !numerical_grad.is_finite() {
                return Err(GradCheckError::NumericalGradNaNOrInfinite {
                    input_index: i,
                    element_index: elem_idx,
                    loss_plus,
                    loss_minus,
                });
            }
            let analytical_grad = analytical[elem_idx] as f64;
            let difference = (analytical_grad - numerical_grad).abs();
            if difference > tolerance && difference / (analytical_grad.abs() + epsilon) > tolerance {
                return Err(GradCheckError::GradientMismatch {
                    input_index: i,
                    element_index: elem_idx,
                    analytical_grad,
                    numerical_grad,
                    difference,
                });
            }
        }
    }
    Ok(())
}

fn perturbed_loss<F>(
    func: &F,
    inputs: &[Tensor],
    input_index: usize,
    base: &[f64],
    elem_idx: usize,
    delta: f64,
    weights: &[f32],
) -> Result<f64, GradCheckError>
where
    F: Fn(&[Tensor]) -> Result<Tensor, GradFlowError>,
{
    let mut values = base.to_vec();
    values[elem_idx] += delta;
    let perturbed = Tensor::new(
        values.iter().map(|&x| x as f32).collect(),
        inputs[input_index].shape(),
    )?;
    let mut shifted: Vec<Tensor> = inputs.to_vec();
    shifted[input_index] = perturbed;

    // Forward only; the numerical side never needs a graph.
    let output = crate::autograd::no_grad(|| func(&shifted)).map_err(GradCheckError::ForwardPassError)?;
    if output.numel() != weights.len() {
        return Err(GradCheckError::TensorError(GradFlowError::ShapeMismatch {
            expected: vec![weights.len()],
            actual: output.shape(),
            operation: "check_grad".to_string(),
        }));
    }
    Ok(output
        .to_vec()
        .iter()
        .zip(weights)
        .map(|(&y, &w)| y as f64 * w as f64)
        .sum())
}
