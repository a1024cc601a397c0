use super::*;
use crate::autograd::grad_check::check_grad;
use crate::utils::testing::{check_tensor_near, create_test_tensor, create_test_tensor_with_grad};
use approx::assert_relative_eq;

#[test]
fn test_mse_loss_creation() {
    assert_eq!(MSELoss::default().reduction(), Reduction::Mean);
    assert_eq!(MSELoss::from_reduction_str("sum").unwrap().reduction(), Reduction::Sum);
    assert!(MSELoss::from_reduction_str("median").is_err());
}

#[test]
fn test_mse_loss_forward_basic() -> Result<(), GradFlowError> {
    let mse = MSELoss::new(Reduction::Mean);
    let input = create_test_tensor(vec![1.0, 2.0], vec![2]);
    let target = create_test_tensor(vec![1.5, 1.0], vec![2]);
    let loss = mse.calculate(&input, &target)?;
    assert_eq!(loss.shape(), &[] as &[usize]);
    assert!(!loss.requires_grad(), "Loss should not require grad if inputs dont");
    assert_relative_eq!(loss.item()?, 0.625f32, epsilon = 1e-6);
    Ok(())
}

#[test]
fn test_mse_loss_sum() -> Result<(), GradFlowError> {
    let mse = MSELoss::new(Reduction::Sum);
    let input = create_test_tensor(vec![1.0, 2.0], vec![2]);
    let target = create_test_tensor(vec![1.5, 1.0], vec![2]);
    assert_relative_eq!(mse.calculate(&input, &target)?.item()?, 1.25f32, epsilon = 1e-6);
    Ok(())
}

#[test]
fn test_mse_loss_forward_mismatched_shapes() {
    let mse = MSELoss::default();
    let input = create_test_tensor(vec![1.0, 2.0], vec![2]);
    let target = create_test_tensor(vec![1.0, 2.0, 3.0], vec![3]);
    assert!(matches!(
        mse.calculate(&input, &target),
        Err(GradFlowError::ShapeMismatch { .. })
    ));
}

#[test]
fn test_mse_loss_backward_closed_form() -> Result<(), GradFlowError> {
    // d/dx mean((x - t)^2) = 2 (x - t) / n
    let input = create_test_tensor_with_grad(vec![1.0, 2.0, 4.0], vec![3]);
    let target = create_test_tensor(vec![0.0, 2.0, 1.0], vec![3]);
    MSELoss::default().calculate(&input, &target)?.backward()?;
    check_tensor_near(&input.grad().unwrap(), &[3], &[2.0 / 3.0, 0.0, 2.0], 1e-6);
    Ok(())
}

#[test]
fn test_mse_loss_grad_check_both_operands() {
    let input = create_test_tensor_with_grad(vec![0.5, -1.0, 2.0, 0.0], vec![2, 2]);
    let target = create_test_tensor_with_grad(vec![1.0, 1.0, -1.0, 0.5], vec![2, 2]);
    let output_grad = create_test_tensor(vec![1.0], vec![]);
    let mse = MSELoss::default();
    check_grad(
        |inputs| mse.calculate(&inputs[0], &inputs[1]),
        &[input, target],
        &output_grad,
        1e-3,
        1e-2,
    )
    .unwrap();
}
