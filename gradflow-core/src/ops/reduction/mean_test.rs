use super::*;
use crate::utils::testing::{check_tensor_near, create_test_tensor, create_test_tensor_with_grad};

#[test]
fn test_mean_all() -> Result<(), GradFlowError> {
    let t = create_test_tensor(vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0], vec![2, 3]);
    let result = mean_op(&t)?;
    check_tensor_near(&result, &[], &[3.5], 1e-6);
    Ok(())
}

#[test]
fn test_mean_empty_is_error() {
    let t = create_test_tensor(vec![], vec![0]);
    assert!(matches!(mean_op(&t), Err(GradFlowError::UnsupportedOperation(_))));
}

#[test]
fn test_mean_all_backward() -> Result<(), GradFlowError> {
    let t = create_test_tensor_with_grad(vec![1.0, 2.0, 3.0, 4.0], vec![4]);
    mean_op(&t)?.backward()?;
    check_tensor_near(&t.grad().unwrap(), &[4], &[0.25; 4], 1e-6);
    Ok(())
}
