use super::*;
use crate::utils::testing::{check_tensor_near, create_test_tensor_with_grad};

#[test]
fn test_nll_loss_module_after_log_softmax() {
    let scores = create_test_tensor_with_grad(vec![0.0, 0.0, 0.0], vec![1, 3]);
    let loss = NLLLoss::default()
        .calculate(&scores.log_softmax().unwrap(), &[0])
        .unwrap();
    check_tensor_near(&loss, &[], &[(3.0f32).ln()], 1e-6);
    loss.backward().unwrap();
    check_tensor_near(
        &scores.grad().unwrap(),
        &[1, 3],
        &[-2.0 / 3.0, 1.0 / 3.0, 1.0 / 3.0],
        1e-6,
    );
}

#[test]
fn test_nll_loss_invalid_label() {
    let log_probs = create_test_tensor_with_grad(vec![-1.0, -1.0], vec![1, 2]);
    assert_eq!(
        NLLLoss::new(Reduction::Sum).calculate(&log_probs, &[5]).unwrap_err(),
        GradFlowError::InvalidLabel {
            label: 5,
            num_classes: 2
        }
    );
}
