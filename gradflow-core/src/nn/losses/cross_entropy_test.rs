use super::*;
use crate::nn::NLLLoss;
use crate::utils::testing::{check_tensor_near, create_test_tensor_with_grad};

#[test]
fn test_cross_entropy_loss_uniform_scores_gradient() {
    let scores = create_test_tensor_with_grad(vec![0.0, 0.0, 0.0], vec![1, 3]);
    CrossEntropyLoss::default()
        .calculate(&scores, &[0])
        .unwrap()
        .backward()
        .unwrap();
    check_tensor_near(
        &scores.grad().unwrap(),
        &[1, 3],
        &[-2.0 / 3.0, 1.0 / 3.0, 1.0 / 3.0],
        1e-6,
    );
}

#[test]
fn test_cross_entropy_loss_matches_log_softmax_nll() {
    let values = vec![2.0, 1.0, 0.1, -0.3, 0.4, 1.7];
    let labels = [0, 2];
    let ce = CrossEntropyLoss::new(Reduction::Mean)
        .calculate(&create_test_tensor_with_grad(values.clone(), vec![2, 3]), &labels)
        .unwrap();
    let log_probs = create_test_tensor_with_grad(values, vec![2, 3]).log_softmax().unwrap();
    let nll = NLLLoss::new(Reduction::Mean).calculate(&log_probs, &labels).unwrap();
    check_tensor_near(&ce, &[], &nll.to_vec(), 1e-6);
}
