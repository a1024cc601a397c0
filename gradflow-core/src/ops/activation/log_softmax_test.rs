use super::*;
use crate::autograd::grad_check::check_grad;
use crate::utils::testing::{check_tensor_near, create_test_tensor, create_test_tensor_with_grad};

#[test]
fn test_log_softmax_uniform_row() {
    let a = create_test_tensor(vec![0.0, 0.0, 0.0], vec![3]);
    let expected = -(3.0f32).ln();
    check_tensor_near(&log_softmax_op(&a).unwrap(), &[3], &[expected; 3], 1e-6);
}

#[test]
fn test_log_softmax_rows_normalize() {
    let a = create_test_tensor(vec![1.0, 2.0, 3.0, 1000.0, 0.0, -1000.0], vec![2, 3]);
    let out = log_softmax_op(&a).unwrap().to_vec();
    for row in out.chunks(3) {
        let total: f32 = row.iter().map(|v| v.exp()).sum();
        assert!((total - 1.0).abs() < 1e-5, "row sums to {}", total);
        assert!(row.iter().all(|v| !v.is_nan()));
    }
}

#[test]
fn test_log_softmax_rank_error() {
    let a = create_test_tensor(vec![0.0; 8], vec![2, 2, 2]);
    assert!(matches!(
        log_softmax_op(&a),
        Err(GradFlowError::RankMismatch { actual: 3, .. })
    ));
}

#[test]
fn test_log_softmax_grad_check() {
    let a = create_test_tensor_with_grad(vec![0.1, -0.4, 1.2, 0.3, 2.0, -1.0], vec![2, 3]);
    let output_grad = create_test_tensor(vec![1.0, 0.0, -1.0, 0.5, 2.0, 1.0], vec![2, 3]);
    check_grad(|inputs| log_softmax_op(&inputs[0]), &[a], &output_grad, 1e-3, 1e-2).unwrap();
}
