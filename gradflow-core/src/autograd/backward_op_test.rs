use super::*;
use approx::assert_relative_eq;
use std::sync::Arc;

#[test]
fn test_add_backward_reduces_broadcast_axes() {
    let op = BackwardOp::Add {
        lhs_shape: vec![2, 3],
        rhs_shape: vec![3],
        output_shape: vec![2, 3],
    };
    let grads = op.backward(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).unwrap();
    assert_eq!(grads.len(), 2);
    assert_eq!(grads[0], vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
    assert_eq!(grads[1], vec![5.0, 7.0, 9.0]);
}

#[test]
fn test_sub_backward_negates_rhs() {
    let op = BackwardOp::Sub {
        lhs_shape: vec![2],
        rhs_shape: vec![2],
        output_shape: vec![2],
    };
    let grads = op.backward(&[1.0, -2.0]).unwrap();
    assert_eq!(grads[0], vec![1.0, -2.0]);
    assert_eq!(grads[1], vec![-1.0, 2.0]);
}

#[test]
fn test_matmul_backward() {
    // X = [[1, 2]], W = [[3], [4]], G = [[1]]
    let op = BackwardOp::MatMul {
        lhs: Arc::new(vec![1.0, 2.0]),
        rhs: Arc::new(vec![3.0, 4.0]),
        m: 1,
        k: 2,
        n: 1,
    };
    let grads = op.backward(&[1.0]).unwrap();
    assert_eq!(grads[0], vec![3.0, 4.0]);
    assert_eq!(grads[1], vec![1.0, 2.0]);
}

#[test]
fn test_mean_backward_spreads_gradient() {
    let op = BackwardOp::Mean { numel: 4 };
    let grads = op.backward(&[2.0]).unwrap();
    assert_eq!(grads, vec![vec![0.5; 4]]);
}

#[test]
fn test_sum_backward_rejects_non_scalar_gradient() {
    let op = BackwardOp::Sum { numel: 2 };
    let err = op.backward(&[1.0, 1.0]).unwrap_err();
    assert!(matches!(err, GradFlowError::ShapeMismatch { .. }));
}

#[test]
fn test_cross_entropy_backward_uniform_scores() {
    let third = 1.0f32 / 3.0;
    let op = BackwardOp::CrossEntropy {
        probs: vec![third; 3],
        labels: vec![0],
        cols: 3,
        reduction: Reduction::Mean,
    };
    let grads = op.backward(&[1.0]).unwrap();
    assert_relative_eq!(grads[0][0], -2.0 / 3.0, epsilon = 1e-6);
    assert_relative_eq!(grads[0][1], 1.0 / 3.0, epsilon = 1e-6);
    assert_relative_eq!(grads[0][2], 1.0 / 3.0, epsilon = 1e-6);
}

#[test]
fn test_nll_backward_sum_reduction() {
    let op = BackwardOp::NllLoss {
        labels: vec![1, 0],
        cols: 2,
        reduction: Reduction::Sum,
    };
    let grads = op.backward(&[1.0]).unwrap();
    assert_eq!(grads[0], vec![0.0, -1.0, -1.0, 0.0]);
}

#[test]
fn test_names_are_distinct_tags() {
    assert_eq!(BackwardOp::Neg.name(), "NegBackward");
    assert_eq!(BackwardOp::Reshape.name(), "ReshapeBackward");
    assert_eq!(BackwardOp::Sum { numel: 1 }.name(), "SumBackward");
}
