use super::*;
use crate::autograd::no_grad;

#[test]
fn test_detach_shares_values_without_node() {
    let t1 = Tensor::new_with_grad(vec![1.0, 2.0, 3.0], vec![3]).unwrap();
    let t1_added = t1.add(&t1).unwrap();
    assert!(t1_added.requires_grad());
    assert!(t1_added.grad_fn().is_some());

    let t2 = t1_added.detach();
    assert!(!t2.requires_grad());
    assert!(t2.grad_fn().is_none());
    assert!(t2.grad().is_none());
    assert_eq!(t2.shape(), vec![3]);
    assert!(Arc::ptr_eq(&t1_added.buffer(), &t2.buffer()));
}

#[test]
fn test_set_requires_grad_on_non_leaf_fails() {
    let a = Tensor::new_with_grad(vec![1.0], vec![1]).unwrap();
    let b = a.neg().unwrap();
    assert_eq!(b.set_requires_grad(false), Err(GradFlowError::RequiresGradOnNonLeaf));
    assert!(b.requires_grad());
}

#[test]
fn test_set_requires_grad_on_leaf() {
    let a = Tensor::new(vec![1.0], vec![1]).unwrap();
    assert!(!a.requires_grad());
    a.set_requires_grad(true).unwrap();
    assert!(a.requires_grad());
    assert!(a.is_leaf());
}

#[test]
fn test_accumulate_grad_sums() {
    let a = Tensor::new_with_grad(vec![0.0, 0.0], vec![2]).unwrap();
    let g = Tensor::new(vec![1.0, 2.0], vec![2]).unwrap();
    a.accumulate_grad(&g).unwrap();
    a.accumulate_grad(&g).unwrap();
    assert_eq!(a.grad().unwrap().to_vec(), vec![2.0, 4.0]);
    // The passed tensor is not aliased by the accumulator.
    assert_eq!(g.to_vec(), vec![1.0, 2.0]);
}

#[test]
fn test_accumulate_grad_shape_mismatch() {
    let a = Tensor::new_with_grad(vec![0.0, 0.0], vec![2]).unwrap();
    let g = Tensor::new(vec![1.0, 2.0], vec![1, 2]).unwrap();
    let err = a.accumulate_grad(&g).unwrap_err();
    assert_eq!(
        err,
        GradFlowError::GradientAccumulationShapeMismatch {
            expected: vec![2],
            actual: vec![1, 2],
        }
    );
    assert!(a.grad().is_none());
}

#[test]
fn test_zero_grad_clears() {
    let a = Tensor::new_with_grad(vec![1.0], vec![]).unwrap();
    a.accumulate_grad(&Tensor::new(vec![3.0], vec![]).unwrap()).unwrap();
    a.zero_grad();
    assert!(a.grad().is_none());
}

#[test]
fn test_backward_on_leaf_is_detached() {
    let a = Tensor::new_with_grad(vec![1.0], vec![]).unwrap();
    assert_eq!(a.backward(), Err(GradFlowError::DetachedBackward));
}

#[test]
fn test_backward_non_scalar_without_seed() {
    let a = Tensor::new_with_grad(vec![1.0, 2.0], vec![2]).unwrap();
    let b = a.mul_scalar(2.0).unwrap();
    assert_eq!(b.backward(), Err(GradFlowError::BackwardNonScalar));
}

#[test]
fn test_backward_with_seed() {
    let a = Tensor::new_with_grad(vec![1.0, 2.0], vec![2]).unwrap();
    let b = a.mul_scalar(2.0).unwrap();
    let seed = Tensor::new(vec![1.0, 10.0], vec![2]).unwrap();
    b.backward_with(Some(&seed), false).unwrap();
    assert_eq!(a.grad().unwrap().to_vec(), vec![2.0, 20.0]);
}

#[test]
fn test_backward_seed_shape_mismatch() {
    let a = Tensor::new_with_grad(vec![1.0, 2.0], vec![2]).unwrap();
    let b = a.mul_scalar(2.0).unwrap();
    let seed = Tensor::new(vec![1.0], vec![1]).unwrap();
    let err = b.backward_with(Some(&seed), false).unwrap_err();
    assert!(matches!(err, GradFlowError::ShapeMismatch { .. }));
    assert!(a.grad().is_none());
}

#[test]
fn test_no_grad_output_is_detached() {
    let a = Tensor::new_with_grad(vec![1.0, 2.0], vec![2]).unwrap();
    let loss = no_grad(|| a.mul(&a).and_then(|t| t.sum())).unwrap();
    assert!(loss.grad_fn().is_none());
    assert!(!loss.requires_grad());
    assert_eq!(loss.backward(), Err(GradFlowError::DetachedBackward));
}
