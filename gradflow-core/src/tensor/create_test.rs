use super::*;

#[test]
fn test_zeros() {
    let shape = vec![2, 3];
    let t = zeros(&shape).unwrap();
    assert_eq!(t.shape(), shape);
    assert_eq!(t.numel(), 6);
    assert!(t.to_vec().iter().all(|&x| x == 0.0));
    assert!(!t.requires_grad());
}

#[test]
fn test_ones_like() {
    let tensor = Tensor::new(vec![1.0, 2.0, 3.0], vec![1, 3]).unwrap();
    let ones_t = ones_like(&tensor).unwrap();
    assert_eq!(ones_t.shape(), tensor.shape());
    assert!(ones_t.to_vec().iter().all(|&x| x == 1.0));
}

#[test]
fn test_full() {
    let t = full(&[3, 1, 2], 42.5).unwrap();
    assert_eq!(t.numel(), 6);
    assert!(t.to_vec().iter().all(|&x| (x - 42.5).abs() < 1e-6));
}

#[test]
fn test_scalar() {
    let s = scalar(3.5);
    assert_eq!(s.shape(), Vec::<usize>::new());
    assert_eq!(s.item().unwrap(), 3.5);
}

#[test]
fn test_rand_uniform_bounds() {
    let t = rand_uniform(&[100], -0.5, 0.5).unwrap();
    assert!(t.to_vec().iter().all(|&x| (-0.5..0.5).contains(&x)));
    assert!(rand_uniform(&[2], 1.0, 1.0).is_err());
}

#[test]
fn test_rand_uniform_rejects_unbounded_ranges() {
    for (low, high) in [
        (f32::NEG_INFINITY, 0.0),
        (0.0, f32::INFINITY),
        (-f32::MAX, f32::MAX),
        (f32::NAN, 1.0),
    ] {
        assert!(
            matches!(rand_uniform(&[2], low, high), Err(GradFlowError::UnsupportedOperation(_))),
            "range [{}, {}) should be rejected",
            low,
            high
        );
    }
}

#[test]
fn test_randn_shape() {
    let t = randn(&[4, 5]).unwrap();
    assert_eq!(t.shape(), vec![4, 5]);
    assert!(t.to_vec().iter().all(|x| x.is_finite()));
}

#[test]
fn test_zeros_like_does_not_track() {
    let tensor = Tensor::new_with_grad(vec![1.0, 2.0, 3.0], vec![3]).unwrap();
    let z = zeros_like(&tensor).unwrap();
    assert_eq!(z.shape(), vec![3]);
    assert_eq!(z.to_vec(), vec![0.0; 3]);
    assert!(!z.requires_grad());
}
