use super::*;
use crate::utils::testing::{check_tensor_near, create_test_tensor_with_grad};

#[test]
fn test_neg_forward_backward() {
    let a = create_test_tensor_with_grad(vec![1.0, -2.0, 0.0], vec![3]);
    let out = neg_op(&a).unwrap();
    check_tensor_near(&out, &[3], &[-1.0, 2.0, 0.0], 1e-6);
    out.sum().unwrap().backward().unwrap();
    check_tensor_near(&a.grad().unwrap(), &[3], &[-1.0, -1.0, -1.0], 1e-6);
}
