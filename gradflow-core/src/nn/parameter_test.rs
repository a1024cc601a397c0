use super::*;
use crate::tensor::{full, ones, zeros};

#[test]
fn test_parameter_creation_requires_grad() {
    let tensor = zeros(&[2, 2]).unwrap();
    assert!(!tensor.requires_grad(), "Tensor should not require grad initially");
    let param = Parameter::new_unnamed(tensor.clone());
    assert!(param.requires_grad(), "Parameter's tensor should require grad after creation");
    assert!(tensor.requires_grad(), "The flag is set on the shared tensor");
    assert_eq!(param.name(), None);
}

#[test]
fn test_parameter_deref() {
    let param = Parameter::new(ones(&[2, 3]).unwrap(), Some("weight".to_string()));
    assert_eq!(param.shape(), vec![2, 3]);
    assert_eq!(param.name(), Some("weight"));
    assert!(param.is_leaf());
}

#[test]
fn test_parameter_from_non_leaf_is_detached() {
    let base = Tensor::new_with_grad(vec![1.0, 2.0], vec![2]).unwrap();
    let derived = base.mul_scalar(2.0).unwrap();
    let param = Parameter::new_unnamed(derived);
    assert!(param.is_leaf());
    assert!(param.requires_grad());
    assert_eq!(param.to_vec(), vec![2.0, 4.0]);
}

#[test]
fn test_parameter_clone_shares_tensor() {
    let param = Parameter::new_unnamed(full(&[2, 2], 42.0).unwrap());
    let cloned = param.clone();
    cloned
        .accumulate_grad(&ones(&[2, 2]).unwrap())
        .unwrap();
    assert!(param.grad().is_some());
    assert!(format!("{:?}", param).starts_with("Parameter("));
}
