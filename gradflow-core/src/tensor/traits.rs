// src/tensor/traits.rs

use crate::tensor::Tensor;
use std::sync::Arc;

impl Clone for Tensor {
    /// Shallow clone: the new handle shares data, flags and gradient with `self`.
    fn clone(&self) -> Self {
        Tensor {
            data: Arc::clone(&self.data),
        }
    }
}

impl PartialEq for Tensor {
    /// Two tensors are equal when they have the same shape and values.
    /// Autograd metadata is ignored.
    fn eq(&self, other: &Self) -> bool {
        if Arc::ptr_eq(&self.data, &other.data) {
            return true;
        }
        let a = self.read_data();
        let b = other.read_data();
        a.shape == b.shape && a.data == b.data
    }
}
