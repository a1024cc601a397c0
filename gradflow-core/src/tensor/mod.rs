// src/tensor/mod.rs

use crate::error::GradFlowError;
use crate::tensor_data::TensorData;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

mod arithmetic_methods;
mod autograd_methods;
mod debug;
mod nn_methods;
mod reduction_methods;
mod traits;
mod view_methods;
pub mod create;

pub mod broadcast_utils;
pub mod utils;

pub use create::{full, ones, ones_like, rand_uniform, randn, scalar, zeros, zeros_like};

/// Represents a multi-dimensional array of `f32` values.
///
/// `Tensor` uses `Arc<RwLock<TensorData>>` internally to allow for:
/// 1.  **Shared Ownership:** Multiple `Tensor` handles can point to the same
///     underlying data without cloning the data itself (cheap clones). Graph
///     nodes hold their inputs this way.
/// 2.  **Interior Mutability:** Autograd metadata (`requires_grad`, `grad`)
///     can be modified through an immutable `Tensor` reference.
pub struct Tensor {
    pub(crate) data: Arc<RwLock<TensorData>>,
}

impl Tensor {
    /// Creates a new leaf Tensor from row-major data and a shape.
    /// Gradient tracking is disabled by default.
    pub fn new(data_vec: Vec<f32>, shape: Vec<usize>) -> Result<Self, GradFlowError> {
        let tensor_data = TensorData::new(data_vec, shape)?;
        Ok(Self::from_tensor_data(tensor_data))
    }

    /// Creates a new leaf Tensor that requires gradients.
    pub fn new_with_grad(data_vec: Vec<f32>, shape: Vec<usize>) -> Result<Self, GradFlowError> {
        let tensor = Self::new(data_vec, shape)?;
        tensor.write_data().requires_grad = true;
        Ok(tensor)
    }

    pub(crate) fn from_tensor_data(tensor_data: TensorData) -> Self {
        Tensor {
            data: Arc::new(RwLock::new(tensor_data)),
        }
    }

    /// Leaf tensor on top of an existing buffer.
    pub(crate) fn from_shared(data: Arc<Vec<f32>>, shape: Vec<usize>) -> Result<Self, GradFlowError> {
        Ok(Self::from_tensor_data(TensorData::new_shared(data, shape)?))
    }

    /// Returns a clone of the tensor's shape.
    pub fn shape(&self) -> Vec<usize> {
        self.read_data().shape.clone()
    }

    /// Returns the number of dimensions.
    pub fn rank(&self) -> usize {
        self.read_data().shape.len()
    }

    /// Returns the number of elements in the tensor.
    pub fn numel(&self) -> usize {
        self.read_data().numel()
    }

    /// Returns a copy of the values in row-major order.
    pub fn to_vec(&self) -> Vec<f32> {
        self.read_data().data.as_ref().clone()
    }

    /// Shared handle on the value buffer. Cheap; used by ops to save inputs.
    pub(crate) fn buffer(&self) -> Arc<Vec<f32>> {
        Arc::clone(&self.read_data().data)
    }

    /// Returns the single value of a one-element tensor.
    pub fn item(&self) -> Result<f32, GradFlowError> {
        let guard = self.read_data();
        if guard.numel() != 1 {
            return Err(GradFlowError::ShapeMismatch {
                expected: vec![],
                actual: guard.shape.clone(),
                operation: "item".to_string(),
            });
        }
        Ok(guard.data[0])
    }

    /// Overwrites the values of this tensor without recording anything in the
    /// graph. Nodes that saved the previous buffer keep seeing the old values.
    pub fn copy_from_slice(&self, values: &[f32]) -> Result<(), GradFlowError> {
        let mut guard = self.write_data();
        if values.len() != guard.numel() {
            return Err(GradFlowError::TensorCreationError {
                data_len: values.len(),
                shape: guard.shape.clone(),
            });
        }
        Arc::make_mut(&mut guard.data).copy_from_slice(values);
        Ok(())
    }

    /// Applies `f` to every value in place, untracked. Used by optimizers.
    pub(crate) fn update_values<F>(&self, f: F)
    where
        F: FnOnce(&mut [f32]),
    {
        let mut guard = self.write_data();
        f(Arc::make_mut(&mut guard.data).as_mut_slice());
    }

    /// Identity of the underlying storage cell. Clones share the same id.
    pub(crate) fn node_id(&self) -> usize {
        Arc::as_ptr(&self.data) as *const () as usize
    }

    /// Acquires a read lock on the tensor's data.
    /// Panics if the RwLock is poisoned.
    pub fn read_data(&self) -> RwLockReadGuard<'_, TensorData> {
        self.data.read().expect("RwLock poisoned")
    }

    /// Acquires a write lock on the tensor's data.
    /// Panics if the RwLock is poisoned.
    pub fn write_data(&self) -> RwLockWriteGuard<'_, TensorData> {
        self.data.write().expect("RwLock poisoned")
    }
}
