// src/tensor_data.rs
use std::fmt::{self, Debug, Formatter};
use std::sync::Arc;

use crate::autograd::Node;
use crate::error::GradFlowError;
use crate::tensor::Tensor;

/// Internal storage and metadata for a Tensor.
///
/// This struct holds the value buffer, the shape and the autograd-related
/// information. It is wrapped in `Arc<RwLock<TensorData>>` by the `Tensor`
/// struct to allow shared ownership and interior mutability.
pub struct TensorData {
    /// Row-major values. Wrapped in `Arc` so that views (`detach`, `reshape`)
    /// and the saved intermediates of graph nodes can share the buffer.
    /// Writers go through `Arc::make_mut` (copy-on-write).
    pub(crate) data: Arc<Vec<f32>>,
    /// The shape (dimensions) of the tensor. Empty for a scalar.
    pub(crate) shape: Vec<usize>,

    // --- Autograd Metadata ---
    /// If true, operations involving this tensor are recorded in the graph.
    pub(crate) requires_grad: bool,
    /// Gradient accumulator. Only populated on leaves by the backward pass.
    pub(crate) grad: Option<Tensor>,
    /// Node of the operation that produced this tensor.
    /// Leaf tensors (created directly by the user) have `grad_fn = None`.
    pub(crate) grad_fn: Option<Arc<Node>>,
}

impl TensorData {
    /// Creates a new `TensorData` from row-major data and a shape.
    ///
    /// # Errors
    /// Returns `GradFlowError::TensorCreationError` if the length of `data_vec`
    /// does not match the number of elements described by `shape`.
    pub fn new(data_vec: Vec<f32>, shape: Vec<usize>) -> Result<Self, GradFlowError> {
        Self::new_shared(Arc::new(data_vec), shape)
    }

    /// Creates a `TensorData` on top of an existing shared buffer.
    /// The result is a leaf that does not require gradients.
    pub(crate) fn new_shared(data: Arc<Vec<f32>>, shape: Vec<usize>) -> Result<Self, GradFlowError> {
        let numel: usize = shape.iter().product();
        if data.len() != numel {
            return Err(GradFlowError::TensorCreationError {
                data_len: data.len(),
                shape,
            });
        }
        Ok(TensorData {
            data,
            shape,
            requires_grad: false,
            grad: None,
            grad_fn: None,
        })
    }

    pub fn numel(&self) -> usize {
        self.shape.iter().product()
    }

    pub fn is_leaf(&self) -> bool {
        self.grad_fn.is_none()
    }
}

impl Debug for TensorData {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("TensorData")
            .field("data", &self.data)
            .field("shape", &self.shape)
            .field("requires_grad", &self.requires_grad)
            .field("grad_defined", &self.grad.is_some())
            .field("grad_fn", &self.grad_fn.as_ref().map(|node| node.name()))
            .finish()
    }
}
