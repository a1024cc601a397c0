use std::sync::Arc;

use crate::autograd::graph;
use crate::autograd::Node;
use crate::error::GradFlowError;
use crate::tensor::Tensor;
use crate::tensor_data::TensorData;

impl Tensor {
    /// Checks if operations on this tensor are recorded in the graph.
    pub fn requires_grad(&self) -> bool {
        self.read_data().requires_grad
    }

    /// Sets the `requires_grad` flag. Only allowed on leaf tensors.
    pub fn set_requires_grad(&self, requires_grad: bool) -> Result<(), GradFlowError> {
        let mut guard = self.write_data();
        if guard.grad_fn.is_some() {
            log::warn!(
                "set_requires_grad({}) called on a non-leaf tensor produced by {}",
                requires_grad,
                guard.grad_fn.as_ref().map_or("?", |node| node.name())
            );
            return Err(GradFlowError::RequiresGradOnNonLeaf);
        }
        guard.requires_grad = requires_grad;
        Ok(())
    }

    /// A leaf has no producing node.
    pub fn is_leaf(&self) -> bool {
        self.read_data().is_leaf()
    }

    /// Returns the node that produced this tensor, if any.
    pub fn grad_fn(&self) -> Option<Arc<Node>> {
        self.read_data().grad_fn.clone()
    }

    /// Returns the accumulated gradient, if any backward pass reached this tensor.
    pub fn grad(&self) -> Option<Tensor> {
        self.read_data().grad.clone()
    }

    /// Clears the gradient accumulator.
    pub fn zero_grad(&self) {
        self.write_data().grad = None;
    }

    /// Adds `grad` into the accumulator (or installs it if empty).
    ///
    /// # Errors
    /// `GradientAccumulationShapeMismatch` if `grad` does not have this
    /// tensor's shape.
    pub fn accumulate_grad(&self, grad: &Tensor) -> Result<(), GradFlowError> {
        self.check_grad_shape(grad)?;
        self.add_to_grad(grad.detach());
        Ok(())
    }

    pub(crate) fn check_grad_shape(&self, grad: &Tensor) -> Result<(), GradFlowError> {
        let expected = self.shape();
        let actual = grad.shape();
        if expected != actual {
            return Err(GradFlowError::GradientAccumulationShapeMismatch { expected, actual });
        }
        Ok(())
    }

    /// Shapes must already be checked.
    pub(crate) fn add_to_grad(&self, grad: Tensor) {
        let mut guard = self.write_data();
        let summed = match guard.grad.take() {
            Some(existing) => {
                let values: Vec<f32> = existing
                    .read_data()
                    .data
                    .iter()
                    .zip(grad.read_data().data.iter())
                    .map(|(a, b)| a + b)
                    .collect();
                let shape = existing.shape();
                Tensor::from_tensor_data(TensorData {
                    data: Arc::new(values),
                    shape,
                    requires_grad: false,
                    grad: None,
                    grad_fn: None,
                })
            }
            None => grad,
        };
        guard.grad = Some(summed);
    }

    /// Returns a tensor sharing this tensor's values, with no producing node
    /// and no gradient tracking.
    pub fn detach(&self) -> Tensor {
        let guard = self.read_data();
        Tensor::from_tensor_data(TensorData {
            data: Arc::clone(&guard.data),
            shape: guard.shape.clone(),
            requires_grad: false,
            grad: None,
            grad_fn: None,
        })
    }

    /// Computes the gradients of this one-element tensor w.r.t. the graph
    /// leaves, then releases the graph's saved values.
    pub fn backward(&self) -> Result<(), GradFlowError> {
        self.backward_with(None, false)
    }

    /// Backward pass with an explicit seed gradient and graph retention.
    ///
    /// Without a seed this tensor must hold exactly one value (seed `1`).
    /// With `retain_graph` the saved values survive, so backward can run
    /// through the same graph again.
    ///
    /// # Errors
    /// - `DetachedBackward` if this tensor has no producing node.
    /// - `BackwardNonScalar` if no seed is given for a multi-element tensor.
    /// - `ShapeMismatch` if the seed does not have this tensor's shape.
    /// - `StaleGraph` if a node's saved values were already released.
    pub fn backward_with(&self, gradient: Option<&Tensor>, retain_graph: bool) -> Result<(), GradFlowError> {
        if self.is_leaf() {
            return Err(GradFlowError::DetachedBackward);
        }
        let seed = match gradient {
            Some(seed) => {
                if seed.shape() != self.shape() {
                    return Err(GradFlowError::ShapeMismatch {
                        expected: self.shape(),
                        actual: seed.shape(),
                        operation: "backward seed".to_string(),
                    });
                }
                seed.to_vec()
            }
            None => {
                if self.numel() != 1 {
                    return Err(GradFlowError::BackwardNonScalar);
                }
                vec![1.0]
            }
        };
        graph::run_backward(self, seed, retain_graph)
    }
}

#[cfg(test)]
#[path = "autograd_methods_test.rs"]
mod tests;
