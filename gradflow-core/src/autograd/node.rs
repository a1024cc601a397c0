use std::fmt;
use std::sync::RwLock;

use crate::autograd::backward_op::BackwardOp;
use crate::error::GradFlowError;
use crate::tensor::Tensor;

/// Record of one executed operation in the computation graph.
///
/// A node keeps shared handles on its input tensors and the
/// [`BackwardOp`] holding the local-gradient rule and the saved values.
/// The saved part is dropped by [`Node::release`] once a backward pass no
/// longer needs it; the tag survives for error reporting.
pub struct Node {
    name: &'static str,
    inputs: Vec<Tensor>,
    op: RwLock<Option<BackwardOp>>,
}

impl Node {
    pub(crate) fn new(op: BackwardOp, inputs: Vec<Tensor>) -> Self {
        Node {
            name: op.name(),
            inputs,
            op: RwLock::new(Some(op)),
        }
    }

    /// Tag of the operation that produced this node (e.g. `"MatMulBackward"`).
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Input tensors, in the order the operation received them.
    pub fn inputs(&self) -> &[Tensor] {
        &self.inputs
    }

    /// `true` once the saved values were released by a backward pass.
    pub fn is_released(&self) -> bool {
        self.op.read().expect("RwLock poisoned").is_none()
    }

    pub(crate) fn release(&self) {
        self.op.write().expect("RwLock poisoned").take();
    }

    /// Runs the local-gradient rule. Fails with `StaleGraph` after release.
    pub(crate) fn backward(&self, grad_output: &[f32]) -> Result<Vec<Vec<f32>>, GradFlowError> {
        let guard = self.op.read().expect("RwLock poisoned");
        match guard.as_ref() {
            Some(op) => op.backward(grad_output),
            None => Err(GradFlowError::StaleGraph {
                operation: self.name.to_string(),
            }),
        }
    }
}

impl fmt::Debug for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("name", &self.name)
            .field("num_inputs", &self.inputs.len())
            .field("released", &self.is_released())
            .finish()
    }
}
