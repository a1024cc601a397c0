//! Reverse-mode automatic differentiation.
//!
//! Operations attach a [`Node`] to their output while tracking is enabled;
//! `Tensor::backward` walks those nodes in reverse topological order and
//! accumulates gradients into the leaves.

pub mod backward_op;
pub mod grad_check;
pub mod grad_mode;
pub(crate) mod graph;
pub mod node;

pub use backward_op::BackwardOp;
pub use grad_mode::{is_grad_enabled, no_grad, set_grad_enabled, NoGradGuard};
pub use node::Node;
