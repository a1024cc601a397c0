//! # Tensor Operations Module (`ops`)
//!
//! Differentiable operations, grouped by kind. Each operation is a `xxx_op`
//! function computing its output eagerly; the matching `Tensor` methods are
//! thin wrappers around them. When gradient tracking applies, the output is
//! attached to a [`Node`] holding the inputs and the [`BackwardOp`] with the
//! values saved for the backward pass. All shape validation happens before
//! any node is built.
//!
//! - [`arithmetic`]: add, sub, mul (broadcasting), scalar variants, neg, pow.
//! - [`math_elem`]: element-wise math (exp).
//! - [`linalg`]: 2-D matmul and transpose.
//! - [`reduction`]: sum and mean over all elements.
//! - [`view`]: reshape.
//! - [`activation`]: relu, sigmoid, log_softmax.
//! - [`loss`]: nll_loss and fused cross_entropy.

use std::sync::Arc;

use crate::autograd::{is_grad_enabled, BackwardOp, Node};
use crate::error::GradFlowError;
use crate::tensor::Tensor;

pub mod activation;
pub mod arithmetic;
pub mod linalg;
pub mod loss;
pub mod math_elem;
pub mod reduction;
pub mod view;

/// Wraps `data` into the output tensor of an operation and, if tracking is
/// enabled and any input requires grad, attaches the producing node.
///
/// `make_op` runs only when a node is actually recorded, so operations can
/// defer copying their saved values.
pub(crate) fn record<F>(
    data: Vec<f32>,
    shape: Vec<usize>,
    inputs: &[&Tensor],
    make_op: F,
) -> Result<Tensor, GradFlowError>
where
    F: FnOnce() -> BackwardOp,
{
    record_shared(Arc::new(data), shape, inputs, make_op)
}

/// Same as [`record`], on top of an existing buffer (views).
pub(crate) fn record_shared<F>(
    data: Arc<Vec<f32>>,
    shape: Vec<usize>,
    inputs: &[&Tensor],
    make_op: F,
) -> Result<Tensor, GradFlowError>
where
    F: FnOnce() -> BackwardOp,
{
    let output = Tensor::from_shared(data, shape)?;
    if is_grad_enabled() && inputs.iter().any(|t| t.requires_grad()) {
        let node = Node::new(make_op(), inputs.iter().map(|t| (*t).clone()).collect());
        log::trace!("recorded {} ({} inputs)", node.name(), inputs.len());
        let mut guard = output.write_data();
        guard.requires_grad = true;
        guard.grad_fn = Some(Arc::new(node));
    }
    Ok(output)
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
