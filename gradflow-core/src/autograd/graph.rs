use std::collections::hash_map::Entry;
use std::collections::{HashMap, HashSet};

use crate::error::GradFlowError;
use crate::tensor::Tensor;

/// Orders the tensors reachable from `root` so that every tensor appears
/// before the inputs of its producing node (root first, leaves last).
///
/// Iterative DFS producing a reverse post-order. Tensors are identified by
/// their storage cell, so clones of one handle count as one vertex.
pub(crate) fn topological_sort(root: &Tensor) -> Result<Vec<Tensor>, GradFlowError> {
    let mut order: Vec<Tensor> = Vec::new();
    let mut visited: HashSet<usize> = HashSet::new();
    let mut on_path: HashSet<usize> = HashSet::new();
    // (tensor, children already pushed)
    let mut stack: Vec<(Tensor, bool)> = vec![(root.clone(), false)];

    while let Some((tensor, expanded)) = stack.pop() {
        let id = tensor.node_id();
        if expanded {
            on_path.remove(&id);
            order.push(tensor);
            continue;
        }
        if !visited.insert(id) {
            continue;
        }
        on_path.insert(id);
        let grad_fn = tensor.grad_fn();
        stack.push((tensor, true));
        if let Some(node) = grad_fn {
            for input in node.inputs().iter().rev() {
                let input_id = input.node_id();
                if on_path.contains(&input_id) {
                    return Err(GradFlowError::CycleDetected);
                }
                if !visited.contains(&input_id) {
                    stack.push((input.clone(), false));
                }
            }
        }
    }

    order.reverse();
    Ok(order)
}

/// Runs the backward pass from `root`, seeded with `seed` (one value per
/// element of `root`).
///
/// Leaf gradients are staged and only added to the accumulators once every
/// node succeeded, so a failing pass leaves all accumulators untouched.
/// Saved values are released afterwards unless `retain_graph` is set.
pub(crate) fn run_backward(root: &Tensor, seed: Vec<f32>, retain_graph: bool) -> Result<(), GradFlowError> {
    let order = topological_sort(root)?;

    for tensor in &order {
        if let Some(node) = tensor.grad_fn() {
            if node.is_released() {
                return Err(GradFlowError::StaleGraph {
                    operation: node.name().to_string(),
                });
            }
        }
    }

    let mut pending: HashMap<usize, Vec<f32>> = HashMap::new();
    pending.insert(root.node_id(), seed);
    let mut nodes_run = 0usize;

    for tensor in &order {
        let node = match tensor.grad_fn() {
            Some(node) => node,
            None => continue,
        };
        // Unreachable from the seed through tracked inputs.
        let grad_output = match pending.remove(&tensor.node_id()) {
            Some(grad) => grad,
            None => continue,
        };
        let input_grads = node.backward(&grad_output)?;
        if input_grads.len() != node.inputs().len() {
            return Err(GradFlowError::InternalError(format!(
                "{} produced {} gradients for {} inputs",
                node.name(),
                input_grads.len(),
                node.inputs().len()
            )));
        }
        for (input, grad) in node.inputs().iter().zip(input_grads) {
            if !input.requires_grad() {
                continue;
            }
            if grad.len() != input.numel() {
                return Err(GradFlowError::InternalError(format!(
                    "{} produced a gradient of {} elements for an input of shape {:?}",
                    node.name(),
                    grad.len(),
                    input.shape()
                )));
            }
            match pending.entry(input.node_id()) {
                Entry::Occupied(mut slot) => {
                    for (acc, g) in slot.get_mut().iter_mut().zip(grad) {
                        *acc += g;
                    }
                }
                Entry::Vacant(slot) => {
                    slot.insert(grad);
                }
            }
        }
        nodes_run += 1;
    }

    // Stage every leaf update first; nothing is written until all succeed.
    let mut staged: Vec<(&Tensor, Tensor)> = Vec::new();
    for tensor in &order {
        if !tensor.is_leaf() || !tensor.requires_grad() {
            continue;
        }
        if let Some(grad) = pending.remove(&tensor.node_id()) {
            let grad_tensor = Tensor::new(grad, tensor.shape())?;
            tensor.check_grad_shape(&grad_tensor)?;
            staged.push((tensor, grad_tensor));
        }
    }

    let leaves_updated = staged.len();
    for (leaf, grad) in staged {
        leaf.add_to_grad(grad);
    }

    if !retain_graph {
        for tensor in &order {
            if let Some(node) = tensor.grad_fn() {
                node.release();
            }
        }
    }

    log::debug!(
        "backward: {} tensors visited, {} nodes run, {} leaves updated (retain_graph = {})",
        order.len(),
        nodes_run,
        leaves_updated,
        retain_graph
    );
    Ok(())
}

#[cfg(test)]
#[path = "graph_test.rs"]
mod tests;
