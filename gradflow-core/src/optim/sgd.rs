use std::collections::HashMap;

use crate::error::GradFlowError;
use crate::nn::parameter::Parameter;
use crate::optim::optimizer_trait::Optimizer;
use crate::optim::param_group::ParamGroup;

/// Implements stochastic gradient descent, optionally with momentum and
/// weight decay.
///
/// For each parameter `p` with gradient `g`:
/// ```text
/// d = g + weight_decay * p
/// buf = momentum * buf + d      (buf = d on the first step; skipped if momentum == 0)
/// p = p - lr * buf
/// ```
#[derive(Debug)]
pub struct SgdOptimizer {
    param_groups: Vec<ParamGroup>,
    momentum: f32,
    /// Keyed by the parameter's storage identity.
    momentum_buffers: HashMap<usize, Vec<f32>>,
}

impl SgdOptimizer {
    /// Creates an optimizer with a single default parameter group.
    pub fn new(
        params: impl IntoIterator<Item = Parameter>,
        lr: f32,
        momentum: f32,
        weight_decay: f32,
    ) -> Self {
        let default_group = ParamGroup::new(params.into_iter().collect(), lr, weight_decay);
        SgdOptimizer {
            param_groups: vec![default_group],
            momentum,
            momentum_buffers: HashMap::new(),
        }
    }

    pub fn momentum(&self) -> f32 {
        self.momentum
    }
}

impl Optimizer for SgdOptimizer {
    fn step(&mut self) -> Result<(), GradFlowError> {
        let mut updated = 0usize;
        let mut skipped = 0usize;
        for group in &self.param_groups {
            for param in &group.params {
                let grad = match param.grad() {
                    Some(grad) if param.requires_grad() => grad,
                    _ => {
                        skipped += 1;
                        continue;
                    }
                };
                param.check_grad_shape(&grad)?;

                let mut d_p = grad.to_vec();
                if group.weight_decay != 0.0 {
                    for (d, p) in d_p.iter_mut().zip(param.to_vec()) {
                        *d += group.weight_decay * p;
                    }
                }
                if self.momentum != 0.0 {
                    let buffer = self
                        .momentum_buffers
                        .entry(param.node_id())
                        .or_insert_with(|| vec![0.0; d_p.len()]);
                    for (b, d) in buffer.iter_mut().zip(d_p.iter_mut()) {
                        *b = self.momentum * *b + *d;
                        *d = *b;
                    }
                }

                let lr = group.lr;
                param.update_values(|values| {
                    for (v, d) in values.iter_mut().zip(&d_p) {
                        *v -= lr * d;
                    }
                });
                updated += 1;
            }
        }
        log::debug!("SGD step: {} parameters updated, {} without gradient", updated, skipped);
        Ok(())
    }

    fn add_param_group(&mut self, param_group: ParamGroup) {
        self.param_groups.push(param_group);
    }

    fn param_groups(&self) -> &[ParamGroup] {
        &self.param_groups
    }

    fn param_groups_mut(&mut self) -> &mut [ParamGroup] {
        &mut self.param_groups
    }
}

#[cfg(test)]
#[path = "sgd_test.rs"]
mod tests;
