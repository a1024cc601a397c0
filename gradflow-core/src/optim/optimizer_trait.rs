use super::param_group::ParamGroup;
use crate::error::GradFlowError;

/// Trait defining the common interface for all optimizers.
///
/// Optimizers update parameters from their accumulated gradients. Updates
/// are untracked: they never record graph nodes.
pub trait Optimizer {
    /// Performs a single optimization step. Parameters without a gradient
    /// are skipped.
    fn step(&mut self) -> Result<(), GradFlowError>;

    /// Clears the gradients of all parameters managed by the optimizer.
    fn zero_grad(&mut self) {
        for group in self.param_groups() {
            for param in &group.params {
                param.zero_grad();
            }
        }
    }

    /// Adds a new parameter group with its own hyperparameters.
    fn add_param_group(&mut self, param_group: ParamGroup);

    fn param_groups(&self) -> &[ParamGroup];

    /// Mutable access, e.g. to change the learning rate between epochs.
    fn param_groups_mut(&mut self) -> &mut [ParamGroup];
}
