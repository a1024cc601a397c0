// gradflow-core/src/optim/mod.rs

//! Optimizers for training neural networks.
//!
//! Provides the `Optimizer` trait, `ParamGroup` for per-group
//! hyperparameters, and stochastic gradient descent.

pub mod optimizer_trait;
pub mod param_group;
pub mod sgd;

pub use optimizer_trait::Optimizer;
pub use param_group::ParamGroup;
pub use sgd::SgdOptimizer;
