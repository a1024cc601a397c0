//! Tensors with reverse-mode automatic differentiation, plus the layers,
//! losses and optimizer needed to train small feed-forward networks.

pub mod autograd;
pub mod error;
pub mod nn;
pub mod ops;
pub mod optim;
pub mod tensor;
pub mod tensor_data;
pub mod utils;

pub use autograd::{is_grad_enabled, no_grad, set_grad_enabled, NoGradGuard};
pub use error::GradFlowError;
pub use tensor::Tensor;
