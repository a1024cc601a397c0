// src/ops/activation/mod.rs

//! # Activation Functions
//!
//! Non-linearities used between linear layers, plus `log_softmax` which turns
//! class scores into log-probabilities.

pub mod log_softmax;
pub mod relu;
pub mod sigmoid;

pub use log_softmax::log_softmax_op;
pub use relu::relu_op;
pub use sigmoid::sigmoid_op;
