// src/nn/mod.rs
//! Layers, containers and loss criteria built on the autograd engine.

pub mod containers;
pub mod init;
pub mod layers;
pub mod losses;
pub mod module;
pub mod parameter;

pub use containers::Sequential;
pub use layers::{Linear, LogSoftmax, ReLU, Sigmoid};
pub use losses::{CrossEntropyLoss, MSELoss, NLLLoss, Reduction};
pub use module::Module;
pub use parameter::Parameter;
