//! Loss criteria. Each returns a scalar tensor ready for `backward()`.

pub mod cross_entropy;
pub mod mse;
pub mod nll;

pub use crate::ops::loss::Reduction;
pub use cross_entropy::CrossEntropyLoss;
pub use mse::MSELoss;
pub use nll::NLLLoss;
