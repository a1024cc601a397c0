//! Operations that reinterpret a tensor's shape without copying values.

pub mod reshape;

pub use reshape::reshape_op;
