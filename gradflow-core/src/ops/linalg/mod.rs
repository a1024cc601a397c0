//! 2-D linear algebra.

pub mod matmul;
pub mod transpose;

pub use matmul::matmul_op;
pub use transpose::transpose_op;
