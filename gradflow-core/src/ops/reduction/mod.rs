//! Reductions over all elements, producing a scalar (shape `[]`).

pub mod mean;
pub mod sum;

pub use mean::mean_op;
pub use sum::sum_op;
