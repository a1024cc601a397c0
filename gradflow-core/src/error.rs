use thiserror::Error;

/// Custom error type for the gradflow framework.
#[derive(Error, Debug, PartialEq, Clone)]
pub enum GradFlowError {
    #[error("Tensor creation error: data length {data_len} does not match shape {shape:?}")]
    TensorCreationError { data_len: usize, shape: Vec<usize> },

    #[error("Shape mismatch: expected {expected:?}, got {actual:?} during operation {operation}")]
    ShapeMismatch {
        expected: Vec<usize>,
        actual: Vec<usize>,
        operation: String,
    },

    #[error("Cannot broadcast shapes: {shape1:?} and {shape2:?}")]
    BroadcastError {
        shape1: Vec<usize>,
        shape2: Vec<usize>,
    },

    #[error("Rank mismatch in {operation}: expected rank {expected}, got {actual}")]
    RankMismatch {
        expected: usize,
        actual: usize,
        operation: String,
    },

    #[error("Label {label} is out of range for {num_classes} classes")]
    InvalidLabel { label: usize, num_classes: usize },

    #[error("Index {index} is out of bounds for length {len}")]
    IndexOutOfBounds { index: usize, len: usize },

    #[error("Backward called on non-scalar tensor without explicit gradient.")]
    BackwardNonScalar,

    #[error("Backward called on a tensor that has no producing node (leaf or created without gradient tracking).")]
    DetachedBackward,

    #[error("Saved values of '{operation}' were already released by a previous backward pass; pass retain_graph = true to backward through the graph again.")]
    StaleGraph { operation: String },

    #[error("Shape mismatch during gradient accumulation: expected {expected:?}, got {actual:?}")]
    GradientAccumulationShapeMismatch {
        expected: Vec<usize>,
        actual: Vec<usize>,
    },

    #[error("requires_grad can only be changed on leaf tensors.")]
    RequiresGradOnNonLeaf,

    #[error("Cycle detected in the computation graph during backward pass.")]
    CycleDetected,

    #[error("Unsupported operation: {0}")]
    UnsupportedOperation(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}
