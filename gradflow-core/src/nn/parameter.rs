use crate::tensor::Tensor;
use std::fmt;
use std::ops::Deref;

/// A learnable tensor owned by a [`Module`](crate::nn::Module).
///
/// The wrapped tensor is always a leaf that requires gradients. `Parameter`
/// derefs to [`Tensor`], so `param.grad()`, `param.shape()` etc. work
/// directly. Cloning shares the underlying tensor.
#[derive(Clone)]
pub struct Parameter {
    tensor: Tensor,
    name: Option<String>,
}

impl Parameter {
    /// Wraps `tensor` as a parameter. A non-leaf tensor is detached first.
    pub fn new(tensor: Tensor, name: Option<String>) -> Self {
        let tensor = if tensor.is_leaf() { tensor } else { tensor.detach() };
        tensor.write_data().requires_grad = true;
        Parameter { tensor, name }
    }

    pub fn new_unnamed(tensor: Tensor) -> Self {
        Self::new(tensor, None)
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Handle on the wrapped tensor.
    pub fn tensor(&self) -> &Tensor {
        &self.tensor
    }

    pub fn into_inner(self) -> Tensor {
        self.tensor
    }
}

impl Deref for Parameter {
    type Target = Tensor;

    fn deref(&self) -> &Self::Target {
        &self.tensor
    }
}

impl fmt::Debug for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.name {
            Some(name) => write!(f, "Parameter({}: {:?})", name, self.tensor),
            None => write!(f, "Parameter({:?})", self.tensor),
        }
    }
}

#[cfg(test)]
#[path = "parameter_test.rs"]
mod tests;
