// src/tensor/debug.rs
use crate::tensor::Tensor;
use std::fmt;

const PREVIEW_LEN: usize = 8;

impl fmt::Debug for Tensor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.data.read() {
            Ok(guard) => {
                let preview: Vec<f32> = guard.data.iter().take(PREVIEW_LEN).copied().collect();
                let hidden = guard.data.len() - preview.len();
                write!(
                    f,
                    "Tensor(shape={:?}, data={:?} (+{} more), requires_grad={}, has_grad={}, grad_fn={:?})",
                    guard.shape,
                    preview,
                    hidden,
                    guard.requires_grad,
                    guard.grad.is_some(),
                    guard.grad_fn.as_ref().map(|node| node.name()),
                )
            }
            Err(_) => write!(f, "Tensor(Error: RwLock poisoned)"),
        }
    }
}
