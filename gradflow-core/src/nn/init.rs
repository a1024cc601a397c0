//! In-place parameter initializers. Writes are untracked.

use rand::distributions::{Distribution, Uniform};
use rand::Rng;

use crate::error::GradFlowError;
use crate::tensor::Tensor;

/// Fills `tensor` with `0`.
pub fn zeros_(tensor: &Tensor) -> Result<(), GradFlowError> {
    fill_(tensor, 0.0)
}

/// Fills `tensor` with `1`.
pub fn ones_(tensor: &Tensor) -> Result<(), GradFlowError> {
    fill_(tensor, 1.0)
}

/// Fills `tensor` with `value`.
pub fn fill_(tensor: &Tensor, value: f32) -> Result<(), GradFlowError> {
    tensor.update_values(|values| values.fill(value));
    Ok(())
}

/// Fills `tensor` with samples from `U(low, high)` using the thread RNG.
pub fn uniform_(tensor: &Tensor, low: f32, high: f32) -> Result<(), GradFlowError> {
    uniform_with_rng_(tensor, low, high, &mut rand::thread_rng())
}

/// Same as [`uniform_`] with a caller-provided RNG (for reproducible runs).
///
/// # Errors
/// `UnsupportedOperation` unless `low < high`, both finite, and
/// `high - low` does not overflow.
pub fn uniform_with_rng_<R: Rng + ?Sized>(
    tensor: &Tensor,
    low: f32,
    high: f32,
    rng: &mut R,
) -> Result<(), GradFlowError> {
    if !low.is_finite() || !high.is_finite() || low >= high || !(high - low).is_finite() {
        return Err(GradFlowError::UnsupportedOperation(format!(
            "uniform_ requires finite low < high with a finite width, got [{}, {})",
            low, high
        )));
    }
    let dist = Uniform::new(low, high);
    tensor.update_values(|values| {
        for v in values.iter_mut() {
            *v = dist.sample(&mut *rng);
        }
    });
    Ok(())
}

/// Bound of the default `Linear` initialization, `1 / sqrt(fan_in)`.
pub fn fan_in_bound(fan_in: usize) -> f32 {
    if fan_in == 0 {
        0.0
    } else {
        1.0 / (fan_in as f32).sqrt()
    }
}

#[cfg(test)]
#[path = "init_test.rs"]
mod tests;
