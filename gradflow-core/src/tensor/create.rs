// src/tensor/create.rs

use crate::error::GradFlowError;
use crate::tensor::Tensor;
use crate::tensor_data::TensorData;
use rand::Rng;
use rand_distr::{Distribution, StandardNormal};
use std::sync::Arc;

/// Creates a new tensor filled with zeros with the specified shape.
pub fn zeros(shape: &[usize]) -> Result<Tensor, GradFlowError> {
    full(shape, 0.0)
}

/// Creates a new tensor filled with ones with the specified shape.
pub fn ones(shape: &[usize]) -> Result<Tensor, GradFlowError> {
    full(shape, 1.0)
}

/// Creates a new tensor filled with `value` with the specified shape.
pub fn full(shape: &[usize], value: f32) -> Result<Tensor, GradFlowError> {
    let numel = shape.iter().product();
    Tensor::new(vec![value; numel], shape.to_vec())
}

/// Creates a rank-0 tensor holding `value`.
pub fn scalar(value: f32) -> Tensor {
    Tensor::from_tensor_data(TensorData {
        data: Arc::new(vec![value]),
        shape: vec![],
        requires_grad: false,
        grad: None,
        grad_fn: None,
    })
}

/// Zeros with the shape of `tensor`.
pub fn zeros_like(tensor: &Tensor) -> Result<Tensor, GradFlowError> {
    zeros(&tensor.shape())
}

/// Ones with the shape of `tensor`.
pub fn ones_like(tensor: &Tensor) -> Result<Tensor, GradFlowError> {
    ones(&tensor.shape())
}

/// Samples every value uniformly from `[low, high)`.
pub fn rand_uniform(shape: &[usize], low: f32, high: f32) -> Result<Tensor, GradFlowError> {
    if !low.is_finite() || !high.is_finite() || low >= high || !(high - low).is_finite() {
        return Err(GradFlowError::UnsupportedOperation(format!(
            "rand_uniform requires finite low < high with a finite width, got [{}, {})",
            low, high
        )));
    }
    let numel = shape.iter().product();
    let mut rng = rand::thread_rng();
    let data_vec: Vec<f32> = (0..numel).map(|_| rng.gen_range(low..high)).collect();
    Tensor::new(data_vec, shape.to_vec())
}

/// Samples every value from the standard normal distribution.
pub fn randn(shape: &[usize]) -> Result<Tensor, GradFlowError> {
    let numel = shape.iter().product();
    let mut rng = rand::thread_rng();
    let data_vec: Vec<f32> = (0..numel).map(|_| StandardNormal.sample(&mut rng)).collect();
    Tensor::new(data_vec, shape.to_vec())
}

#[cfg(test)]
#[path = "create_test.rs"]
mod tests;
