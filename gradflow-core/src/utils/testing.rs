use crate::tensor::Tensor;

/// Checks if a tensor has the expected shape and values within `tolerance`.
/// Panics with the first mismatching index otherwise.
pub fn check_tensor_near(actual: &Tensor, expected_shape: &[usize], expected_data: &[f32], tolerance: f32) {
    assert_eq!(actual.shape(), expected_shape, "Shape mismatch");

    let actual_data = actual.to_vec();
    assert_eq!(actual_data.len(), expected_data.len(), "Data length mismatch");

    for (i, (a, e)) in actual_data.iter().zip(expected_data.iter()).enumerate() {
        let diff = (a - e).abs();
        if diff > tolerance || diff.is_nan() {
            panic!(
                "Data mismatch at index {}: actual={:?}, expected={:?}, diff={:?}, tolerance={:?}",
                i, a, e, diff, tolerance
            );
        }
    }
}

/// Helper to create a tensor for tests. Panics on invalid shape.
pub fn create_test_tensor(data: Vec<f32>, shape: Vec<usize>) -> Tensor {
    Tensor::new(data, shape).expect("Failed to create test tensor")
}

/// Helper to create a leaf tensor that requires gradient for tests.
pub fn create_test_tensor_with_grad(data: Vec<f32>, shape: Vec<usize>) -> Tensor {
    Tensor::new_with_grad(data, shape).expect("Failed to create test tensor with grad")
}
