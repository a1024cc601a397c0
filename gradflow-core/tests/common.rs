use gradflow_core::tensor::Tensor;

// Shared by several integration test crates; not all of them use every helper.
#[allow(dead_code)]
pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[allow(dead_code)]
pub fn leaf(data: Vec<f32>, shape: Vec<usize>) -> Tensor {
    Tensor::new_with_grad(data, shape).expect("Test tensor creation failed")
}

#[allow(dead_code)]
pub fn constant(data: Vec<f32>, shape: Vec<usize>) -> Tensor {
    Tensor::new(data, shape).expect("Test tensor creation failed")
}

#[allow(dead_code)]
pub fn grad_of(tensor: &Tensor) -> Vec<f32> {
    tensor
        .grad()
        .expect("Expected gradient to be populated")
        .to_vec()
}
