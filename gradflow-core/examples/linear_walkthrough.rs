//! # Forward and backward through a single linear unit
//!
//! Reproduces by hand what `Linear` and `MSELoss` do: `y = x · W`, loss
//! `mean((y - t)^2)`, then one gradient descent step, printing every
//! intermediate value.
//!
//! ## Running
//! `cargo run --example linear_walkthrough`

use gradflow_core::{no_grad, GradFlowError, Tensor};

fn main() -> Result<(), GradFlowError> {
    env_logger::init();

    let x = Tensor::new(vec![1.0, 2.0], vec![1, 2])?;
    let w = Tensor::new_with_grad(vec![0.5, -0.5], vec![2, 1])?;
    let target = 3.0;
    let lr = 0.1;

    for step in 0..5 {
        w.zero_grad();
        let y = x.matmul(&w)?;
        let loss = y.sub_scalar(target)?.pow_scalar(2.0)?.mean()?;
        loss.backward()?;

        let grad = w.grad().ok_or_else(|| GradFlowError::InternalError("weight has no gradient".to_string()))?;
        println!(
            "step {}: y = {:.4}, loss = {:.4}, dL/dW = {:?}",
            step,
            y.item()?,
            loss.item()?,
            grad.to_vec()
        );

        // W <- W - lr * dL/dW, outside the graph.
        let updated = no_grad(|| w.sub(&grad.mul_scalar(lr)?))?;
        w.copy_from_slice(&updated.to_vec())?;
    }

    println!("final W = {:?}", w.to_vec());
    Ok(())
}
