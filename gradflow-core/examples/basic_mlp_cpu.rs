//! # Training a small MLP on CPU
//!
//! Builds a `Linear -> ReLU -> Linear` network, fits it to a synthetic
//! regression target with `MSELoss` and `SgdOptimizer`, and prints the loss
//! every few epochs.
//!
//! ## Running
//! `RUST_LOG=debug cargo run --example basic_mlp_cpu`

use gradflow_core::nn::{Linear, MSELoss, Module, Parameter, ReLU, Reduction, Sequential};
use gradflow_core::optim::{Optimizer, SgdOptimizer};
use gradflow_core::tensor::create::randn;
use gradflow_core::{no_grad, GradFlowError, Tensor};

/// Multi-layer perceptron with one hidden layer.
#[derive(Debug)]
struct SimpleMLP {
    layers: Sequential,
}

impl SimpleMLP {
    fn new(input_size: usize, hidden_size: usize, output_size: usize) -> Result<Self, GradFlowError> {
        let mut layers = Sequential::new();
        layers.add_module("linear1", Box::new(Linear::new(input_size, hidden_size, true)?));
        layers.add_module("relu1", Box::new(ReLU::new()));
        layers.add_module("linear2", Box::new(Linear::new(hidden_size, output_size, true)?));
        Ok(SimpleMLP { layers })
    }
}

impl Module for SimpleMLP {
    fn forward(&self, input: &Tensor) -> Result<Tensor, GradFlowError> {
        self.layers.forward(input)
    }

    fn parameters(&self) -> Vec<&Parameter> {
        self.layers.parameters()
    }

    fn named_parameters(&self) -> Vec<(String, &Parameter)> {
        self.layers.named_parameters()
    }
}

/// Target: the sum of the features, plus one.
fn make_targets(inputs: &Tensor, output_size: usize) -> Result<Tensor, GradFlowError> {
    let shape = inputs.shape();
    let (rows, cols) = (shape[0], shape[1]);
    let values = inputs.to_vec();
    let mut targets = Vec::with_capacity(rows * output_size);
    for row in values.chunks(cols) {
        let total: f32 = row.iter().sum::<f32>() + 1.0;
        targets.extend(std::iter::repeat(total).take(output_size));
    }
    Tensor::new(targets, vec![rows, output_size])
}

fn main() -> Result<(), GradFlowError> {
    env_logger::init();

    let mlp = SimpleMLP::new(4, 16, 2)?;
    for (name, param) in mlp.named_parameters() {
        println!("{:<16} {:?}", name, param.shape());
    }

    let loss_fn = MSELoss::new(Reduction::Mean);
    let mut optimizer = SgdOptimizer::new(mlp.parameters().into_iter().cloned(), 0.05, 0.9, 1e-4);

    let x_data = randn(&[32, 4])?;
    let y_data = make_targets(&x_data, 2)?;

    let num_epochs = 100;
    for epoch in 0..num_epochs {
        optimizer.zero_grad();
        let y_pred = mlp.forward(&x_data)?;
        let loss = loss_fn.calculate(&y_pred, &y_data)?;
        loss.backward()?;
        optimizer.step()?;

        if epoch % 10 == 0 || epoch + 1 == num_epochs {
            println!("Epoch [{}/{}], Loss: {:.4}", epoch + 1, num_epochs, loss.item()?);
        }
    }

    // Evaluation does not need a graph.
    let eval_loss = no_grad(|| -> Result<f32, GradFlowError> {
        let x_eval = randn(&[8, 4])?;
        let y_eval = make_targets(&x_eval, 2)?;
        loss_fn.calculate(&mlp.forward(&x_eval)?, &y_eval)?.item()
    })?;
    println!("Held-out loss: {:.4}", eval_loss);
    Ok(())
}
