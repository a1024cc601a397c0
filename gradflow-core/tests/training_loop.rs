use gradflow_core::nn::{CrossEntropyLoss, Linear, MSELoss, Module, ReLU, Reduction, Sequential};
use gradflow_core::optim::{Optimizer, SgdOptimizer};
use gradflow_core::{GradFlowError, Tensor};
use rand::rngs::StdRng;
use rand::SeedableRng;

mod common;
use common::{constant, init_logger};

#[test]
fn sgd_fits_a_linear_target() -> Result<(), GradFlowError> {
    init_logger();
    // y = 2 * x0 - x1 + 0.5
    let x = constant(vec![0.0, 0.0, 1.0, 0.0, 0.0, 1.0, 1.0, 1.0], vec![4, 2]);
    let y = constant(vec![0.5, 2.5, -0.5, 1.5], vec![4, 1]);

    let mut rng = StdRng::seed_from_u64(7);
    let model = Linear::new_with_rng(2, 1, true, &mut rng)?;
    let criterion = MSELoss::new(Reduction::Mean);
    let mut optimizer = SgdOptimizer::new(model.parameters().into_iter().cloned(), 0.1, 0.9, 0.0);

    let initial = criterion.calculate(&model.forward(&x)?, &y)?.item()?;
    let mut last = initial;
    for _ in 0..300 {
        optimizer.zero_grad();
        let loss = criterion.calculate(&model.forward(&x)?, &y)?;
        loss.backward()?;
        optimizer.step()?;
        last = loss.item()?;
    }

    assert!(last < initial);
    assert!(last < 1e-3, "loss did not converge: {}", last);
    let w = model.weight().to_vec();
    assert!((w[0] - 2.0).abs() < 0.05 && (w[1] + 1.0).abs() < 0.05, "weight = {:?}", w);
    Ok(())
}

#[test]
fn mlp_classifier_loss_decreases() -> Result<(), GradFlowError> {
    init_logger();
    let mut rng = StdRng::seed_from_u64(42);
    let model = Sequential::new()
        .push(Linear::new_with_rng(2, 8, true, &mut rng)?)
        .push(ReLU::new())
        .push(Linear::new_with_rng(8, 2, true, &mut rng)?);
    assert_eq!(model.parameters().len(), 4);

    // Class 1 above the line x0 + x1 = 0.
    let inputs = Tensor::new(
        vec![1.0, 1.0, -1.0, -1.0, 2.0, 0.5, -0.5, -2.0, 0.5, 1.5, -1.5, -0.3, 1.0, -0.2, -0.2, -1.0],
        vec![8, 2],
    )?;
    let labels = [1, 0, 1, 0, 1, 0, 1, 0];
    let criterion = CrossEntropyLoss::new(Reduction::Mean);
    let mut optimizer = SgdOptimizer::new(model.parameters().into_iter().cloned(), 0.2, 0.0, 0.0);

    let initial = criterion.calculate(&model.forward(&inputs)?, &labels)?.item()?;
    for _ in 0..200 {
        optimizer.zero_grad();
        let loss = criterion.calculate(&model.forward(&inputs)?, &labels)?;
        loss.backward()?;
        optimizer.step()?;
    }
    let trained = criterion.calculate(&model.forward(&inputs)?, &labels)?.item()?;
    assert!(trained < initial * 0.5, "initial {}, trained {}", initial, trained);
    Ok(())
}
