//! Mini-batch training of a linear classifier with `DataLoader`,
//! `TensorDataset` and `RandomSampler`.
//!
//! `RUST_LOG=debug cargo run --example data_loading_example`

use gradflow_core::nn::{CrossEntropyLoss, Linear, Module, Reduction};
use gradflow_core::optim::{Optimizer, SgdOptimizer};
use gradflow_core::tensor::create::randn;
use gradflow_core::GradFlowError;
use gradflow_data::{collate_labeled, DataLoader, RandomSampler, SequentialSampler, TensorDataset};

fn main() -> Result<(), GradFlowError> {
    env_logger::init();

    // 64 points in 2-D, labeled by the sign of x0 + x1.
    let features = randn(&[64, 2])?;
    let labels: Vec<usize> = features
        .to_vec()
        .chunks(2)
        .map(|row| usize::from(row[0] + row[1] > 0.0))
        .collect();
    let dataset = TensorDataset::new(&features, labels)?;

    let preview = DataLoader::with_collate(dataset.clone(), 16, SequentialSampler::new(), false, Box::new(collate_labeled));
    for (i, batch) in preview.iter().enumerate() {
        let batch = batch?;
        println!("batch {i}: inputs {:?}, first labels {:?}", batch.inputs.shape(), &batch.labels[..4]);
    }

    let loader = DataLoader::with_collate(dataset, 16, RandomSampler::new(false, None), true, Box::new(collate_labeled));
    let model = Linear::new(2, 2, true)?;
    let criterion = CrossEntropyLoss::new(Reduction::Mean);
    let mut optimizer = SgdOptimizer::new(model.parameters().into_iter().cloned(), 0.5, 0.0, 0.0);

    for epoch in 0..10 {
        let mut total = 0.0;
        for batch in &loader {
            let batch = batch?;
            optimizer.zero_grad();
            let loss = criterion.calculate(&model.forward(&batch.inputs)?, &batch.labels)?;
            loss.backward()?;
            optimizer.step()?;
            total += loss.item()?;
        }
        println!("epoch {}: mean loss {:.4}", epoch + 1, total / loader.len() as f32);
    }
    Ok(())
}
