use crate::error::GradFlowError;
use crate::nn::module::Module;
use crate::nn::parameter::Parameter;
use crate::tensor::Tensor;

/// Output layer turning `[batch, classes]` scores into log-probabilities.
/// Pair it with [`NLLLoss`](crate::nn::NLLLoss).
#[derive(Debug, Default, Clone)]
pub struct LogSoftmax {}

impl LogSoftmax {
    pub fn new() -> Self {
        LogSoftmax {}
    }
}

impl Module for LogSoftmax {
    fn forward(&self, input: &Tensor) -> Result<Tensor, GradFlowError> {
        input.log_softmax()
    }

    fn parameters(&self) -> Vec<&Parameter> {
        Vec::new()
    }

    fn named_parameters(&self) -> Vec<(String, &Parameter)> {
        Vec::new()
    }
}
