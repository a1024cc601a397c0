use crate::error::GradFlowError;
use crate::nn::module::Module;
use crate::nn::parameter::Parameter;
use crate::tensor::Tensor;

/// Layer applying the logistic sigmoid element-wise. No parameters.
#[derive(Debug, Default, Clone)]
pub struct Sigmoid {}

impl Sigmoid {
    pub fn new() -> Self {
        Sigmoid {}
    }
}

impl Module for Sigmoid {
    fn forward(&self, input: &Tensor) -> Result<Tensor, GradFlowError> {
        input.sigmoid()
    }

    fn parameters(&self) -> Vec<&Parameter> {
        Vec::new()
    }

    fn named_parameters(&self) -> Vec<(String, &Parameter)> {
        Vec::new()
    }
}
