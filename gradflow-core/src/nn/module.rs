use crate::error::GradFlowError;
use crate::nn::Parameter;
use crate::tensor::Tensor;

/// The base trait for all neural network modules (layers, containers, etc.).
pub trait Module: std::fmt::Debug + Send + Sync {
    /// Performs a forward pass of the module.
    fn forward(&self, input: &Tensor) -> Result<Tensor, GradFlowError>;

    /// All learnable parameters of the module, including those of sub-modules.
    fn parameters(&self) -> Vec<&Parameter>;

    /// Parameters with hierarchical names (e.g. `"0.weight"`, `"2.bias"`).
    fn named_parameters(&self) -> Vec<(String, &Parameter)>;

    /// Direct child modules. Leaf layers have none.
    fn children(&self) -> Vec<&dyn Module> {
        Vec::new()
    }

    /// Direct child modules with the names they are stored under.
    fn named_children(&self) -> Vec<(String, &dyn Module)> {
        Vec::new()
    }

    /// Clears the gradient accumulator of every parameter.
    fn zero_grad(&self) {
        for param in self.parameters() {
            param.zero_grad();
        }
    }
}

#[cfg(test)]
#[path = "module_test.rs"]
mod tests;
