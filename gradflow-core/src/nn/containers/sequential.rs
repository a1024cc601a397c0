use crate::error::GradFlowError;
use crate::nn::module::Module;
use crate::nn::parameter::Parameter;
use crate::tensor::Tensor;

/// Chains modules: the output of each one is the input of the next.
///
/// Children are named by their position (`"0"`, `"1"`, ...) unless added
/// with [`Sequential::add_module`].
#[derive(Debug, Default)]
pub struct Sequential {
    modules: Vec<(String, Box<dyn Module>)>,
}

impl Sequential {
    pub fn new() -> Self {
        Sequential { modules: Vec::new() }
    }

    /// Appends `module`, named after its position. Builder style.
    pub fn push<M: Module + 'static>(mut self, module: M) -> Self {
        let name = self.modules.len().to_string();
        self.modules.push((name, Box::new(module)));
        self
    }

    /// Appends `module` under an explicit name.
    pub fn add_module(&mut self, name: &str, module: Box<dyn Module>) {
        self.modules.push((name.to_string(), module));
    }

    pub fn len(&self) -> usize {
        self.modules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }
}

impl Module for Sequential {
    fn forward(&self, input: &Tensor) -> Result<Tensor, GradFlowError> {
        let mut current = input.clone();
        for (_name, module) in &self.modules {
            current = module.forward(&current)?;
        }
        Ok(current)
    }

    fn parameters(&self) -> Vec<&Parameter> {
        self.modules
            .iter()
            .flat_map(|(_, module)| module.parameters())
            .collect()
    }

    fn named_parameters(&self) -> Vec<(String, &Parameter)> {
        let mut params = Vec::new();
        for (prefix, module) in &self.modules {
            for (name, param) in module.named_parameters() {
                params.push((format!("{}.{}", prefix, name), param));
            }
        }
        params
    }

    fn children(&self) -> Vec<&dyn Module> {
        self.modules.iter().map(|(_, module)| module.as_ref()).collect()
    }

    fn named_children(&self) -> Vec<(String, &dyn Module)> {
        self.modules
            .iter()
            .map(|(name, module)| (name.clone(), module.as_ref()))
            .collect()
    }
}

#[cfg(test)]
#[path = "sequential_test.rs"]
mod tests;
