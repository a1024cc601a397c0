use rand::Rng;

use crate::error::GradFlowError;
use crate::nn::init::{fan_in_bound, uniform_with_rng_};
use crate::nn::module::Module;
use crate::nn::parameter::Parameter;
use crate::tensor::{zeros, Tensor};

/// Applies a linear transformation to the incoming data: `y = x · Wᵗ + b`.
///
/// `x` is `[batch, in_features]`, the weight is `[out_features, in_features]`
/// and the optional bias `[out_features]`.
#[derive(Debug)]
pub struct Linear {
    weight: Parameter,
    bias: Option<Parameter>,
    in_features: usize,
    out_features: usize,
}

impl Linear {
    /// Creates a layer initialized from `U(-1/sqrt(in), 1/sqrt(in))`.
    pub fn new(in_features: usize, out_features: usize, has_bias: bool) -> Result<Self, GradFlowError> {
        Self::new_with_rng(in_features, out_features, has_bias, &mut rand::thread_rng())
    }

    /// Same as [`Linear::new`], drawing the initial values from `rng`.
    pub fn new_with_rng<R: Rng + ?Sized>(
        in_features: usize,
        out_features: usize,
        has_bias: bool,
        rng: &mut R,
    ) -> Result<Self, GradFlowError> {
        let bound = fan_in_bound(in_features);
        let weight = zeros(&[out_features, in_features])?;
        let bias = if has_bias {
            Some(zeros(&[out_features])?)
        } else {
            None
        };
        if bound > 0.0 {
            uniform_with_rng_(&weight, -bound, bound, rng)?;
            if let Some(bias) = &bias {
                uniform_with_rng_(bias, -bound, bound, rng)?;
            }
        }
        Self::from_tensors(weight, bias)
    }

    /// Builds a layer from explicit values, e.g. restored from a checkpoint.
    ///
    /// # Errors
    /// `RankMismatch` if the weight is not 2-D, `ShapeMismatch` if the bias
    /// is not `[out_features]`.
    pub fn from_tensors(weight: Tensor, bias: Option<Tensor>) -> Result<Self, GradFlowError> {
        let shape = weight.shape();
        let (out_features, in_features) = match shape.as_slice() {
            [out, inp] => (*out, *inp),
            _ => {
                return Err(GradFlowError::RankMismatch {
                    expected: 2,
                    actual: shape.len(),
                    operation: "Linear weight".to_string(),
                })
            }
        };
        if let Some(bias) = &bias {
            if bias.shape() != [out_features] {
                return Err(GradFlowError::ShapeMismatch {
                    expected: vec![out_features],
                    actual: bias.shape(),
                    operation: "Linear bias".to_string(),
                });
            }
        }
        Ok(Linear {
            weight: Parameter::new(weight, Some("weight".to_string())),
            bias: bias.map(|b| Parameter::new(b, Some("bias".to_string()))),
            in_features,
            out_features,
        })
    }

    pub fn weight(&self) -> &Parameter {
        &self.weight
    }

    pub fn bias(&self) -> Option<&Parameter> {
        self.bias.as_ref()
    }

    pub fn in_features(&self) -> usize {
        self.in_features
    }

    pub fn out_features(&self) -> usize {
        self.out_features
    }
}

impl Module for Linear {
    fn forward(&self, input: &Tensor) -> Result<Tensor, GradFlowError> {
        let shape = input.shape();
        if shape.len() != 2 || shape[1] != self.in_features {
            return Err(GradFlowError::ShapeMismatch {
                expected: vec![shape.first().copied().unwrap_or(0), self.in_features],
                actual: shape,
                operation: "Linear forward".to_string(),
            });
        }
        let output = input.matmul(&self.weight.transpose()?)?;
        match &self.bias {
            Some(bias) => output.add(bias),
            None => Ok(output),
        }
    }

    fn parameters(&self) -> Vec<&Parameter> {
        let mut params = vec![&self.weight];
        if let Some(bias) = &self.bias {
            params.push(bias);
        }
        params
    }

    fn named_parameters(&self) -> Vec<(String, &Parameter)> {
        let mut params = vec![("weight".to_string(), &self.weight)];
        if let Some(bias) = &self.bias {
            params.push(("bias".to_string(), bias));
        }
        params
    }
}

#[cfg(test)]
#[path = "linear_test.rs"]
mod tests;
