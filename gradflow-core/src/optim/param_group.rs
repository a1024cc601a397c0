use crate::nn::parameter::Parameter;

/// A group of parameters sharing optimizer hyperparameters.
#[derive(Clone, Debug)]
pub struct ParamGroup {
    pub params: Vec<Parameter>,
    pub lr: f32,
    /// L2 penalty added to the gradient as `weight_decay * value`.
    pub weight_decay: f32,
}

impl ParamGroup {
    pub fn new(params: Vec<Parameter>, lr: f32, weight_decay: f32) -> Self {
        ParamGroup {
            params,
            lr,
            weight_decay,
        }
    }

    pub fn set_lr(&mut self, lr: f32) {
        self.lr = lr;
    }
}
