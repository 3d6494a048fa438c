use libm::{
  exp  as libm_exp,
  tanh as libm_tanh,
  fabs as libm_abs,
  sqrt as libm_sqrt
};

pub const fn linear(x: f64)           -> f64 { x }
pub const fn linear_dx(_: f64)        -> f64 { 1.0 }
pub       fn relu(x: f64)             -> f64 { if x < 0.0 { 0.0 } else { x } }
pub       fn relu_dx(x: f64)          -> f64 { if x < 0.0 { 0.0 } else { 1.0 } }
pub       fn sigmoid(x: f64)          -> f64 { 1.0 / (1.0 + libm_exp(-x)) }
pub       fn sigmoid_dx(x: f64)       -> f64 { let y = sigmoid(x); y * (1.0 - y) }
pub       fn tanh(x: f64)             -> f64 { libm_tanh(x) }
pub       fn tanh_dx(x: f64)          -> f64 { let y = tanh(x); 1.0 - (y * y) }
pub       fn soft_sign(x: f64)        -> f64 { x / (1.0 + libm_abs(x)) }
pub       fn soft_sign_dx(x: f64)     -> f64 { let d = 1.0 + libm_abs(x); 1.0 / (d * d) }
pub       fn bent_identity(x: f64)    -> f64 { ((libm_sqrt((x * x) + 1.0) - 1.0) / 2.0) + x }
pub       fn bent_identity_dx(x: f64) -> f64 { (x / (2.0 * libm_sqrt((x * x) + 1.0))) + 1.0 }
