pub const fn linear(x: f64)           -> f64 { x }
pub const fn linear_dx(_: f64)        -> f64 { 1.0 }
pub       fn relu(x: f64)             -> f64 { if x < 0.0 { 0.0 } else { x } }
pub       fn relu_dx(x: f64)          -> f64 { if x < 0.0 { 0.0 } else { 1.0 } }
pub       fn sigmoid(x: f64)          -> f64 { 1.0 / (1.0 + (-x).exp()) }
pub       fn sigmoid_dx(x: f64)       -> f64 { let y = sigmoid(x); y * (1.0 - y) }
pub       fn tanh(x: f64)             -> f64 { x.tanh() }
pub       fn tanh_dx(x: f64)          -> f64 { 1.0 - tanh(x).powi(2) }
pub       fn soft_sign(x: f64)        -> f64 { x / (1.0 + x.abs()) }
pub       fn soft_sign_dx(x: f64)     -> f64 { 1.0 / (1.0 + x.abs()).powi(2) }
pub       fn bent_identity(x: f64)    -> f64 { (((x.powi(2) + 1.0).sqrt() - 1.0) / 2.0) + x }
pub       fn bent_identity_dx(x: f64) -> f64 { (x / (2.0 * (x.powi(2) + 1.0).sqrt())) + 1.0 }
