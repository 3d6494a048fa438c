use core::fmt;
use crate::activations;

/// A named function together with its closed-form derivative.
///
/// Exactly one pair is active per run, chosen in `config::FUNCTION`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FunctionPair {
  Identity,
  Rectifier,
  Sigmoid,
  Tanh,
  SoftSign,
  BentIdentity,
}

impl FunctionPair {
  pub const ALL: [FunctionPair; 6] = [
    FunctionPair::Identity,
    FunctionPair::Rectifier,
    FunctionPair::Sigmoid,
    FunctionPair::Tanh,
    FunctionPair::SoftSign,
    FunctionPair::BentIdentity,
  ];

  pub fn name(&self) -> &'static str {
    match self {
      FunctionPair::Identity     => "identity",
      FunctionPair::Rectifier    => "relu",
      FunctionPair::Sigmoid      => "sigmoid",
      FunctionPair::Tanh         => "tanh",
      FunctionPair::SoftSign     => "soft_sign",
      FunctionPair::BentIdentity => "bent_identity",
    }
  }

  /// The function itself.
  pub fn function(&self) -> fn(f64) -> f64 {
    match self {
      FunctionPair::Identity     => activations::linear,
      FunctionPair::Rectifier    => activations::relu,
      FunctionPair::Sigmoid      => activations::sigmoid,
      FunctionPair::Tanh         => activations::tanh,
      FunctionPair::SoftSign     => activations::soft_sign,
      FunctionPair::BentIdentity => activations::bent_identity,
    }
  }

  /// Its analytic derivative.
  pub fn derivative(&self) -> fn(f64) -> f64 {
    match self {
      FunctionPair::Identity     => activations::linear_dx,
      FunctionPair::Rectifier    => activations::relu_dx,
      FunctionPair::Sigmoid      => activations::sigmoid_dx,
      FunctionPair::Tanh         => activations::tanh_dx,
      FunctionPair::SoftSign     => activations::soft_sign_dx,
      FunctionPair::BentIdentity => activations::bent_identity_dx,
    }
  }

  /// `(f(x), f'(x))`, unrounded.
  pub fn evaluate(&self, x: f64) -> (f64, f64) {
    ((self.function())(x), (self.derivative())(x))
  }

  /// Differentiable on the whole real line (relu has a kink at 0).
  pub fn is_differentiable(&self) -> bool {
    !matches!(self, FunctionPair::Rectifier)
  }
}

impl fmt::Display for FunctionPair {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.name())
  }
}
