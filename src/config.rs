//! Everything a run depends on. Edit the constants below and rerun the binary;
//! there are intentionally no flags or environment variables that change the output.

use std::path::PathBuf;
use crate::FunctionPair;

/// The active function pair.
pub const FUNCTION:    FunctionPair = FunctionPair::Tanh;

/// Inputs before scaling, in output order.
pub const BASE_INPUTS: [f64; 5]     = [-2.0, -1.0, 0.0, 1.0, 2.0];
pub const INPUT_SCALE: f64          = 0.5;

/// Decimal places kept in each value.
pub const DIGITS:      usize        = 16;
pub const DELIMITER:   &str         = " ||| ";
pub const OUTPUT_PATH: &str         = "functions_outputs.txt";

#[derive(Clone, Debug, PartialEq)]
pub struct Config {
  pub function: FunctionPair,
  pub inputs:   Vec<f64>,
  pub digits:   usize,
  pub path:     PathBuf,
}

impl Config {
  /// Custom pair and inputs, everything else from the constants.
  pub fn new(function: FunctionPair, inputs: Vec<f64>) -> Self {
    Self { function, inputs, digits: DIGITS, path: PathBuf::from(OUTPUT_PATH) }
  }

  pub fn with_path(mut self, path: impl Into<PathBuf>) -> Self {
    self.path = path.into();
    self
  }
}

impl Default for Config {
  fn default() -> Self {
    Self::new(FUNCTION, BASE_INPUTS.iter().map(|v| INPUT_SCALE * v).collect())
  }
}
