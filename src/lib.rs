//! Reference values and analytic derivatives of activation functions, written to a
//! plain text file that other test suites load as expected data.
//!
//! ```no_run
//! // writes `functions_outputs.txt` from the constants in `config`
//! activation_fixtures::generate().unwrap();
//! ```
//!
//! Each line of the file is `<value> ||| <derivative>`, one per input, followed by
//! one blank line. Use [`parse_fixture`] to read it back.

pub mod activations;
pub mod config;
mod error;
mod generator;
mod pair;
mod record;

pub use config::Config;
pub use error::FixtureError;
pub use generator::{compute, generate, generate_to, write_records};
pub use pair::FunctionPair;
pub use record::{parse_fixture, render, round_to, Record};
