use std::process::ExitCode;
use anyhow::Context;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn main() -> ExitCode {
  // diagnostics only; the output file does not depend on the filter
  let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

  tracing_subscriber::registry()
    .with(fmt::layer().with_writer(std::io::stderr))
    .with(filter)
    .init();

  match run() {
    Ok(()) => ExitCode::SUCCESS,
    Err(e) => {
      eprintln!("error: {e:#}");
      ExitCode::FAILURE
    }
  }
}

fn run() -> anyhow::Result<()> {
  activation_fixtures::generate().context("failed to generate activation fixtures")
}
