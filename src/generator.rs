use std::{
  fs::File,
  io::{self, BufWriter, Write},
};
use tracing::{debug, info};
use crate::{activations, Config, FixtureError, FunctionPair, Record};

/// Evaluate `pair` at every input, in order, rounding to `digits` places.
pub fn compute(pair: FunctionPair, inputs: &[f64], digits: usize) -> Vec<Record> {
  inputs.iter()
    .map(|&input| {
      let (value, derivative) = pair.evaluate(input);
      let record = Record::rounded(value, derivative, digits);
      debug!(function = %pair, input, value = record.value, derivative = record.derivative, "computed record");
      record
    })
    .collect()
}

/// One line per record, then a single blank line.
pub fn write_records<W: Write>(mut writer: W, records: &[Record]) -> io::Result<()> {
  for record in records {
    writeln!(writer, "{}", record.line())?;
  }
  writeln!(writer)?;
  writer.flush()
}

/// Compute the configured records and write them to `config.path`, replacing
/// anything already there. A failure partway leaves a truncated file behind.
pub fn generate_to(config: &Config) -> Result<Vec<Record>, FixtureError> {
  let records = compute(config.function, &config.inputs, config.digits);

  let io_error = |source: io::Error| FixtureError::Io { path: config.path.clone(), source };
  let file = File::create(&config.path).map_err(io_error)?;
  write_records(BufWriter::new(file), &records).map_err(io_error)?;

  info!(
    path     = %config.path.display(),
    function = %config.function,
    backend  = activations::BACKEND,
    records  = records.len(),
    "wrote fixtures"
  );
  Ok(records)
}

/// Write `functions_outputs.txt` in the working directory from the constants in [`crate::config`].
pub fn generate() -> Result<(), FixtureError> {
  generate_to(&Config::default()).map(|_| ())
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn empty_inputs_write_only_the_blank_line() {
    let mut buffer = Vec::new();
    write_records(&mut buffer, &compute(FunctionPair::Sigmoid, &[], 16)).unwrap();
    assert_eq!(buffer, b"\n");
  }

  #[test]
  fn records_follow_input_order() {
    let records = compute(FunctionPair::Identity, &[3.0, -7.0, 0.5], 16);
    let values: Vec<f64> = records.iter().map(|r| r.value).collect();
    assert_eq!(values, vec![3.0, -7.0, 0.5]);
    assert!(records.iter().all(|r| r.derivative == 1.0));
  }

  #[test]
  fn writes_each_line_then_a_blank_one() {
    let mut buffer = Vec::new();
    let records = compute(FunctionPair::Rectifier, &[-2.0, 0.0, 3.0], 16);
    write_records(&mut buffer, &records).unwrap();
    assert_eq!(
      String::from_utf8(buffer).unwrap(),
      "0.0 ||| 0.0\n0.0 ||| 1.0\n3.0 ||| 1.0\n\n"
    );
  }
}
