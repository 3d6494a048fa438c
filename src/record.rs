use crate::{config::DELIMITER, FixtureError};

/// One fixture line: the function value and its derivative at some input.
/// Records are not tagged with their input; the consumer aligns them by position.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Record {
  pub value:      f64,
  pub derivative: f64,
}

impl Record {
  pub fn rounded(value: f64, derivative: f64, digits: usize) -> Self {
    Self { value: round_to(value, digits), derivative: round_to(derivative, digits) }
  }

  /// `<value> ||| <derivative>`, without the newline.
  pub fn line(&self) -> String {
    format!("{}{}{}", render(self.value), DELIMITER, render(self.derivative))
  }

  pub fn from_line(line: &str) -> Result<Self, String> {
    let tokens: Vec<&str> = line.split(DELIMITER).collect();
    let [value, derivative] = tokens[..] else {
      return Err(format!("expected 2 fields separated by `{DELIMITER}`, found {}", tokens.len()));
    };

    let parse = |token: &str| token.parse::<f64>().map_err(|e| format!("`{token}`: {e}"));
    Ok(Self { value: parse(value)?, derivative: parse(derivative)? })
  }
}

/// Round to `digits` decimal places.
///
/// The exact binary value is rounded in decimal and the result read back as the
/// nearest `f64`, so `round_to(0.7615941559557648881, 16) == 0.7615941559557649`.
pub fn round_to(x: f64, digits: usize) -> f64 {
  if !x.is_finite() { return x; }
  format!("{x:.digits$}").parse().unwrap_or(x)
}

/// Shortest decimal that reads back as `x`.
///
/// Integral values keep a `.0`, and exponents outside `-4..16` switch to
/// scientific notation with a signed two digit exponent (`1e-05`, `1e+16`).
pub fn render(x: f64) -> String {
  if x.is_nan()      { return "nan".to_string(); }
  if x.is_infinite() { return if x > 0.0 { "inf" } else { "-inf" }.to_string(); }

  // `{:e}` gives the shortest digits as `d.ddde<exp>`
  let scientific = format!("{x:e}");
  let Some((mantissa, exponent)) = scientific.split_once('e') else { return scientific };
  let exponent: i32 = exponent.parse().unwrap_or(0);

  if (-4..16).contains(&exponent) {
    let plain = format!("{x}");
    if plain.contains('.') { plain } else { plain + ".0" }
  } else {
    let sign = if exponent < 0 { '-' } else { '+' };
    format!("{mantissa}e{sign}{:02}", exponent.abs())
  }
}

/// Read a fixture file back. Empty lines (the trailing one included) are skipped.
pub fn parse_fixture(text: &str) -> Result<Vec<Record>, FixtureError> {
  text.lines()
    .enumerate()
    .filter(|(_, line)| !line.is_empty())
    .map(|(index, line)| {
      Record::from_line(line).map_err(|reason| FixtureError::Parse { line: index + 1, reason })
    })
    .collect()
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn render_keeps_a_decimal_point() {
    assert_eq!(render(0.0),   "0.0");
    assert_eq!(render(-0.0),  "-0.0");
    assert_eq!(render(1.0),   "1.0");
    assert_eq!(render(-3.0),  "-3.0");
    assert_eq!(render(0.25),  "0.25");
    assert_eq!(render(1e15),  "1000000000000000.0");
    assert_eq!(render(0.0001), "0.0001");
  }

  #[test]
  fn render_switches_to_scientific() {
    assert_eq!(render(1e-16),   "1e-16");
    assert_eq!(render(4.5e-5),  "4.5e-05");
    assert_eq!(render(-2.5e-7), "-2.5e-07");
    assert_eq!(render(1e16),    "1e+16");
    assert_eq!(render(1.25e20), "1.25e+20");
  }

  #[test]
  fn render_non_finite() {
    assert_eq!(render(f64::NAN),          "nan");
    assert_eq!(render(f64::INFINITY),     "inf");
    assert_eq!(render(f64::NEG_INFINITY), "-inf");
  }

  #[test]
  fn rounding_drops_digits_past_the_sixteenth() {
    assert_eq!(round_to(0.5, 16), 0.5);
    assert_eq!(round_to(1e-17, 16), 0.0);
    assert_eq!(round_to(0.123456789, 3), 0.123);
    assert_eq!(round_to(0.12345678901234567, 16), 0.1234567890123457);
    assert_eq!(render(round_to(2.0 / 3.0, 16)), "0.6666666666666666");
    assert!(round_to(f64::NAN, 16).is_nan());
    assert_eq!(round_to(f64::INFINITY, 16), f64::INFINITY);
  }

  #[test]
  fn line_format() {
    let record = Record { value: 0.0, derivative: 1.0 };
    assert_eq!(record.line(), "0.0 ||| 1.0");
    assert_eq!(Record::from_line("0.0 ||| 1.0"), Ok(record));
  }

  #[test]
  fn malformed_lines_are_rejected() {
    assert!(Record::from_line("0.5").is_err());
    assert!(Record::from_line("0.5 ||| 1.0 ||| 2.0").is_err());
    assert!(Record::from_line("0.5 ||| one").is_err());
    assert!(Record::from_line("0.5|||1.0").is_err());

    match parse_fixture("0.0 ||| 1.0\n\n0.5 ||| x\n") {
      Err(FixtureError::Parse { line, .. }) => assert_eq!(line, 3),
      other => panic!("expected a parse error, got {other:?}"),
    }
  }

  #[test]
  fn parse_skips_blank_lines() {
    let records = parse_fixture("0.0 ||| 1.0\n1e-05 ||| -inf\n\n").unwrap();
    assert_eq!(records, vec![
      Record { value: 0.0,  derivative: 1.0 },
      Record { value: 1e-5, derivative: f64::NEG_INFINITY },
    ]);
    assert!(parse_fixture("\n").unwrap().is_empty());
  }
}
