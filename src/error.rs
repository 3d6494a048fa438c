use std::{io, path::PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FixtureError {
  /// The fixture file could not be created or written. Whatever was written stays on disk.
  #[error("could not write fixture file `{}`", path.display())]
  Io {
    path:   PathBuf,
    #[source]
    source: io::Error,
  },

  /// A fixture line did not hold exactly two floats around the delimiter.
  #[error("malformed fixture line {line}: {reason}")]
  Parse {
    line:   usize,
    reason: String,
  },
}
