use std::io;
use std::path::PathBuf;

/// Errors raised while loading the catalog.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
  /// The product file could not be read.
  #[error("can't read data from file {}", path.display())]
  Io {
    path: PathBuf,
    #[source]
    source: io::Error,
  },

  /// A line did not describe a valid product.
  #[error("invalid product line '{line}': {reason}")]
  Parse { line: String, reason: String },

  /// The services could not be wired together.
  #[error(transparent)]
  Injection(#[from] injector::Error),
}

impl CatalogError {
  pub(crate) fn parse(line: &str, reason: impl Into<String>) -> Self {
    CatalogError::Parse {
      line: line.to_string(),
      reason: reason.into(),
    }
  }
}
