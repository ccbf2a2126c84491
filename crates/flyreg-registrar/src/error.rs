use std::path::PathBuf;

use flyreg_admin::AdminError;
use flyreg_hydrate::{ClassifyError, StructuralError};

/// Errors that end processing of a file.
#[derive(Debug, thiserror::Error)]
pub enum RegisterError {
  #[error("failed to read {path}: {source}")]
  Read {
    path: PathBuf,
    #[source]
    source: std::io::Error,
  },

  #[error(transparent)]
  Classify(#[from] ClassifyError),

  #[error("invalid entity: {0}")]
  Structure(#[from] StructuralError),

  #[error(transparent)]
  Remote(#[from] AdminError),

  /// Cancelled between files.
  #[error("registration cancelled")]
  Cancelled,
}
