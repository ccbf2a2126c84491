use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileStatus {
  Success,
  Failed,
}

impl fmt::Display for FileStatus {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      FileStatus::Success => f.write_str("success"),
      FileStatus::Failed => f.write_str("failed"),
    }
  }
}

/// Outcome of registering one file, for presentation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileResult {
  /// Path of the file as given.
  pub name: String,
  pub status: FileStatus,
  /// Error detail for failures, empty otherwise.
  pub info: String,
}

impl FileResult {
  pub fn success(path: &Path) -> Self {
    Self {
      name: path.display().to_string(),
      status: FileStatus::Success,
      info: String::new(),
    }
  }

  pub fn failed(path: &Path, error: &impl fmt::Display) -> Self {
    Self {
      name: path.display().to_string(),
      status: FileStatus::Failed,
      info: error.to_string(),
    }
  }
}
