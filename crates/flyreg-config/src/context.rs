use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Version used when none is given on the command line.
pub const DEFAULT_VERSION: &str = "v1";

/// Ambient values every identifier is hydrated from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistrationContext {
  pub project: String,
  pub domain: String,
  /// Version stamped on every registered entity in this run.
  #[serde(default = "default_version")]
  pub version: String,
  /// Record failures and keep going instead of aborting the batch.
  #[serde(default)]
  pub skip_on_error: bool,
}

fn default_version() -> String {
  DEFAULT_VERSION.to_string()
}

impl RegistrationContext {
  pub fn new(project: impl Into<String>, domain: impl Into<String>) -> Self {
    Self {
      project: project.into(),
      domain: domain.into(),
      version: default_version(),
      skip_on_error: false,
    }
  }

  pub fn with_version(mut self, version: impl Into<String>) -> Self {
    self.version = version.into();
    self
  }

  pub fn with_skip_on_error(mut self, skip_on_error: bool) -> Self {
    self.skip_on_error = skip_on_error;
    self
  }

  /// Project and domain are mandatory; an empty version falls back to the default.
  pub fn validate(mut self) -> Result<Self, ConfigError> {
    if self.project.trim().is_empty() {
      return Err(ConfigError::MissingProject);
    }
    if self.domain.trim().is_empty() {
      return Err(ConfigError::MissingDomain);
    }
    if self.version.trim().is_empty() {
      self.version = default_version();
    }
    Ok(self)
  }
}
