use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::admin::AdminConfig;
use crate::error::ConfigError;

/// Contents of the flyreg config file.
///
/// ```json
/// {
///   "admin": { "endpoint": "http://localhost:30081" },
///   "project": "flytesnacks",
///   "domain": "development"
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
  #[serde(default)]
  pub admin: AdminConfig,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub project: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub domain: Option<String>,
}

/// `~/.flyreg/config.json`, if a home directory can be determined.
pub fn default_config_path() -> Option<PathBuf> {
  dirs::home_dir().map(|home| home.join(".flyreg").join("config.json"))
}

impl Config {
  /// Load a config file. The file must exist.
  pub fn load(path: &Path) -> Result<Self, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
      path: path.to_path_buf(),
      source,
    })?;
    serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
      path: path.to_path_buf(),
      source,
    })
  }

  /// Load the explicit path if given, otherwise the default path when it exists.
  pub fn load_or_default(path: Option<&Path>) -> Result<Self, ConfigError> {
    match path {
      Some(path) => Self::load(path),
      None => match default_config_path() {
        Some(path) if path.exists() => Self::load(&path),
        _ => Ok(Self::default()),
      },
    }
  }
}
