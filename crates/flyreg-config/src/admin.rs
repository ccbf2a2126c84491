use serde::{Deserialize, Serialize};

/// Connection settings for the admin service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdminConfig {
  /// gRPC endpoint, e.g. "http://localhost:30081"
  pub endpoint: String,
  pub connect_timeout_ms: u64,
  /// Deadline applied to each create call.
  pub request_timeout_ms: u64,
}

impl Default for AdminConfig {
  fn default() -> Self {
    Self {
      endpoint: "http://localhost:30081".to_string(),
      connect_timeout_ms: 10_000,
      request_timeout_ms: 30_000,
    }
  }
}
