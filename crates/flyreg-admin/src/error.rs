use thiserror::Error;
use tonic::{Code, Status};

/// Errors returned by the admin service or the transport beneath it.
#[derive(Debug, Error)]
pub enum AdminError {
  /// An entity with the same identifier is already registered.
  #[error("entity already exists: {message}")]
  AlreadyExists { message: String },

  /// Any other error status returned by the service.
  #[error("admin request failed: {0}")]
  Status(Status),

  /// The service could not be reached.
  #[error("admin transport error: {0}")]
  Transport(#[from] tonic::transport::Error),

  /// The connection was not ready to accept a request.
  #[error("admin service not ready: {message}")]
  Unavailable { message: String },
}

impl From<Status> for AdminError {
  fn from(status: Status) -> Self {
    match status.code() {
      Code::AlreadyExists => AdminError::AlreadyExists {
        message: status.message().to_string(),
      },
      _ => AdminError::Status(status),
    }
  }
}

impl AdminError {
  /// True for the version-conflict case.
  pub fn is_already_exists(&self) -> bool {
    matches!(self, AdminError::AlreadyExists { .. })
  }
}
