use std::path::{Path, PathBuf};

use flyreg_admin::AdminClient;
use flyreg_config::RegistrationContext;
use flyreg_hydrate::{classify, walk_entity};
use flyreg_idl::Identifier;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info, warn};

use crate::error::RegisterError;
use crate::registrar::Registrar;
use crate::result::FileResult;

/// Files whose name contains this are companion metadata, not entities.
pub const IDENTIFIER_FILE_MARKER: &str = "identifier";

/// Whether `path` names a companion identifier file. Only the file name is
/// checked, not the directories above it, so an output directory that happens
/// to be called `identifiers/` does not hide every entity inside it.
pub fn is_identifier_file(path: &Path) -> bool {
  path
    .file_name()
    .and_then(|name| name.to_str())
    .is_some_and(|name| name.contains(IDENTIFIER_FILE_MARKER))
}

/// Registers a batch of serialized entity files.
///
/// # Usage
///
/// ```ignore
/// let batch = BatchRegistrar::new(client, ctx);
/// let results = batch.run(files, CancellationToken::new()).await?;
/// ```
pub struct BatchRegistrar<C: AdminClient> {
  registrar: Registrar<C>,
  ctx: RegistrationContext,
}

impl<C: AdminClient> BatchRegistrar<C> {
  pub fn new(client: C, ctx: RegistrationContext) -> Self {
    Self {
      registrar: Registrar::new(client),
      ctx,
    }
  }

  /// Process `files` in lexical order, one at a time.
  ///
  /// With `skip_on_error` off, the first failure aborts the batch and is
  /// returned; later files are never read. With it on, failures become
  /// `failed` results and every file is attempted. Cancellation is checked
  /// before each file and always aborts.
  pub async fn run(
    &self,
    mut files: Vec<PathBuf>,
    cancel: CancellationToken,
  ) -> Result<Vec<FileResult>, RegisterError> {
    files.sort_by(|a, b| a.as_os_str().cmp(b.as_os_str()));
    info!(
      total = files.len(),
      version = %self.ctx.version,
      skip_on_error = self.ctx.skip_on_error,
      "parsing files"
    );

    let mut results = Vec::with_capacity(files.len());
    for path in files {
      if cancel.is_cancelled() {
        warn!(processed = results.len(), "registration cancelled");
        return Err(RegisterError::Cancelled);
      }

      if is_identifier_file(&path) {
        debug!(file = %path.display(), "skipping identifier file");
        continue;
      }

      match self.register_file(&path).await {
        Ok(id) => {
          info!(file = %path.display(), %id, "registered successfully");
          results.push(FileResult::success(&path));
        }
        Err(e) if self.ctx.skip_on_error => {
          if is_version_conflict(&e) {
            warn!(
              file = %path.display(),
              version = %self.ctx.version,
              "version already registered, skipping"
            );
          } else {
            warn!(file = %path.display(), error = %e, "error registering file, skipping");
          }
          results.push(FileResult::failed(&path, &e));
        }
        Err(e) => {
          if is_version_conflict(&e) {
            error!(
              file = %path.display(),
              version = %self.ctx.version,
              "version already registered, aborting; pick a new version or pass --skip-on-error"
            );
          } else {
            error!(file = %path.display(), error = %e, "error registering file, aborting");
          }
          return Err(e);
        }
      }
    }

    Ok(results)
  }

  /// Read, classify, hydrate and register a single file.
  pub async fn register_file(&self, path: &Path) -> Result<Identifier, RegisterError> {
    info!(file = %path.display(), "parsing");
    let bytes = tokio::fs::read(path)
      .await
      .map_err(|source| RegisterError::Read {
        path: path.to_path_buf(),
        source,
      })?;

    let mut entity = classify(&bytes, &path.display().to_string())?;
    debug!(file = %path.display(), entity = entity.kind(), "classified");

    walk_entity(&mut entity, &self.ctx)?;
    self.registrar.register(entity, &self.ctx).await
  }
}

fn is_version_conflict(error: &RegisterError) -> bool {
  matches!(error, RegisterError::Remote(remote) if remote.is_already_exists())
}

#[cfg(test)]
mod tests {
  use super::*;
  use flyreg_admin::AdminError;

  #[test]
  fn test_identifier_file_detection() {
    assert!(is_identifier_file(Path::new("out/01_wf.identifier.pb")));
    assert!(is_identifier_file(Path::new("identifier")));
    assert!(!is_identifier_file(Path::new("out/01_wf.pb")));
  }

  #[test]
  fn test_version_conflict_detection() {
    let conflict = RegisterError::Remote(AdminError::AlreadyExists {
      message: "t1@v1".to_string(),
    });
    assert!(is_version_conflict(&conflict));
    assert!(!is_version_conflict(&RegisterError::Cancelled));
  }

  #[test]
  fn test_identifier_directory_is_not_a_marker() {
    assert!(!is_identifier_file(Path::new("identifiers/01_task.pb")));
  }
}
