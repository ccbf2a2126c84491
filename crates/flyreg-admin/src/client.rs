use std::sync::Arc;

use async_trait::async_trait;
use flyreg_idl::{LaunchPlanCreateRequest, TaskCreateRequest, WorkflowCreateRequest};

use crate::error::AdminError;

/// The control plane's entity creation calls.
///
/// Implementations make one attempt per call; errors are returned as-is.
#[async_trait]
pub trait AdminClient: Send + Sync {
  async fn create_task(&self, request: TaskCreateRequest) -> Result<(), AdminError>;

  async fn create_workflow(&self, request: WorkflowCreateRequest) -> Result<(), AdminError>;

  async fn create_launch_plan(&self, request: LaunchPlanCreateRequest) -> Result<(), AdminError>;
}

#[async_trait]
impl<T: AdminClient + ?Sized> AdminClient for Arc<T> {
  async fn create_task(&self, request: TaskCreateRequest) -> Result<(), AdminError> {
    (**self).create_task(request).await
  }

  async fn create_workflow(&self, request: WorkflowCreateRequest) -> Result<(), AdminError> {
    (**self).create_workflow(request).await
  }

  async fn create_launch_plan(&self, request: LaunchPlanCreateRequest) -> Result<(), AdminError> {
    (**self).create_launch_plan(request).await
  }
}
