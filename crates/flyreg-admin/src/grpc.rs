use std::time::Duration;

use async_trait::async_trait;
use flyreg_config::AdminConfig;
use flyreg_idl::{
  Identifier, LaunchPlanCreateRequest, LaunchPlanCreateResponse, TaskCreateRequest,
  TaskCreateResponse, WorkflowCreateRequest, WorkflowCreateResponse,
};
use tonic::GrpcMethod;
use tonic::client::Grpc;
use tonic::codec::ProstCodec;
use tonic::codegen::http::uri::PathAndQuery;
use tonic::transport::{Channel, Endpoint};
use tracing::{debug, info};

use crate::client::AdminClient;
use crate::error::AdminError;

const SERVICE: &str = "flyteidl.service.AdminService";

/// [`AdminClient`] over a plaintext gRPC channel.
#[derive(Debug, Clone)]
pub struct GrpcAdminClient {
  inner: Grpc<Channel>,
}

impl GrpcAdminClient {
  /// Connect to the endpoint in `config`, applying its connect and request timeouts.
  pub async fn connect(config: &AdminConfig) -> Result<Self, AdminError> {
    let channel = Endpoint::from_shared(config.endpoint.clone())?
      .connect_timeout(Duration::from_millis(config.connect_timeout_ms))
      .timeout(Duration::from_millis(config.request_timeout_ms))
      .connect()
      .await?;

    info!(endpoint = %config.endpoint, "connected to admin service");
    Ok(Self::new(channel))
  }

  pub fn new(channel: Channel) -> Self {
    Self {
      inner: Grpc::new(channel),
    }
  }

  async fn unary<Req, Resp>(
    &self,
    method: &'static str,
    path: &'static str,
    request: Req,
  ) -> Result<Resp, AdminError>
  where
    Req: prost::Message + Send + Sync + 'static,
    Resp: prost::Message + Default + Send + Sync + 'static,
  {
    let mut inner = self.inner.clone();
    inner.ready().await.map_err(|e| AdminError::Unavailable {
      message: e.to_string(),
    })?;

    let codec: ProstCodec<Req, Resp> = ProstCodec::default();
    let mut request = tonic::Request::new(request);
    request
      .extensions_mut()
      .insert(GrpcMethod::new(SERVICE, method));

    let response = inner
      .unary(request, PathAndQuery::from_static(path), codec)
      .await?;
    Ok(response.into_inner())
  }
}

fn describe(id: Option<&Identifier>) -> String {
  id.map(ToString::to_string).unwrap_or_default()
}

#[async_trait]
impl AdminClient for GrpcAdminClient {
  async fn create_task(&self, request: TaskCreateRequest) -> Result<(), AdminError> {
    debug!(id = %describe(request.id.as_ref()), "creating task");
    self
      .unary::<_, TaskCreateResponse>(
        "CreateTask",
        "/flyteidl.service.AdminService/CreateTask",
        request,
      )
      .await?;
    Ok(())
  }

  async fn create_workflow(&self, request: WorkflowCreateRequest) -> Result<(), AdminError> {
    debug!(id = %describe(request.id.as_ref()), "creating workflow");
    self
      .unary::<_, WorkflowCreateResponse>(
        "CreateWorkflow",
        "/flyteidl.service.AdminService/CreateWorkflow",
        request,
      )
      .await?;
    Ok(())
  }

  async fn create_launch_plan(&self, request: LaunchPlanCreateRequest) -> Result<(), AdminError> {
    debug!(id = %describe(request.id.as_ref()), "creating launch plan");
    self
      .unary::<_, LaunchPlanCreateResponse>(
        "CreateLaunchPlan",
        "/flyteidl.service.AdminService/CreateLaunchPlan",
        request,
      )
      .await?;
    Ok(())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[tokio::test]
  async fn test_connect_rejects_invalid_endpoint() {
    let config = AdminConfig {
      endpoint: "not a uri".to_string(),
      ..Default::default()
    };
    let result = GrpcAdminClient::connect(&config).await;
    assert!(matches!(result, Err(AdminError::Transport(_))));
  }
}
