//! Create requests for the admin service.

use prost::Message;

use crate::identifier::Identifier;
use crate::launch_plan::LaunchPlanSpec;
use crate::preserved::Preserved;
use crate::task::TaskSpec;
use crate::workflow::WorkflowSpec;

#[derive(Clone, PartialEq, Message)]
pub struct TaskCreateRequest {
  #[prost(message, optional, tag = "1")]
  pub id: Option<Identifier>,
  #[prost(message, optional, tag = "2")]
  pub spec: Option<Preserved<TaskSpec>>,
}

#[derive(Clone, PartialEq, Message)]
pub struct TaskCreateResponse {}

#[derive(Clone, PartialEq, Message)]
pub struct WorkflowCreateRequest {
  #[prost(message, optional, tag = "1")]
  pub id: Option<Identifier>,
  #[prost(message, optional, tag = "2")]
  pub spec: Option<Preserved<WorkflowSpec>>,
}

#[derive(Clone, PartialEq, Message)]
pub struct WorkflowCreateResponse {}

#[derive(Clone, PartialEq, Message)]
pub struct LaunchPlanCreateRequest {
  #[prost(message, optional, tag = "1")]
  pub id: Option<Identifier>,
  #[prost(message, optional, tag = "2")]
  pub spec: Option<Preserved<LaunchPlanSpec>>,
}

#[derive(Clone, PartialEq, Message)]
pub struct LaunchPlanCreateResponse {}
