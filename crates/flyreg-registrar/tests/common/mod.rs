//! Shared fixtures for registrar tests.
#![allow(dead_code)]

use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use async_trait::async_trait;
use flyreg_admin::{AdminClient, AdminError};
use flyreg_config::RegistrationContext;
use flyreg_idl::{
  Identifier, LaunchPlan, LaunchPlanCreateRequest, LaunchPlanSpec, Node, Preserved, ResourceType,
  TaskCreateRequest, TaskSpec, TaskTemplate, WorkflowCreateRequest, WorkflowSpec,
  WorkflowTemplate,
};
use prost::Message;

/// A create call as the admin service received it.
#[derive(Debug, Clone, PartialEq)]
pub enum Recorded {
  Task(TaskCreateRequest),
  Workflow(WorkflowCreateRequest),
  LaunchPlan(LaunchPlanCreateRequest),
}

impl Recorded {
  pub fn id(&self) -> &Identifier {
    let id = match self {
      Recorded::Task(r) => r.id.as_ref(),
      Recorded::Workflow(r) => r.id.as_ref(),
      Recorded::LaunchPlan(r) => r.id.as_ref(),
    };
    id.expect("request without id")
  }
}

/// Mock admin service recording every request.
///
/// Names added with [`MockAdminClient::conflict_on`] are rejected as already
/// registered.
#[derive(Default)]
pub struct MockAdminClient {
  requests: Mutex<Vec<Recorded>>,
  conflicts: Mutex<HashSet<String>>,
}

impl MockAdminClient {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn conflict_on(&self, name: &str) {
    self.conflicts.lock().unwrap().insert(name.to_string());
  }

  pub fn requests(&self) -> Vec<Recorded> {
    self.requests.lock().unwrap().clone()
  }

  fn record(&self, request: Recorded) -> Result<(), AdminError> {
    let name = request.id().name.clone();
    if self.conflicts.lock().unwrap().contains(&name) {
      return Err(AdminError::AlreadyExists {
        message: format!("{} already registered", name),
      });
    }
    self.requests.lock().unwrap().push(request);
    Ok(())
  }
}

#[async_trait]
impl AdminClient for MockAdminClient {
  async fn create_task(&self, request: TaskCreateRequest) -> Result<(), AdminError> {
    self.record(Recorded::Task(request))
  }

  async fn create_workflow(&self, request: WorkflowCreateRequest) -> Result<(), AdminError> {
    self.record(Recorded::Workflow(request))
  }

  async fn create_launch_plan(&self, request: LaunchPlanCreateRequest) -> Result<(), AdminError> {
    self.record(Recorded::LaunchPlan(request))
  }
}

pub fn ctx() -> RegistrationContext {
  RegistrationContext::new("flytesnacks", "development").with_version("v1")
}

pub fn hydrated(resource_type: ResourceType, name: &str) -> Identifier {
  Identifier::new(resource_type, "flytesnacks", "development", name, "v1")
}

pub fn make_task(name: &str) -> Preserved<TaskSpec> {
  TaskSpec {
    template: Some(
      TaskTemplate {
        id: Some(Identifier::named(ResourceType::Task, name)),
      }
      .into(),
    ),
  }
  .into()
}

pub fn make_workflow(
  name: &str,
  nodes: Vec<Preserved<Node>>,
  sub_workflows: Vec<Preserved<WorkflowTemplate>>,
) -> Preserved<WorkflowSpec> {
  WorkflowSpec {
    template: Some(make_template(name, nodes)),
    sub_workflows,
  }
  .into()
}

pub fn make_template(name: &str, nodes: Vec<Preserved<Node>>) -> Preserved<WorkflowTemplate> {
  WorkflowTemplate {
    id: Some(Identifier::named(ResourceType::Workflow, name)),
    nodes,
    failure_node: None,
  }
  .into()
}

pub fn make_launch_plan(name: &str, workflow: &str) -> Preserved<LaunchPlan> {
  LaunchPlan {
    id: Some(Identifier::named(ResourceType::LaunchPlan, name)),
    spec: Some(
      LaunchPlanSpec {
        workflow_id: Some(Identifier::named(ResourceType::Workflow, workflow)),
      }
      .into(),
    ),
  }
  .into()
}

/// Encode `message` into `dir/file_name` and return the path.
pub fn write_entity(dir: &Path, file_name: &str, message: &impl Message) -> PathBuf {
  let path = dir.join(file_name);
  std::fs::write(&path, message.encode_to_vec()).expect("failed to write entity file");
  path
}

pub fn write_garbage(dir: &Path, file_name: &str) -> PathBuf {
  let path = dir.join(file_name);
  std::fs::write(&path, [0xff, 0xff, 0xff, 0x01]).expect("failed to write file");
  path
}

// Entities as the SDK serializer writes them, with the fields flyreg never
// reads. `bytes` stands in for nested messages; the wire shape is the same.

#[derive(Clone, PartialEq, Message)]
pub struct SerializedTaskSpec {
  #[prost(message, optional, tag = "1")]
  pub template: Option<SerializedTaskTemplate>,
  #[prost(bytes = "vec", tag = "2")]
  pub description: Vec<u8>,
}

#[derive(Clone, PartialEq, Message)]
pub struct SerializedTaskTemplate {
  #[prost(message, optional, tag = "1")]
  pub id: Option<Identifier>,
  #[prost(string, tag = "2")]
  pub r#type: String,
  #[prost(bytes = "vec", tag = "3")]
  pub metadata: Vec<u8>,
  #[prost(bytes = "vec", tag = "4")]
  pub interface: Vec<u8>,
  #[prost(bytes = "vec", tag = "5")]
  pub custom: Vec<u8>,
  #[prost(int32, tag = "7")]
  pub task_type_version: i32,
  #[prost(map = "string, string", tag = "16")]
  pub config: HashMap<String, String>,
}

#[derive(Clone, PartialEq, Message)]
pub struct SerializedWorkflowSpec {
  #[prost(message, optional, tag = "1")]
  pub template: Option<SerializedWorkflowTemplate>,
  #[prost(message, repeated, tag = "2")]
  pub sub_workflows: Vec<SerializedWorkflowTemplate>,
}

#[derive(Clone, PartialEq, Message)]
pub struct SerializedWorkflowTemplate {
  #[prost(message, optional, tag = "1")]
  pub id: Option<Identifier>,
  #[prost(bytes = "vec", tag = "3")]
  pub interface: Vec<u8>,
  #[prost(message, repeated, tag = "4")]
  pub nodes: Vec<SerializedNode>,
  #[prost(bytes = "vec", repeated, tag = "5")]
  pub outputs: Vec<Vec<u8>>,
}

#[derive(Clone, PartialEq, Message)]
pub struct SerializedNode {
  #[prost(string, tag = "1")]
  pub id: String,
  #[prost(bytes = "vec", repeated, tag = "3")]
  pub inputs: Vec<Vec<u8>>,
  #[prost(message, optional, tag = "6")]
  pub task_node: Option<SerializedTaskNode>,
}

#[derive(Clone, PartialEq, Message)]
pub struct SerializedTaskNode {
  #[prost(message, optional, tag = "1")]
  pub reference_id: Option<Identifier>,
}

#[derive(Clone, PartialEq, Message)]
pub struct SerializedLaunchPlan {
  #[prost(message, optional, tag = "1")]
  pub id: Option<Identifier>,
  #[prost(message, optional, tag = "2")]
  pub spec: Option<SerializedLaunchPlanSpec>,
}

#[derive(Clone, PartialEq, Message)]
pub struct SerializedLaunchPlanSpec {
  #[prost(message, optional, tag = "1")]
  pub workflow_id: Option<Identifier>,
  #[prost(bytes = "vec", tag = "3")]
  pub default_inputs: Vec<u8>,
  #[prost(bytes = "vec", tag = "4")]
  pub fixed_inputs: Vec<u8>,
  #[prost(int32, tag = "18")]
  pub max_parallelism: i32,
}

pub fn serialized_task(id: Identifier) -> SerializedTaskSpec {
  SerializedTaskSpec {
    template: Some(SerializedTaskTemplate {
      id: Some(id),
      r#type: "python-task".to_string(),
      metadata: b"retries:3".to_vec(),
      interface: b"inputs:a,b outputs:o0".to_vec(),
      custom: b"task_module:app.tasks".to_vec(),
      task_type_version: 1,
      config: HashMap::from([("mode".to_string(), "fast".to_string())]),
    }),
    description: b"adds two numbers".to_vec(),
  }
}

pub fn serialized_workflow(id: Identifier, task: Identifier) -> SerializedWorkflowSpec {
  SerializedWorkflowSpec {
    template: Some(SerializedWorkflowTemplate {
      id: Some(id),
      interface: b"inputs:a".to_vec(),
      nodes: vec![SerializedNode {
        id: "n0".to_string(),
        inputs: vec![b"a <- workflow.a".to_vec()],
        task_node: Some(SerializedTaskNode {
          reference_id: Some(task),
        }),
      }],
      outputs: vec![b"o0 <- n0.o0".to_vec()],
    }),
    sub_workflows: vec![],
  }
}

pub fn serialized_launch_plan(id: Identifier, workflow: Identifier) -> SerializedLaunchPlan {
  SerializedLaunchPlan {
    id: Some(id),
    spec: Some(SerializedLaunchPlanSpec {
      workflow_id: Some(workflow),
      default_inputs: b"a=1".to_vec(),
      fixed_inputs: b"b=2".to_vec(),
      max_parallelism: 5,
    }),
  }
}

/// Re-read an encoded message as another shape.
pub fn reread<M: Message + Default>(message: &impl Message) -> M {
  M::decode(message.encode_to_vec().as_slice()).expect("re-encoded message does not decode")
}
