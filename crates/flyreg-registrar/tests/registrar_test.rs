mod common;

use std::sync::Arc;

use common::*;
use flyreg_admin::AdminError;
use flyreg_hydrate::{Entity, PROJECT_PLACEHOLDER, classify, walk_entity};
use flyreg_idl::{Identifier, Node, Preserved, ResourceType};
use flyreg_registrar::{RegisterError, Registrar};
use prost::Message;

#[tokio::test]
async fn test_register_task() {
  let client = Arc::new(MockAdminClient::new());
  let registrar = Registrar::new(client.clone());

  let id = registrar
    .register(Entity::Task(make_task("t1")), &ctx())
    .await
    .unwrap();

  assert_eq!(id, hydrated(ResourceType::Task, "t1"));
  let requests = client.requests();
  assert_eq!(requests.len(), 1);
  match &requests[0] {
    Recorded::Task(request) => {
      assert_eq!(request.id.as_ref(), Some(&hydrated(ResourceType::Task, "t1")));
      let template = request.spec.as_ref().unwrap().template.as_ref().unwrap();
      // The body's own identifier is hydrated too.
      assert_eq!(template.id.as_ref(), Some(&hydrated(ResourceType::Task, "t1")));
    }
    other => panic!("expected task request, got {:?}", other),
  }
}

#[tokio::test]
async fn test_request_identifier_always_uses_context() {
  let client = Arc::new(MockAdminClient::new());
  let registrar = Registrar::new(client.clone());

  let mut spec = make_task("t1");
  let explicit = Identifier::new(ResourceType::Task, "other", "production", "t1", "v9");
  spec.template.as_mut().unwrap().id = Some(explicit.clone());

  let id = registrar.register(Entity::Task(spec), &ctx()).await.unwrap();

  assert_eq!(id, hydrated(ResourceType::Task, "t1"));
  let requests = client.requests();
  let Recorded::Task(request) = &requests[0] else {
    panic!("expected task request");
  };
  // Explicit values inside the body are honoured.
  let template = request.spec.as_ref().unwrap().template.as_ref().unwrap();
  assert_eq!(template.id.as_ref(), Some(&explicit));
}

#[tokio::test]
async fn test_register_workflow_carries_sub_workflows() {
  let client = Arc::new(MockAdminClient::new());
  let registrar = Registrar::new(client.clone());

  let mut entity = Entity::Workflow(make_workflow(
    "parent",
    vec![Node::sub_workflow(
      "n0",
      Identifier::named(ResourceType::Workflow, "child"),
    )],
    vec![make_template(
      "child",
      vec![Node::task("c0", Identifier::named(ResourceType::Task, "t1"))],
    )],
  ));
  walk_entity(&mut entity, &ctx()).unwrap();

  registrar.register(entity, &ctx()).await.unwrap();

  let requests = client.requests();
  assert_eq!(requests.len(), 1, "sub-workflows are not registered separately");
  let Recorded::Workflow(request) = &requests[0] else {
    panic!("expected workflow request");
  };
  assert_eq!(request.id.as_ref(), Some(&hydrated(ResourceType::Workflow, "parent")));
  let spec = request.spec.as_ref().unwrap();
  assert_eq!(spec.sub_workflows.len(), 1);
  assert_eq!(
    spec.sub_workflows[0].id.as_ref(),
    Some(&hydrated(ResourceType::Workflow, "child"))
  );
}

#[tokio::test]
async fn test_register_launch_plan() {
  let client = Arc::new(MockAdminClient::new());
  let registrar = Registrar::new(client.clone());

  let mut plan = make_launch_plan("lp", "wf");
  plan.id.as_mut().unwrap().project = PROJECT_PLACEHOLDER.to_string();
  let mut entity = Entity::LaunchPlan(plan);
  walk_entity(&mut entity, &ctx()).unwrap();

  let id = registrar.register(entity, &ctx()).await.unwrap();

  assert_eq!(id, hydrated(ResourceType::LaunchPlan, "lp"));
  let requests = client.requests();
  let Recorded::LaunchPlan(request) = &requests[0] else {
    panic!("expected launch plan request");
  };
  assert_eq!(
    request.spec.as_ref().unwrap().workflow_id.as_ref(),
    Some(&hydrated(ResourceType::Workflow, "wf"))
  );
}

#[tokio::test]
async fn test_remote_error_is_surfaced() {
  let client = Arc::new(MockAdminClient::new());
  client.conflict_on("t1");
  let registrar = Registrar::new(client.clone());

  let result = registrar.register(Entity::Task(make_task("t1")), &ctx()).await;

  assert!(matches!(
    result,
    Err(RegisterError::Remote(AdminError::AlreadyExists { .. }))
  ));
  assert!(registrar.client().requests().is_empty());
}

#[tokio::test]
async fn test_entity_without_identifier_fails() {
  let registrar = Registrar::new(MockAdminClient::new());
  let result = registrar
    .register(Entity::Task(Preserved::default()), &ctx())
    .await;
  assert!(matches!(result, Err(RegisterError::Structure(_))));
}

#[tokio::test]
async fn test_task_body_reaches_the_request_intact() {
  let client = Arc::new(MockAdminClient::new());
  let registrar = Registrar::new(client.clone());

  let source = serialized_task(Identifier::named(ResourceType::Task, "t1"));
  let entity = classify(&source.encode_to_vec(), "t1.pb").unwrap();
  registrar.register(entity, &ctx()).await.unwrap();

  let requests = client.requests();
  let Recorded::Task(request) = &requests[0] else {
    panic!("expected task request");
  };
  let sent: SerializedTaskSpec = reread(request.spec.as_ref().unwrap());
  assert_eq!(sent, serialized_task(hydrated(ResourceType::Task, "t1")));
}
