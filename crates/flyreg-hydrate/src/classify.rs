//! Payload classification by trial decoding.
//!
//! Protobuf decoding is permissive: unknown fields are skipped and every field
//! is optional, so a buffer can decode cleanly as the wrong message. A trial
//! only counts when the decoded value carries its own identifier with a name,
//! and that identifier does not declare a different resource type. Shapes are
//! tried in a fixed order (workflow, task, launch plan) and the first accepted
//! one wins. A buffer that is plausible as more than one shape is still
//! classified by that order alone.

use flyreg_idl::{Identifier, LaunchPlan, Preserved, ResourceType, TaskSpec, WorkflowSpec};
use prost::Message;
use tracing::debug;

use crate::entity::Entity;
use crate::error::ClassifyError;

/// Decode `bytes` as the first entity shape that fits. `file` names the source
/// in logs and in the error.
pub fn classify(bytes: &[u8], file: &str) -> Result<Entity, ClassifyError> {
  if let Some(spec) = trial::<Preserved<WorkflowSpec>>(bytes, file, "workflow", |spec| {
    identifies(
      spec.template.as_ref().and_then(|t| t.id.as_ref()),
      ResourceType::Workflow,
    )
  }) {
    return Ok(Entity::Workflow(spec));
  }

  if let Some(spec) = trial::<Preserved<TaskSpec>>(bytes, file, "task", |spec| {
    identifies(
      spec.template.as_ref().and_then(|t| t.id.as_ref()),
      ResourceType::Task,
    )
  }) {
    return Ok(Entity::Task(spec));
  }

  if let Some(plan) = trial::<Preserved<LaunchPlan>>(bytes, file, "launch plan", |plan| {
    identifies(plan.id.as_ref(), ResourceType::LaunchPlan)
      && plan.spec.as_ref().is_some_and(|s| s.workflow_id.is_some())
  }) {
    return Ok(Entity::LaunchPlan(plan));
  }

  Err(ClassifyError::Unrecognized {
    file: file.to_string(),
  })
}

fn trial<M: Message + Default>(
  bytes: &[u8],
  file: &str,
  shape: &str,
  accept: impl Fn(&M) -> bool,
) -> Option<M> {
  match M::decode(bytes) {
    Ok(message) if accept(&message) => Some(message),
    Ok(_) => {
      debug!(file, shape, "decoded without an identifying {} id", shape);
      None
    }
    Err(e) => {
      debug!(file, shape, error = %e, "failed to unmarshal file as {}", shape);
      None
    }
  }
}

fn identifies(id: Option<&Identifier>, expected: ResourceType) -> bool {
  match id {
    Some(id) if !id.name.is_empty() => {
      let declared = id.resource_type();
      declared == ResourceType::Unspecified || declared == expected
    }
    _ => false,
  }
}
