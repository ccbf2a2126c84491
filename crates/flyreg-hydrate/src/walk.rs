//! Graph walk over an entity's nodes, hydrating every identifier it reaches.
//!
//! Traversal follows declaration order: nodes in sequence, a branch's primary
//! case, its else-if cases, then its default. Hydration is idempotent, so the
//! order only affects which structural error surfaces first.

use flyreg_config::RegistrationContext;
use flyreg_idl::{
  BranchNode, IfBlock, Node, WorkflowTemplate, if_else_block, node, task_node, workflow_node,
};
use tracing::debug;

use crate::entity::Entity;
use crate::error::StructuralError;
use crate::hydrate::hydrate_identifier;

/// Hydrate the reference a node holds, recursing through branches.
///
/// Workflow nodes only hydrate the reference itself; a referenced sub-workflow
/// is hydrated through the owning spec's sub-workflow list.
pub fn walk_node(node: &mut Node, ctx: &RegistrationContext) -> Result<(), StructuralError> {
  let Node {
    id: node_id,
    target,
    ..
  } = node;

  match target {
    Some(node::Target::TaskNode(task)) => match &mut task.reference {
      Some(task_node::Reference::ReferenceId(reference)) => {
        hydrate_identifier(reference, ctx);
        Ok(())
      }
      None => Err(StructuralError::MissingTaskReference {
        node_id: node_id.clone(),
      }),
    },
    Some(node::Target::WorkflowNode(workflow)) => match &mut workflow.reference {
      Some(workflow_node::Reference::SubWorkflowRef(reference))
      | Some(workflow_node::Reference::LaunchplanRef(reference)) => {
        hydrate_identifier(reference, ctx);
        Ok(())
      }
      None => Err(StructuralError::MissingWorkflowReference {
        node_id: node_id.clone(),
      }),
    },
    Some(node::Target::BranchNode(branch)) => walk_branch(node_id, branch, ctx),
    None => Err(StructuralError::UnknownNodeTarget {
      node_id: node_id.clone(),
    }),
  }
}

fn walk_branch(
  node_id: &str,
  branch: &mut BranchNode,
  ctx: &RegistrationContext,
) -> Result<(), StructuralError> {
  let if_else = branch
    .if_else
    .as_mut()
    .ok_or_else(|| StructuralError::MissingIfElse {
      node_id: node_id.to_string(),
    })?;

  match if_else.case.as_mut() {
    Some(case) => walk_case(node_id, case, ctx)?,
    None => {
      return Err(StructuralError::MissingThenNode {
        node_id: node_id.to_string(),
      });
    }
  }

  for case in &mut if_else.other {
    walk_case(node_id, case, ctx)?;
  }

  match &mut if_else.default {
    Some(if_else_block::Default::ElseNode(else_node)) => walk_node(else_node, ctx),
    // Terminal: the branch fails the workflow, nothing further to hydrate.
    Some(if_else_block::Default::Error(_)) => Ok(()),
    None => Err(StructuralError::UnknownBranchDefault {
      node_id: node_id.to_string(),
    }),
  }
}

fn walk_case(
  node_id: &str,
  case: &mut IfBlock,
  ctx: &RegistrationContext,
) -> Result<(), StructuralError> {
  match case.then_node.as_mut() {
    Some(then_node) => walk_node(then_node, ctx),
    None => Err(StructuralError::MissingThenNode {
      node_id: node_id.to_string(),
    }),
  }
}

/// Hydrate everything in `entity` that must be hydrated before registration.
///
/// - Workflow: every node, then the template's own id, then the same for each
///   sub-workflow. Sub-workflows carry no sub-workflows of their own.
/// - Launch plan: only the workflow it launches. Its own id is hydrated at
///   registration.
/// - Task: nothing. Its own id is hydrated at registration.
pub fn walk_entity(entity: &mut Entity, ctx: &RegistrationContext) -> Result<(), StructuralError> {
  match entity {
    Entity::Workflow(spec) => {
      let template = spec
        .template
        .as_mut()
        .ok_or(StructuralError::MissingField {
          entity: "workflow",
          field: "template",
        })?;
      walk_template(template, "workflow", ctx)?;

      for sub_workflow in &mut spec.sub_workflows {
        walk_template(sub_workflow, "sub-workflow", ctx)?;
      }
      Ok(())
    }
    Entity::LaunchPlan(plan) => {
      let workflow_id = plan
        .spec
        .as_mut()
        .and_then(|spec| spec.workflow_id.as_mut())
        .ok_or(StructuralError::MissingField {
          entity: "launch plan",
          field: "workflow id",
        })?;
      hydrate_identifier(workflow_id, ctx);
      Ok(())
    }
    Entity::Task(_) => Ok(()),
  }
}

fn walk_template(
  template: &mut WorkflowTemplate,
  entity: &'static str,
  ctx: &RegistrationContext,
) -> Result<(), StructuralError> {
  for node in &mut template.nodes {
    walk_node(node, ctx)?;
  }
  if let Some(failure_node) = template.failure_node.as_mut() {
    walk_node(failure_node, ctx)?;
  }

  let id = template
    .id
    .as_mut()
    .ok_or(StructuralError::MissingField { entity, field: "id" })?;
  hydrate_identifier(id, ctx);

  debug!(
    workflow = %id.name,
    nodes = template.nodes.len(),
    "hydrated {}", entity
  );
  Ok(())
}
