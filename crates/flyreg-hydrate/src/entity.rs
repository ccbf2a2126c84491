use flyreg_idl::{Identifier, LaunchPlan, Preserved, ResourceType, TaskSpec, WorkflowSpec};

/// A registrable unit decoded from one file, unmodelled fields included.
#[derive(Debug, Clone, PartialEq)]
pub enum Entity {
  Task(Preserved<TaskSpec>),
  /// A workflow and its sub-workflows. Only the top-level workflow is registered.
  Workflow(Preserved<WorkflowSpec>),
  LaunchPlan(Preserved<LaunchPlan>),
}

impl Entity {
  /// Human-readable kind, used in logs and errors.
  pub fn kind(&self) -> &'static str {
    match self {
      Entity::Task(_) => "task",
      Entity::Workflow(_) => "workflow",
      Entity::LaunchPlan(_) => "launch plan",
    }
  }

  pub fn resource_type(&self) -> ResourceType {
    match self {
      Entity::Task(_) => ResourceType::Task,
      Entity::Workflow(_) => ResourceType::Workflow,
      Entity::LaunchPlan(_) => ResourceType::LaunchPlan,
    }
  }

  /// The entity's own identifier: the template id for tasks and workflows.
  pub fn identifier(&self) -> Option<&Identifier> {
    match self {
      Entity::Task(spec) => spec.template.as_ref()?.id.as_ref(),
      Entity::Workflow(spec) => spec.template.as_ref()?.id.as_ref(),
      Entity::LaunchPlan(plan) => plan.id.as_ref(),
    }
  }

  pub fn identifier_mut(&mut self) -> Option<&mut Identifier> {
    match self {
      Entity::Task(spec) => spec.template.as_mut()?.id.as_mut(),
      Entity::Workflow(spec) => spec.template.as_mut()?.id.as_mut(),
      Entity::LaunchPlan(plan) => plan.id.as_mut(),
    }
  }

  pub fn name(&self) -> Option<&str> {
    self.identifier().map(|id| id.name.as_str())
  }
}
