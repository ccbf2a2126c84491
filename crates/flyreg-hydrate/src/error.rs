use thiserror::Error;

/// The bytes did not decode as any known entity shape.
#[derive(Debug, Error)]
pub enum ClassifyError {
  #[error("failed unmarshalling file {file}: not a workflow, task or launch plan")]
  Unrecognized { file: String },
}

/// A node or entity graph does not have a shape the walker understands.
#[derive(Debug, Error)]
pub enum StructuralError {
  /// Node with none of the task, workflow or branch targets set.
  #[error("node '{node_id}' has an unknown target type")]
  UnknownNodeTarget { node_id: String },

  #[error("task node '{node_id}' has no reference id")]
  MissingTaskReference { node_id: String },

  #[error("workflow node '{node_id}' references neither a sub-workflow nor a launch plan")]
  MissingWorkflowReference { node_id: String },

  #[error("branch node '{node_id}' has no if/else block")]
  MissingIfElse { node_id: String },

  /// A case (the primary one or an else-if) without a node to run.
  #[error("branch node '{node_id}' has a case without a then node")]
  MissingThenNode { node_id: String },

  /// Branch default that is neither an else node nor an error.
  #[error("branch node '{node_id}' has an unknown default type")]
  UnknownBranchDefault { node_id: String },

  /// Entity lacks a field hydration or registration depends on.
  #[error("{entity} is missing {field}")]
  MissingField {
    entity: &'static str,
    field: &'static str,
  },
}
