//! Flyreg IDL
//!
//! Protobuf wire types for the entities flyreg registers. These mirror the
//! control plane's `flyteidl.core` and `flyteidl.admin` messages with the same
//! field numbers, so serialized entity files decode and the admin create
//! requests encode as the control plane expects.
//!
//! Only the fields flyreg reads or rewrites are modelled: identifiers and the
//! node graph leading to them. Every other field of a spec, template or node is
//! kept by [`Preserved`] and written back unchanged, so a registered entity
//! carries exactly what its file did apart from hydrated identifiers.

mod admin;
mod graph;
mod identifier;
mod launch_plan;
mod preserved;
mod task;
mod workflow;

pub use admin::{
  LaunchPlanCreateRequest, LaunchPlanCreateResponse, TaskCreateRequest, TaskCreateResponse,
  WorkflowCreateRequest, WorkflowCreateResponse,
};
pub use graph::{
  BranchNode, Error, IfBlock, IfElseBlock, Node, TaskNode, WorkflowNode, if_else_block, node,
  task_node, workflow_node,
};
pub use identifier::{Identifier, ResourceType};
pub use launch_plan::{LaunchPlan, LaunchPlanSpec};
pub use preserved::{KnownFields, Preserved, UnknownFields};
pub use task::{TaskSpec, TaskTemplate};
pub use workflow::{WorkflowSpec, WorkflowTemplate};
