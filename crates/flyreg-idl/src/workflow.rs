use prost::Message;

use crate::graph::Node;
use crate::identifier::Identifier;
use crate::preserved::{KnownFields, Preserved};

/// A workflow's identifier and node graph.
///
/// Used both for the top-level template of a [`WorkflowSpec`] and for each of
/// its sub-workflows.
#[derive(Clone, PartialEq, Message)]
pub struct WorkflowTemplate {
  #[prost(message, optional, tag = "1")]
  pub id: Option<Identifier>,
  #[prost(message, repeated, tag = "4")]
  pub nodes: Vec<Preserved<Node>>,
  #[prost(message, optional, tag = "6")]
  pub failure_node: Option<Preserved<Node>>,
}

impl KnownFields for WorkflowTemplate {
  const TAGS: &'static [u32] = &[1, 4, 6];
}

/// A workflow together with the sub-workflows its nodes reference.
///
/// Sub-workflows travel with the parent on registration; they are never
/// registered on their own.
#[derive(Clone, PartialEq, Message)]
pub struct WorkflowSpec {
  #[prost(message, optional, tag = "1")]
  pub template: Option<Preserved<WorkflowTemplate>>,
  #[prost(message, repeated, tag = "2")]
  pub sub_workflows: Vec<Preserved<WorkflowTemplate>>,
}

impl KnownFields for WorkflowSpec {
  const TAGS: &'static [u32] = &[1, 2];
}
