//! Workflow node graph.
//!
//! A node targets exactly one of a task, a workflow (sub-workflow or launch
//! plan) or a branch. Branches nest further nodes through their if/else block,
//! so the graph is recursive. Inputs, metadata, branch conditions and the
//! other fields flyreg never rewrites ride along as unknown fields.

use prost::Message;

use crate::identifier::Identifier;
use crate::preserved::{KnownFields, Preserved};

#[derive(Clone, PartialEq, Message)]
pub struct Node {
  #[prost(string, tag = "1")]
  pub id: String,
  #[prost(oneof = "node::Target", tags = "6, 7, 8")]
  pub target: Option<node::Target>,
}

impl KnownFields for Node {
  const TAGS: &'static [u32] = &[1, 6, 7, 8];
}

pub mod node {
  use prost::Oneof;

  use crate::preserved::Preserved;

  #[derive(Clone, PartialEq, Oneof)]
  pub enum Target {
    #[prost(message, tag = "6")]
    TaskNode(Preserved<super::TaskNode>),
    #[prost(message, tag = "7")]
    WorkflowNode(Preserved<super::WorkflowNode>),
    #[prost(message, tag = "8")]
    BranchNode(Box<Preserved<super::BranchNode>>),
  }
}

/// Invokes a task by reference.
#[derive(Clone, PartialEq, Message)]
pub struct TaskNode {
  #[prost(oneof = "task_node::Reference", tags = "1")]
  pub reference: Option<task_node::Reference>,
}

impl KnownFields for TaskNode {
  const TAGS: &'static [u32] = &[1];
}

pub mod task_node {
  use prost::Oneof;

  #[derive(Clone, PartialEq, Oneof)]
  pub enum Reference {
    #[prost(message, tag = "1")]
    ReferenceId(crate::identifier::Identifier),
  }
}

/// Invokes either a launch plan or a sub-workflow carried by the parent spec.
#[derive(Clone, PartialEq, Message)]
pub struct WorkflowNode {
  #[prost(oneof = "workflow_node::Reference", tags = "1, 2")]
  pub reference: Option<workflow_node::Reference>,
}

impl KnownFields for WorkflowNode {
  const TAGS: &'static [u32] = &[1, 2];
}

pub mod workflow_node {
  use prost::Oneof;

  #[derive(Clone, PartialEq, Oneof)]
  pub enum Reference {
    #[prost(message, tag = "1")]
    LaunchplanRef(crate::identifier::Identifier),
    #[prost(message, tag = "2")]
    SubWorkflowRef(crate::identifier::Identifier),
  }
}

#[derive(Clone, PartialEq, Message)]
pub struct BranchNode {
  #[prost(message, optional, tag = "1")]
  pub if_else: Option<Preserved<IfElseBlock>>,
}

impl KnownFields for BranchNode {
  const TAGS: &'static [u32] = &[1];
}

/// A condition (tag 1, carried through as is) and the node that runs when it
/// holds.
#[derive(Clone, PartialEq, Message)]
pub struct IfBlock {
  #[prost(message, optional, boxed, tag = "2")]
  pub then_node: Option<Box<Preserved<Node>>>,
}

impl KnownFields for IfBlock {
  const TAGS: &'static [u32] = &[2];
}

/// `case`, then any number of `other` (else-if) cases, then a default that is
/// either another node or an explicit failure.
#[derive(Clone, PartialEq, Message)]
pub struct IfElseBlock {
  #[prost(message, optional, tag = "1")]
  pub case: Option<Preserved<IfBlock>>,
  #[prost(message, repeated, tag = "2")]
  pub other: Vec<Preserved<IfBlock>>,
  #[prost(oneof = "if_else_block::Default", tags = "3, 4")]
  pub default: Option<if_else_block::Default>,
}

impl KnownFields for IfElseBlock {
  const TAGS: &'static [u32] = &[1, 2, 3, 4];
}

pub mod if_else_block {
  use prost::Oneof;

  use crate::preserved::Preserved;

  #[derive(Clone, PartialEq, Oneof)]
  pub enum Default {
    #[prost(message, tag = "3")]
    ElseNode(Box<Preserved<super::Node>>),
    #[prost(message, tag = "4")]
    Error(Preserved<super::Error>),
  }
}

/// Terminal branch default: fail the workflow with a message.
#[derive(Clone, PartialEq, Message)]
pub struct Error {
  #[prost(string, tag = "1")]
  pub failed_node_id: String,
  #[prost(string, tag = "2")]
  pub message: String,
}

impl KnownFields for Error {
  const TAGS: &'static [u32] = &[1, 2];
}

impl Node {
  pub fn task(id: impl Into<String>, reference: Identifier) -> Preserved<Self> {
    Self::with_target(
      id,
      node::Target::TaskNode(
        TaskNode {
          reference: Some(task_node::Reference::ReferenceId(reference)),
        }
        .into(),
      ),
    )
  }

  pub fn sub_workflow(id: impl Into<String>, reference: Identifier) -> Preserved<Self> {
    Self::with_target(
      id,
      node::Target::WorkflowNode(
        WorkflowNode {
          reference: Some(workflow_node::Reference::SubWorkflowRef(reference)),
        }
        .into(),
      ),
    )
  }

  pub fn launch_plan(id: impl Into<String>, reference: Identifier) -> Preserved<Self> {
    Self::with_target(
      id,
      node::Target::WorkflowNode(
        WorkflowNode {
          reference: Some(workflow_node::Reference::LaunchplanRef(reference)),
        }
        .into(),
      ),
    )
  }

  pub fn branch(id: impl Into<String>, if_else: IfElseBlock) -> Preserved<Self> {
    Self::with_target(
      id,
      node::Target::BranchNode(Box::new(
        BranchNode {
          if_else: Some(if_else.into()),
        }
        .into(),
      )),
    )
  }

  fn with_target(id: impl Into<String>, target: node::Target) -> Preserved<Self> {
    Preserved::new(Self {
      id: id.into(),
      target: Some(target),
    })
  }
}

impl IfBlock {
  pub fn new(then_node: Preserved<Node>) -> Preserved<Self> {
    Preserved::new(Self {
      then_node: Some(Box::new(then_node)),
    })
  }
}

impl Error {
  pub fn new(failed_node_id: impl Into<String>, message: impl Into<String>) -> Preserved<Self> {
    Preserved::new(Self {
      failed_node_id: failed_node_id.into(),
      message: message.into(),
    })
  }
}
