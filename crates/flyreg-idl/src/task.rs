use prost::Message;

use crate::identifier::Identifier;
use crate::preserved::{KnownFields, Preserved};

/// Task body. Only the identifier is modelled; the interface, container,
/// metadata and custom config are carried through untouched.
#[derive(Clone, PartialEq, Message)]
pub struct TaskTemplate {
  #[prost(message, optional, tag = "1")]
  pub id: Option<Identifier>,
}

impl KnownFields for TaskTemplate {
  const TAGS: &'static [u32] = &[1];
}

#[derive(Clone, PartialEq, Message)]
pub struct TaskSpec {
  #[prost(message, optional, tag = "1")]
  pub template: Option<Preserved<TaskTemplate>>,
}

impl KnownFields for TaskSpec {
  const TAGS: &'static [u32] = &[1];
}
