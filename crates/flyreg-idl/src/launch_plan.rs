use prost::Message;

use crate::identifier::Identifier;
use crate::preserved::{KnownFields, Preserved};

#[derive(Clone, PartialEq, Message)]
pub struct LaunchPlanSpec {
  /// The workflow this launch plan launches.
  #[prost(message, optional, tag = "1")]
  pub workflow_id: Option<Identifier>,
}

impl KnownFields for LaunchPlanSpec {
  const TAGS: &'static [u32] = &[1];
}

#[derive(Clone, PartialEq, Message)]
pub struct LaunchPlan {
  #[prost(message, optional, tag = "1")]
  pub id: Option<Identifier>,
  #[prost(message, optional, tag = "2")]
  pub spec: Option<Preserved<LaunchPlanSpec>>,
}

impl KnownFields for LaunchPlan {
  const TAGS: &'static [u32] = &[1, 2];
}
