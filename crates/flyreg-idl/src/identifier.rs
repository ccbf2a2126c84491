use std::fmt;

use prost::{Enumeration, Message};

/// Kind of entity an [`Identifier`] names.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Enumeration)]
#[repr(i32)]
pub enum ResourceType {
  Unspecified = 0,
  Task = 1,
  Workflow = 2,
  LaunchPlan = 3,
  Dataset = 4,
}

impl ResourceType {
  pub fn as_str_name(&self) -> &'static str {
    match self {
      ResourceType::Unspecified => "UNSPECIFIED",
      ResourceType::Task => "TASK",
      ResourceType::Workflow => "WORKFLOW",
      ResourceType::LaunchPlan => "LAUNCH_PLAN",
      ResourceType::Dataset => "DATASET",
    }
  }
}

/// The (type, project, domain, name, version) coordinate of a registered entity.
#[derive(Clone, PartialEq, Eq, Hash, Message)]
pub struct Identifier {
  #[prost(enumeration = "ResourceType", tag = "1")]
  pub resource_type: i32,
  #[prost(string, tag = "2")]
  pub project: String,
  #[prost(string, tag = "3")]
  pub domain: String,
  #[prost(string, tag = "4")]
  pub name: String,
  #[prost(string, tag = "5")]
  pub version: String,
  /// Organization; never hydrated.
  #[prost(string, tag = "6")]
  pub org: String,
}

impl Identifier {
  pub fn new(
    resource_type: ResourceType,
    project: impl Into<String>,
    domain: impl Into<String>,
    name: impl Into<String>,
    version: impl Into<String>,
  ) -> Self {
    Self {
      resource_type: resource_type as i32,
      project: project.into(),
      domain: domain.into(),
      name: name.into(),
      version: version.into(),
      org: String::new(),
    }
  }

  /// An identifier carrying only a name, as serializers emit before registration.
  pub fn named(resource_type: ResourceType, name: impl Into<String>) -> Self {
    Self::new(resource_type, "", "", name, "")
  }
}

impl fmt::Display for Identifier {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(
      f,
      "{}:{}/{}/{}@{}",
      self.resource_type().as_str_name(),
      self.project,
      self.domain,
      self.name,
      self.version
    )
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_display() {
    let id = Identifier::new(ResourceType::Task, "flytesnacks", "development", "t1", "v1");
    assert_eq!(id.to_string(), "TASK:flytesnacks/development/t1@v1");
  }

  #[test]
  fn test_unknown_resource_type_reads_as_unspecified() {
    let id = Identifier {
      resource_type: 42,
      ..Default::default()
    };
    assert_eq!(id.resource_type(), ResourceType::Unspecified);
  }
}
