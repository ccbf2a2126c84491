//! Flyreg Hydrate
//!
//! Turns the bytes of a serialized entity file into an [`Entity`] ready for
//! registration:
//!
//! 1. [`classify`] decodes the bytes as a workflow, task or launch plan
//! 2. [`walk_entity`] visits every identifier reachable from the entity's
//!    node graph and fills in missing or templated project, domain and version
//!    values from a [`RegistrationContext`](flyreg_config::RegistrationContext)
//!
//! Explicit values in the source file are never overwritten.

mod classify;
mod entity;
mod error;
mod hydrate;
mod walk;

pub use classify::classify;
pub use entity::Entity;
pub use error::{ClassifyError, StructuralError};
pub use hydrate::{
  DOMAIN_PLACEHOLDER, PROJECT_PLACEHOLDER, VERSION_PLACEHOLDER, hydrate_identifier,
};
pub use walk::{walk_entity, walk_node};
