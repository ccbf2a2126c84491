use flyreg_admin::AdminClient;
use flyreg_config::RegistrationContext;
use flyreg_hydrate::{Entity, StructuralError, hydrate_identifier};
use flyreg_idl::{Identifier, LaunchPlanCreateRequest, TaskCreateRequest, WorkflowCreateRequest};
use tracing::info;

use crate::error::RegisterError;

/// Submits one entity to the admin service.
pub struct Registrar<C: AdminClient> {
  client: C,
}

impl<C: AdminClient> Registrar<C> {
  pub fn new(client: C) -> Self {
    Self { client }
  }

  pub fn client(&self) -> &C {
    &self.client
  }

  /// Register `entity`, returning the identifier it was created under.
  ///
  /// The entity's own identifier is hydrated in place first. The request
  /// identifier always takes project, domain and version from `ctx` and the
  /// name from the entity. Sub-workflows travel inside the workflow spec.
  pub async fn register(
    &self,
    mut entity: Entity,
    ctx: &RegistrationContext,
  ) -> Result<Identifier, RegisterError> {
    let kind = entity.kind();
    let resource_type = entity.resource_type();
    let own = entity
      .identifier_mut()
      .ok_or(StructuralError::MissingField {
        entity: kind,
        field: "id",
      })?;
    hydrate_identifier(own, ctx);

    let id = Identifier::new(
      resource_type,
      &ctx.project,
      &ctx.domain,
      own.name.clone(),
      &ctx.version,
    );

    match entity {
      Entity::Task(spec) => {
        self
          .client
          .create_task(TaskCreateRequest {
            id: Some(id.clone()),
            spec: Some(spec),
          })
          .await?
      }
      Entity::Workflow(spec) => {
        self
          .client
          .create_workflow(WorkflowCreateRequest {
            id: Some(id.clone()),
            spec: Some(spec),
          })
          .await?
      }
      Entity::LaunchPlan(plan) => {
        self
          .client
          .create_launch_plan(LaunchPlanCreateRequest {
            id: Some(id.clone()),
            spec: plan.into_inner().spec,
          })
          .await?
      }
    }

    info!(%id, entity = kind, "registered");
    Ok(id)
  }
}
