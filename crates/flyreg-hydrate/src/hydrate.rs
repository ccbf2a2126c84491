use flyreg_config::RegistrationContext;
use flyreg_idl::Identifier;

/// Placeholder the SDK writes when the project is only known at registration.
pub const PROJECT_PLACEHOLDER: &str = "{{ registration.project }}";
/// Placeholder the SDK writes when the domain is only known at registration.
pub const DOMAIN_PLACEHOLDER: &str = "{{ registration.domain }}";
/// Placeholder the SDK writes when the version is only known at registration.
pub const VERSION_PLACEHOLDER: &str = "{{ registration.Version }}";

/// Fill project, domain and version from `ctx` where they are empty or a
/// placeholder. The name is never touched.
pub fn hydrate_identifier(identifier: &mut Identifier, ctx: &RegistrationContext) {
  fill(&mut identifier.project, PROJECT_PLACEHOLDER, &ctx.project);
  fill(&mut identifier.domain, DOMAIN_PLACEHOLDER, &ctx.domain);
  fill(&mut identifier.version, VERSION_PLACEHOLDER, &ctx.version);
}

fn fill(field: &mut String, placeholder: &str, value: &str) {
  if field.is_empty() || field == placeholder {
    *field = value.to_string();
  }
}
