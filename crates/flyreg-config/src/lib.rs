//! Flyreg Config
//!
//! Configuration types for flyreg. The [`RegistrationContext`] is the value
//! threaded through hydration and registration; [`Config`] is the optional
//! on-disk file providing admin connection settings and a default project and
//! domain.
//!
//! Configuration can be loaded from:
//! - a JSON file (via CLI with `--config=config.json`, default `~/.flyreg/config.json`)
//! - command-line flags, which take precedence over the file

mod admin;
mod context;
mod error;
mod file;

pub use admin::AdminConfig;
pub use context::{DEFAULT_VERSION, RegistrationContext};
pub use error::ConfigError;
pub use file::{Config, default_config_path};
