//! Flyreg Registrar
//!
//! Submits hydrated entities to the admin service. [`Registrar`] handles one
//! entity; [`BatchRegistrar`] drives a list of serialized entity files through
//! read, classify, hydrate and register, in sorted order, either stopping at
//! the first failure or recording it and moving on.

mod batch;
mod error;
mod registrar;
mod result;

pub use batch::{BatchRegistrar, IDENTIFIER_FILE_MARKER, is_identifier_file};
pub use error::RegisterError;
pub use registrar::Registrar;
pub use result::{FileResult, FileStatus};
