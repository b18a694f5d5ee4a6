//! Widget schema subsystem
//!
//! Schemas describe the observable attributes of UI widgets held in working
//! memory. Each schema is a named map from field name to primitive kind.
//!
//! # Design Principles
//!
//! - Two field kinds only: string and number
//! - Field names unique within a schema
//! - Registration is last-writer-wins, with a warning on overwrite
//! - The catalogue is an explicit value, never a process global

mod builtin;
mod catalogue;
mod errors;
mod loader;
mod types;
mod validator;

pub use catalogue::SchemaCatalogue;
pub use errors::{SchemaError, SchemaResult};
pub use loader::{load_file, parse_schemas};
pub use types::{FieldKind, FieldValue, SchemaDescriptor, WidgetInstance};
pub use validator::SchemaValidator;
