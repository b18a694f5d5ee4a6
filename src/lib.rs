//! apprentice-operators - widget schemas and primitive operators for a
//! rule-learning production engine
//!
//! The engine itself lives elsewhere. This crate provides what it matches
//! and fires against: typed widget schemas for working memory and a
//! catalogue of small pure operators with signatures, guards and fault
//! policies.

pub mod cli;
pub mod config;
pub mod numeric;
pub mod observability;
pub mod operators;
pub mod schema;

pub use config::Config;
pub use numeric::is_prime;
pub use operators::{Invoker, Operator, OperatorError, OperatorRegistry, Outcome, Value};
pub use schema::{FieldKind, SchemaCatalogue, SchemaError, WidgetInstance};
