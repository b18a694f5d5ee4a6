//! Widget instance validation against the catalogue.
//!
//! An instance conforms when:
//! - its schema name is registered
//! - every field it carries is declared by that schema
//! - every value kind matches the declared kind
//!
//! Declared fields may be absent. Working memory routinely holds partially
//! observed widgets.

use super::catalogue::SchemaCatalogue;
use super::errors::{SchemaError, SchemaResult};
use super::types::WidgetInstance;

/// Validator that checks widget instances against a schema catalogue.
///
/// Validation does not mutate instances and is deterministic: fields are
/// checked in name order, so the first reported violation is stable.
pub struct SchemaValidator<'a> {
    catalogue: &'a SchemaCatalogue,
}

impl<'a> SchemaValidator<'a> {
    /// Creates a new validator backed by the given catalogue.
    pub fn new(catalogue: &'a SchemaCatalogue) -> Self {
        Self { catalogue }
    }

    /// Validates one instance.
    ///
    /// # Errors
    ///
    /// - `NotFound` if the instance's schema is not registered
    /// - `UndeclaredField` for the first field the schema does not declare
    /// - `KindMismatch` for the first value of the wrong kind
    pub fn validate_instance(&self, instance: &WidgetInstance) -> SchemaResult<()> {
        let descriptor = self.catalogue.lookup(&instance.schema)?;

        for (field, value) in &instance.fields {
            let expected = descriptor.field(field).ok_or_else(|| SchemaError::UndeclaredField {
                schema: instance.schema.clone(),
                field: field.clone(),
            })?;

            let actual = value.kind();
            if actual != expected {
                return Err(SchemaError::KindMismatch {
                    schema: instance.schema.clone(),
                    field: field.clone(),
                    expected,
                    actual,
                });
            }
        }

        Ok(())
    }
}
