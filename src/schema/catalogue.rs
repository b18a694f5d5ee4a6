//! Schema catalogue: the named registry of widget descriptors.
//!
//! The catalogue is an explicit object built at startup and passed by
//! reference to whatever needs to resolve schema names. Registration is
//! last-writer-wins: registering a name that already exists replaces the
//! previous descriptor and emits a warning.

use std::collections::BTreeMap;

use crate::observability::{log_event_with_fields, Event};

use super::builtin;
use super::errors::{SchemaError, SchemaResult};
use super::types::{FieldKind, SchemaDescriptor};

/// Registry of schema descriptors keyed by name
#[derive(Debug, Clone, Default)]
pub struct SchemaCatalogue {
    schemas: BTreeMap<String, SchemaDescriptor>,
}

impl SchemaCatalogue {
    /// Create an empty catalogue
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a catalogue holding the builtin widget schemas
    pub fn with_builtin_widgets() -> Self {
        let mut catalogue = Self::new();
        builtin::register_widgets(&mut catalogue);
        catalogue
    }

    /// Register a schema under `name`.
    ///
    /// Returns the descriptor it replaced, if any.
    pub fn register(
        &mut self,
        name: impl Into<String>,
        fields: BTreeMap<String, FieldKind>,
    ) -> Option<SchemaDescriptor> {
        self.register_descriptor(SchemaDescriptor::new(name, fields))
    }

    /// Register a fully built descriptor. Same overwrite rules as [`register`].
    ///
    /// [`register`]: SchemaCatalogue::register
    pub fn register_descriptor(&mut self, descriptor: SchemaDescriptor) -> Option<SchemaDescriptor> {
        let name = descriptor.name.clone();
        let field_count = descriptor.field_count().to_string();
        let previous = self.schemas.insert(name.clone(), descriptor);

        if previous.is_some() {
            log_event_with_fields(
                Event::SchemaOverwritten,
                &[("schema", name.as_str()), ("fields", field_count.as_str())],
            );
        } else {
            log_event_with_fields(
                Event::SchemaRegistered,
                &[("schema", name.as_str()), ("fields", field_count.as_str())],
            );
        }

        previous
    }

    /// Look up a schema by name
    pub fn lookup(&self, name: &str) -> SchemaResult<&SchemaDescriptor> {
        self.schemas
            .get(name)
            .ok_or_else(|| SchemaError::NotFound(name.to_string()))
    }

    /// Checks if a schema exists
    pub fn contains(&self, name: &str) -> bool {
        self.schemas.contains_key(name)
    }

    /// Registered schema names in sorted order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.schemas.keys().map(String::as_str)
    }

    /// All descriptors in name order
    pub fn iter(&self) -> impl Iterator<Item = &SchemaDescriptor> {
        self.schemas.values()
    }

    /// Number of registered schemas
    pub fn len(&self) -> usize {
        self.schemas.len()
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.schemas.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(pairs: &[(&str, FieldKind)]) -> BTreeMap<String, FieldKind> {
        pairs.iter().map(|(k, v)| (k.to_string(), *v)).collect()
    }

    #[test]
    fn test_register_and_lookup() {
        let mut catalogue = SchemaCatalogue::new();
        catalogue.register("Label", fields(&[("id", FieldKind::String)]));

        let desc = catalogue.lookup("Label").unwrap();
        assert_eq!(desc.name, "Label");
        assert_eq!(desc.field("id"), Some(FieldKind::String));
    }

    #[test]
    fn test_lookup_unknown() {
        let catalogue = SchemaCatalogue::new();
        let err = catalogue.lookup("Missing").unwrap_err();
        assert_eq!(err, SchemaError::NotFound("Missing".into()));
    }

    #[test]
    fn test_reregister_overwrites() {
        let mut catalogue = SchemaCatalogue::new();
        assert!(catalogue
            .register("Label", fields(&[("id", FieldKind::String)]))
            .is_none());

        let previous = catalogue.register("Label", fields(&[("count", FieldKind::Number)]));
        assert!(previous.is_some());
        assert_eq!(catalogue.len(), 1);

        let desc = catalogue.lookup("Label").unwrap();
        assert_eq!(desc.field("id"), None);
        assert_eq!(desc.field("count"), Some(FieldKind::Number));
    }

    #[test]
    fn test_names_sorted() {
        let mut catalogue = SchemaCatalogue::new();
        catalogue.register("Zeta", BTreeMap::new());
        catalogue.register("Alpha", BTreeMap::new());
        let names: Vec<_> = catalogue.names().collect();
        assert_eq!(names, vec!["Alpha", "Zeta"]);
    }
}
