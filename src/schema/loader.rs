//! Schema loader for registering extra widget schemas from JSON files.
//!
//! File format: one JSON object mapping schema names to field maps.
//!
//! ```json
//! { "Slider": { "id": "string", "position": "number" } }
//! ```
//!
//! Loaded schemas go through [`SchemaCatalogue::register`], so a file may
//! deliberately replace a builtin layout.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde_json::Value;

use crate::observability::{log_event_with_fields, Event};

use super::catalogue::SchemaCatalogue;
use super::errors::{SchemaError, SchemaResult};
use super::types::{FieldKind, SchemaDescriptor};

/// Parses schema definitions from JSON text.
///
/// `source_name` is only used in error messages.
pub fn parse_schemas(source_name: &str, content: &str) -> SchemaResult<Vec<SchemaDescriptor>> {
    let root: Value = serde_json::from_str(content)
        .map_err(|e| SchemaError::malformed(source_name, format!("Invalid JSON: {}", e)))?;

    let entries = root
        .as_object()
        .ok_or_else(|| SchemaError::malformed(source_name, "top level must be an object"))?;

    let mut descriptors = Vec::with_capacity(entries.len());
    for (name, body) in entries {
        let body = body.as_object().ok_or_else(|| {
            SchemaError::malformed(source_name, format!("schema '{}' must be an object", name))
        })?;

        let mut fields = BTreeMap::new();
        for (field, tag) in body {
            let kind = tag
                .as_str()
                .and_then(FieldKind::from_tag)
                .ok_or_else(|| {
                    SchemaError::malformed(
                        source_name,
                        format!(
                            "schema '{}' field '{}': kind must be \"string\" or \"number\", got {}",
                            name, field, tag
                        ),
                    )
                })?;
            fields.insert(field.clone(), kind);
        }

        descriptors.push(SchemaDescriptor::new(name.clone(), fields));
    }

    Ok(descriptors)
}

/// Loads a schema file into the catalogue.
///
/// Nothing is registered unless the whole file parses. Returns the number of
/// schemas registered.
pub fn load_file(catalogue: &mut SchemaCatalogue, path: &Path) -> SchemaResult<usize> {
    let source_name = path.display().to_string();
    let content = fs::read_to_string(path)
        .map_err(|e| SchemaError::malformed(&source_name, format!("Failed to read file: {}", e)))?;

    let descriptors = parse_schemas(&source_name, &content)?;
    let count = descriptors.len();
    for descriptor in descriptors {
        catalogue.register_descriptor(descriptor);
    }

    log_event_with_fields(
        Event::SchemasLoaded,
        &[("path", source_name.as_str()), ("count", count.to_string().as_str())],
    );

    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_parse_schemas() {
        let descriptors = parse_schemas(
            "<inline>",
            r#"{"Slider": {"id": "string", "position": "number"}}"#,
        )
        .unwrap();

        assert_eq!(descriptors.len(), 1);
        assert_eq!(descriptors[0].name, "Slider");
        assert_eq!(descriptors[0].field("position"), Some(FieldKind::Number));
    }

    #[test]
    fn test_parse_rejects_unknown_kind() {
        let err = parse_schemas("<inline>", r#"{"Slider": {"id": "int"}}"#).unwrap_err();
        assert_eq!(err.code(), "APPR_SCHEMA_MALFORMED");
        assert!(err.to_string().contains("int"));
    }

    #[test]
    fn test_parse_rejects_non_object() {
        assert!(parse_schemas("<inline>", "[1, 2]").is_err());
        assert!(parse_schemas("<inline>", r#"{"Slider": "string"}"#).is_err());
        assert!(parse_schemas("<inline>", "{not json").is_err());
    }

    #[test]
    fn test_load_file_overwrites_builtin() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("widgets.json");
        fs::write(&path, r#"{"OverlayButton": {"id": "string", "hint": "string"}}"#).unwrap();

        let mut catalogue = SchemaCatalogue::with_builtin_widgets();
        let before = catalogue.len();
        let count = load_file(&mut catalogue, &path).unwrap();

        assert_eq!(count, 1);
        assert_eq!(catalogue.len(), before);
        let overlay = catalogue.lookup("OverlayButton").unwrap();
        assert_eq!(overlay.field("hint"), Some(FieldKind::String));
    }

    #[test]
    fn test_load_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let mut catalogue = SchemaCatalogue::new();
        let result = load_file(&mut catalogue, &temp_dir.path().join("nope.json"));
        assert!(result.is_err());
        assert!(catalogue.is_empty());
    }
}
