//! Schema Catalogue Tests
//!
//! - Builtin widget schemas are registered at construction
//! - Re-registration overwrites, and lookups only see the new fields
//! - Unknown names fail with NotFound
//! - Schema files extend or replace builtin layouts

use std::collections::BTreeMap;
use std::fs;

use apprentice_operators::schema::{
    load_file, FieldKind, SchemaCatalogue, SchemaError, SchemaValidator, WidgetInstance,
};
use apprentice_operators::Config;
use tempfile::TempDir;

// =============================================================================
// Helper Functions
// =============================================================================

fn fields(pairs: &[(&str, FieldKind)]) -> BTreeMap<String, FieldKind> {
    pairs.iter().map(|(k, v)| (k.to_string(), *v)).collect()
}

// =============================================================================
// Builtin Widgets
// =============================================================================

#[test]
fn test_builtin_widgets_present() {
    let catalogue = SchemaCatalogue::with_builtin_widgets();
    for name in [
        "TextField",
        "TextArea",
        "Button",
        "Checkbox",
        "RadioButton",
        "Component",
        "Symbol",
        "OverlayButton",
    ] {
        assert!(catalogue.contains(name), "missing {}", name);
    }
}

#[test]
fn test_checkbox_has_group_name() {
    let catalogue = SchemaCatalogue::with_builtin_widgets();
    let checkbox = catalogue.lookup("Checkbox").unwrap();
    assert_eq!(checkbox.field("groupName"), Some(FieldKind::String));
    assert_eq!(checkbox.field("label"), Some(FieldKind::String));

    let button = catalogue.lookup("Button").unwrap();
    assert_eq!(button.field("groupName"), None);
}

// =============================================================================
// Overwrite Semantics
// =============================================================================

/// Lookups after an overwrite return only the new fields.
#[test]
fn test_overwrite_replaces_fields() {
    let mut catalogue = SchemaCatalogue::with_builtin_widgets();
    catalogue.register("TextField", fields(&[("text", FieldKind::String)]));

    let desc = catalogue.lookup("TextField").unwrap();
    assert_eq!(desc.field_count(), 1);
    assert_eq!(desc.field("text"), Some(FieldKind::String));
    assert_eq!(desc.field("value"), None);
}

/// Overwriting one schema leaves its former twin untouched.
#[test]
fn test_overwrite_does_not_touch_shared_layouts() {
    let mut catalogue = SchemaCatalogue::with_builtin_widgets();
    catalogue.register("TextField", fields(&[("text", FieldKind::String)]));

    let area = catalogue.lookup("TextArea").unwrap();
    assert_eq!(area.field("value"), Some(FieldKind::String));
}

#[test]
fn test_unknown_schema() {
    let catalogue = SchemaCatalogue::with_builtin_widgets();
    assert_eq!(
        catalogue.lookup("Slider").unwrap_err(),
        SchemaError::NotFound("Slider".into())
    );
}

// =============================================================================
// Schema Files
// =============================================================================

#[test]
fn test_schema_file_adds_widget() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("extra.json");
    fs::write(
        &path,
        r#"{"Slider": {"id": "string", "position": "number"}}"#,
    )
    .unwrap();

    let mut catalogue = SchemaCatalogue::with_builtin_widgets();
    assert_eq!(load_file(&mut catalogue, &path).unwrap(), 1);

    let validator = SchemaValidator::new(&catalogue);
    let slider = WidgetInstance::new("Slider").with_number("position", 0.25);
    assert!(validator.validate_instance(&slider).is_ok());
}

/// A malformed file registers nothing.
#[test]
fn test_malformed_file_is_atomic() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("extra.json");
    fs::write(
        &path,
        r#"{"Slider": {"id": "string"}, "Knob": {"angle": "degrees"}}"#,
    )
    .unwrap();

    let mut catalogue = SchemaCatalogue::with_builtin_widgets();
    let before = catalogue.len();
    assert!(load_file(&mut catalogue, &path).is_err());
    assert_eq!(catalogue.len(), before);
    assert!(!catalogue.contains("Slider"));
}

/// Config files are applied in order, later files winning.
#[test]
fn test_config_schema_files_in_order() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("a.json"), r#"{"Slider": {"id": "string"}}"#).unwrap();
    fs::write(dir.path().join("b.json"), r#"{"Slider": {"position": "number"}}"#).unwrap();
    let config_path = dir.path().join("apprentice.json");
    fs::write(&config_path, r#"{"schema_files": ["a.json", "b.json"]}"#).unwrap();

    let catalogue = Config::load(&config_path)
        .unwrap()
        .build_catalogue()
        .unwrap();
    let slider = catalogue.lookup("Slider").unwrap();
    assert_eq!(slider.field("id"), None);
    assert_eq!(slider.field("position"), Some(FieldKind::Number));
}
