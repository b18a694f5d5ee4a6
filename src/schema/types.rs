//! Schema type definitions
//!
//! Supported field kinds:
//! - string: UTF-8 string
//! - number: 64-bit floating point
//!
//! Working-memory elements only carry these two primitive kinds. Anything
//! richer is expressed as a separate widget referenced by id (e.g. `above`).

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Primitive kind of a single widget field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    /// UTF-8 string
    String,
    /// 64-bit floating point
    Number,
}

impl FieldKind {
    /// Returns the tag used in schema files
    pub fn type_name(&self) -> &'static str {
        match self {
            FieldKind::String => "string",
            FieldKind::Number => "number",
        }
    }

    /// Parses a kind tag. Only `string` and `number` are recognised.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "string" => Some(FieldKind::String),
            "number" => Some(FieldKind::Number),
            _ => None,
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.type_name())
    }
}

/// Named mapping of field name to kind.
///
/// Fields are kept in a `BTreeMap` so names are unique and iteration order
/// is stable across runs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemaDescriptor {
    /// Widget category name, e.g. `TextField`
    pub name: String,
    /// Field definitions
    pub fields: BTreeMap<String, FieldKind>,
}

impl SchemaDescriptor {
    /// Create a new descriptor
    pub fn new(name: impl Into<String>, fields: BTreeMap<String, FieldKind>) -> Self {
        Self {
            name: name.into(),
            fields,
        }
    }

    /// Build a descriptor from `(field, kind)` pairs. Later duplicates win.
    pub fn from_pairs<'a>(
        name: impl Into<String>,
        pairs: impl IntoIterator<Item = (&'a str, FieldKind)>,
    ) -> Self {
        let fields = pairs
            .into_iter()
            .map(|(field, kind)| (field.to_string(), kind))
            .collect();
        Self::new(name, fields)
    }

    /// Kind of the given field, if declared
    pub fn field(&self, field: &str) -> Option<FieldKind> {
        self.fields.get(field).copied()
    }

    /// Number of declared fields
    pub fn field_count(&self) -> usize {
        self.fields.len()
    }
}

/// A concrete field value carried by a widget instance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Number(f64),
    Text(String),
}

impl FieldValue {
    /// Kind of this value
    pub fn kind(&self) -> FieldKind {
        match self {
            FieldValue::Number(_) => FieldKind::Number,
            FieldValue::Text(_) => FieldKind::String,
        }
    }
}

/// A working-memory element: one widget observed on screen.
///
/// Serialized as a flat JSON object whose `type` key names the schema, e.g.
/// `{"type": "TextField", "id": "x1", "value": "42"}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WidgetInstance {
    /// Name of the schema this instance claims to follow
    #[serde(rename = "type")]
    pub schema: String,
    /// Field values by name
    #[serde(flatten)]
    pub fields: BTreeMap<String, FieldValue>,
}

impl WidgetInstance {
    /// Create an empty instance of the named schema
    pub fn new(schema: impl Into<String>) -> Self {
        Self {
            schema: schema.into(),
            fields: BTreeMap::new(),
        }
    }

    /// Builder-style setter for a string field
    pub fn with_text(mut self, field: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.insert(field.into(), FieldValue::Text(value.into()));
        self
    }

    /// Builder-style setter for a number field
    pub fn with_number(mut self, field: impl Into<String>, value: f64) -> Self {
        self.fields.insert(field.into(), FieldValue::Number(value));
        self
    }

    /// Value of the given field, if present
    pub fn get(&self, field: &str) -> Option<&FieldValue> {
        self.fields.get(field)
    }
}
