//! Schema error types
//!
//! Error codes:
//! - APPR_UNKNOWN_SCHEMA
//! - APPR_SCHEMA_MALFORMED
//! - APPR_UNDECLARED_FIELD
//! - APPR_FIELD_KIND_MISMATCH

use thiserror::Error;

use super::types::FieldKind;

/// Result type for schema operations
pub type SchemaResult<T> = Result<T, SchemaError>;

/// Schema catalogue errors
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SchemaError {
    #[error("Schema '{0}' not found")]
    NotFound(String),

    #[error("Malformed schema source '{source_name}': {reason}")]
    Malformed { source_name: String, reason: String },

    #[error("Schema '{schema}' does not declare field '{field}'")]
    UndeclaredField { schema: String, field: String },

    #[error("Schema '{schema}' field '{field}': expected {expected}, got {actual}")]
    KindMismatch {
        schema: String,
        field: String,
        expected: FieldKind,
        actual: FieldKind,
    },
}

impl SchemaError {
    /// Create a malformed source error
    pub fn malformed(source_name: impl Into<String>, reason: impl Into<String>) -> Self {
        SchemaError::Malformed {
            source_name: source_name.into(),
            reason: reason.into(),
        }
    }

    /// Returns the stable error code
    pub fn code(&self) -> &'static str {
        match self {
            SchemaError::NotFound(_) => "APPR_UNKNOWN_SCHEMA",
            SchemaError::Malformed { .. } => "APPR_SCHEMA_MALFORMED",
            SchemaError::UndeclaredField { .. } => "APPR_UNDECLARED_FIELD",
            SchemaError::KindMismatch { .. } => "APPR_FIELD_KIND_MISMATCH",
        }
    }
}
