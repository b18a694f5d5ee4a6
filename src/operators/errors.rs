//! # Operator Errors
//!
//! Hard failures only. An operator that simply does not apply to its
//! arguments is reported through [`Outcome::Inapplicable`], never here.
//!
//! [`Outcome::Inapplicable`]: super::Outcome::Inapplicable

use thiserror::Error;

use crate::schema::SchemaError;

use super::fault::Fault;

/// Result type for operator operations
pub type OperatorResult<T> = Result<T, OperatorError>;

/// Operator errors
#[derive(Debug, Clone, PartialEq, Error)]
pub enum OperatorError {
    #[error("Operator not found: {0}")]
    NotFound(String),

    #[error("Invalid signature '{signature}': {reason}")]
    InvalidSignature { signature: String, reason: String },

    #[error("{operator} takes {expected} argument(s), got {actual}")]
    ArityMismatch {
        operator: String,
        expected: usize,
        actual: usize,
    },

    #[error("{operator} argument {index}: expected {expected}, got {actual}")]
    ArgumentType {
        operator: String,
        index: usize,
        expected: String,
        actual: String,
    },

    #[error("{operator} returned {actual}, signature promises {expected}")]
    ResultType {
        operator: String,
        expected: String,
        actual: String,
    },

    #[error("{operator} raised unhandled fault: {fault}")]
    Fault { operator: String, fault: Fault },

    #[error(transparent)]
    Schema(#[from] SchemaError),
}

impl OperatorError {
    /// Returns the stable error code
    pub fn code(&self) -> &'static str {
        match self {
            OperatorError::NotFound(_) => "APPR_UNKNOWN_OPERATOR",
            OperatorError::InvalidSignature { .. } => "APPR_INVALID_SIGNATURE",
            OperatorError::ArityMismatch { .. } => "APPR_OPERATOR_ARITY",
            OperatorError::ArgumentType { .. } => "APPR_OPERATOR_ARGUMENT_TYPE",
            OperatorError::ResultType { .. } => "APPR_OPERATOR_RESULT_TYPE",
            OperatorError::Fault { .. } => "APPR_OPERATOR_FAULT",
            OperatorError::Schema(e) => e.code(),
        }
    }
}
