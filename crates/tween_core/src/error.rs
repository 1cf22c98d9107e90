//! Field access error types

use crate::value::ValueKind;
use thiserror::Error;

/// Why a field could not be bound or written
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FieldError {
    /// The host has no field with this name
    #[error("unknown field `{field}`")]
    UnknownField { field: String },

    /// The field exists but the host marks it immutable
    #[error("field `{field}` is read-only")]
    ReadOnlyField { field: String },

    /// The field's type cannot be interpolated
    #[error("field `{field}` of type {kind} is not interpolatable")]
    NotInterpolatable { field: String, kind: ValueKind },

    /// The assigned value is incompatible with the field's type
    #[error("field `{field}` expects {expected}, got {found}")]
    TypeMismatch {
        field: String,
        expected: ValueKind,
        found: ValueKind,
    },
}

impl FieldError {
    /// Name of the field the error refers to
    pub fn field(&self) -> &str {
        match self {
            FieldError::UnknownField { field }
            | FieldError::ReadOnlyField { field }
            | FieldError::NotInterpolatable { field, .. }
            | FieldError::TypeMismatch { field, .. } => field,
        }
    }
}

/// Result type for field operations
pub type Result<T> = std::result::Result<T, FieldError>;
