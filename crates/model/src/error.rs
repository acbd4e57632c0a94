//! Error types for the model introspection layer
//!
//! Most lookups on a wrapped record fail softly (a missing `ID` or
//! timestamp field is simply skipped). The variants below cover the few
//! places where absence or a bad value has to reach the caller.

use crate::model::record::{FieldKind, FieldValue};

/// Result type alias for model operations
pub type ModelResult<T> = Result<T, ModelError>;

/// Error types for model introspection
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ModelError {
    /// A field the operation cannot proceed without is not registered
    #[error("model {model} is missing required field {field}")]
    MissingField { model: String, field: String },

    /// A value could not be coerced into the field's declared kind
    #[error("cannot assign {value} to field {field} of type {}", .kind.type_name())]
    InvalidFieldValue {
        field: String,
        kind: FieldKind,
        value: FieldValue,
    },

    /// Configuration could not be loaded or parsed
    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl ModelError {
    pub(crate) fn missing_field(model: impl Into<String>, field: impl Into<String>) -> Self {
        ModelError::MissingField {
            model: model.into(),
            field: field.into(),
        }
    }
}

impl From<serde_yaml::Error> for ModelError {
    fn from(err: serde_yaml::Error) -> Self {
        ModelError::Configuration(err.to_string())
    }
}

impl From<std::io::Error> for ModelError {
    fn from(err: std::io::Error) -> Self {
        ModelError::Configuration(err.to_string())
    }
}
