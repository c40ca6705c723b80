//! Error types for the metadata and class model

use thiserror::Error;

/// Result type alias for model operations
pub type ModelResult<T> = Result<T, ModelError>;

/// Error type for metadata and class model operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ModelError {
    /// A member, class or namespace name is not a valid identifier
    #[error("invalid {kind} identifier: '{name}'")]
    InvalidIdentifier { kind: &'static str, name: String },

    /// A type reference was empty after normalization
    #[error("type name cannot be empty")]
    EmptyTypeName,

    /// Two properties of the same type share a name
    #[error("duplicate property '{property}' in type '{type_name}'")]
    DuplicateProperty { type_name: String, property: String },

    /// Serialization/deserialization error
    #[error("serialization error: {0}")]
    Serialization(String),
}

impl ModelError {
    /// Create an invalid identifier error
    pub fn invalid_identifier(kind: &'static str, name: impl Into<String>) -> Self {
        ModelError::InvalidIdentifier {
            kind,
            name: name.into(),
        }
    }
}

impl From<serde_json::Error> for ModelError {
    fn from(err: serde_json::Error) -> Self {
        ModelError::Serialization(err.to_string())
    }
}
