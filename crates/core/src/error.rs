//! Model errors
//!
//! Pure model errors with no I/O beyond configuration loading

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ModelError {
    /// A required field was set to null or left absent on a write path.
    #[error("Invalid value for `{field}`, must not be `None`")]
    InvalidArgument { field: &'static str },

    #[error("Missing required field `{field}` for {model}")]
    MissingField {
        model: &'static str,
        field: &'static str,
    },

    #[error("Invalid type for `{field}`: expected {expected}, found {found}")]
    InvalidType {
        field: &'static str,
        expected: &'static str,
        found: &'static str,
    },

    #[error("Unknown field `{field}` for {model}")]
    UnknownField { model: &'static str, field: String },

    #[error("Expected a mapping for {model}")]
    NotAnObject { model: &'static str },

    #[error("JSON error: {0}")]
    Json(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<serde_json::Error> for ModelError {
    fn from(err: serde_json::Error) -> Self {
        ModelError::Json(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, ModelError>;
