use thiserror::Error;

/// Validation and contract errors exposed by `cardmark-core`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("invalid symbol '{value}': {reason}")]
    InvalidSymbol { value: String, reason: &'static str },

    #[error("invalid range '{value}', expected one of 1D, 1W, 1M, 1Y")]
    InvalidRange { value: String },

    #[error("directive marker cannot be empty or contain whitespace")]
    InvalidMarker,
    #[error("directive type '{type_name}' is registered more than once")]
    DuplicateDirectiveType { type_name: String },

    #[error("request_id must be at least 8 characters")]
    InvalidRequestId,
    #[error("schema_version must match vMAJOR.MINOR.PATCH: '{value}'")]
    InvalidSchemaVersion { value: String },

    #[error("error code cannot be empty")]
    EmptyErrorCode,
    #[error("error message cannot be empty")]
    EmptyErrorMessage,
}

/// Top-level error type for core operations.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
