//! Error types for the MedAssyst client
//!
//! One error enum covers the whole taxonomy: transport failures, non-success
//! HTTP statuses, malformed responses, and local configuration/session
//! problems. Transport-level failures are the ones the retry layer acts on;
//! everything else surfaces to the command layer as a printable message.

use thiserror::Error;

/// Main error type for the MedAssyst client
#[derive(Error, Debug)]
pub enum AssistError {
    /// HTTP transport errors (timeout, connection refused, DNS)
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    /// Non-success HTTP status from the backend
    #[error("API error ({status}): {message}")]
    ApiError { status: u16, message: String },

    /// Response body did not match the expected shape
    #[error("Unexpected response: {0}")]
    ResponseShape(String),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    /// I/O errors (config and session files)
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Credential verification failed
    #[error("Authentication failed: {0}")]
    AuthError(String),

    /// Client-side input validation failure
    #[error("Invalid input: {0}")]
    ValidationError(String),

    /// Timeout errors
    #[error("Operation timed out after {duration_ms}ms")]
    Timeout { duration_ms: u64 },

    /// Generic errors with context
    #[error("{0}")]
    Generic(String),
}

/// Result type alias for client operations
pub type Result<T> = std::result::Result<T, AssistError>;

/// Convert anyhow errors to AssistError
impl From<anyhow::Error> for AssistError {
    fn from(err: anyhow::Error) -> Self {
        AssistError::Generic(err.to_string())
    }
}
