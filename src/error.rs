//! Claimcheck error types

use std::time::Duration;

use crate::types::ErrorResult;

/// Claimcheck error types.
///
/// Every failure on a request path ends up as one of these variants, and
/// every variant converts into the wire-level [`ErrorResult`].
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ClaimcheckError {
    // Remote model status errors
    #[error("The model is temporarily unavailable. Please try again in a few moments.")]
    ModelUnavailable,

    #[error("Model server encountered an error. Please try again later.")]
    ServerError,

    #[error("Too many requests. Please wait a moment and try again.")]
    RateLimited,

    #[error("Invalid or expired API token.")]
    AuthenticationFailed,

    #[error("Invalid input: {body}")]
    BadRequest { body: String },

    #[error("Model API returned status {status}")]
    Http { status: u16 },

    // Transport errors
    #[error("Request to model API timed out after {} seconds.", .timeout.as_secs())]
    Timeout { timeout: Duration },

    #[error("Failed to connect to model API. Check your internet connection.")]
    Connection(String),

    #[error("An unexpected error occurred: {0}")]
    Unexpected(String),

    // Data errors
    #[error("Failed to parse classifier response: {0}")]
    Parsing(String),

    #[error("{0}")]
    InvalidInput(String),

    // Startup errors
    #[error("configuration error: {0}")]
    Configuration(String),
}

impl ClaimcheckError {
    /// Short machine-readable category reported in the `error` field.
    pub fn category(&self) -> &'static str {
        match self {
            Self::ModelUnavailable => "model_unavailable",
            Self::ServerError => "server_error",
            Self::RateLimited => "rate_limited",
            Self::AuthenticationFailed => "authentication_failed",
            Self::BadRequest { .. } => "bad_request",
            Self::Http { .. } => "http_error",
            Self::Timeout { .. } => "timeout",
            Self::Connection(_) => "connection_error",
            Self::Unexpected(_) => "unexpected_error",
            Self::Parsing(_) => "parsing_error",
            Self::InvalidInput(_) => "validation_error",
            Self::Configuration(_) => "configuration_error",
        }
    }

    /// HTTP status surfaced to the caller.
    pub fn status_code(&self) -> u16 {
        match self {
            Self::ModelUnavailable => 503,
            Self::ServerError => 500,
            Self::RateLimited => 429,
            Self::AuthenticationFailed => 401,
            Self::BadRequest { .. } => 400,
            Self::Http { status } => *status,
            Self::Timeout { .. } => 504,
            Self::Connection(_) => 503,
            Self::Unexpected(_) | Self::Parsing(_) | Self::Configuration(_) => 500,
            Self::InvalidInput(_) => 422,
        }
    }

    /// Whether the failure came from the remote model or the transport to it.
    pub fn is_upstream(&self) -> bool {
        !matches!(
            self,
            Self::Parsing(_) | Self::InvalidInput(_) | Self::Configuration(_)
        )
    }

    /// Wire representation of this error.
    pub fn to_error_result(&self) -> ErrorResult {
        ErrorResult {
            error: self.category().to_string(),
            message: self.to_string(),
            status_code: self.status_code(),
        }
    }
}

impl From<ClaimcheckError> for ErrorResult {
    fn from(err: ClaimcheckError) -> Self {
        err.to_error_result()
    }
}

/// Result type alias for claimcheck operations
pub type Result<T> = std::result::Result<T, ClaimcheckError>;
