//! Shared error type across tally crates.

use thiserror::Error;

use crate::metrics::DuplicateMetricError;

/// Client-facing error codes (stable API).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientCode {
    /// Invalid input / malformed request or config.
    BadRequest,
    /// Internal server error.
    Internal,
}

impl ClientCode {
    /// String representation used in JSON responses.
    pub fn as_str(self) -> &'static str {
        match self {
            ClientCode::BadRequest => "BAD_REQUEST",
            ClientCode::Internal => "INTERNAL",
        }
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, TallyError>;

/// Unified error type used by core and server.
#[derive(Debug, Error)]
pub enum TallyError {
    #[error("validation failed: {0}")]
    Validation(String),
    #[error("persistence: {0}")]
    Persistence(String),
    #[error(transparent)]
    DuplicateMetric(#[from] DuplicateMetricError),
    #[error("config: {0}")]
    Config(String),
    #[error("internal: {0}")]
    Internal(String),
}

impl TallyError {
    /// Map internal error to a stable client-facing code.
    pub fn client_code(&self) -> ClientCode {
        match self {
            TallyError::Validation(_) | TallyError::Config(_) => ClientCode::BadRequest,
            TallyError::Persistence(_)
            | TallyError::DuplicateMetric(_)
            | TallyError::Internal(_) => ClientCode::Internal,
        }
    }

    /// Whether the message may be shown to a client verbatim.
    pub fn is_client_safe(&self) -> bool {
        matches!(self.client_code(), ClientCode::BadRequest)
    }
}
