//! Session error types.

use budgetgen_shared::AppError;
use thiserror::Error;
use uuid::Uuid;

/// Session-related errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    /// No session with this ID exists (or it has been discarded).
    #[error("Session not found: {0}")]
    NotFound(Uuid),

    /// The document identifier is not one of the two program documents.
    #[error("Unknown document kind: {0}")]
    UnknownDocument(String),

    /// Uploads are constrained to PDF content.
    #[error("Only PDF uploads are accepted (got {0})")]
    InvalidContentType(String),

    /// The upload exceeds the configured size limit.
    #[error("File of {size} bytes exceeds the upload limit of {limit} bytes")]
    FileTooLarge {
        /// Size of the rejected upload.
        size: u64,
        /// Configured maximum.
        limit: u64,
    },

    /// Generation requires both program documents.
    #[error("Both program documents must be uploaded before budgets are generated")]
    DocumentsMissing,
}

impl From<SessionError> for AppError {
    fn from(err: SessionError) -> Self {
        match &err {
            SessionError::NotFound(_) | SessionError::UnknownDocument(_) => {
                Self::NotFound(err.to_string())
            }
            SessionError::InvalidContentType(_) => Self::Validation(err.to_string()),
            SessionError::FileTooLarge { .. } => Self::PayloadTooLarge(err.to_string()),
            SessionError::DocumentsMissing => Self::Conflict(err.to_string()),
        }
    }
}
