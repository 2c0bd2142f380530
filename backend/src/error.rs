//! Error taxonomy and its HTTP mapping.
//!
//! Every fallible operation in the crate returns [`TodoError`]. The
//! translation to HTTP status codes lives in exactly one place, the
//! [`IntoResponse`] impl below, so handlers propagate errors with `?`
//! instead of mapping statuses themselves.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

/// Result type alias for repository and handler operations.
pub type Result<T> = std::result::Result<T, TodoError>;

/// Failure modes of the todo backend.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TodoError {
    /// An id-based lookup matched no row.
    #[error("Todo not found")]
    NotFound,

    /// A database operation failed. The message is logged, never sent to
    /// the client.
    #[error("Database error: {0}")]
    Database(String),

    /// A request carried a semantically invalid payload.
    #[error("Validation error: {0}")]
    Validation(String),
}

impl TodoError {
    /// Status code this error maps to.
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
        }
    }
}

impl IntoResponse for TodoError {
    fn into_response(self) -> Response {
        let status = self.status();

        if status.is_server_error() {
            tracing::error!(status = %status, error = %self, "Request failed");
        }

        match self {
            // Unexpected faults return a literal JSON `null` body.
            Self::Database(_) => (status, Json(serde_json::Value::Null)).into_response(),
            // Not-found and validation responses carry no body.
            Self::NotFound | Self::Validation(_) => status.into_response(),
        }
    }
}
