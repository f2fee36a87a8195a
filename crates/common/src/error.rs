//! Common error types and handling for Curio

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

/// Common result type
pub type Result<T> = std::result::Result<T, Error>;

/// Message returned to clients for every 5xx response
pub const SERVER_ERROR_MESSAGE: &str = "Server error";

/// Common error type for the Curio application
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Unexpected error: {0}")]
    Unexpected(#[from] anyhow::Error),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Conflict(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl Error {
    /// Get the appropriate HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Error::Validation(_) => StatusCode::BAD_REQUEST,
            Error::NotFound(_) => StatusCode::NOT_FOUND,
            // Like-state conflicts are reported as bad requests to keep the
            // existing client contract.
            Error::Conflict(_) => StatusCode::BAD_REQUEST,
            Error::Unexpected(_)
            | Error::Database(_)
            | Error::Serialization(_)
            | Error::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the error code used in logs
    pub fn error_code(&self) -> &'static str {
        match self {
            Error::Unexpected(_) => "UNEXPECTED_ERROR",
            Error::Database(_) => "DATABASE_ERROR",
            Error::Serialization(_) => "SERIALIZATION_ERROR",
            Error::Validation(_) => "VALIDATION_ERROR",
            Error::NotFound(_) => "NOT_FOUND",
            Error::Conflict(_) => "CONFLICT",
            Error::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Whether this error is a server-side failure
    pub fn is_internal(&self) -> bool {
        self.status_code() == StatusCode::INTERNAL_SERVER_ERROR
    }

    /// Response body: `{message}` for client errors, `{message, error}` for server errors
    pub fn body(&self) -> serde_json::Value {
        if self.is_internal() {
            json!({
                "message": SERVER_ERROR_MESSAGE,
                "error": self.to_string(),
            })
        } else {
            json!({ "message": self.to_string() })
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = self.status_code();

        // Log internal errors with full context
        if self.is_internal() {
            tracing::error!(error = %self, code = self.error_code(), "Internal server error");
        } else {
            tracing::debug!(error = %self, code = self.error_code(), status = %status, "Request rejected");
        }

        (status, Json(self.body())).into_response()
    }
}
