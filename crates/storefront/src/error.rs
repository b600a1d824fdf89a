//! Unified error handling for the catalog site.
//!
//! Provides a unified `AppError` type that logs the cause before responding
//! to the client. All route handlers return `Result<T, AppError>`. Response
//! bodies are always generic; the underlying detail goes to the tracing
//! output only.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::db::RepositoryError;
use crate::db::schema::SchemaStatus;

/// Application-level error type for the storefront.
#[derive(Debug, Error)]
pub enum AppError {
    /// The store has no schema at all; bootstrap has not run.
    #[error("store schema is not initialized")]
    SchemaUninitialized,

    /// The store schema does not match the current entity definitions.
    #[error("store schema is out of date")]
    SchemaStale,

    /// Database operation failed.
    #[error("database error: {0}")]
    Database(#[from] RepositoryError),

    /// Resource not found.
    #[error("not found: {0}")]
    NotFound(String),
}

impl AppError {
    /// Convert a non-`Ready` schema status into the matching error.
    ///
    /// # Errors
    ///
    /// Returns `SchemaUninitialized` or `SchemaStale` for the corresponding
    /// statuses; `Ready` is `Ok`.
    pub const fn require_ready(status: SchemaStatus) -> std::result::Result<(), Self> {
        match status {
            SchemaStatus::Ready => Ok(()),
            SchemaStatus::Uninitialized => Err(Self::SchemaUninitialized),
            SchemaStatus::Stale => Err(Self::SchemaStale),
        }
    }
}

impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        Self::Database(RepositoryError::Database(err))
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if !matches!(self, Self::NotFound(_)) {
            tracing::error!(error = %self, "Request error");
        }

        let status = match &self {
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::SchemaUninitialized | Self::SchemaStale | Self::Database(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        // Don't expose internal error details to clients
        let message = match &self {
            Self::NotFound(_) => "Not found",
            Self::SchemaUninitialized | Self::SchemaStale | Self::Database(_) => {
                "Internal server error"
            }
        };

        (status, message).into_response()
    }
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_error_display() {
        let err = AppError::NotFound("product 123".to_string());
        assert_eq!(err.to_string(), "not found: product 123");

        assert_eq!(
            AppError::SchemaStale.to_string(),
            "store schema is out of date"
        );
    }

    #[test]
    fn test_require_ready() {
        assert!(AppError::require_ready(SchemaStatus::Ready).is_ok());
        assert!(matches!(
            AppError::require_ready(SchemaStatus::Uninitialized),
            Err(AppError::SchemaUninitialized)
        ));
        assert!(matches!(
            AppError::require_ready(SchemaStatus::Stale),
            Err(AppError::SchemaStale)
        ));
    }

    #[test]
    fn test_app_error_status_codes() {
        fn get_status(err: AppError) -> StatusCode {
            err.into_response().status()
        }

        assert_eq!(
            get_status(AppError::NotFound("test".to_string())),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            get_status(AppError::SchemaUninitialized),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            get_status(AppError::SchemaStale),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            get_status(AppError::Database(RepositoryError::DataCorruption(
                "bad row".to_string()
            ))),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
