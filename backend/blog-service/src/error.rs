/// Error types for Blog Service
///
/// Errors are converted to appropriate HTTP responses for API clients.
/// Validation failures carry the per-field errors so clients can re-render
/// the offending form fields.
use actix_web::{error::ResponseError, http::StatusCode, HttpResponse};
use thiserror::Error;

/// Result type for blog-service operations
pub type Result<T> = std::result::Result<T, AppError>;

/// Application error types
#[derive(Debug, Error)]
pub enum AppError {
    /// Database operation failed
    #[error("Database error: {0}")]
    DatabaseError(String),

    /// Cache operation failed
    #[error("Cache error: {0}")]
    CacheError(String),

    /// Validation failed
    #[error("Validation error: {0}")]
    ValidationError(validator::ValidationErrors),

    /// Resource not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Unauthorized access
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// Conflict (duplicate resource, etc.)
    #[error("Conflict: {0}")]
    Conflict(String),

    /// Bad request
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Internal server error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Convert a write error, treating a foreign-key violation on the given
    /// author/user constraint as a revoked account rather than a server
    /// fault. A bearer token can outlive the account it was issued for; the
    /// insert is where that finally surfaces.
    pub fn from_write_error(err: sqlx::Error, author_fk: &str) -> Self {
        if let sqlx::Error::Database(db) = &err {
            if db.constraint() == Some(author_fk) {
                return AppError::Unauthorized("account no longer exists".to_string());
            }
        }

        err.into()
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::DatabaseError(_) | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::CacheError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            AppError::Conflict(_) => StatusCode::CONFLICT,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();

        match self {
            AppError::ValidationError(errors) => {
                HttpResponse::build(status).json(serde_json::json!({
                    "error": "Validation error",
                    "field_errors": errors,
                    "status": status.as_u16(),
                }))
            }
            other => HttpResponse::build(status).json(serde_json::json!({
                "error": other.to_string(),
                "status": status.as_u16(),
            })),
        }
    }
}

impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::RowNotFound => AppError::NotFound("record not found".to_string()),
            other => AppError::DatabaseError(other.to_string()),
        }
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        AppError::ValidationError(errors)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Internal(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn write_errors_without_an_author_violation_use_the_standard_mapping() {
        let err = AppError::from_write_error(sqlx::Error::RowNotFound, "posts_author_id_fkey");
        assert!(matches!(err, AppError::NotFound(_)));

        let err = AppError::from_write_error(sqlx::Error::PoolTimedOut, "posts_author_id_fkey");
        assert!(matches!(err, AppError::DatabaseError(_)));
    }
}
