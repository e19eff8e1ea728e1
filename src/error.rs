use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Id allocation failed: {0}")]
    Allocation(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Not found: {0}")]
    NotFound(String),
}

impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        AppError::Validation(err.to_string())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            AppError::Database(ref e) => {
                tracing::error!("Database error: {:?}", e);
                // Connection-class failures mean the store itself is
                // unreachable, not that the query was bad.
                match e {
                    sqlx::Error::Io(_) | sqlx::Error::PoolTimedOut => {
                        (StatusCode::SERVICE_UNAVAILABLE, "Database unavailable")
                    }
                    _ => (StatusCode::INTERNAL_SERVER_ERROR, "Database error occurred"),
                }
            }
            AppError::Allocation(ref msg) => {
                tracing::error!("Id allocation failed: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, "Failed to generate task id")
            }
            AppError::Validation(ref msg) => (StatusCode::BAD_REQUEST, msg.as_str()),
            AppError::NotFound(ref msg) => (StatusCode::NOT_FOUND, msg.as_str()),
        };

        let body = Json(json!({
            "error": error_message,
        }));

        (status, body).into_response()
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
