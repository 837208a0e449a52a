use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::response::{ApiResponse, Meta};

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Order not found")]
    NotFound,

    #[error("{0}")]
    BadRequest(String),

    /// One message per violated field rule, in rule order.
    #[error("Validation failed")]
    Validation(Vec<String>),

    #[error("Order ID already exists")]
    DuplicateOrderId,

    #[error("Database error")]
    DbError(#[from] sqlx::Error),

    #[error("Internal Server Error")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, data) = match &self {
            AppError::NotFound => (
                StatusCode::NOT_FOUND,
                serde_json::json!({ "error": self.to_string() }),
            ),
            AppError::BadRequest(_) | AppError::DuplicateOrderId => (
                StatusCode::BAD_REQUEST,
                serde_json::json!({ "error": self.to_string() }),
            ),
            AppError::Validation(errors) => (
                StatusCode::BAD_REQUEST,
                serde_json::json!({ "errors": errors }),
            ),
            AppError::DbError(err) => {
                // Full detail stays server-side; the caller only sees a
                // generic message.
                tracing::error!(error = %err, "database error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    serde_json::json!({ "error": self.to_string() }),
                )
            }
            AppError::Internal(err) => {
                tracing::error!(error = %err, "internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    serde_json::json!({ "error": self.to_string() }),
                )
            }
        };

        let body = ApiResponse {
            message: self.to_string(),
            data: Some(data),
            meta: Some(Meta::empty()),
        };

        (status, axum::Json(body)).into_response()
    }
}

/// Postgres unique_violation; the only unique key on orders is order_id.
pub fn is_unique_violation(err: &sqlx::Error) -> bool {
    matches!(err, sqlx::Error::Database(db) if db.code().as_deref() == Some("23505"))
}

pub type AppResult<T> = Result<T, AppError>;
