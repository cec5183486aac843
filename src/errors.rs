// src/errors.rs

use actix_web::{HttpResponse, ResponseError};
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
  #[error("Validation Error: {0}")]
  Validation(String),

  #[error("Resource Not Found: {0}")]
  NotFound(String),

  #[error("Configuration Error: {0}")]
  Config(String),

  #[error("Database Error: {0}")]
  Sqlx(#[from] sqlx::Error),

  // File-storage failures (writes, deletes) surface through here. A failed
  // image write after the product row committed is reported, not rolled back.
  #[error("File Storage Error: {0}")]
  Io(#[from] std::io::Error),

  #[error("Internal Server Error: {0}")]
  Internal(String),
}

// Allow anyhow::Error to be converted into AppError::Internal for convenience
// in handlers that use `?` on functions returning anyhow::Result.
impl From<anyhow::Error> for AppError {
  fn from(err: anyhow::Error) -> Self {
    if err.is::<sqlx::Error>() {
      return AppError::Sqlx(err.downcast::<sqlx::Error>().unwrap());
    }
    if err.is::<std::io::Error>() {
      return AppError::Io(err.downcast::<std::io::Error>().unwrap());
    }
    AppError::Internal(err.to_string())
  }
}

impl ResponseError for AppError {
  fn error_response(&self) -> HttpResponse {
    // Log the full error when it's turned into a response
    tracing::error!(application_error = %self, "Responding with error");
    match self {
      AppError::Validation(m) => HttpResponse::BadRequest().json(json!({"error": m})),
      AppError::NotFound(m) => HttpResponse::NotFound().json(json!({"error": m})),
      AppError::Config(m) => {
        HttpResponse::InternalServerError().json(json!({"error": "Configuration issue", "detail": m}))
      }
      AppError::Sqlx(_) => HttpResponse::InternalServerError().json(json!({"error": "Database operation failed"})),
      AppError::Io(_) => {
        // The row-level work may already have committed; the client is told the
        // upload failed so other fields are not silently lost.
        HttpResponse::InternalServerError().json(json!({"error": "Image storage failed, other fields unchanged"}))
      }
      AppError::Internal(m) => {
        HttpResponse::InternalServerError().json(json!({"error": "An internal error occurred", "detail": m}))
      }
    }
  }
}

// Define a Result type alias for the application
pub type Result<T, E = AppError> = std::result::Result<T, E>;
