//! Handler errors and the extension traits that produce them.
//!
//! Handlers never build [`ApiError`] by hand for the two common cases:
//! [`StoreResultExt::during`] wraps a store failure with the operation that
//! hit it (and logs it there), and [`FoundExt::found`] turns a hydration miss
//! into a 404 naming the record.

use std::fmt::Display;

use axum::{
  Json,
  http::StatusCode,
  response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

type BoxedError = Box<dyn std::error::Error + Send + Sync>;

#[derive(Debug, Error)]
pub enum ApiError {
  #[error("{kind} {id} not found")]
  NotFound { kind: &'static str, id: String },

  #[error("{0}")]
  BadRequest(String),

  #[error("{operation} failed: {source}")]
  Store {
    operation: &'static str,
    #[source]
    source:    BoxedError,
  },
}

impl ApiError {
  pub fn not_found(kind: &'static str, id: impl Display) -> Self {
    ApiError::NotFound { kind, id: id.to_string() }
  }

  fn status(&self) -> StatusCode {
    match self {
      ApiError::NotFound { .. } => StatusCode::NOT_FOUND,
      ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
      ApiError::Store { .. } => StatusCode::INTERNAL_SERVER_ERROR,
    }
  }
}

impl IntoResponse for ApiError {
  fn into_response(self) -> Response {
    (self.status(), Json(json!({ "error": self.to_string() }))).into_response()
  }
}

/// Attach the failing operation to a store error.
pub trait StoreResultExt<T> {
  fn during(self, operation: &'static str) -> Result<T, ApiError>;
}

impl<T, E> StoreResultExt<T> for Result<T, E>
where
  E: std::error::Error + Send + Sync + 'static,
{
  fn during(self, operation: &'static str) -> Result<T, ApiError> {
    self.map_err(|e| {
      tracing::error!(error = %e, operation, "store failure");
      ApiError::Store { operation, source: Box::new(e) }
    })
  }
}

/// Turn a missing root record into a 404.
pub trait FoundExt<T> {
  fn found(self, kind: &'static str, id: impl Display) -> Result<T, ApiError>;
}

impl<T> FoundExt<T> for Option<T> {
  fn found(self, kind: &'static str, id: impl Display) -> Result<T, ApiError> {
    self.ok_or_else(|| ApiError::not_found(kind, id))
  }
}
