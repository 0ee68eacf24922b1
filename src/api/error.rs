use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;
use tracing::error;

use crate::record::Record;
use crate::store::StoreError;

/// Errors surfaced by the HTTP layer.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{type_name} with id {id} not found")]
    NotFound { type_name: &'static str, id: String },

    #[error("access denied")]
    Forbidden,

    #[error("{0}")]
    BadRequest(String),

    #[error(transparent)]
    Store(StoreError),

    #[error("{0}")]
    Internal(String),
}

/// JSON error body: `{"type": ..., "message": ...}`.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub message: String,
}

impl ApiError {
    /// The canonical "record absent" error for `R`.
    pub fn not_found<R: Record>(id: &R::Key) -> Self {
        ApiError::NotFound {
            type_name: R::TYPE_NAME,
            id: id.to_string(),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::NotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::Forbidden => StatusCode::FORBIDDEN,
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Store(_) | ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn kind(&self) -> &'static str {
        match self {
            ApiError::NotFound { .. } => "EntityNotFoundException",
            ApiError::Forbidden => "Forbidden",
            ApiError::BadRequest(_) => "BadRequest",
            ApiError::Store(_) | ApiError::Internal(_) => "InternalError",
        }
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::MissingKey { collection } => {
                ApiError::BadRequest(format!("missing identifier for {}", collection))
            }
            other => ApiError::Store(other),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();

        match &self {
            ApiError::Store(err) => error!(error = %err, "store failure"),
            ApiError::Internal(reason) => error!(%reason, "internal failure"),
            _ => {}
        }
        if let ApiError::Forbidden = self {
            return status.into_response();
        }

        let body = ErrorBody {
            kind: self.kind(),
            message: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}
