//! API error surface
//!
//! One error type per request outcome, owning the status mapping and the
//! Spanish detail bodies. Internal causes are logged here and never leak
//! to the client.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use investigacion_core::FieldError;
use serde_json::json;
use thiserror::Error;
use tracing::error;

use crate::store::ResolveError;

/// Errors a request handler can surface to the client
#[derive(Debug, Error)]
pub enum ApiError {
    /// Required fields missing from the request body
    #[error("invalid request body ({0:?})")]
    Validation(Vec<FieldError>),

    /// File name never generated
    #[error("unknown file name: {0}")]
    NotFound(String),

    /// File generated but since removed from disk
    #[error("file no longer on disk: {0}")]
    Gone(String),

    /// Rendering or I/O failure
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl From<ResolveError> for ApiError {
    fn from(err: ResolveError) -> Self {
        match err {
            ResolveError::NotFound(name) => ApiError::NotFound(name),
            ResolveError::Gone(name) => ApiError::Gone(name),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Validation(errors) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(json!({ "detail": errors })),
            )
                .into_response(),

            ApiError::NotFound(_) => (
                StatusCode::NOT_FOUND,
                Json(json!({ "detail": "Archivo no encontrado" })),
            )
                .into_response(),

            ApiError::Gone(_) => (
                StatusCode::GONE,
                Json(json!({ "detail": "El archivo ya no está disponible" })),
            )
                .into_response(),

            ApiError::Internal(err) => {
                error!("request failed: {:#}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "detail": "Error interno del servidor" })),
                )
                    .into_response()
            }
        }
    }
}
