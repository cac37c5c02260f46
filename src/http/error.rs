use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;
use tracing::error;

use crate::counter::{InvalidName, UnknownField};
use crate::view::RenderError;

/// Failures that change the response status.
///
/// Backend failures are not in here: they are logged and the request is
/// answered from the in-memory record.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    UnknownField(#[from] UnknownField),

    #[error(transparent)]
    InvalidName(#[from] InvalidName),

    #[error(transparent)]
    Render(#[from] RenderError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::UnknownField(err) => not_found(err.to_string()),
            ApiError::InvalidName(err) => not_found(err.to_string()),
            ApiError::Render(err) => {
                error!(error = %err, "template rendering failed");
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response()
            }
        }
    }
}

fn not_found(message: String) -> Response {
    (StatusCode::NOT_FOUND, Json(json!({ "error": message }))).into_response()
}
