//! HTTP handlers for the four routes.

pub mod data;
pub mod index;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use reqmirror_core::error::ReqMirrorError;

/// Maps internal failures to a 500 carrying the stable error code.
pub struct HandlerError(ReqMirrorError);

impl From<ReqMirrorError> for HandlerError {
    fn from(e: ReqMirrorError) -> Self {
        Self(e)
    }
}

impl IntoResponse for HandlerError {
    fn into_response(self) -> Response {
        let code = self.0.client_code().as_str();
        tracing::error!(error = %self.0, code, "handler failed");
        (StatusCode::INTERNAL_SERVER_ERROR, Json(json!({ "error": code }))).into_response()
    }
}
