//! HTTP mapping for [`TallyError`].

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use tally_core::error::TallyError;

/// Handler-level error. Only client-safe messages leave the process.
#[derive(Debug)]
pub struct ApiError(pub TallyError);

impl From<TallyError> for ApiError {
    fn from(e: TallyError) -> Self {
        Self(e)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let code = self.0.client_code();
        let (status, msg) = if self.0.is_client_safe() {
            tracing::debug!(error = %self.0, "request rejected");
            (StatusCode::BAD_REQUEST, self.0.to_string())
        } else {
            tracing::error!(error = %self.0, "request failed");
            (StatusCode::INTERNAL_SERVER_ERROR, "internal error".to_string())
        };

        let body = json!({
            "error": {
                "code": code.as_str(),
                "msg": msg,
            }
        });
        (status, Json(body)).into_response()
    }
}
