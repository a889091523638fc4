//! Error-to-response mapping.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use tracing::error;

use budgetgen_shared::AppError;

/// Wrapper that turns any domain error into a JSON error response.
///
/// Every body has the shape `{"error": <CODE>, "message": <text>}` with
/// the status taken from [`AppError::status_code`].
#[derive(Debug)]
pub struct ApiError(AppError);

impl<E> From<E> for ApiError
where
    E: Into<AppError>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.0.status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        if status.is_server_error() {
            error!(error = %self.0, "Request failed");
        }
        let body = Json(json!({
            "error": self.0.error_code(),
            "message": self.0.to_string(),
        }));
        (status, body).into_response()
    }
}
