//! Error responses.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use layout_common::LayoutError;
use serde::Serialize;

/// Problem-detail body returned for failed requests.
#[derive(Debug, Clone, Serialize)]
pub struct ExceptionResponse {
    #[serde(rename = "type")]
    pub type_: String,
    pub title: String,
    pub status: u16,
    pub detail: String,
}

/// A [`LayoutError`] on its way out as an HTTP response.
#[derive(Debug)]
pub struct ApiError(pub LayoutError);

impl From<LayoutError> for ApiError {
    fn from(err: LayoutError) -> Self {
        ApiError(err)
    }
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        StatusCode::from_u16(self.0.http_status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }

    pub fn to_exception(&self) -> ExceptionResponse {
        let status = self.status();
        let type_ = match status.as_u16() {
            400 => "bad-request",
            404 => "not-found",
            _ => "server-error",
        };
        ExceptionResponse {
            type_: type_.to_string(),
            title: self.0.title().to_string(),
            status: status.as_u16(),
            detail: self.0.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self.0, "Request failed");
        }
        (status, Json(self.to_exception())).into_response()
    }
}
