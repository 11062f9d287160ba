//! Fallback responses for requests that match no route.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Extension, Json,
};
use serde::Serialize;

use crate::middleware::RequestId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum AppError {
    #[error("Not Found")]
    NotFound,

    #[error("Method Not Allowed")]
    MethodNotAllowed,
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
        }
    }

    /// Log the unmatched request, tagged with its request id when present.
    fn logged(self, request_id: Option<Extension<RequestId>>) -> Self {
        match request_id {
            Some(Extension(RequestId(id))) => {
                tracing::debug!(request_id = %id, status = self.status().as_u16(), "No route matched")
            }
            None => tracing::debug!(status = self.status().as_u16(), "No route matched"),
        }
        self
    }
}

/// JSON body sent with fallback responses.
#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
    status: u16,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = ErrorBody {
            error: self.to_string(),
            status: status.as_u16(),
        };
        (status, Json(body)).into_response()
    }
}

/// Router fallback for unknown paths.
pub async fn not_found(request_id: Option<Extension<RequestId>>) -> AppError {
    AppError::NotFound.logged(request_id)
}

/// Router fallback for known paths requested with an unsupported method.
pub async fn method_not_allowed(request_id: Option<Extension<RequestId>>) -> AppError {
    AppError::MethodNotAllowed.logged(request_id)
}
