//! HTTP error response mapping.

use std::fmt::Display;

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use rollcall_domain::error::RollcallError;

/// JSON error body returned by API endpoints.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    detail: Option<String>,
}

impl ErrorBody {
    fn message(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            detail: None,
        }
    }

    fn internal(detail: String) -> Self {
        Self {
            error: "Internal error".to_string(),
            detail: Some(detail),
        }
    }
}

/// Everything a handler can fail with, mapped to a status code and JSON body.
#[derive(Debug)]
pub enum ApiError {
    /// A use-case failed.
    Domain(RollcallError),
    /// The request body could not be read or decoded.
    MalformedBody(String),
    /// No route matches the method and path.
    RouteNotFound,
}

impl ApiError {
    /// Wrap a body read or decode failure.
    pub fn malformed_body(err: impl Display) -> Self {
        Self::MalformedBody(err.to_string())
    }
}

impl From<RollcallError> for ApiError {
    fn from(err: RollcallError) -> Self {
        Self::Domain(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            Self::Domain(RollcallError::Validation(err)) => {
                (StatusCode::BAD_REQUEST, ErrorBody::message(err.to_string()))
            }
            Self::Domain(RollcallError::NotFound(err)) => {
                tracing::debug!(%err, "record not found");
                (StatusCode::NOT_FOUND, ErrorBody::message("Record not found"))
            }
            Self::Domain(RollcallError::Storage(err)) => {
                tracing::error!(error = %err, "storage error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorBody::internal(err.to_string()),
                )
            }
            Self::MalformedBody(detail) => {
                tracing::warn!(%detail, "malformed request body");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorBody::internal(detail),
                )
            }
            Self::RouteNotFound => (StatusCode::NOT_FOUND, ErrorBody::message("Not Found")),
        };

        (status, Json(body)).into_response()
    }
}

/// Fallback handler for unmatched paths and unsupported methods.
pub async fn not_found() -> ApiError {
    ApiError::RouteNotFound
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;
    use rollcall_domain::error::{NotFoundError, ValidationError};

    async fn render(err: ApiError) -> (StatusCode, serde_json::Value) {
        let response = err.into_response();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn should_map_validation_to_bad_request() {
        let err = RollcallError::from(ValidationError::MissingRequiredField { field: "name" });
        let (status, body) = render(err.into()).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Field 'name' and 'labels' are required.");
        assert!(body.get("detail").is_none());
    }

    #[tokio::test]
    async fn should_map_missing_record_to_not_found() {
        let err = RollcallError::from(NotFoundError {
            entity: "Attendance",
            id: "9".to_string(),
        });
        let (status, body) = render(err.into()).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "Record not found");
    }

    #[tokio::test]
    async fn should_expose_storage_detail_on_internal_error() {
        let err = RollcallError::Storage(Box::new(std::io::Error::other("database is locked")));
        let (status, body) = render(err.into()).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"], "Internal error");
        assert_eq!(body["detail"], "database is locked");
    }

    #[tokio::test]
    async fn should_map_malformed_body_to_internal_error() {
        let (status, body) = render(ApiError::malformed_body("expected value")).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"], "Internal error");
        assert_eq!(body["detail"], "expected value");
    }

    #[tokio::test]
    async fn should_render_generic_route_not_found() {
        let (status, body) = render(ApiError::RouteNotFound).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, serde_json::json!({ "error": "Not Found" }));
    }
}
