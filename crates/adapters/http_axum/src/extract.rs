//! Request extractors that reject with [`ApiError`] instead of axum's
//! plain-text rejections.

use axum::body::Bytes;
use axum::extract::{FromRequest, FromRequestParts, Request};
use axum::http::request::Parts;
use serde::de::DeserializeOwned;

use rollcall_domain::error::{NotFoundError, RollcallError};
use rollcall_domain::id::{AttendanceId, ParseIdError};

use crate::error::ApiError;

/// JSON request body.
///
/// Unlike [`axum::Json`] the `Content-Type` header is not checked, and any
/// read or decode failure becomes [`ApiError::MalformedBody`].
pub struct JsonBody<T>(pub T);

impl<S, T> FromRequest<S> for JsonBody<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(ApiError::malformed_body)?;
        serde_json::from_slice(&bytes)
            .map(Self)
            .map_err(ApiError::malformed_body)
    }
}

/// The `{id}` segment of `/attendance/{id}`.
///
/// Read from the raw, still percent-encoded path. Only ASCII digits name a
/// record, so `%31` is not id 1; any other segment means the path is not a
/// record path at all and rejects with [`ApiError::RouteNotFound`].
pub struct RecordId(pub AttendanceId);

impl<S> FromRequestParts<S> for RecordId
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let raw = parts
            .uri
            .path()
            .rsplit('/')
            .next()
            .ok_or(ApiError::RouteNotFound)?;

        match raw.parse::<AttendanceId>() {
            Ok(id) => Ok(Self(id)),
            Err(ParseIdError::NotNumeric) => Err(ApiError::RouteNotFound),
            // Too large to be a row id, so no such row can exist.
            Err(ParseIdError::OutOfRange) => Err(ApiError::from(RollcallError::from(
                NotFoundError {
                    entity: "Attendance",
                    id: raw.to_string(),
                },
            ))),
        }
    }
}
