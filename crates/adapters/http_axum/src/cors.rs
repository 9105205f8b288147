//! CORS handling.
//!
//! Every response carries the same three `Access-Control-*` headers, and any
//! `OPTIONS` request is answered directly with `204 No Content` regardless of
//! its path.

use axum::extract::Request;
use axum::http::header::{
    ACCESS_CONTROL_ALLOW_HEADERS, ACCESS_CONTROL_ALLOW_METHODS, ACCESS_CONTROL_ALLOW_ORIGIN,
};
use axum::http::{HeaderMap, HeaderValue, Method, StatusCode};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};

/// Value of `Access-Control-Allow-Methods`.
pub const ALLOWED_METHODS: &str = "GET,POST,PUT,DELETE,OPTIONS";
/// Value of `Access-Control-Allow-Headers`.
pub const ALLOWED_HEADERS: &str = "Content-Type";

fn apply(headers: &mut HeaderMap) {
    headers.insert(ACCESS_CONTROL_ALLOW_ORIGIN, HeaderValue::from_static("*"));
    headers.insert(
        ACCESS_CONTROL_ALLOW_METHODS,
        HeaderValue::from_static(ALLOWED_METHODS),
    );
    headers.insert(
        ACCESS_CONTROL_ALLOW_HEADERS,
        HeaderValue::from_static(ALLOWED_HEADERS),
    );
}

/// Middleware for [`axum::middleware::from_fn`].
pub async fn middleware(request: Request, next: Next) -> Response {
    let mut response = if request.method() == Method::OPTIONS {
        StatusCode::NO_CONTENT.into_response()
    } else {
        next.run(request).await
    };
    apply(response.headers_mut());
    response
}
