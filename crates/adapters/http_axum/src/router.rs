//! Axum router assembly.

use axum::Router;
use axum::extract::Request;
use axum::http::Method;
use axum::middleware::{self, Next};
use axum::response::{IntoResponse, Response};
use tower_http::trace::TraceLayer;

use rollcall_app::ports::AttendanceRepository;

use crate::error::{ApiError, not_found};
use crate::state::AppState;

/// axum derives `HEAD` from every `GET` route; no route here serves it.
async fn refuse_head(request: Request, next: Next) -> Response {
    if request.method() == Method::HEAD {
        return ApiError::RouteNotFound.into_response();
    }
    next.run(request).await
}

/// Build the top-level axum [`Router`].
///
/// Unmatched paths answer the generic JSON 404. The CORS middleware wraps
/// every route and the fallback, so preflight works on any path. A
/// [`TraceLayer`] outermost logs each HTTP request/response at the `DEBUG`
/// level using the `tracing` ecosystem.
pub fn build<R>(state: AppState<R>) -> Router
where
    R: AttendanceRepository + Send + Sync + 'static,
{
    Router::new()
        .merge(crate::api::routes::<R>())
        .fallback(not_found)
        .layer(middleware::from_fn(refuse_head))
        .layer(middleware::from_fn(crate::cors::middleware))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
