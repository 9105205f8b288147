//! JSON REST API handler modules.

#[allow(clippy::missing_errors_doc)]
pub mod attendance;

use axum::Router;
use axum::routing::get;

use rollcall_app::ports::AttendanceRepository;

use crate::error::not_found;
use crate::state::AppState;

/// Build the attendance route table.
///
/// Methods a path does not support fall back to the generic 404 rather than
/// axum's `405 Method Not Allowed`.
pub fn routes<R>() -> Router<AppState<R>>
where
    R: AttendanceRepository + Send + Sync + 'static,
{
    Router::new()
        .route(
            "/attendance",
            get(attendance::list::<R>)
                .post(attendance::create::<R>)
                .fallback(not_found),
        )
        .route(
            "/attendance/{id}",
            get(attendance::get::<R>)
                .put(attendance::update::<R>)
                .delete(attendance::delete::<R>)
                .fallback(not_found),
        )
}
