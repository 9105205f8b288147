//! Shared application state for axum handlers.

use std::sync::Arc;

use rollcall_app::ports::AttendanceRepository;
use rollcall_app::services::attendance_service::AttendanceService;

/// Application state shared across all axum handlers.
///
/// Generic over the repository type to avoid dynamic dispatch.
/// `Clone` is implemented manually so the repository itself does not need to
/// be `Clone`; only the `Arc` wrapper is cloned.
pub struct AppState<R> {
    /// Attendance CRUD service.
    pub attendance_service: Arc<AttendanceService<R>>,
}

impl<R> Clone for AppState<R> {
    fn clone(&self) -> Self {
        Self {
            attendance_service: Arc::clone(&self.attendance_service),
        }
    }
}

impl<R> AppState<R>
where
    R: AttendanceRepository + Send + Sync + 'static,
{
    /// Create a new application state from a service instance.
    pub fn new(attendance_service: AttendanceService<R>) -> Self {
        Self {
            attendance_service: Arc::new(attendance_service),
        }
    }
}
