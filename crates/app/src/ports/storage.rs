//! Storage port: repository trait for attendance persistence.

use std::future::Future;

use rollcall_domain::attendance::{AttendanceDraft, AttendanceRecord};
use rollcall_domain::error::RollcallError;
use rollcall_domain::id::AttendanceId;

/// Repository for persisting and querying [`AttendanceRecord`]s.
///
/// Every method maps to exactly one statement against the store.
pub trait AttendanceRepository {
    /// Insert a new row and return the id the store assigned to it.
    fn insert(
        &self,
        draft: AttendanceDraft,
    ) -> impl Future<Output = Result<AttendanceId, RollcallError>> + Send;

    /// Get a record by its identifier.
    fn get_by_id(
        &self,
        id: AttendanceId,
    ) -> impl Future<Output = Result<Option<AttendanceRecord>, RollcallError>> + Send;

    /// Get at most `limit` records, highest id first.
    fn get_recent(
        &self,
        limit: usize,
    ) -> impl Future<Output = Result<Vec<AttendanceRecord>, RollcallError>> + Send;

    /// Overwrite every field of the row `id`.
    ///
    /// Resolves to `false` when no row matched.
    fn update(
        &self,
        id: AttendanceId,
        draft: AttendanceDraft,
    ) -> impl Future<Output = Result<bool, RollcallError>> + Send;

    /// Delete the row `id`.
    ///
    /// Resolves to `false` when no row matched.
    fn delete(&self, id: AttendanceId) -> impl Future<Output = Result<bool, RollcallError>> + Send;
}
