//! Attendance service: use-cases for managing attendance records.

use rollcall_domain::attendance::{AttendanceDraft, AttendanceRecord};
use rollcall_domain::error::{NotFoundError, RollcallError};
use rollcall_domain::id::AttendanceId;

use crate::ports::AttendanceRepository;

/// Maximum number of records returned by [`AttendanceService::list_recent`].
pub const LIST_LIMIT: usize = 200;

/// Application service for attendance CRUD operations.
pub struct AttendanceService<R> {
    repo: R,
}

fn not_found(id: AttendanceId) -> RollcallError {
    NotFoundError {
        entity: "Attendance",
        id: id.to_string(),
    }
    .into()
}

impl<R: AttendanceRepository> AttendanceService<R> {
    /// Create a new service backed by the given repository.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// List the most recent records, newest (highest id) first.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn list_recent(&self) -> Result<Vec<AttendanceRecord>, RollcallError> {
        self.repo.get_recent(LIST_LIMIT).await
    }

    /// Store a new record and return its assigned id.
    ///
    /// # Errors
    ///
    /// Returns [`RollcallError::Validation`] if invariants fail, or a
    /// storage error propagated from the repository.
    #[tracing::instrument(skip(self, draft), fields(name = %draft.name))]
    pub async fn create(&self, draft: AttendanceDraft) -> Result<AttendanceId, RollcallError> {
        // Draft fields are public, so a draft need not come from the builder.
        draft.validate()?;
        let id = self.repo.insert(draft).await?;
        tracing::debug!(%id, "attendance record created");
        Ok(id)
    }

    /// Look up a record by id, returning an error if not found.
    ///
    /// # Errors
    ///
    /// Returns [`RollcallError::NotFound`] when no record with `id` exists,
    /// or a storage error from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn get(&self, id: AttendanceId) -> Result<AttendanceRecord, RollcallError> {
        self.repo
            .get_by_id(id)
            .await?
            .ok_or_else(|| not_found(id))
    }

    /// Overwrite every field of an existing record.
    ///
    /// # Errors
    ///
    /// Returns [`RollcallError::Validation`] if invariants fail,
    /// [`RollcallError::NotFound`] when no record with `id` exists, or a
    /// storage error from the repository.
    #[tracing::instrument(skip(self, draft), fields(name = %draft.name))]
    pub async fn update(
        &self,
        id: AttendanceId,
        draft: AttendanceDraft,
    ) -> Result<AttendanceId, RollcallError> {
        // Draft fields are public, so a draft need not come from the builder.
        draft.validate()?;
        if self.repo.update(id, draft).await? {
            Ok(id)
        } else {
            Err(not_found(id))
        }
    }

    /// Delete a record by id.
    ///
    /// # Errors
    ///
    /// Returns [`RollcallError::NotFound`] when no record with `id` exists,
    /// or a storage error from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn delete(&self, id: AttendanceId) -> Result<AttendanceId, RollcallError> {
        if self.repo.delete(id).await? {
            Ok(id)
        } else {
            Err(not_found(id))
        }
    }
}
