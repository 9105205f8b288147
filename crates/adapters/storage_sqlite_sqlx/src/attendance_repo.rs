//! `SQLite` implementation of [`AttendanceRepository`].

use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqlitePool};

use rollcall_app::ports::AttendanceRepository;
use rollcall_domain::attendance::{AttendanceDraft, AttendanceRecord};
use rollcall_domain::error::RollcallError;
use rollcall_domain::id::AttendanceId;

use crate::error::StorageError;

/// Wrapper for converting database rows into domain [`AttendanceRecord`].
struct Wrapper(AttendanceRecord);

impl Wrapper {
    fn maybe(value: Option<Self>) -> Option<AttendanceRecord> {
        value.map(|w| w.0)
    }
}

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        let id: i64 = row.try_get("id")?;
        // Columns are nullable in tables provisioned outside this service.
        let name: Option<String> = row.try_get("name")?;
        let ts: Option<String> = row.try_get("ts")?;
        let note: Option<String> = row.try_get("note")?;
        let labels: Option<String> = row.try_get("labels")?;

        Ok(Self(AttendanceRecord {
            id: AttendanceId::new(id),
            name: name.unwrap_or_default(),
            ts: ts.unwrap_or_default(),
            note: note.unwrap_or_default(),
            labels: labels.unwrap_or_default(),
        }))
    }
}

const SELECT_RECENT: &str =
    "SELECT id, name, ts, note, labels FROM attendance ORDER BY id DESC LIMIT ?1";
const INSERT: &str = "INSERT INTO attendance (name, ts, note, labels) VALUES (?1, ?2, ?3, ?4)";
const SELECT_BY_ID: &str = "SELECT id, name, ts, note, labels FROM attendance WHERE id = ?1";
const UPDATE: &str =
    "UPDATE attendance SET name = ?1, ts = ?2, note = ?3, labels = ?4 WHERE id = ?5";
const DELETE_BY_ID: &str = "DELETE FROM attendance WHERE id = ?1";

/// `SQLite`-backed attendance repository.
pub struct SqliteAttendanceRepository {
    pool: SqlitePool,
}

impl SqliteAttendanceRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl AttendanceRepository for SqliteAttendanceRepository {
    async fn insert(&self, draft: AttendanceDraft) -> Result<AttendanceId, RollcallError> {
        let result = sqlx::query(INSERT)
            .bind(&draft.name)
            .bind(&draft.ts)
            .bind(&draft.note)
            .bind(&draft.labels)
            .execute(&self.pool)
            .await
            .map_err(StorageError::from)?;

        Ok(AttendanceId::new(result.last_insert_rowid()))
    }

    async fn get_by_id(&self, id: AttendanceId) -> Result<Option<AttendanceRecord>, RollcallError> {
        let row: Option<Wrapper> = sqlx::query_as(SELECT_BY_ID)
            .bind(id.as_i64())
            .fetch_optional(&self.pool)
            .await
            .map_err(StorageError::from)?;

        Ok(Wrapper::maybe(row))
    }

    async fn get_recent(&self, limit: usize) -> Result<Vec<AttendanceRecord>, RollcallError> {
        let limit = i64::try_from(limit).unwrap_or(i64::MAX);
        let rows: Vec<Wrapper> = sqlx::query_as(SELECT_RECENT)
            .bind(limit)
            .fetch_all(&self.pool)
            .await
            .map_err(StorageError::from)?;

        Ok(rows.into_iter().map(|w| w.0).collect())
    }

    async fn update(&self, id: AttendanceId, draft: AttendanceDraft) -> Result<bool, RollcallError> {
        let result = sqlx::query(UPDATE)
            .bind(&draft.name)
            .bind(&draft.ts)
            .bind(&draft.note)
            .bind(&draft.labels)
            .bind(id.as_i64())
            .execute(&self.pool)
            .await
            .map_err(StorageError::from)?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete(&self, id: AttendanceId) -> Result<bool, RollcallError> {
        let result = sqlx::query(DELETE_BY_ID)
            .bind(id.as_i64())
            .execute(&self.pool)
            .await
            .map_err(StorageError::from)?;

        Ok(result.rows_affected() > 0)
    }
}
