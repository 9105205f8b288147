//! Attendance: a single logged event: who, when, a free-form note, and a
//! label payload.
//!
//! The label payload is opaque to the domain. Clients typically store a
//! serialized embedding or label set there.

use serde::{Deserialize, Serialize};

use crate::error::{RollcallError, ValidationError};
use crate::id::AttendanceId;
use crate::time;

/// A persisted attendance record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceRecord {
    pub id: AttendanceId,
    pub name: String,
    pub ts: String,
    pub note: String,
    pub labels: String,
}

impl AttendanceRecord {
    /// Attach a storage-assigned id to a draft.
    #[must_use]
    pub fn from_draft(id: AttendanceId, draft: AttendanceDraft) -> Self {
        Self {
            id,
            name: draft.name,
            ts: draft.ts,
            note: draft.note,
            labels: draft.labels,
        }
    }
}

/// The full set of fields written when creating or overwriting a record.
///
/// A draft always carries every field: updates overwrite the whole row, so
/// anything the caller omitted has already been replaced by its default.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttendanceDraft {
    pub name: String,
    pub ts: String,
    pub note: String,
    pub labels: String,
}

impl AttendanceDraft {
    /// Create a builder for constructing an [`AttendanceDraft`].
    #[must_use]
    pub fn builder() -> AttendanceDraftBuilder {
        AttendanceDraftBuilder::default()
    }

    /// Check domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`RollcallError::Validation`] when `name` or `labels` is empty.
    pub fn validate(&self) -> Result<(), RollcallError> {
        if self.name.is_empty() {
            return Err(ValidationError::MissingRequiredField { field: "name" }.into());
        }
        if self.labels.is_empty() {
            return Err(ValidationError::MissingRequiredField { field: "labels" }.into());
        }
        Ok(())
    }
}

/// Step-by-step builder for [`AttendanceDraft`].
#[derive(Debug, Default)]
pub struct AttendanceDraftBuilder {
    name: Option<String>,
    ts: Option<String>,
    note: Option<String>,
    labels: Option<String>,
}

impl AttendanceDraftBuilder {
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn ts(mut self, ts: impl Into<String>) -> Self {
        self.ts = Some(ts.into());
        self
    }

    #[must_use]
    pub fn note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }

    #[must_use]
    pub fn labels(mut self, labels: impl Into<String>) -> Self {
        self.labels = Some(labels.into());
        self
    }

    /// Consume the builder, fill defaults, validate, and return a draft.
    ///
    /// An empty `ts` becomes the current time and an empty `note` becomes
    /// `""`, the same as when they are not set at all.
    ///
    /// # Errors
    ///
    /// Returns [`RollcallError::Validation`] if `name` or `labels` is missing
    /// or empty.
    pub fn build(self) -> Result<AttendanceDraft, RollcallError> {
        let draft = AttendanceDraft {
            name: self.name.unwrap_or_default(),
            ts: self
                .ts
                .filter(|ts| !ts.is_empty())
                .unwrap_or_else(time::now_iso8601),
            note: self.note.unwrap_or_default(),
            labels: self.labels.unwrap_or_default(),
        };
        draft.validate()?;
        Ok(draft)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_build_draft_when_required_fields_present() {
        let draft = AttendanceDraft::builder()
            .name("Ayu")
            .ts("2024-05-01T08:00:00.000Z")
            .note("late")
            .labels("[0.1,0.2]")
            .build()
            .unwrap();

        assert_eq!(draft.name, "Ayu");
        assert_eq!(draft.ts, "2024-05-01T08:00:00.000Z");
        assert_eq!(draft.note, "late");
        assert_eq!(draft.labels, "[0.1,0.2]");
    }

    #[test]
    fn should_default_note_and_ts_when_omitted() {
        let draft = AttendanceDraft::builder()
            .name("Budi")
            .labels("x")
            .build()
            .unwrap();

        assert_eq!(draft.note, "");
        assert!(chrono::DateTime::parse_from_rfc3339(&draft.ts).is_ok());
    }

    #[test]
    fn should_replace_empty_ts_with_current_time() {
        let draft = AttendanceDraft::builder()
            .name("Budi")
            .ts("")
            .labels("x")
            .build()
            .unwrap();

        assert!(!draft.ts.is_empty());
    }

    #[test]
    fn should_return_validation_error_when_name_is_empty() {
        let result = AttendanceDraft::builder().name("").labels("x").build();
        assert!(matches!(
            result,
            Err(RollcallError::Validation(
                ValidationError::MissingRequiredField { field: "name" }
            ))
        ));
    }

    #[test]
    fn should_return_validation_error_when_labels_missing() {
        let result = AttendanceDraft::builder().name("A").build();
        assert!(matches!(
            result,
            Err(RollcallError::Validation(
                ValidationError::MissingRequiredField { field: "labels" }
            ))
        ));
    }

    #[test]
    fn should_serialize_record_with_flat_fields() {
        let draft = AttendanceDraft::builder()
            .name("Citra")
            .ts("2024-05-01T08:00:00.000Z")
            .labels("l")
            .build()
            .unwrap();
        let record = AttendanceRecord::from_draft(AttendanceId::new(3), draft);

        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "id": 3,
                "name": "Citra",
                "ts": "2024-05-01T08:00:00.000Z",
                "note": "",
                "labels": "l",
            })
        );
    }
}
