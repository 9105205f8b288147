//! JSON REST handlers for attendance records.

use std::num::FpCategory;

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use rollcall_app::ports::AttendanceRepository;
use rollcall_domain::attendance::{AttendanceDraft, AttendanceRecord};
use rollcall_domain::id::AttendanceId;

use crate::error::ApiError;
use crate::extract::{JsonBody, RecordId};
use crate::state::AppState;

/// Request body for creating or overwriting a record.
///
/// A falsy JSON value (`null`, `false`, `0`, `""`) counts as absent. Other
/// scalars are stored as text; arrays and objects are rejected.
#[derive(Debug, Default, Deserialize)]
pub struct AttendanceRequest {
    pub name: Option<Value>,
    pub ts: Option<Value>,
    pub note: Option<Value>,
    pub labels: Option<Value>,
}

/// Text stored for `value` in column `field`, or `None` when the value is
/// falsy.
fn column_text(field: &str, value: Option<Value>) -> Result<Option<String>, ApiError> {
    match value {
        None | Some(Value::Null | Value::Bool(false)) => Ok(None),
        Some(Value::Bool(true)) => Ok(Some("1".to_string())),
        Some(Value::Number(n)) => {
            if n.as_f64().is_some_and(|f| f.classify() == FpCategory::Zero) {
                Ok(None)
            } else {
                Ok(Some(n.to_string()))
            }
        }
        Some(Value::String(s)) if s.is_empty() => Ok(None),
        Some(Value::String(s)) => Ok(Some(s)),
        Some(Value::Array(_)) => Err(ApiError::malformed_body(format!(
            "field `{field}` cannot be an array"
        ))),
        Some(Value::Object(_)) => Err(ApiError::malformed_body(format!(
            "field `{field}` cannot be an object"
        ))),
    }
}

impl AttendanceRequest {
    fn into_draft(self) -> Result<AttendanceDraft, ApiError> {
        let mut builder = AttendanceDraft::builder();
        if let Some(name) = column_text("name", self.name)? {
            builder = builder.name(name);
        }
        if let Some(ts) = column_text("ts", self.ts)? {
            builder = builder.ts(ts);
        }
        if let Some(note) = column_text("note", self.note)? {
            builder = builder.note(note);
        }
        if let Some(labels) = column_text("labels", self.labels)? {
            builder = builder.labels(labels);
        }
        builder.build().map_err(ApiError::from)
    }
}

/// Body of the list endpoint.
#[derive(Serialize)]
pub struct ListBody {
    pub results: Vec<AttendanceRecord>,
}

/// Acknowledgement returned by write endpoints.
#[derive(Serialize)]
pub struct Ack {
    pub ok: bool,
    pub id: AttendanceId,
}

impl Ack {
    fn json(id: AttendanceId) -> Json<Self> {
        Json(Self { ok: true, id })
    }
}

/// Possible responses from the list endpoint.
pub enum ListResponse {
    Ok(Json<ListBody>),
}

impl IntoResponse for ListResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the get endpoint.
pub enum GetResponse {
    Ok(Json<AttendanceRecord>),
}

impl IntoResponse for GetResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the create endpoint.
pub enum CreateResponse {
    Created(Json<Ack>),
}

impl IntoResponse for CreateResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Created(json) => (StatusCode::CREATED, json).into_response(),
        }
    }
}

/// Possible responses from the update and delete endpoints.
pub enum AckResponse {
    Ok(Json<Ack>),
}

impl IntoResponse for AckResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// `GET /attendance`: the 200 most recent records, newest first.
pub async fn list<R>(State(state): State<AppState<R>>) -> Result<ListResponse, ApiError>
where
    R: AttendanceRepository + Send + Sync + 'static,
{
    let results = state.attendance_service.list_recent().await?;
    Ok(ListResponse::Ok(Json(ListBody { results })))
}

/// `POST /attendance`: create a record.
pub async fn create<R>(
    State(state): State<AppState<R>>,
    JsonBody(req): JsonBody<AttendanceRequest>,
) -> Result<CreateResponse, ApiError>
where
    R: AttendanceRepository + Send + Sync + 'static,
{
    let draft = req.into_draft()?;
    let id = state.attendance_service.create(draft).await?;
    Ok(CreateResponse::Created(Ack::json(id)))
}

/// `GET /attendance/:id`: get a record by id.
pub async fn get<R>(
    State(state): State<AppState<R>>,
    RecordId(id): RecordId,
) -> Result<GetResponse, ApiError>
where
    R: AttendanceRepository + Send + Sync + 'static,
{
    let record = state.attendance_service.get(id).await?;
    Ok(GetResponse::Ok(Json(record)))
}

/// `PUT /attendance/:id`: overwrite every field of a record.
pub async fn update<R>(
    State(state): State<AppState<R>>,
    RecordId(id): RecordId,
    JsonBody(req): JsonBody<AttendanceRequest>,
) -> Result<AckResponse, ApiError>
where
    R: AttendanceRepository + Send + Sync + 'static,
{
    let draft = req.into_draft()?;
    let id = state.attendance_service.update(id, draft).await?;
    Ok(AckResponse::Ok(Ack::json(id)))
}

/// `DELETE /attendance/:id`: delete a record.
pub async fn delete<R>(
    State(state): State<AppState<R>>,
    RecordId(id): RecordId,
) -> Result<AckResponse, ApiError>
where
    R: AttendanceRepository + Send + Sync + 'static,
{
    let id = state.attendance_service.delete(id).await?;
    Ok(AckResponse::Ok(Ack::json(id)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rollcall_domain::error::{RollcallError, ValidationError};

    fn request(json: &str) -> AttendanceRequest {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn should_treat_null_fields_as_absent() {
        let draft = request(r#"{"name":"A","labels":"x","note":null,"ts":null}"#)
            .into_draft()
            .unwrap();
        assert_eq!(draft.note, "");
        assert!(!draft.ts.is_empty());
    }

    #[test]
    fn should_ignore_unknown_fields() {
        let draft = request(r#"{"name":"A","labels":"x","extra":1}"#)
            .into_draft()
            .unwrap();
        assert_eq!(draft.name, "A");
    }

    #[test]
    fn should_reject_missing_labels() {
        let result = request(r#"{"name":"A"}"#).into_draft();
        assert!(matches!(
            result,
            Err(ApiError::Domain(RollcallError::Validation(
                ValidationError::MissingRequiredField { field: "labels" }
            )))
        ));
    }

    #[test]
    fn should_keep_supplied_ts() {
        let draft = request(r#"{"name":"A","labels":"x","ts":"2020-01-01T00:00:00Z"}"#)
            .into_draft()
            .unwrap();
        assert_eq!(draft.ts, "2020-01-01T00:00:00Z");
    }

    #[test]
    fn should_treat_falsy_values_as_absent() {
        let draft = request(r#"{"name":"A","labels":"x","note":false,"ts":0}"#)
            .into_draft()
            .unwrap();
        assert_eq!(draft.note, "");
        assert!(!draft.ts.is_empty());
        assert_ne!(draft.ts, "0");

        let draft = request(r#"{"name":"A","labels":"x","note":0.0}"#)
            .into_draft()
            .unwrap();
        assert_eq!(draft.note, "");
    }

    #[test]
    fn should_reject_falsy_name_as_missing() {
        for json in [
            r#"{"name":0,"labels":"x"}"#,
            r#"{"name":false,"labels":"x"}"#,
        ] {
            assert!(
                matches!(
                    request(json).into_draft(),
                    Err(ApiError::Domain(RollcallError::Validation(
                        ValidationError::MissingRequiredField { field: "name" }
                    )))
                ),
                "{json}"
            );
        }
    }

    #[test]
    fn should_store_truthy_scalars_as_text() {
        let draft = request(r#"{"name":42,"labels":true,"note":-1.5}"#)
            .into_draft()
            .unwrap();
        assert_eq!(draft.name, "42");
        assert_eq!(draft.labels, "1");
        assert_eq!(draft.note, "-1.5");
    }

    #[test]
    fn should_refuse_arrays_and_objects() {
        for json in [
            r#"{"name":"A","labels":[0.1,0.2]}"#,
            r#"{"name":{"first":"A"},"labels":"x"}"#,
        ] {
            assert!(
                matches!(request(json).into_draft(), Err(ApiError::MalformedBody(_))),
                "{json}"
            );
        }
    }
}
