//! Handlers for `/officers` and `/attendance` endpoints.
//!
//! | Method | Path | Notes |
//! |--------|------|-------|
//! | `GET`  | `/officers/{id}` | Optional `?date=YYYY-MM-DD` for "today"; 404 if not found |
//! | `GET`  | `/officers/{id}/biometrics` | Enrolment counts; optional `?date=`; 404 if not found |
//! | `GET`  | `/officers/{id}/attendance-summary` | Required `?from=&to=`; 404 if not found |
//! | `GET`  | `/attendance/{id}` | 404 if not found |

use std::sync::Arc;

use axum::{
  Json,
  extract::{Path, Query, State},
};
use cellblock_core::{RecordStore, officer::Officer};
use cellblock_relations::{
  attendance_summary, attendance_with_relations, officer_with_biometrics_summary,
  officer_with_relations,
  views::{
    AttendanceSummary, AttendanceWithRelations, OfficerBiometricsSummary, OfficerWithRelations,
  },
};

use crate::{
  error::{ApiError, FoundExt as _, StoreResultExt as _},
  params::{DateParams, RangeParams, parse_id},
};

/// `GET /officers/{id}[?date=<date>]`
pub async fn get_one<S: RecordStore>(
  State(store): State<Arc<S>>,
  Path(id): Path<String>,
  Query(params): Query<DateParams>,
) -> Result<Json<OfficerWithRelations>, ApiError> {
  let id = parse_id(&id)?;
  let today = params.date_or_today()?;
  let view = officer_with_relations(store.as_ref(), id, today)
    .await
    .during("hydrating officer")?
    .found("officer", id)?;
  Ok(Json(view))
}

/// `GET /officers/{id}/biometrics[?date=<date>]`
pub async fn biometrics<S: RecordStore>(
  State(store): State<Arc<S>>,
  Path(id): Path<String>,
  Query(params): Query<DateParams>,
) -> Result<Json<OfficerBiometricsSummary>, ApiError> {
  let id = parse_id(&id)?;
  let today = params.date_or_today()?;
  let view = officer_with_biometrics_summary(store.as_ref(), id, today)
    .await
    .during("summarising officer biometrics")?
    .found("officer", id)?;
  Ok(Json(view))
}

/// `GET /officers/{id}/attendance-summary?from=<date>&to=<date>`
pub async fn summary<S: RecordStore>(
  State(store): State<Arc<S>>,
  Path(id): Path<String>,
  Query(params): Query<RangeParams>,
) -> Result<Json<AttendanceSummary>, ApiError> {
  let id = parse_id::<Officer>(&id)?;
  let (from, to) = params.range()?;
  store.get(id).await.during("loading officer")?.found("officer", id)?;
  let summary = attendance_summary(store.as_ref(), id, from, to)
    .await
    .during("summarising attendance")?;
  Ok(Json(summary))
}

/// `GET /attendance/{id}`
pub async fn attendance<S: RecordStore>(
  State(store): State<Arc<S>>,
  Path(id): Path<String>,
) -> Result<Json<AttendanceWithRelations>, ApiError> {
  let id = parse_id(&id)?;
  let view = attendance_with_relations(store.as_ref(), id)
    .await
    .during("hydrating attendance")?
    .found("attendance record", id)?;
  Ok(Json(view))
}
