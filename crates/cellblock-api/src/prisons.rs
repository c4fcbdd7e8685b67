//! Per-prison listings.
//!
//! | Method | Path | Notes |
//! |--------|------|-------|
//! | `GET`  | `/prisons/{id}/officers` | Staff with biometric counts; optional `?date=` |
//! | `GET`  | `/prisons/{id}/roster` | Attendance roster; optional `?date=` |
//! | `GET`  | `/prisons/{id}/inmates` | Inmates with their primary offense |
//!
//! All three answer 404 when the prison itself does not exist.

use std::sync::Arc;

use axum::{
  Json,
  extract::{Path, Query, State},
};
use cellblock_core::{Id, RecordStore, facility::Prison};
use cellblock_relations::{
  daily_roster, inmates_by_prison_with_offense, officers_by_prison_with_summary,
  views::{InmateWithOffense, OfficerSummary, RosterEntry},
};

use crate::{
  error::{ApiError, FoundExt as _, StoreResultExt as _},
  params::{DateParams, parse_id},
};

async fn existing_prison<S: RecordStore>(store: &S, raw: &str) -> Result<Id<Prison>, ApiError> {
  let id: Id<Prison> = parse_id(raw)?;
  store.get(id).await.during("loading prison")?.found("prison", id)?;
  Ok(id)
}

/// `GET /prisons/{id}/officers[?date=<date>]`
pub async fn officers<S: RecordStore>(
  State(store): State<Arc<S>>,
  Path(id): Path<String>,
  Query(params): Query<DateParams>,
) -> Result<Json<Vec<OfficerSummary>>, ApiError> {
  let today = params.date_or_today()?;
  let prison_id = existing_prison(store.as_ref(), &id).await?;
  let summaries = officers_by_prison_with_summary(store.as_ref(), prison_id, today)
    .await
    .during("summarising prison officers")?;
  Ok(Json(summaries))
}

/// `GET /prisons/{id}/roster[?date=<date>]`
pub async fn roster<S: RecordStore>(
  State(store): State<Arc<S>>,
  Path(id): Path<String>,
  Query(params): Query<DateParams>,
) -> Result<Json<Vec<RosterEntry>>, ApiError> {
  let date = params.date_or_today()?;
  let prison_id = existing_prison(store.as_ref(), &id).await?;
  let roster = daily_roster(store.as_ref(), prison_id, date)
    .await
    .during("building roster")?;
  Ok(Json(roster))
}

/// `GET /prisons/{id}/inmates`
pub async fn inmates<S: RecordStore>(
  State(store): State<Arc<S>>,
  Path(id): Path<String>,
) -> Result<Json<Vec<InmateWithOffense>>, ApiError> {
  let prison_id = existing_prison(store.as_ref(), &id).await?;
  let inmates = inmates_by_prison_with_offense(store.as_ref(), prison_id)
    .await
    .during("listing prison inmates")?;
  Ok(Json(inmates))
}
