//! Handlers for court appearances, visits and movements.
//!
//! | Method | Path | Notes |
//! |--------|------|-------|
//! | `GET`  | `/court-appearances/upcoming` | Optional `?from=YYYY-MM-DD`, default today |
//! | `GET`  | `/court-appearances/{id}` | 404 if not found |
//! | `GET`  | `/visits/inside` | Visitors currently checked in |
//! | `GET`  | `/visits/{id}` | 404 if not found |
//! | `GET`  | `/movements/open` | Movements without a return date |
//! | `GET`  | `/movements/{id}` | 404 if not found |

use std::sync::Arc;

use axum::{
  Json,
  extract::{Path, Query, State},
};
use cellblock_core::RecordStore;
use cellblock_relations::{
  court_appearance_with_relations, movement_with_relations, open_movements, upcoming_appearances,
  views::{CourtAppearanceWithRelations, MovementWithRelations, VisitWithInmate, VisitWithRelations},
  visit_with_relations, visitors_inside,
};

use crate::{
  error::{ApiError, FoundExt as _, StoreResultExt as _},
  params::{FromParams, parse_id},
};

// ─── Court appearances ────────────────────────────────────────────────────────

/// `GET /court-appearances/upcoming[?from=<date>]`
pub async fn upcoming<S: RecordStore>(
  State(store): State<Arc<S>>,
  Query(params): Query<FromParams>,
) -> Result<Json<Vec<CourtAppearanceWithRelations>>, ApiError> {
  let from = params.from_or_today()?;
  let appearances = upcoming_appearances(store.as_ref(), from)
    .await
    .during("listing upcoming appearances")?;
  Ok(Json(appearances))
}

/// `GET /court-appearances/{id}`
pub async fn appearance<S: RecordStore>(
  State(store): State<Arc<S>>,
  Path(id): Path<String>,
) -> Result<Json<CourtAppearanceWithRelations>, ApiError> {
  let id = parse_id(&id)?;
  let view = court_appearance_with_relations(store.as_ref(), id)
    .await
    .during("hydrating court appearance")?
    .found("court appearance", id)?;
  Ok(Json(view))
}

// ─── Visits ───────────────────────────────────────────────────────────────────

/// `GET /visits/inside`
pub async fn inside<S: RecordStore>(
  State(store): State<Arc<S>>,
) -> Result<Json<Vec<VisitWithInmate>>, ApiError> {
  let visits = visitors_inside(store.as_ref()).await.during("listing visitors inside")?;
  Ok(Json(visits))
}

/// `GET /visits/{id}`
pub async fn visit<S: RecordStore>(
  State(store): State<Arc<S>>,
  Path(id): Path<String>,
) -> Result<Json<VisitWithRelations>, ApiError> {
  let id = parse_id(&id)?;
  let view = visit_with_relations(store.as_ref(), id)
    .await
    .during("hydrating visit")?
    .found("visit", id)?;
  Ok(Json(view))
}

// ─── Movements ────────────────────────────────────────────────────────────────

/// `GET /movements/open`
pub async fn open<S: RecordStore>(
  State(store): State<Arc<S>>,
) -> Result<Json<Vec<MovementWithRelations>>, ApiError> {
  let movements = open_movements(store.as_ref()).await.during("listing open movements")?;
  Ok(Json(movements))
}

/// `GET /movements/{id}`
pub async fn movement<S: RecordStore>(
  State(store): State<Arc<S>>,
  Path(id): Path<String>,
) -> Result<Json<MovementWithRelations>, ApiError> {
  let id = parse_id(&id)?;
  let view = movement_with_relations(store.as_ref(), id)
    .await
    .during("hydrating movement")?
    .found("movement", id)?;
  Ok(Json(view))
}
