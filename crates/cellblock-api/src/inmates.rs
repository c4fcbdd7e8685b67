//! Handlers for `/inmates` and `/charges` endpoints.
//!
//! | Method | Path | Notes |
//! |--------|------|-------|
//! | `GET`  | `/inmates` | Search by `?prisonId=&status=&inmateType=&riskLevel=` |
//! | `GET`  | `/inmates/{id}` | Full inmate file; 404 if not found |
//! | `GET`  | `/inmates/{id}/items/unreturned` | Property still held; 404 if the inmate is unknown |
//! | `GET`  | `/charges/{id}` | 404 if not found |

use std::sync::Arc;

use axum::{
  Json,
  extract::{Path, Query, State},
};
use cellblock_core::{
  RecordStore,
  inmate::{Inmate, ItemInCustody},
};
use cellblock_relations::{
  charge_with_relations, inmate_with_relations, search_inmates, unreturned_items,
  views::{ChargeWithRelations, InmateWithRelations},
};

use crate::{
  error::{ApiError, FoundExt as _, StoreResultExt as _},
  params::{SearchParams, parse_id},
};

/// `GET /inmates[?prisonId=&status=&inmateType=&riskLevel=]`
pub async fn search<S: RecordStore>(
  State(store): State<Arc<S>>,
  Query(params): Query<SearchParams>,
) -> Result<Json<Vec<Inmate>>, ApiError> {
  let filter = params.filter()?;
  let inmates = search_inmates(store.as_ref(), filter).await.during("searching inmates")?;
  Ok(Json(inmates))
}

/// `GET /inmates/{id}`
pub async fn get_one<S: RecordStore>(
  State(store): State<Arc<S>>,
  Path(id): Path<String>,
) -> Result<Json<InmateWithRelations>, ApiError> {
  let id = parse_id(&id)?;
  let view = inmate_with_relations(store.as_ref(), id)
    .await
    .during("hydrating inmate")?
    .found("inmate", id)?;
  Ok(Json(view))
}

/// `GET /inmates/{id}/items/unreturned`
pub async fn unreturned<S: RecordStore>(
  State(store): State<Arc<S>>,
  Path(id): Path<String>,
) -> Result<Json<Vec<ItemInCustody>>, ApiError> {
  let id = parse_id::<Inmate>(&id)?;
  store.get(id).await.during("loading inmate")?.found("inmate", id)?;
  let items = unreturned_items(store.as_ref(), id).await.during("listing property")?;
  Ok(Json(items))
}

/// `GET /charges/{id}`
pub async fn charge<S: RecordStore>(
  State(store): State<Arc<S>>,
  Path(id): Path<String>,
) -> Result<Json<ChargeWithRelations>, ApiError> {
  let id = parse_id(&id)?;
  let view = charge_with_relations(store.as_ref(), id)
    .await
    .during("hydrating charge")?
    .found("charge", id)?;
  Ok(Json(view))
}
