//! Handlers for `/photos` and `/fingerprints` endpoints.
//!
//! | Method | Path | Notes |
//! |--------|------|-------|
//! | `GET`  | `/photos/unconfirmed` | Confirmation queue with subjects |
//! | `GET`  | `/photos/{id}` | 404 if not found |
//! | `GET`  | `/fingerprints/unconfirmed` | Confirmation queue with subjects |
//! | `GET`  | `/fingerprints/{id}` | 404 if not found |

use std::sync::Arc;

use axum::{
  Json,
  extract::{Path, State},
};
use cellblock_core::RecordStore;
use cellblock_relations::{
  fingerprint_with_relations, photo_with_relations, unconfirmed_fingerprints_with_subjects,
  unconfirmed_photos_with_subjects,
  views::{FingerprintWithRelations, FingerprintWithSubject, PhotoWithRelations, PhotoWithSubject},
};

use crate::{
  error::{ApiError, FoundExt as _, StoreResultExt as _},
  params::parse_id,
};

/// `GET /photos/unconfirmed`
pub async fn unconfirmed_photos<S: RecordStore>(
  State(store): State<Arc<S>>,
) -> Result<Json<Vec<PhotoWithSubject>>, ApiError> {
  let queue = unconfirmed_photos_with_subjects(store.as_ref())
    .await
    .during("listing unconfirmed photos")?;
  Ok(Json(queue))
}

/// `GET /photos/{id}`
pub async fn photo<S: RecordStore>(
  State(store): State<Arc<S>>,
  Path(id): Path<String>,
) -> Result<Json<PhotoWithRelations>, ApiError> {
  let id = parse_id(&id)?;
  let view = photo_with_relations(store.as_ref(), id)
    .await
    .during("hydrating photo")?
    .found("photo", id)?;
  Ok(Json(view))
}

/// `GET /fingerprints/unconfirmed`
pub async fn unconfirmed_fingerprints<S: RecordStore>(
  State(store): State<Arc<S>>,
) -> Result<Json<Vec<FingerprintWithSubject>>, ApiError> {
  let queue = unconfirmed_fingerprints_with_subjects(store.as_ref())
    .await
    .during("listing unconfirmed fingerprints")?;
  Ok(Json(queue))
}

/// `GET /fingerprints/{id}`
pub async fn fingerprint<S: RecordStore>(
  State(store): State<Arc<S>>,
  Path(id): Path<String>,
) -> Result<Json<FingerprintWithRelations>, ApiError> {
  let id = parse_id(&id)?;
  let view = fingerprint_with_relations(store.as_ref(), id)
    .await
    .during("hydrating fingerprint")?
    .found("fingerprint", id)?;
  Ok(Json(view))
}
