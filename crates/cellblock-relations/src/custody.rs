//! Court appearances, visits and movements, singly and as operational boards.

use cellblock_core::{
  Id, RecordStore,
  custody::{CourtAppearance, InmateVisit, RecordMovement, VisitStatus},
  query::{Query, Scalar},
};
use chrono::NaiveDate;
use futures::future::try_join_all;

use crate::{
  lookup::lookup,
  views::{
    CourtAppearanceWithRelations, MovementWithRelations, VisitWithInmate, VisitWithRelations,
  },
};

// ─── Court appearances ───────────────────────────────────────────────────────

async fn hydrate_appearance<S: RecordStore>(
  store: &S,
  appearance: CourtAppearance,
) -> Result<CourtAppearanceWithRelations, S::Error> {
  let (inmate, court, escort_officer) = futures::try_join!(
    store.get(appearance.inmate_id),
    store.get(appearance.court_id),
    lookup(store, appearance.officer_id),
  )?;
  Ok(CourtAppearanceWithRelations { appearance, inmate, court, escort_officer })
}

#[tracing::instrument(skip(store))]
pub async fn court_appearance_with_relations<S: RecordStore>(
  store: &S,
  id: Id<CourtAppearance>,
) -> Result<Option<CourtAppearanceWithRelations>, S::Error> {
  match store.get(id).await? {
    Some(appearance) => hydrate_appearance(store, appearance).await.map(Some),
    None => {
      tracing::debug!("court appearance not found");
      Ok(None)
    }
  }
}

/// Appearances scheduled on or after `from`, soonest first.
#[tracing::instrument(skip(store))]
pub async fn upcoming_appearances<S: RecordStore>(
  store: &S,
  from: NaiveDate,
) -> Result<Vec<CourtAppearanceWithRelations>, S::Error> {
  let q = Query::<CourtAppearance>::by_index(CourtAppearance::BY_SCHEDULED_DATE)
    .gte("scheduledDate", from);
  let appearances = store.query(&q).await?;
  tracing::debug!(count = appearances.len(), "hydrating appearances");

  try_join_all(appearances.into_iter().map(|a| hydrate_appearance(store, a))).await
}

// ─── Visits ──────────────────────────────────────────────────────────────────

#[tracing::instrument(skip(store))]
pub async fn visit_with_relations<S: RecordStore>(
  store: &S,
  id: Id<InmateVisit>,
) -> Result<Option<VisitWithRelations>, S::Error> {
  let Some(visit) = store.get(id).await? else {
    tracing::debug!("visit not found");
    return Ok(None);
  };

  let (inmate, prison, approved_by) = futures::try_join!(
    store.get(visit.inmate_id),
    store.get(visit.prison_id),
    lookup(store, visit.approved_by_id),
  )?;

  Ok(Some(VisitWithRelations { visit, inmate, prison, approved_by }))
}

/// Visits currently checked in.
#[tracing::instrument(skip(store))]
pub async fn visitors_inside<S: RecordStore>(store: &S) -> Result<Vec<VisitWithInmate>, S::Error> {
  let q = Query::<InmateVisit>::index_eq(InmateVisit::BY_STATUS, Scalar::text(VisitStatus::CheckedIn));
  let visits = store.query(&q).await?;
  tracing::debug!(count = visits.len(), "hydrating visits");

  try_join_all(visits.into_iter().map(|visit| async move {
    let (inmate, approved_by) =
      futures::try_join!(store.get(visit.inmate_id), lookup(store, visit.approved_by_id))?;
    Ok::<_, S::Error>(VisitWithInmate { visit, inmate, approved_by })
  }))
  .await
}

// ─── Movements ───────────────────────────────────────────────────────────────

async fn hydrate_movement<S: RecordStore>(
  store: &S,
  movement: RecordMovement,
) -> Result<MovementWithRelations, S::Error> {
  let (inmate, from_prison, to_prison, officer) = futures::try_join!(
    store.get(movement.inmate_id),
    lookup(store, movement.from_prison_id),
    lookup(store, movement.to_prison_id),
    lookup(store, movement.officer_id),
  )?;
  Ok(MovementWithRelations { movement, inmate, from_prison, to_prison, officer })
}

#[tracing::instrument(skip(store))]
pub async fn movement_with_relations<S: RecordStore>(
  store: &S,
  id: Id<RecordMovement>,
) -> Result<Option<MovementWithRelations>, S::Error> {
  match store.get(id).await? {
    Some(movement) => hydrate_movement(store, movement).await.map(Some),
    None => {
      tracing::debug!("movement not found");
      Ok(None)
    }
  }
}

/// Movements whose inmate has not yet returned.
#[tracing::instrument(skip(store))]
pub async fn open_movements<S: RecordStore>(
  store: &S,
) -> Result<Vec<MovementWithRelations>, S::Error> {
  let q = Query::<RecordMovement>::all().absent("returnDate");
  let movements = store.query(&q).await?;
  tracing::debug!(count = movements.len(), "hydrating movements");

  try_join_all(movements.into_iter().map(|m| hydrate_movement(store, m))).await
}
