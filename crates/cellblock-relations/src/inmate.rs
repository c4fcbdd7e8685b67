//! Inmate-rooted hydration: the full inmate file, charges, and the per-prison
//! inmate list. Also the plain inmate search and the unreturned-property
//! list, which return records without relations.

use cellblock_core::{
  Id, RecordStore,
  biometric::{Fingerprint, Photo, SubjectType},
  custody::{CourtAppearance, InmateVisit, RecordMovement},
  facility::Prison,
  inmate::{Inmate, InmateCharge, InmateStatus, InmateType, ItemInCustody, MedicalRecord, RiskLevel},
  query::{Query, Scalar},
};
use futures::future::try_join_all;

use crate::{
  select::{captured_fingers, confirmed, primary_photo},
  views::{ChargeWithOffense, ChargeWithRelations, InmateWithOffense, InmateWithRelations},
};

#[tracing::instrument(skip(store))]
pub async fn inmate_with_relations<S: RecordStore>(
  store: &S,
  id: Id<Inmate>,
) -> Result<Option<InmateWithRelations>, S::Error> {
  let Some(inmate) = store.get(id).await? else {
    tracing::debug!("inmate not found");
    return Ok(None);
  };

  let charges_q = Query::<InmateCharge>::index_eq(InmateCharge::BY_INMATE_ID, id);
  let visits_q = Query::<InmateVisit>::index_eq(InmateVisit::BY_INMATE_ID, id);
  let appearances_q = Query::<CourtAppearance>::index_eq(CourtAppearance::BY_INMATE_ID, id);
  let movements_q = Query::<RecordMovement>::index_eq(RecordMovement::BY_INMATE_ID, id);
  let items_q = Query::<ItemInCustody>::index_eq(ItemInCustody::BY_INMATE_ID, id);
  let medical_q = Query::<MedicalRecord>::index_eq(MedicalRecord::BY_INMATE_ID, id);
  // Biometrics owned by an officer never show up here, whatever their
  // inmateId says.
  let photos_q = Query::<Photo>::index_eq(Photo::BY_INMATE_ID, id)
    .eq("subjectType", Scalar::text(SubjectType::Inmate));
  let prints_q = Query::<Fingerprint>::index_eq(Fingerprint::BY_INMATE_ID, id)
    .eq("subjectType", Scalar::text(SubjectType::Inmate));

  let (
    prison,
    offense,
    charges,
    visits,
    court_appearances,
    movements,
    items_in_custody,
    medical_records,
    photos,
    fingerprints,
  ) = futures::try_join!(
    store.get(inmate.prison_id),
    store.get(inmate.offense_id),
    store.query(&charges_q),
    store.query(&visits_q),
    store.query(&appearances_q),
    store.query(&movements_q),
    store.query(&items_q),
    store.query(&medical_q),
    store.query(&photos_q),
    store.query(&prints_q),
  )?;

  let charges = try_join_all(charges.into_iter().map(|charge| async move {
    let offense = store.get(charge.offense_id).await?;
    Ok::<_, S::Error>(ChargeWithOffense { charge, offense })
  }))
  .await?;

  tracing::debug!(
    charges = charges.len(),
    photos = photos.len(),
    fingerprints = fingerprints.len(),
    "inmate hydrated"
  );

  Ok(Some(InmateWithRelations {
    inmate,
    prison,
    offense,
    charges,
    visits,
    court_appearances,
    movements,
    items_in_custody,
    medical_records,
    confirmed_photos: confirmed(&photos),
    primary_photo: primary_photo(&photos).cloned(),
    photos,
    confirmed_fingerprints: confirmed(&fingerprints),
    captured_fingers: captured_fingers(&fingerprints),
    fingerprints,
  }))
}

#[tracing::instrument(skip(store))]
pub async fn charge_with_relations<S: RecordStore>(
  store: &S,
  id: Id<InmateCharge>,
) -> Result<Option<ChargeWithRelations>, S::Error> {
  let Some(charge) = store.get(id).await? else {
    tracing::debug!("charge not found");
    return Ok(None);
  };

  let (inmate, offense) =
    futures::try_join!(store.get(charge.inmate_id), store.get(charge.offense_id))?;

  Ok(Some(ChargeWithRelations { charge, inmate, offense }))
}

/// Every inmate held at `prison_id`, each with its primary offense.
#[tracing::instrument(skip(store))]
pub async fn inmates_by_prison_with_offense<S: RecordStore>(
  store: &S,
  prison_id: Id<Prison>,
) -> Result<Vec<InmateWithOffense>, S::Error> {
  let q = Query::<Inmate>::index_eq(Inmate::BY_PRISON_ID, prison_id);
  let inmates = store.query(&q).await?;
  tracing::debug!(count = inmates.len(), "hydrating inmates");

  try_join_all(inmates.into_iter().map(|inmate| async move {
    let offense = store.get(inmate.offense_id).await?;
    Ok::<_, S::Error>(InmateWithOffense { inmate, offense })
  }))
  .await
}

/// Optional equality filters for [`search_inmates`]. Unset fields match
/// everything.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InmateFilter {
  pub prison_id:   Option<Id<Prison>>,
  pub status:      Option<InmateStatus>,
  pub inmate_type: Option<InmateType>,
  pub risk_level:  Option<RiskLevel>,
}

/// Inmates matching every set field of `filter`.
///
/// Scans the prison index when a prison is given, else the status index,
/// else the whole collection; the remaining filters apply on top.
#[tracing::instrument(skip(store))]
pub async fn search_inmates<S: RecordStore>(
  store: &S,
  filter: InmateFilter,
) -> Result<Vec<Inmate>, S::Error> {
  let mut q = match (filter.prison_id, filter.status) {
    (Some(prison_id), status) => {
      let q = Query::<Inmate>::index_eq(Inmate::BY_PRISON_ID, prison_id);
      match status {
        Some(status) => q.eq("status", Scalar::text(status)),
        None => q,
      }
    }
    (None, Some(status)) => Query::index_eq(Inmate::BY_STATUS, Scalar::text(status)),
    (None, None) => Query::all(),
  };
  if let Some(inmate_type) = filter.inmate_type {
    q = q.eq("inmateType", Scalar::text(inmate_type));
  }
  if let Some(risk_level) = filter.risk_level {
    q = q.eq("riskLevel", Scalar::text(risk_level));
  }
  store.query(&q).await
}

/// Property still held for `inmate_id`, in insertion order.
#[tracing::instrument(skip(store))]
pub async fn unreturned_items<S: RecordStore>(
  store: &S,
  inmate_id: Id<Inmate>,
) -> Result<Vec<ItemInCustody>, S::Error> {
  let q = Query::<ItemInCustody>::index_eq(ItemInCustody::BY_INMATE_ID, inmate_id)
    .absent("returnedAt");
  store.query(&q).await
}
