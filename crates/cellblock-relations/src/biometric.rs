//! Photo and fingerprint hydration. Both kinds share one code path, generic
//! over [`Biometric`].

use cellblock_core::{
  Id, RecordStore,
  biometric::{Biometric, Fingerprint, Photo},
  query::Query,
};
use futures::future::try_join_all;

use crate::{
  lookup::{lookup, resolve_subject},
  views::{
    BiometricWithRelations, BiometricWithSubject, FingerprintWithRelations,
    FingerprintWithSubject, PhotoWithRelations, PhotoWithSubject,
  },
};

async fn with_relations<S, B>(
  store: &S,
  id: Id<B>,
) -> Result<Option<BiometricWithRelations<B>>, S::Error>
where
  S: RecordStore,
  B: Biometric,
{
  let Some(record) = store.get(id).await? else {
    tracing::debug!("biometric record not found");
    return Ok(None);
  };

  let (subject, captured_by, confirmed_by) = futures::try_join!(
    resolve_subject(store, &record),
    lookup(store, record.captured_by_id()),
    lookup(store, record.confirmed_by_id()),
  )?;

  Ok(Some(BiometricWithRelations { record, subject, captured_by, confirmed_by }))
}

async fn unconfirmed_with_subjects<S, B>(
  store: &S,
) -> Result<Vec<BiometricWithSubject<B>>, S::Error>
where
  S: RecordStore,
  B: Biometric,
{
  let q = Query::<B>::all().eq("isConfirmed", false);
  let records = store.query(&q).await?;
  tracing::debug!(count = records.len(), "hydrating unconfirmed records");

  try_join_all(records.into_iter().map(|record| async move {
    let (subject, captured_by) = futures::try_join!(
      resolve_subject(store, &record),
      lookup(store, record.captured_by_id()),
    )?;
    Ok::<_, S::Error>(BiometricWithSubject { record, subject, captured_by })
  }))
  .await
}

#[tracing::instrument(skip(store))]
pub async fn photo_with_relations<S: RecordStore>(
  store: &S,
  id: Id<Photo>,
) -> Result<Option<PhotoWithRelations>, S::Error> {
  with_relations(store, id).await
}

/// The photo confirmation queue, in insertion order.
#[tracing::instrument(skip(store))]
pub async fn unconfirmed_photos_with_subjects<S: RecordStore>(
  store: &S,
) -> Result<Vec<PhotoWithSubject>, S::Error> {
  unconfirmed_with_subjects(store).await
}

#[tracing::instrument(skip(store))]
pub async fn fingerprint_with_relations<S: RecordStore>(
  store: &S,
  id: Id<Fingerprint>,
) -> Result<Option<FingerprintWithRelations>, S::Error> {
  with_relations(store, id).await
}

/// The fingerprint confirmation queue, in insertion order.
#[tracing::instrument(skip(store))]
pub async fn unconfirmed_fingerprints_with_subjects<S: RecordStore>(
  store: &S,
) -> Result<Vec<FingerprintWithSubject>, S::Error> {
  unconfirmed_with_subjects(store).await
}
