//! Null-safe single-record lookups.

use cellblock_core::{
  Id, Record, RecordStore,
  biometric::{Biometric, SubjectRef},
  inmate::Inmate,
  officer::Officer,
};
use serde::Serialize;

/// Fetch the record an optional foreign key points at.
///
/// An absent key short-circuits to `Ok(None)` without touching the store.
pub async fn lookup<S, R>(store: &S, id: Option<Id<R>>) -> Result<Option<R>, S::Error>
where
  S: RecordStore,
  R: Record,
{
  match id {
    Some(id) => store.get(id).await,
    None => Ok(None),
  }
}

/// The resolved owner of a photo or fingerprint.
///
/// Serializes as the bare inmate or officer record.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum Subject {
  Inmate(Box<Inmate>),
  Officer(Officer),
}

impl Subject {
  pub fn as_inmate(&self) -> Option<&Inmate> {
    match self {
      Subject::Inmate(inmate) => Some(inmate),
      Subject::Officer(_) => None,
    }
  }

  pub fn as_officer(&self) -> Option<&Officer> {
    match self {
      Subject::Officer(officer) => Some(officer),
      Subject::Inmate(_) => None,
    }
  }
}

/// Follow a biometric record's `subjectType` to its owner.
///
/// Only the key named by the discriminator is consulted.
pub async fn resolve_subject<S, B>(store: &S, record: &B) -> Result<Option<Subject>, S::Error>
where
  S: RecordStore,
  B: Biometric,
{
  match record.subject_ref() {
    Some(SubjectRef::Inmate(id)) => {
      Ok(store.get(id).await?.map(|inmate| Subject::Inmate(Box::new(inmate))))
    }
    Some(SubjectRef::Officer(id)) => Ok(store.get(id).await?.map(Subject::Officer)),
    None => Ok(None),
  }
}
