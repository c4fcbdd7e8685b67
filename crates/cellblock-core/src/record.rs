//! The [`Record`] trait and the catalogue of named collections.

use serde::{Serialize, de::DeserializeOwned};

use crate::{
  biometric::{Fingerprint, Photo},
  custody::{CourtAppearance, InmateVisit, RecordMovement},
  facility::{Court, Offense, Prison},
  id::Id,
  inmate::{Inmate, InmateCharge, ItemInCustody, MedicalRecord},
  officer::{Officer, OfficerAttendance},
  query::Index,
};

/// Every named record collection in the store.
#[derive(
  Debug,
  Clone,
  Copy,
  PartialEq,
  Eq,
  Hash,
  strum::AsRefStr,
  strum::Display,
  strum::EnumString,
  strum::EnumIter,
)]
#[strum(serialize_all = "camelCase")]
pub enum Collection {
  Prisons,
  Courts,
  Offenses,
  Officers,
  Inmates,
  InmateCharges,
  CourtAppearances,
  RecordMovements,
  InmateVisits,
  ItemsInCustody,
  MedicalRecords,
  PhotoBucket,
  FingerPrints,
  OfficerAttendance,
}

/// A record type stored in exactly one [`Collection`].
///
/// Records serialise to camelCase JSON objects; [`Index`] field names refer
/// to those JSON keys.
pub trait Record:
  Serialize + DeserializeOwned + Clone + Send + Sync + 'static
{
  const COLLECTION: Collection;
  const INDEXES: &'static [Index];

  fn id(&self) -> Id<Self>;
}

/// Every index declared by every record type, paired with its collection.
///
/// Storage backends use this to build physical indexes up front.
pub fn declared_indexes() -> Vec<(Collection, Index)> {
  fn of<R: Record>() -> impl Iterator<Item = (Collection, Index)> {
    R::INDEXES.iter().map(|i| (R::COLLECTION, *i))
  }

  of::<Prison>()
    .chain(of::<Court>())
    .chain(of::<Offense>())
    .chain(of::<Officer>())
    .chain(of::<Inmate>())
    .chain(of::<InmateCharge>())
    .chain(of::<CourtAppearance>())
    .chain(of::<RecordMovement>())
    .chain(of::<InmateVisit>())
    .chain(of::<ItemInCustody>())
    .chain(of::<MedicalRecord>())
    .chain(of::<Photo>())
    .chain(of::<Fingerprint>())
    .chain(of::<OfficerAttendance>())
    .collect()
}

#[cfg(test)]
mod tests {
  use std::{collections::HashSet, str::FromStr};

  use strum::IntoEnumIterator;

  use super::*;

  #[test]
  fn collection_names_are_camel_case() {
    assert_eq!(Collection::PhotoBucket.as_ref(), "photoBucket");
    assert_eq!(Collection::ItemsInCustody.as_ref(), "itemsInCustody");
    assert_eq!(Collection::from_str("officerAttendance").unwrap(), Collection::OfficerAttendance);
  }

  #[test]
  fn every_collection_declares_an_index_name_once() {
    let declared = declared_indexes();
    let covered: HashSet<Collection> = declared.iter().map(|(c, _)| *c).collect();
    assert_eq!(covered.len(), Collection::iter().count());

    let names: HashSet<(Collection, &str)> =
      declared.iter().map(|(c, i)| (*c, i.name)).collect();
    assert_eq!(names.len(), declared.len());
  }
}
