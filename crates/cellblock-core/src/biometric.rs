//! Photos and fingerprints.
//!
//! Both live in a single table shared by inmates and officers. The
//! [`SubjectType`] discriminator says which of the two sibling foreign keys
//! (`inmate_id` / `officer_id`) is authoritative; the other is ignored even
//! if it happens to be populated.

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString};

use crate::{
  id::Id,
  inmate::Inmate,
  officer::Officer,
  query::Index,
  record::{Collection, Record},
  time::RecordedTime,
};

// ─── Subject ─────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, AsRefStr, Display, EnumString)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum SubjectType {
  Inmate,
  Officer,
}

/// The authoritative owner of a biometric record, as chosen by its
/// [`SubjectType`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubjectRef {
  Inmate(Id<Inmate>),
  Officer(Id<Officer>),
}

/// Behaviour shared by [`Photo`] and [`Fingerprint`].
pub trait Biometric: Record {
  fn subject_type(&self) -> SubjectType;
  fn inmate_id(&self) -> Option<Id<Inmate>>;
  fn officer_id(&self) -> Option<Id<Officer>>;
  fn captured_by_id(&self) -> Option<Id<Officer>>;
  fn confirmed_by_id(&self) -> Option<Id<Officer>>;
  fn is_confirmed(&self) -> bool;

  /// Follow the discriminator. `None` if the authoritative key is missing.
  fn subject_ref(&self) -> Option<SubjectRef> {
    match self.subject_type() {
      SubjectType::Inmate => self.inmate_id().map(SubjectRef::Inmate),
      SubjectType::Officer => self.officer_id().map(SubjectRef::Officer),
    }
  }
}

// ─── Photo ───────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, AsRefStr, Display, EnumString)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum PhotoType {
  MugshotFront,
  MugshotSide,
  #[serde(rename = "mugshot_3quarter")]
  #[strum(serialize = "mugshot_3quarter")]
  Mugshot3Quarter,
  Document,
  /// Used for officers.
  Profile,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, AsRefStr, Display, EnumString)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum PhotoProvider {
  Internal,
  ExternalUrl,
  Upload,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Photo {
  pub id:              Id<Photo>,
  pub subject_type:    SubjectType,
  pub inmate_id:       Option<Id<Inmate>>,
  pub officer_id:      Option<Id<Officer>>,
  pub photo_type:      PhotoType,
  pub provider:        PhotoProvider,
  /// Opaque reference into blob storage.
  pub storage_id:      Option<String>,
  pub external_url:    Option<String>,
  pub base64_preview:  Option<String>,
  pub file_size:       Option<u64>,
  pub mime_type:       Option<String>,
  pub captured_at:     Option<RecordedTime>,
  pub captured_by_id:  Option<Id<Officer>>,
  #[serde(default)]
  pub is_primary:      bool,
  #[serde(default)]
  pub is_confirmed:    bool,
  pub confirmed_by_id: Option<Id<Officer>>,
  pub confirmed_at:    Option<RecordedTime>,
  pub confirm_notes:   Option<String>,
}

impl Photo {
  pub const BY_CONFIRMED: Index = Index::new("byConfirmed", &["subjectType", "isConfirmed"]);
  pub const BY_INMATE_ID: Index = Index::new("byInmateId", &["inmateId"]);
  pub const BY_OFFICER_ID: Index = Index::new("byOfficerId", &["officerId"]);
  pub const BY_SUBJECT: Index = Index::new("bySubject", &["subjectType"]);
}

impl Record for Photo {
  const COLLECTION: Collection = Collection::PhotoBucket;
  const INDEXES: &'static [Index] = &[
    Self::BY_INMATE_ID,
    Self::BY_OFFICER_ID,
    Self::BY_SUBJECT,
    Self::BY_CONFIRMED,
  ];

  fn id(&self) -> Id<Self> { self.id }
}

impl Biometric for Photo {
  fn subject_type(&self) -> SubjectType { self.subject_type }

  fn inmate_id(&self) -> Option<Id<Inmate>> { self.inmate_id }

  fn officer_id(&self) -> Option<Id<Officer>> { self.officer_id }

  fn captured_by_id(&self) -> Option<Id<Officer>> { self.captured_by_id }

  fn confirmed_by_id(&self) -> Option<Id<Officer>> { self.confirmed_by_id }

  fn is_confirmed(&self) -> bool { self.is_confirmed }
}

// ─── Fingerprint ─────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, AsRefStr, Display, EnumString)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Finger {
  RightThumb,
  RightIndex,
  RightMiddle,
  RightRing,
  RightLittle,
  LeftThumb,
  LeftIndex,
  LeftMiddle,
  LeftRing,
  LeftLittle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, AsRefStr, Display, EnumString)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum FingerprintProvider {
  Internal,
  External,
  Upload,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Fingerprint {
  pub id:              Id<Fingerprint>,
  pub subject_type:    SubjectType,
  pub inmate_id:       Option<Id<Inmate>>,
  pub officer_id:      Option<Id<Officer>>,
  pub finger:          Finger,
  pub provider:        FingerprintProvider,
  pub storage_id:      Option<String>,
  /// Base64 minutiae or WSQ template.
  pub template_data:   Option<String>,
  pub provider_name:   Option<String>,
  pub provider_ref:    Option<String>,
  /// Scanner-reported quality, 0–100.
  pub quality:         Option<u8>,
  pub captured_at:     Option<RecordedTime>,
  pub captured_by_id:  Option<Id<Officer>>,
  #[serde(default)]
  pub is_confirmed:    bool,
  pub confirmed_by_id: Option<Id<Officer>>,
  pub confirmed_at:    Option<RecordedTime>,
  pub confirm_notes:   Option<String>,
}

impl Fingerprint {
  pub const BY_INMATE_FINGER: Index = Index::new("byInmateFinger", &["inmateId", "finger"]);
  pub const BY_INMATE_ID: Index = Index::new("byInmateId", &["inmateId"]);
  pub const BY_OFFICER_FINGER: Index = Index::new("byOfficerFinger", &["officerId", "finger"]);
  pub const BY_OFFICER_ID: Index = Index::new("byOfficerId", &["officerId"]);
  pub const BY_SUBJECT: Index = Index::new("bySubject", &["subjectType"]);
}

impl Record for Fingerprint {
  const COLLECTION: Collection = Collection::FingerPrints;
  const INDEXES: &'static [Index] = &[
    Self::BY_INMATE_ID,
    Self::BY_OFFICER_ID,
    Self::BY_SUBJECT,
    Self::BY_INMATE_FINGER,
    Self::BY_OFFICER_FINGER,
  ];

  fn id(&self) -> Id<Self> { self.id }
}

impl Biometric for Fingerprint {
  fn subject_type(&self) -> SubjectType { self.subject_type }

  fn inmate_id(&self) -> Option<Id<Inmate>> { self.inmate_id }

  fn officer_id(&self) -> Option<Id<Officer>> { self.officer_id }

  fn captured_by_id(&self) -> Option<Id<Officer>> { self.captured_by_id }

  fn confirmed_by_id(&self) -> Option<Id<Officer>> { self.confirmed_by_id }

  fn is_confirmed(&self) -> bool { self.is_confirmed }
}
