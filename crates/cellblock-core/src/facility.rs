//! Reference records: prisons, courts, and the offense catalogue.

use serde::{Deserialize, Serialize};

use crate::{
  id::Id,
  query::Index,
  record::{Collection, Record},
};

// ─── Prison ──────────────────────────────────────────────────────────────────

#[derive(
  Debug,
  Clone,
  Copy,
  PartialEq,
  Eq,
  Serialize,
  Deserialize,
  strum::AsRefStr,
  strum::Display,
  strum::EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum PrisonType {
  Main,
  Remand,
  Open,
  Farm,
  Branch,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Prison {
  pub id:            Id<Prison>,
  pub name:          String,
  pub code:          String,
  #[serde(rename = "type")]
  pub prison_type:   PrisonType,
  pub region:        Option<String>,
  pub district:      Option<String>,
  pub address:       Option<String>,
  pub capacity:      Option<u32>,
  pub contact_phone: Option<String>,
  pub is_active:     Option<bool>,
}

impl Prison {
  pub const BY_CODE: Index = Index::new("byCode", &["code"]);
  pub const BY_REGION: Index = Index::new("byRegion", &["region"]);
  pub const BY_TYPE: Index = Index::new("byType", &["type"]);
}

impl Record for Prison {
  const COLLECTION: Collection = Collection::Prisons;
  const INDEXES: &'static [Index] = &[Self::BY_CODE, Self::BY_TYPE, Self::BY_REGION];

  fn id(&self) -> Id<Self> { self.id }
}

// ─── Court ───────────────────────────────────────────────────────────────────

#[derive(
  Debug,
  Clone,
  Copy,
  PartialEq,
  Eq,
  Serialize,
  Deserialize,
  strum::AsRefStr,
  strum::Display,
  strum::EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum CourtType {
  Magistrate,
  High,
  ChiefMagistrate,
  IndustrialCourt,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Court {
  pub id:         Id<Court>,
  pub name:       String,
  #[serde(rename = "type")]
  pub court_type: Option<CourtType>,
  pub district:   Option<String>,
  pub address:    Option<String>,
}

impl Court {
  pub const BY_DISTRICT: Index = Index::new("byDistrict", &["district"]);
  pub const BY_TYPE: Index = Index::new("byType", &["type"]);
}

impl Record for Court {
  const COLLECTION: Collection = Collection::Courts;
  const INDEXES: &'static [Index] = &[Self::BY_TYPE, Self::BY_DISTRICT];

  fn id(&self) -> Id<Self> { self.id }
}

// ─── Offense ─────────────────────────────────────────────────────────────────

#[derive(
  Debug,
  Clone,
  Copy,
  PartialEq,
  Eq,
  Serialize,
  Deserialize,
  strum::AsRefStr,
  strum::Display,
  strum::EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum OffenseCategory {
  Felony,
  Misdemeanor,
  Capital,
  Traffic,
}

/// An entry in the statute catalogue that charges and inmates refer to.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Offense {
  pub id:                 Id<Offense>,
  pub name:               String,
  pub act:                Option<String>,
  pub section:            Option<String>,
  pub chapter:            Option<String>,
  pub category:           Option<OffenseCategory>,
  pub amended_by:         Option<String>,
  pub description:        Option<String>,
  pub max_sentence_years: Option<u32>,
}

impl Offense {
  pub const BY_CATEGORY: Index = Index::new("byCategory", &["category"]);
}

impl Record for Offense {
  const COLLECTION: Collection = Collection::Offenses;
  const INDEXES: &'static [Index] = &[Self::BY_CATEGORY];

  fn id(&self) -> Id<Self> { self.id }
}
