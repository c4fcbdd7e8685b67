//! The inmate aggregate root and the records that hang directly off it.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString};

use crate::{
  facility::{Offense, Prison},
  id::Id,
  query::Index,
  record::{Collection, Record},
  time::RecordedTime,
};

// ─── Enumerations ────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, AsRefStr, Display, EnumString)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Gender {
  Male,
  Female,
}

/// Where an inmate currently stands in the custody lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, AsRefStr, Display, EnumString)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum InmateStatus {
  Remand,
  Convict,
  AtCourt,
  Released,
  Transferred,
  Escaped,
  Deceased,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, AsRefStr, Display, EnumString)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum InmateType {
  Remand,
  Convict,
  Civil,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, AsRefStr, Display, EnumString)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum RiskLevel {
  Low,
  Medium,
  High,
  Maximum,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, AsRefStr, Display, EnumString)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum ReleaseReason {
  Served,
  Bail,
  Acquitted,
  Pardon,
  FinePaid,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, AsRefStr, Display, EnumString)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum ChargeStatus {
  Pending,
  Convicted,
  Acquitted,
  Withdrawn,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, AsRefStr, Display, EnumString)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum ItemCondition {
  Good,
  Fair,
  Poor,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, AsRefStr, Display, EnumString)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum MedicalRecordType {
  AdmissionCheckup,
  Illness,
  Injury,
  Referral,
}

// ─── Inmate ──────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Inmate {
  pub id:                       Id<Inmate>,
  pub first_name:               String,
  pub last_name:                String,
  pub other_names:              Option<String>,
  pub prison_number:            String,
  pub national_id:              Option<String>,
  pub dob:                      NaiveDate,
  pub gender:                   Gender,
  pub nationality:              Option<String>,
  pub tribe:                    Option<String>,
  pub religion:                 Option<String>,
  pub education_level:          Option<String>,
  pub marital_status:           Option<String>,
  pub occupation:               Option<String>,
  pub next_of_kin_name:         Option<String>,
  pub next_of_kin_phone:        Option<String>,
  pub next_of_kin_relationship: Option<String>,
  pub inmate_type:              InmateType,
  pub status:                   InmateStatus,
  pub risk_level:               Option<RiskLevel>,
  pub prison_id:                Id<Prison>,
  pub cell_block:               Option<String>,
  pub cell_number:              Option<String>,
  pub case_number:              String,
  /// The primary offense; further counts live in [`InmateCharge`].
  pub offense_id:               Id<Offense>,
  pub arresting_station:        Option<String>,
  pub admission_date:           NaiveDate,
  pub remand_expiry:            Option<NaiveDate>,
  pub next_court_date:          Option<NaiveDate>,
  pub conviction_date:          Option<NaiveDate>,
  pub sentence_start:           Option<NaiveDate>,
  pub sentence_end:             Option<NaiveDate>,
  pub sentence_duration:        Option<String>,
  pub is_life_sentence:         Option<bool>,
  pub fine_amount:              Option<f64>,
  pub fine_paid:                Option<bool>,
  pub actual_release_date:      Option<NaiveDate>,
  pub release_reason:           Option<ReleaseReason>,
  pub notes:                    Option<String>,
}

impl Inmate {
  pub const BY_CASE_NUMBER: Index = Index::new("byCaseNumber", &["caseNumber"]);
  pub const BY_INMATE_TYPE: Index = Index::new("byInmateType", &["inmateType"]);
  pub const BY_NATIONAL_ID: Index = Index::new("byNationalId", &["nationalId"]);
  pub const BY_PRISON_ID: Index = Index::new("byPrisonId", &["prisonId"]);
  pub const BY_PRISON_NUMBER: Index = Index::new("byPrisonNumber", &["prisonNumber"]);
  pub const BY_STATUS: Index = Index::new("byStatus", &["status"]);

  pub fn full_name(&self) -> String {
    match &self.other_names {
      Some(other) => format!("{} {} {}", self.first_name, other, self.last_name),
      None => format!("{} {}", self.first_name, self.last_name),
    }
  }
}

impl Record for Inmate {
  const COLLECTION: Collection = Collection::Inmates;
  const INDEXES: &'static [Index] = &[
    Self::BY_PRISON_NUMBER,
    Self::BY_PRISON_ID,
    Self::BY_STATUS,
    Self::BY_INMATE_TYPE,
    Self::BY_NATIONAL_ID,
    Self::BY_CASE_NUMBER,
  ];

  fn id(&self) -> Id<Self> { self.id }
}

// ─── Charges ─────────────────────────────────────────────────────────────────

/// One count against an inmate.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InmateCharge {
  pub id:         Id<InmateCharge>,
  pub inmate_id:  Id<Inmate>,
  pub offense_id: Id<Offense>,
  pub is_primary: Option<bool>,
  pub status:     Option<ChargeStatus>,
  pub notes:      Option<String>,
}

impl InmateCharge {
  pub const BY_INMATE_ID: Index = Index::new("byInmateId", &["inmateId"]);
  pub const BY_OFFENSE_ID: Index = Index::new("byOffenseId", &["offenseId"]);
}

impl Record for InmateCharge {
  const COLLECTION: Collection = Collection::InmateCharges;
  const INDEXES: &'static [Index] = &[Self::BY_INMATE_ID, Self::BY_OFFENSE_ID];

  fn id(&self) -> Id<Self> { self.id }
}

// ─── Property ────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemInCustody {
  pub id:               Id<ItemInCustody>,
  pub inmate_id:        Id<Inmate>,
  pub name:             String,
  pub description:      Option<String>,
  pub value:            Option<f64>,
  pub condition:        Option<ItemCondition>,
  pub storage_location: Option<String>,
  pub returned_at:      Option<RecordedTime>,
  pub returned_to_name: Option<String>,
}

impl ItemInCustody {
  pub const BY_INMATE_ID: Index = Index::new("byInmateId", &["inmateId"]);
}

impl Record for ItemInCustody {
  const COLLECTION: Collection = Collection::ItemsInCustody;
  const INDEXES: &'static [Index] = &[Self::BY_INMATE_ID];

  fn id(&self) -> Id<Self> { self.id }
}

// ─── Medical ─────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MedicalRecord {
  pub id:                   Id<MedicalRecord>,
  pub inmate_id:            Id<Inmate>,
  pub record_type:          MedicalRecordType,
  pub diagnosis:            Option<String>,
  pub treatment:            Option<String>,
  pub attended_by:          Option<String>,
  pub referred_to_hospital: Option<String>,
  pub record_date:          NaiveDate,
  pub notes:                Option<String>,
}

impl MedicalRecord {
  pub const BY_INMATE_ID: Index = Index::new("byInmateId", &["inmateId"]);
  pub const BY_RECORD_DATE: Index = Index::new("byRecordDate", &["recordDate"]);
  pub const BY_RECORD_TYPE: Index = Index::new("byRecordType", &["recordType"]);
}

impl Record for MedicalRecord {
  const COLLECTION: Collection = Collection::MedicalRecords;
  const INDEXES: &'static [Index] =
    &[Self::BY_INMATE_ID, Self::BY_RECORD_TYPE, Self::BY_RECORD_DATE];

  fn id(&self) -> Id<Self> { self.id }
}
