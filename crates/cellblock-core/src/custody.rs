//! Events in an inmate's custody: court appearances, movements and visits.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString};

use crate::{
  facility::{Court, Prison},
  id::Id,
  inmate::Inmate,
  officer::Officer,
  query::Index,
  record::{Collection, Record},
  time::RecordedTime,
};

// ─── Court appearances ───────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, AsRefStr, Display, EnumString)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum CourtOutcome {
  Adjourned,
  Convicted,
  Acquitted,
  BailGranted,
  Remanded,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourtAppearance {
  pub id:             Id<CourtAppearance>,
  pub inmate_id:      Id<Inmate>,
  pub court_id:       Id<Court>,
  /// Escorting officer, if one has been assigned.
  pub officer_id:     Option<Id<Officer>>,
  pub scheduled_date: NaiveDate,
  pub departure_time: Option<RecordedTime>,
  pub return_time:    Option<RecordedTime>,
  pub outcome:        Option<CourtOutcome>,
  pub next_date:      Option<NaiveDate>,
  pub notes:          Option<String>,
}

impl CourtAppearance {
  pub const BY_COURT_ID: Index = Index::new("byCourtId", &["courtId"]);
  pub const BY_INMATE_ID: Index = Index::new("byInmateId", &["inmateId"]);
  pub const BY_SCHEDULED_DATE: Index = Index::new("byScheduledDate", &["scheduledDate"]);
}

impl Record for CourtAppearance {
  const COLLECTION: Collection = Collection::CourtAppearances;
  const INDEXES: &'static [Index] =
    &[Self::BY_INMATE_ID, Self::BY_COURT_ID, Self::BY_SCHEDULED_DATE];

  fn id(&self) -> Id<Self> { self.id }
}

// ─── Movements ───────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, AsRefStr, Display, EnumString)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum MovementType {
  Transfer,
  Hospital,
  Court,
  WorkParty,
  Release,
}

/// An inmate leaving a facility, and (once `return_date` is set) coming back.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordMovement {
  pub id:             Id<RecordMovement>,
  pub inmate_id:      Id<Inmate>,
  pub from_prison_id: Option<Id<Prison>>,
  pub to_prison_id:   Option<Id<Prison>>,
  pub officer_id:     Option<Id<Officer>>,
  pub movement_type:  MovementType,
  pub destination:    Option<String>,
  pub departure_date: NaiveDate,
  pub return_date:    Option<NaiveDate>,
  pub reason:         String,
  pub notes:          Option<String>,
}

impl RecordMovement {
  pub const BY_FROM_PRISON: Index = Index::new("byFromPrison", &["fromPrisonId"]);
  pub const BY_INMATE_ID: Index = Index::new("byInmateId", &["inmateId"]);
  pub const BY_MOVEMENT_TYPE: Index = Index::new("byMovementType", &["movementType"]);
  pub const BY_TO_PRISON: Index = Index::new("byToPrison", &["toPrisonId"]);

  /// A movement is open until the inmate has returned.
  pub fn is_open(&self) -> bool { self.return_date.is_none() }
}

impl Record for RecordMovement {
  const COLLECTION: Collection = Collection::RecordMovements;
  const INDEXES: &'static [Index] = &[
    Self::BY_INMATE_ID,
    Self::BY_MOVEMENT_TYPE,
    Self::BY_FROM_PRISON,
    Self::BY_TO_PRISON,
  ];

  fn id(&self) -> Id<Self> { self.id }
}

// ─── Visits ──────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, AsRefStr, Display, EnumString)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum VisitStatus {
  Scheduled,
  CheckedIn,
  Completed,
  Denied,
  Cancelled,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, AsRefStr, Display, EnumString)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum VisitorIdType {
  NationalId,
  Passport,
  DrivingPermit,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InmateVisit {
  pub id:                Id<InmateVisit>,
  pub inmate_id:         Id<Inmate>,
  pub prison_id:         Id<Prison>,
  pub full_name:         String,
  pub id_number:         String,
  pub id_type:           Option<VisitorIdType>,
  pub relationship:      String,
  pub phone:             String,
  pub address:           Option<String>,
  pub email:             Option<String>,
  pub reason:            Option<String>,
  pub scheduled_date:    Option<NaiveDate>,
  pub check_in_time:     Option<RecordedTime>,
  pub check_out_time:    Option<RecordedTime>,
  pub status:            VisitStatus,
  pub denial_reason:     Option<String>,
  pub items_declaration: Option<String>,
  pub flagged:           Option<bool>,
  pub flag_reason:       Option<String>,
  pub approved_by_id:    Option<Id<Officer>>,
}

impl InmateVisit {
  pub const BY_CHECK_OUT_TIME: Index = Index::new("byCheckOutTime", &["checkOutTime"]);
  pub const BY_INMATE_ID: Index = Index::new("byInmateId", &["inmateId"]);
  pub const BY_PRISON_ID: Index = Index::new("byPrisonId", &["prisonId"]);
  pub const BY_STATUS: Index = Index::new("byStatus", &["status"]);
}

impl Record for InmateVisit {
  const COLLECTION: Collection = Collection::InmateVisits;
  const INDEXES: &'static [Index] = &[
    Self::BY_INMATE_ID,
    Self::BY_STATUS,
    Self::BY_PRISON_ID,
    Self::BY_CHECK_OUT_TIME,
  ];

  fn id(&self) -> Id<Self> { self.id }
}
