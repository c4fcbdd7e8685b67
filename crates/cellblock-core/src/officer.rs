//! Officers and their daily attendance.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString};

use crate::{
  facility::Prison,
  id::Id,
  query::Index,
  record::{Collection, Record},
  time::RecordedTime,
};

// ─── Officer ─────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Officer {
  pub id:           Id<Officer>,
  pub prison_id:    Id<Prison>,
  pub name:         String,
  pub badge_number: String,
  pub rank:         Option<String>,
  pub phone:        Option<String>,
  pub is_active:    Option<bool>,
}

impl Officer {
  pub const BY_BADGE_NUMBER: Index = Index::new("byBadgeNumber", &["badgeNumber"]);
  pub const BY_PRISON_ID: Index = Index::new("byPrisonId", &["prisonId"]);
}

impl Record for Officer {
  const COLLECTION: Collection = Collection::Officers;
  const INDEXES: &'static [Index] = &[Self::BY_BADGE_NUMBER, Self::BY_PRISON_ID];

  fn id(&self) -> Id<Self> { self.id }
}

// ─── Attendance ──────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, AsRefStr, Display, EnumString)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum AttendanceStatus {
  Present,
  Absent,
  Late,
  OnLeave,
  SickLeave,
  OffDuty,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, AsRefStr, Display, EnumString)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum AttendanceShift {
  Morning,
  Afternoon,
  Night,
  FullDay,
}

/// One officer's attendance for one calendar day.
///
/// Readers assume at most one record exists per `(officer_id, date)`; nothing
/// in the store enforces it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OfficerAttendance {
  pub id:             Id<OfficerAttendance>,
  pub officer_id:     Id<Officer>,
  pub prison_id:      Id<Prison>,
  pub date:           NaiveDate,
  pub shift:          AttendanceShift,
  pub status:         AttendanceStatus,
  pub check_in_time:  Option<RecordedTime>,
  pub check_out_time: Option<RecordedTime>,
  pub hours_worked:   Option<f64>,
  pub notes:          Option<String>,
  pub recorded_by_id: Option<Id<Officer>>,
}

impl OfficerAttendance {
  pub const BY_DATE: Index = Index::new("byDate", &["date"]);
  pub const BY_OFFICER_DATE: Index = Index::new("byOfficerDate", &["officerId", "date"]);
  pub const BY_OFFICER_ID: Index = Index::new("byOfficerId", &["officerId"]);
  pub const BY_PRISON_ID: Index = Index::new("byPrisonId", &["prisonId"]);
}

impl Record for OfficerAttendance {
  const COLLECTION: Collection = Collection::OfficerAttendance;
  const INDEXES: &'static [Index] = &[
    Self::BY_OFFICER_ID,
    Self::BY_DATE,
    Self::BY_PRISON_ID,
    Self::BY_OFFICER_DATE,
  ];

  fn id(&self) -> Id<Self> { self.id }
}
