//! Denormalized view types returned by the hydration functions.
//!
//! Each view flattens its root record and adds one sibling field per
//! relation. Unresolved relations serialize as `null` rather than being
//! omitted.

use cellblock_core::{
  biometric::{Finger, Fingerprint, Photo},
  custody::{CourtAppearance, InmateVisit, RecordMovement},
  facility::{Court, Offense, Prison},
  inmate::{Inmate, InmateCharge, ItemInCustody, MedicalRecord},
  officer::{AttendanceStatus, Officer, OfficerAttendance},
};
use serde::Serialize;

use crate::lookup::Subject;

// ─── Inmates ─────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InmateWithRelations {
  #[serde(flatten)]
  pub inmate:                 Inmate,
  pub prison:                 Option<Prison>,
  pub offense:                Option<Offense>,
  pub charges:                Vec<ChargeWithOffense>,
  pub visits:                 Vec<InmateVisit>,
  pub court_appearances:      Vec<CourtAppearance>,
  pub movements:              Vec<RecordMovement>,
  pub items_in_custody:       Vec<ItemInCustody>,
  pub medical_records:        Vec<MedicalRecord>,
  pub photos:                 Vec<Photo>,
  pub confirmed_photos:       Vec<Photo>,
  pub primary_photo:          Option<Photo>,
  pub fingerprints:           Vec<Fingerprint>,
  pub confirmed_fingerprints: Vec<Fingerprint>,
  pub captured_fingers:       Vec<Finger>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ChargeWithOffense {
  #[serde(flatten)]
  pub charge:  InmateCharge,
  pub offense: Option<Offense>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ChargeWithRelations {
  #[serde(flatten)]
  pub charge:  InmateCharge,
  pub inmate:  Option<Inmate>,
  pub offense: Option<Offense>,
}

#[derive(Debug, Clone, Serialize)]
pub struct InmateWithOffense {
  #[serde(flatten)]
  pub inmate:  Inmate,
  pub offense: Option<Offense>,
}

// ─── Officers ────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OfficerWithRelations {
  #[serde(flatten)]
  pub officer:                Officer,
  pub prison:                 Option<Prison>,
  pub photos:                 Vec<Photo>,
  pub confirmed_photos:       Vec<Photo>,
  pub primary_photo:          Option<Photo>,
  pub photo_count:            usize,
  pub fingerprints:           Vec<Fingerprint>,
  pub confirmed_fingerprints: Vec<Fingerprint>,
  pub captured_fingers:       Vec<Finger>,
  pub fingerprint_count:      usize,
  /// The first attendance record for "today", as an object or `null`. This
  /// is not a list, even if more than one record exists for the day.
  pub today_attendance:       Option<OfficerAttendance>,
  /// Newest first.
  pub recent_attendance:      Vec<OfficerAttendance>,
}

/// The shallow per-officer view used on prison staff listings.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OfficerSummary {
  #[serde(flatten)]
  pub officer:           Officer,
  pub photo_count:       usize,
  pub fingerprint_count: usize,
  pub primary_photo:     Option<Photo>,
  pub today_attendance:  Option<OfficerAttendance>,
}

/// Biometric enrolment progress for one officer.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OfficerBiometricsSummary {
  #[serde(flatten)]
  pub officer:                     Officer,
  pub photo_count:                 usize,
  pub confirmed_photo_count:       usize,
  pub primary_photo:               Option<Photo>,
  pub fingerprint_count:           usize,
  #[serde(rename = "confirmedFpCount")]
  pub confirmed_fingerprint_count: usize,
  pub captured_fingers:            Vec<Finger>,
  /// An object or `null`, as on [`OfficerWithRelations`].
  pub today_attendance:            Option<OfficerAttendance>,
}

/// Per-status attendance counts over a date range.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct AttendanceSummary {
  pub present:    usize,
  pub absent:     usize,
  pub late:       usize,
  pub on_leave:   usize,
  pub sick_leave: usize,
  pub off_duty:   usize,
  pub total:      usize,
}

impl AttendanceSummary {
  pub fn tally<'a>(records: impl IntoIterator<Item = &'a OfficerAttendance>) -> Self {
    records.into_iter().fold(Self::default(), |mut sum, record| {
      let slot = match record.status {
        AttendanceStatus::Present => &mut sum.present,
        AttendanceStatus::Absent => &mut sum.absent,
        AttendanceStatus::Late => &mut sum.late,
        AttendanceStatus::OnLeave => &mut sum.on_leave,
        AttendanceStatus::SickLeave => &mut sum.sick_leave,
        AttendanceStatus::OffDuty => &mut sum.off_duty,
      };
      *slot += 1;
      sum.total += 1;
      sum
    })
  }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceWithRelations {
  #[serde(flatten)]
  pub attendance:  OfficerAttendance,
  pub officer:     Option<Officer>,
  pub prison:      Option<Prison>,
  pub recorded_by: Option<Officer>,
}

#[derive(Debug, Clone, Serialize)]
pub struct RosterEntry {
  #[serde(flatten)]
  pub officer:    Officer,
  pub attendance: Option<OfficerAttendance>,
}

// ─── Custody events ──────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CourtAppearanceWithRelations {
  #[serde(flatten)]
  pub appearance:     CourtAppearance,
  pub inmate:         Option<Inmate>,
  pub court:          Option<Court>,
  pub escort_officer: Option<Officer>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VisitWithRelations {
  #[serde(flatten)]
  pub visit:       InmateVisit,
  pub inmate:      Option<Inmate>,
  pub prison:      Option<Prison>,
  pub approved_by: Option<Officer>,
}

/// A visit on the "visitors inside" board.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VisitWithInmate {
  #[serde(flatten)]
  pub visit:       InmateVisit,
  pub inmate:      Option<Inmate>,
  pub approved_by: Option<Officer>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MovementWithRelations {
  #[serde(flatten)]
  pub movement:    RecordMovement,
  pub inmate:      Option<Inmate>,
  pub from_prison: Option<Prison>,
  pub to_prison:   Option<Prison>,
  pub officer:     Option<Officer>,
}

// ─── Biometrics ──────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BiometricWithRelations<B> {
  #[serde(flatten)]
  pub record:       B,
  pub subject:      Option<Subject>,
  pub captured_by:  Option<Officer>,
  pub confirmed_by: Option<Officer>,
}

/// A row in a confirmation queue.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BiometricWithSubject<B> {
  #[serde(flatten)]
  pub record:      B,
  pub subject:     Option<Subject>,
  pub captured_by: Option<Officer>,
}

pub type PhotoWithRelations = BiometricWithRelations<Photo>;
pub type FingerprintWithRelations = BiometricWithRelations<Fingerprint>;
pub type PhotoWithSubject = BiometricWithSubject<Photo>;
pub type FingerprintWithSubject = BiometricWithSubject<Fingerprint>;
