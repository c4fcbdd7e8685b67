//! A whole-store snapshot, used to seed a backend from a JSON file.
//!
//! Top-level keys are collection names; every key is optional.

use serde::{Deserialize, Serialize};

use crate::{
  Result,
  biometric::{Fingerprint, Photo},
  custody::{CourtAppearance, InmateVisit, RecordMovement},
  facility::{Court, Offense, Prison},
  inmate::{Inmate, InmateCharge, ItemInCustody, MedicalRecord},
  officer::{Officer, OfficerAttendance},
};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Dataset {
  pub prisons:            Vec<Prison>,
  pub courts:             Vec<Court>,
  pub offenses:           Vec<Offense>,
  pub officers:           Vec<Officer>,
  pub inmates:            Vec<Inmate>,
  pub inmate_charges:     Vec<InmateCharge>,
  pub court_appearances:  Vec<CourtAppearance>,
  pub record_movements:   Vec<RecordMovement>,
  pub inmate_visits:      Vec<InmateVisit>,
  pub items_in_custody:   Vec<ItemInCustody>,
  pub medical_records:    Vec<MedicalRecord>,
  pub photo_bucket:       Vec<Photo>,
  pub finger_prints:      Vec<Fingerprint>,
  pub officer_attendance: Vec<OfficerAttendance>,
}

impl Dataset {
  pub fn from_json(json: &str) -> Result<Self> { Ok(serde_json::from_str(json)?) }

  /// Total number of records across all collections.
  pub fn len(&self) -> usize {
    self.prisons.len()
      + self.courts.len()
      + self.offenses.len()
      + self.officers.len()
      + self.inmates.len()
      + self.inmate_charges.len()
      + self.court_appearances.len()
      + self.record_movements.len()
      + self.inmate_visits.len()
      + self.items_in_custody.len()
      + self.medical_records.len()
      + self.photo_bucket.len()
      + self.finger_prints.len()
      + self.officer_attendance.len()
  }

  pub fn is_empty(&self) -> bool { self.len() == 0 }
}
