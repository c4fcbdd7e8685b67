//! Client-written clock values.
//!
//! Check-in, departure and capture times arrive from forms in whatever shape
//! the form produced: a bare `08:30`, a local `2025-03-01T08:30:00`, or a full
//! RFC 3339 instant. [`RecordedTime`] keeps the text verbatim so any of them
//! loads and round-trips, and interprets it on demand.

use std::fmt;

use chrono::{DateTime, FixedOffset, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

const TIME_FORMATS: &[&str] = &["%H:%M", "%H:%M:%S", "%H:%M:%S%.f"];
const LOCAL_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M:%S%.f"];

/// A clock value stored exactly as it was written.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordedTime(String);

/// The interpretation of a [`RecordedTime`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClockReading {
  /// `HH:MM` or `HH:MM:SS`, with no date.
  TimeOfDay(NaiveTime),
  /// A date and time with no offset.
  Local(NaiveDateTime),
  /// A date and time with an explicit offset.
  Instant(DateTime<FixedOffset>),
}

impl ClockReading {
  pub fn time_of_day(&self) -> NaiveTime {
    match self {
      Self::TimeOfDay(t) => *t,
      Self::Local(dt) => dt.time(),
      Self::Instant(dt) => dt.time(),
    }
  }
}

impl RecordedTime {
  pub fn new(raw: impl Into<String>) -> Self { Self(raw.into()) }

  pub fn as_str(&self) -> &str { &self.0 }

  /// Interpret the stored text. `None` when it matches no known form.
  pub fn reading(&self) -> Option<ClockReading> {
    let raw = self.0.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
      return Some(ClockReading::Instant(dt));
    }
    if let Some(dt) = LOCAL_FORMATS
      .iter()
      .find_map(|f| NaiveDateTime::parse_from_str(raw, f).ok())
    {
      return Some(ClockReading::Local(dt));
    }
    TIME_FORMATS
      .iter()
      .find_map(|f| NaiveTime::parse_from_str(raw, f).ok())
      .map(ClockReading::TimeOfDay)
  }

  /// The wall-clock time, whichever form was written.
  pub fn time_of_day(&self) -> Option<NaiveTime> {
    self.reading().map(|r| r.time_of_day())
  }
}

impl fmt::Display for RecordedTime {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(&self.0) }
}

impl From<&str> for RecordedTime {
  fn from(raw: &str) -> Self { Self::new(raw) }
}
