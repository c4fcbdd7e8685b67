//! Officer-rooted hydration and attendance views.
//!
//! "Today" is always supplied by the caller.

use std::collections::HashMap;

use cellblock_core::{
  Id, RecordStore,
  biometric::{Fingerprint, Photo, SubjectType},
  facility::Prison,
  officer::{Officer, OfficerAttendance},
  query::{Order, Query, Scalar},
};
use chrono::NaiveDate;
use futures::future::try_join_all;

use crate::{
  lookup::lookup,
  select::{captured_fingers, confirmed, confirmed_count, primary_photo},
  views::{
    AttendanceSummary, AttendanceWithRelations, OfficerBiometricsSummary, OfficerSummary,
    OfficerWithRelations, RosterEntry,
  },
};

/// How many attendance records the officer detail view carries.
pub const RECENT_ATTENDANCE_LIMIT: usize = 30;

fn photos_of(id: Id<Officer>) -> Query<Photo> {
  Query::index_eq(Photo::BY_OFFICER_ID, id).eq("subjectType", Scalar::text(SubjectType::Officer))
}

fn fingerprints_of(id: Id<Officer>) -> Query<Fingerprint> {
  Query::index_eq(Fingerprint::BY_OFFICER_ID, id)
    .eq("subjectType", Scalar::text(SubjectType::Officer))
}

fn attendance_on(id: Id<Officer>, date: NaiveDate) -> Query<OfficerAttendance> {
  Query::by_index(OfficerAttendance::BY_OFFICER_DATE)
    .eq("officerId", id)
    .eq("date", date)
    .take(1)
}

#[tracing::instrument(skip(store))]
pub async fn officer_with_relations<S: RecordStore>(
  store: &S,
  id: Id<Officer>,
  today: NaiveDate,
) -> Result<Option<OfficerWithRelations>, S::Error> {
  let Some(officer) = store.get(id).await? else {
    tracing::debug!("officer not found");
    return Ok(None);
  };

  let photos_q = photos_of(id);
  let prints_q = fingerprints_of(id);
  let today_q = attendance_on(id, today);
  let recent_q = Query::<OfficerAttendance>::index_eq(OfficerAttendance::BY_OFFICER_ID, id)
    .order(Order::Desc)
    .take(RECENT_ATTENDANCE_LIMIT);

  let (prison, photos, fingerprints, today_attendance, recent_attendance) = futures::try_join!(
    store.get(officer.prison_id),
    store.query(&photos_q),
    store.query(&prints_q),
    store.query(&today_q),
    store.query(&recent_q),
  )?;

  Ok(Some(OfficerWithRelations {
    officer,
    prison,
    confirmed_photos: confirmed(&photos),
    primary_photo: primary_photo(&photos).cloned(),
    photo_count: photos.len(),
    photos,
    confirmed_fingerprints: confirmed(&fingerprints),
    captured_fingers: captured_fingers(&fingerprints),
    fingerprint_count: fingerprints.len(),
    fingerprints,
    today_attendance: today_attendance.into_iter().next(),
    recent_attendance,
  }))
}

/// Counts instead of lists: how far one officer's biometric enrolment has
/// got, plus today's attendance.
#[tracing::instrument(skip(store))]
pub async fn officer_with_biometrics_summary<S: RecordStore>(
  store: &S,
  id: Id<Officer>,
  today: NaiveDate,
) -> Result<Option<OfficerBiometricsSummary>, S::Error> {
  let Some(officer) = store.get(id).await? else {
    tracing::debug!("officer not found");
    return Ok(None);
  };

  let photos_q = photos_of(id);
  let prints_q = fingerprints_of(id);
  let today_q = attendance_on(id, today);
  let (photos, fingerprints, today_attendance) = futures::try_join!(
    store.query(&photos_q),
    store.query(&prints_q),
    store.query(&today_q),
  )?;

  Ok(Some(OfficerBiometricsSummary {
    officer,
    photo_count: photos.len(),
    confirmed_photo_count: confirmed_count(&photos),
    primary_photo: primary_photo(&photos).cloned(),
    fingerprint_count: fingerprints.len(),
    confirmed_fingerprint_count: confirmed_count(&fingerprints),
    captured_fingers: captured_fingers(&fingerprints),
    today_attendance: today_attendance.into_iter().next(),
  }))
}

/// Status counts for `officer_id` between `from` and `to`, both inclusive.
///
/// An unknown officer, or an inverted range, yields all zeroes.
#[tracing::instrument(skip(store))]
pub async fn attendance_summary<S: RecordStore>(
  store: &S,
  officer_id: Id<Officer>,
  from: NaiveDate,
  to: NaiveDate,
) -> Result<AttendanceSummary, S::Error> {
  let q = Query::<OfficerAttendance>::index_eq(OfficerAttendance::BY_OFFICER_ID, officer_id)
    .gte("date", from)
    .lte("date", to);
  let records = store.query(&q).await?;
  Ok(AttendanceSummary::tally(&records))
}

/// Every officer posted to `prison_id` with biometric counts and today's
/// attendance.
#[tracing::instrument(skip(store))]
pub async fn officers_by_prison_with_summary<S: RecordStore>(
  store: &S,
  prison_id: Id<Prison>,
  today: NaiveDate,
) -> Result<Vec<OfficerSummary>, S::Error> {
  let q = Query::<Officer>::index_eq(Officer::BY_PRISON_ID, prison_id);
  let officers = store.query(&q).await?;
  tracing::debug!(count = officers.len(), "summarising officers");

  try_join_all(officers.into_iter().map(|officer| async move {
    let photos_q = photos_of(officer.id);
    let prints_q = fingerprints_of(officer.id);
    let today_q = attendance_on(officer.id, today);
    let (photos, fingerprints, today_attendance) = futures::try_join!(
      store.query(&photos_q),
      store.query(&prints_q),
      store.query(&today_q),
    )?;

    Ok::<_, S::Error>(OfficerSummary {
      officer,
      photo_count: photos.len(),
      fingerprint_count: fingerprints.len(),
      primary_photo: primary_photo(&photos).cloned(),
      today_attendance: today_attendance.into_iter().next(),
    })
  }))
  .await
}

#[tracing::instrument(skip(store))]
pub async fn attendance_with_relations<S: RecordStore>(
  store: &S,
  id: Id<OfficerAttendance>,
) -> Result<Option<AttendanceWithRelations>, S::Error> {
  let Some(attendance) = store.get(id).await? else {
    tracing::debug!("attendance record not found");
    return Ok(None);
  };

  let (officer, prison, recorded_by) = futures::try_join!(
    store.get(attendance.officer_id),
    store.get(attendance.prison_id),
    lookup(store, attendance.recorded_by_id),
  )?;

  Ok(Some(AttendanceWithRelations { attendance, officer, prison, recorded_by }))
}

/// One entry per officer of `prison_id`, left-joined against that prison's
/// attendance for `date`.
#[tracing::instrument(skip(store))]
pub async fn daily_roster<S: RecordStore>(
  store: &S,
  prison_id: Id<Prison>,
  date: NaiveDate,
) -> Result<Vec<RosterEntry>, S::Error> {
  let officers_q = Query::<Officer>::index_eq(Officer::BY_PRISON_ID, prison_id);
  let attendance_q = Query::<OfficerAttendance>::index_eq(OfficerAttendance::BY_DATE, date)
    .eq("prisonId", prison_id);

  let (officers, attendance) =
    futures::try_join!(store.query(&officers_q), store.query(&attendance_q))?;
  tracing::debug!(officers = officers.len(), records = attendance.len(), "building roster");

  // Later records win if the one-per-day rule was broken.
  let mut by_officer: HashMap<Id<Officer>, OfficerAttendance> =
    attendance.into_iter().map(|a| (a.officer_id, a)).collect();

  Ok(
    officers
      .into_iter()
      .map(|officer| {
        let attendance = by_officer.remove(&officer.id);
        RosterEntry { officer, attendance }
      })
      .collect(),
  )
}
