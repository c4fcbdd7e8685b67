//! Integration tests for `SqliteStore` against an in-memory database.

use cellblock_core::{
  Collection, Id, RecordStore,
  biometric::Photo,
  custody::{CourtAppearance, RecordMovement},
  dataset::Dataset,
  facility::{Court, Prison},
  inmate::Inmate,
  officer::{Officer, OfficerAttendance},
  query::{Order, Query},
};
use chrono::NaiveDate;
use serde_json::json;

use crate::{Error, SqliteStore};

async fn store() -> SqliteStore {
  SqliteStore::open_in_memory()
    .await
    .expect("in-memory store")
}

fn date(s: &str) -> NaiveDate { s.parse().unwrap() }

fn prison(code: &str) -> Prison {
  serde_json::from_value(json!({
    "id":   Id::<Prison>::generate(),
    "name": format!("{code} Main"),
    "code": code,
    "type": "main",
  }))
  .unwrap()
}

fn officer(prison_id: Id<Prison>, badge: &str) -> Officer {
  serde_json::from_value(json!({
    "id":          Id::<Officer>::generate(),
    "prisonId":    prison_id,
    "name":        format!("Officer {badge}"),
    "badgeNumber": badge,
  }))
  .unwrap()
}

fn appearance(inmate_id: Id<Inmate>, court_id: Id<Court>, on: &str) -> CourtAppearance {
  serde_json::from_value(json!({
    "id":            Id::<CourtAppearance>::generate(),
    "inmateId":      inmate_id,
    "courtId":       court_id,
    "scheduledDate": on,
  }))
  .unwrap()
}

fn movement(inmate_id: Id<Inmate>, return_date: Option<&str>) -> RecordMovement {
  serde_json::from_value(json!({
    "id":            Id::<RecordMovement>::generate(),
    "inmateId":      inmate_id,
    "movementType":  "hospital",
    "departureDate": "2025-02-01",
    "returnDate":    return_date,
    "reason":        "checkup",
  }))
  .unwrap()
}

fn attendance(officer_id: Id<Officer>, prison_id: Id<Prison>, on: &str) -> OfficerAttendance {
  serde_json::from_value(json!({
    "id":        Id::<OfficerAttendance>::generate(),
    "officerId": officer_id,
    "prisonId":  prison_id,
    "date":      on,
    "shift":     "morning",
    "status":    "present",
  }))
  .unwrap()
}

fn photo(inmate_id: Id<Inmate>, confirmed: bool) -> Photo {
  serde_json::from_value(json!({
    "id":          Id::<Photo>::generate(),
    "subjectType": "inmate",
    "inmateId":    inmate_id,
    "photoType":   "mugshot_front",
    "provider":    "internal",
    "isConfirmed": confirmed,
  }))
  .unwrap()
}

// ─── Point lookups ───────────────────────────────────────────────────────────

#[tokio::test]
async fn insert_and_get() {
  let s = store().await;
  let p = prison("LZ");
  s.insert(&p).await.unwrap();

  let fetched = s.get(p.id).await.unwrap().expect("prison present");
  assert_eq!(fetched.id, p.id);
  assert_eq!(fetched.code, "LZ");
}

#[tokio::test]
async fn get_missing_returns_none() {
  let s = store().await;
  let result = s.get(Id::<Prison>::generate()).await.unwrap();
  assert!(result.is_none());
}

#[tokio::test]
async fn get_is_scoped_to_the_collection() {
  let s = store().await;
  let p = prison("LZ");
  s.insert(&p).await.unwrap();

  // Same UUID, different record type.
  let as_court: Id<Court> = Id::from_uuid(p.id.uuid());
  assert!(s.get(as_court).await.unwrap().is_none());
}

#[tokio::test]
async fn duplicate_insert_is_rejected() {
  let s = store().await;
  let p = prison("LZ");
  s.insert(&p).await.unwrap();

  let err = s.insert(&p).await.unwrap_err();
  assert!(matches!(
    err,
    Error::DuplicateId { collection: Collection::Prisons, ref id } if *id == p.id.to_string()
  ));
}

// ─── Queries ─────────────────────────────────────────────────────────────────

#[tokio::test]
async fn index_eq_returns_matches_in_insertion_order() {
  let s = store().await;
  let a = prison("A");
  let b = prison("B");
  s.insert(&a).await.unwrap();
  s.insert(&b).await.unwrap();

  let o1 = officer(a.id, "001");
  let o2 = officer(b.id, "002");
  let o3 = officer(a.id, "003");
  for o in [&o1, &o2, &o3] {
    s.insert(o).await.unwrap();
  }

  let q = Query::<Officer>::index_eq(Officer::BY_PRISON_ID, a.id);
  let officers = s.query(&q).await.unwrap();
  let badges: Vec<&str> = officers.iter().map(|o| o.badge_number.as_str()).collect();
  assert_eq!(badges, ["001", "003"]);
}

#[tokio::test]
async fn gte_is_inclusive_and_ordered_by_index() {
  let s = store().await;
  let inmate = Id::<Inmate>::generate();
  let court = Id::<Court>::generate();

  // Inserted out of date order on purpose.
  for on in ["2025-03-10", "2025-03-01", "2025-02-28", "2025-03-05"] {
    s.insert(&appearance(inmate, court, on)).await.unwrap();
  }

  let q = Query::<CourtAppearance>::by_index(CourtAppearance::BY_SCHEDULED_DATE)
    .gte("scheduledDate", date("2025-03-01"));
  let dates: Vec<NaiveDate> = s
    .query(&q)
    .await
    .unwrap()
    .into_iter()
    .map(|a| a.scheduled_date)
    .collect();
  assert_eq!(dates, [date("2025-03-01"), date("2025-03-05"), date("2025-03-10")]);
}

#[tokio::test]
async fn gte_and_lte_bound_a_date_range() {
  let s = store().await;
  let inmate = Id::<Inmate>::generate();
  let court = Id::<Court>::generate();
  for on in ["2025-02-27", "2025-03-01", "2025-03-05", "2025-03-06"] {
    s.insert(&appearance(inmate, court, on)).await.unwrap();
  }

  let q = Query::<CourtAppearance>::by_index(CourtAppearance::BY_SCHEDULED_DATE)
    .gte("scheduledDate", date("2025-03-01"))
    .lte("scheduledDate", date("2025-03-05"));
  let dates: Vec<NaiveDate> =
    s.query(&q).await.unwrap().into_iter().map(|a| a.scheduled_date).collect();
  assert_eq!(dates, [date("2025-03-01"), date("2025-03-05")]);
}

#[tokio::test]
async fn descending_order_with_limit() {
  let s = store().await;
  let p = prison("A");
  let o = officer(p.id, "001");

  for day in 1..=5 {
    s.insert(&attendance(o.id, p.id, &format!("2025-04-0{day}")))
      .await
      .unwrap();
  }

  let q = Query::<OfficerAttendance>::index_eq(OfficerAttendance::BY_OFFICER_ID, o.id)
    .order(Order::Desc)
    .take(3);
  let days: Vec<NaiveDate> = s
    .query(&q)
    .await
    .unwrap()
    .into_iter()
    .map(|a| a.date)
    .collect();
  assert_eq!(days, [date("2025-04-05"), date("2025-04-04"), date("2025-04-03")]);
}

#[tokio::test]
async fn compound_index_eq() {
  let s = store().await;
  let p = prison("A");
  let o1 = officer(p.id, "001");
  let o2 = officer(p.id, "002");
  s.insert(&attendance(o1.id, p.id, "2025-04-01")).await.unwrap();
  s.insert(&attendance(o1.id, p.id, "2025-04-02")).await.unwrap();
  s.insert(&attendance(o2.id, p.id, "2025-04-02")).await.unwrap();

  let q = Query::<OfficerAttendance>::by_index(OfficerAttendance::BY_OFFICER_DATE)
    .eq("officerId", o1.id)
    .eq("date", date("2025-04-02"));
  let hits = s.query(&q).await.unwrap();
  assert_eq!(hits.len(), 1);
  assert_eq!(hits[0].officer_id, o1.id);
}

#[tokio::test]
async fn absent_matches_missing_fields_only() {
  let s = store().await;
  let inmate = Id::<Inmate>::generate();
  let open = movement(inmate, None);
  let closed = movement(inmate, Some("2025-02-03"));
  s.insert(&open).await.unwrap();
  s.insert(&closed).await.unwrap();

  let q = Query::<RecordMovement>::all().absent("returnDate");
  let hits = s.query(&q).await.unwrap();
  assert_eq!(hits.len(), 1);
  assert_eq!(hits[0].id, open.id);
}

#[tokio::test]
async fn bool_eq_matches_json_booleans() {
  let s = store().await;
  let inmate = Id::<Inmate>::generate();
  let yes = photo(inmate, true);
  let no = photo(inmate, false);
  s.insert(&yes).await.unwrap();
  s.insert(&no).await.unwrap();

  let q = Query::<Photo>::all().eq("isConfirmed", false);
  let hits = s.query(&q).await.unwrap();
  assert_eq!(hits.len(), 1);
  assert_eq!(hits[0].id, no.id);
}

// ─── Datasets ────────────────────────────────────────────────────────────────

#[tokio::test]
async fn load_dataset_writes_every_collection() {
  let s = store().await;
  let p = prison("A");
  let o = officer(p.id, "001");
  let dataset = Dataset {
    officer_attendance: vec![attendance(o.id, p.id, "2025-04-01")],
    prisons: vec![p],
    officers: vec![o],
    ..Dataset::default()
  };

  let written = s.load_dataset(&dataset).await.unwrap();
  assert_eq!(written, 3);
  assert_eq!(s.count(Collection::Prisons).await.unwrap(), 1);
  assert_eq!(s.count(Collection::Officers).await.unwrap(), 1);
  assert_eq!(s.count(Collection::OfficerAttendance).await.unwrap(), 1);
}

#[tokio::test]
async fn load_dataset_is_all_or_nothing() {
  let s = store().await;
  let p = prison("A");
  let dataset = Dataset {
    prisons: vec![prison("B"), p.clone(), p],
    ..Dataset::default()
  };

  let err = s.load_dataset(&dataset).await.unwrap_err();
  assert!(matches!(err, Error::DuplicateId { collection: Collection::Prisons, .. }));
  assert_eq!(s.count(Collection::Prisons).await.unwrap(), 0);
}

#[tokio::test]
async fn is_empty_until_first_record() {
  let s = store().await;
  assert!(s.is_empty().await.unwrap());

  s.insert(&prison("A")).await.unwrap();
  assert!(!s.is_empty().await.unwrap());
}
