//! In-process router tests using `tower::ServiceExt::oneshot`.

use std::sync::Arc;

use axum::{
  Router,
  body::Body,
  http::{Request, StatusCode},
};
use cellblock_core::{
  Id,
  biometric::{Fingerprint, Photo},
  custody::{CourtAppearance, InmateVisit, RecordMovement},
  dataset::Dataset,
  facility::{Court, Offense, Prison},
  inmate::{Inmate, InmateCharge, ItemInCustody},
  officer::{Officer, OfficerAttendance},
};
use cellblock_store_sqlite::SqliteStore;
use serde_json::{Value, json};
use tower::ServiceExt as _;

use crate::api_router;

struct Ids {
  prison:     Id<Prison>,
  officer:    Id<Officer>,
  inmate:     Id<Inmate>,
  charge:     Id<InmateCharge>,
  appearance: Id<CourtAppearance>,
  visit:      Id<InmateVisit>,
  movement:   Id<RecordMovement>,
  photo:      Id<Photo>,
  print:      Id<Fingerprint>,
  attendance: Id<OfficerAttendance>,
}

async fn app() -> (Router, Ids) {
  let ids = Ids {
    prison:     Id::generate(),
    officer:    Id::generate(),
    inmate:     Id::generate(),
    charge:     Id::generate(),
    appearance: Id::generate(),
    visit:      Id::generate(),
    movement:   Id::generate(),
    photo:      Id::generate(),
    print:      Id::generate(),
    attendance: Id::generate(),
  };
  let offense = Id::<Offense>::generate();
  let court = Id::<Court>::generate();

  let dataset: Dataset = serde_json::from_value(json!({
    "prisons":  [{ "id": ids.prison, "name": "Luzira", "code": "LZ", "type": "main" }],
    "offenses": [{ "id": offense, "name": "Theft" }],
    "courts":   [{ "id": court, "name": "Nakawa" }],
    "officers": [{
      "id": ids.officer, "prisonId": ids.prison, "name": "Sgt. Okello", "badgeNumber": "001",
    }],
    "inmates": [{
      "id": ids.inmate, "firstName": "John", "lastName": "Doe", "prisonNumber": "LZ/1",
      "dob": "1990-05-12", "gender": "male", "inmateType": "remand", "status": "remand",
      "prisonId": ids.prison, "caseNumber": "CR-1", "offenseId": offense,
      "admissionDate": "2025-01-10",
    }],
    "inmateCharges": [{ "id": ids.charge, "inmateId": ids.inmate, "offenseId": offense }],
    "itemsInCustody": [
      { "id": Id::<ItemInCustody>::generate(), "inmateId": ids.inmate, "name": "watch" },
      {
        "id": Id::<ItemInCustody>::generate(), "inmateId": ids.inmate, "name": "belt",
        "returnedAt": "2025-02-01T10:00:00.000Z",
      },
    ],
    "courtAppearances": [{
      "id": ids.appearance, "inmateId": ids.inmate, "courtId": court,
      "scheduledDate": "2025-03-10",
    }],
    "inmateVisits": [{
      "id": ids.visit, "inmateId": ids.inmate, "prisonId": ids.prison, "fullName": "Jane Doe",
      "idNumber": "CM1", "relationship": "sister", "phone": "0700", "status": "checked_in",
    }],
    "recordMovements": [{
      "id": ids.movement, "inmateId": ids.inmate, "movementType": "hospital",
      "departureDate": "2025-03-02", "reason": "x-ray",
    }],
    "photoBucket": [{
      "id": ids.photo, "subjectType": "officer", "officerId": ids.officer,
      "photoType": "profile", "provider": "upload",
    }],
    "fingerPrints": [{
      "id": ids.print, "subjectType": "inmate", "inmateId": ids.inmate,
      "finger": "left_index", "provider": "internal", "isConfirmed": true,
    }],
    "officerAttendance": [{
      "id": ids.attendance, "officerId": ids.officer, "prisonId": ids.prison,
      "date": "2025-03-01", "shift": "morning", "status": "present",
      "checkInTime": "2025-03-01T08:30:00",
    }],
  }))
  .unwrap();

  let store = SqliteStore::open_in_memory().await.unwrap();
  store.load_dataset(&dataset).await.unwrap();
  (api_router(Arc::new(store)), ids)
}

async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
  let req = Request::builder().uri(uri).body(Body::empty()).unwrap();
  let resp = app.clone().oneshot(req).await.unwrap();
  let status = resp.status();
  let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
  (status, serde_json::from_slice(&bytes).unwrap())
}

// ─── Single views ────────────────────────────────────────────────────────────

#[tokio::test]
async fn inmate_view() {
  let (app, ids) = app().await;
  let (status, body) = get(&app, &format!("/inmates/{}", ids.inmate)).await;

  assert_eq!(status, StatusCode::OK);
  assert_eq!(body["id"], json!(ids.inmate));
  assert_eq!(body["prison"]["code"], "LZ");
  assert_eq!(body["charges"][0]["offense"]["name"], "Theft");
  assert_eq!(body["capturedFingers"], json!(["left_index"]));
  assert_eq!(body["primaryPhoto"], Value::Null);
}

#[tokio::test]
async fn unknown_inmate_is_404_with_error_body() {
  let (app, _) = app().await;
  let (status, body) = get(&app, &format!("/inmates/{}", Id::<Inmate>::generate())).await;

  assert_eq!(status, StatusCode::NOT_FOUND);
  assert!(body["error"].as_str().unwrap().contains("not found"));
}

#[tokio::test]
async fn malformed_id_is_400() {
  let (app, _) = app().await;
  let (status, body) = get(&app, "/visits/not-a-uuid").await;

  assert_eq!(status, StatusCode::BAD_REQUEST);
  assert!(body["error"].is_string());
}

#[tokio::test]
async fn officer_view_honours_date() {
  let (app, ids) = app().await;

  let (status, body) = get(&app, &format!("/officers/{}?date=2025-03-01", ids.officer)).await;
  assert_eq!(status, StatusCode::OK);
  assert_eq!(body["todayAttendance"]["id"], json!(ids.attendance));
  assert_eq!(body["photoCount"], 1);
  assert_eq!(body["primaryPhoto"]["id"], json!(ids.photo));

  let (_, body) = get(&app, &format!("/officers/{}?date=2025-03-02", ids.officer)).await;
  assert_eq!(body["todayAttendance"], Value::Null);
  assert_eq!(body["recentAttendance"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn every_detail_route_resolves() {
  let (app, ids) = app().await;

  let routes = [
    format!("/charges/{}", ids.charge),
    format!("/attendance/{}", ids.attendance),
    format!("/court-appearances/{}", ids.appearance),
    format!("/visits/{}", ids.visit),
    format!("/movements/{}", ids.movement),
    format!("/photos/{}", ids.photo),
    format!("/fingerprints/{}", ids.print),
  ];
  for uri in &routes {
    let (status, body) = get(&app, uri).await;
    assert_eq!(status, StatusCode::OK, "{uri}");
    assert!(body["id"].is_string(), "{uri}");
  }
}

#[tokio::test]
async fn photo_subject_is_the_officer() {
  let (app, ids) = app().await;
  let (_, body) = get(&app, &format!("/photos/{}", ids.photo)).await;

  assert_eq!(body["subject"]["badgeNumber"], "001");
  assert_eq!(body["capturedBy"], Value::Null);
}

#[tokio::test]
async fn appearance_without_escort_has_null_field() {
  let (app, ids) = app().await;
  let (_, body) = get(&app, &format!("/court-appearances/{}", ids.appearance)).await;

  assert_eq!(body["court"]["name"], "Nakawa");
  assert_eq!(body.get("escortOfficer"), Some(&Value::Null));
}

#[tokio::test]
async fn officer_biometrics_summary_route() {
  let (app, ids) = app().await;
  let (status, body) =
    get(&app, &format!("/officers/{}/biometrics?date=2025-03-01", ids.officer)).await;

  assert_eq!(status, StatusCode::OK);
  assert_eq!(body["photoCount"], 1);
  assert_eq!(body["confirmedPhotoCount"], 0);
  assert_eq!(body["confirmedFpCount"], 0);
  assert_eq!(body["todayAttendance"]["checkInTime"], "2025-03-01T08:30:00");

  let (status, _) =
    get(&app, &format!("/officers/{}/biometrics", Id::<Officer>::generate())).await;
  assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn attendance_summary_route() {
  let (app, ids) = app().await;
  let uri = format!("/officers/{}/attendance-summary?from=2025-03-01&to=2025-03-31", ids.officer);
  let (status, body) = get(&app, &uri).await;
  assert_eq!(status, StatusCode::OK);
  assert_eq!(body["present"], 1);
  assert_eq!(body["total"], 1);

  let (status, body) =
    get(&app, &format!("/officers/{}/attendance-summary?from=2025-03-01", ids.officer)).await;
  assert_eq!(status, StatusCode::BAD_REQUEST);
  assert_eq!(body["error"], "missing to date");

  let unknown = Id::<Officer>::generate();
  let uri = format!("/officers/{unknown}/attendance-summary?from=2025-03-01&to=2025-03-31");
  let (status, _) = get(&app, &uri).await;
  assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn inmate_search_and_property() {
  let (app, ids) = app().await;

  let (status, found) = get(&app, &format!("/inmates?prisonId={}&status=remand", ids.prison)).await;
  assert_eq!(status, StatusCode::OK);
  assert_eq!(found[0]["id"], json!(ids.inmate));

  let (_, none) = get(&app, "/inmates?status=convict").await;
  assert_eq!(none, json!([]));

  let (status, _) = get(&app, "/inmates?riskLevel=extreme").await;
  assert_eq!(status, StatusCode::BAD_REQUEST);

  let (status, items) = get(&app, &format!("/inmates/{}/items/unreturned", ids.inmate)).await;
  assert_eq!(status, StatusCode::OK);
  assert_eq!(items.as_array().unwrap().len(), 1);
  assert_eq!(items[0]["name"], "watch");

  let (status, _) =
    get(&app, &format!("/inmates/{}/items/unreturned", Id::<Inmate>::generate())).await;
  assert_eq!(status, StatusCode::NOT_FOUND);
}

// ─── Prison listings ─────────────────────────────────────────────────────────

#[tokio::test]
async fn prison_listings() {
  let (app, ids) = app().await;

  let (status, roster) = get(&app, &format!("/prisons/{}/roster?date=2025-03-01", ids.prison)).await;
  assert_eq!(status, StatusCode::OK);
  assert_eq!(roster[0]["attendance"]["status"], "present");

  let (_, officers) = get(&app, &format!("/prisons/{}/officers?date=2025-03-01", ids.prison)).await;
  assert_eq!(officers[0]["photoCount"], 1);
  assert_eq!(officers[0]["fingerprintCount"], 0);

  let (_, inmates) = get(&app, &format!("/prisons/{}/inmates", ids.prison)).await;
  assert_eq!(inmates[0]["offense"]["name"], "Theft");
}

#[tokio::test]
async fn unknown_prison_is_404() {
  let (app, _) = app().await;
  let (status, _) = get(&app, &format!("/prisons/{}/roster", Id::<Prison>::generate())).await;
  assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn malformed_date_is_400() {
  let (app, ids) = app().await;
  let (status, _) = get(&app, &format!("/prisons/{}/roster?date=March", ids.prison)).await;
  assert_eq!(status, StatusCode::BAD_REQUEST);
}

// ─── Boards and queues ───────────────────────────────────────────────────────

#[tokio::test]
async fn operational_boards() {
  let (app, ids) = app().await;

  let (_, upcoming) = get(&app, "/court-appearances/upcoming?from=2025-03-01").await;
  assert_eq!(upcoming[0]["id"], json!(ids.appearance));
  let (_, later) = get(&app, "/court-appearances/upcoming?from=2025-03-11").await;
  assert_eq!(later, json!([]));

  let (_, inside) = get(&app, "/visits/inside").await;
  assert_eq!(inside[0]["inmate"]["lastName"], "Doe");

  let (_, open) = get(&app, "/movements/open").await;
  assert_eq!(open[0]["id"], json!(ids.movement));
  assert_eq!(open[0]["fromPrison"], Value::Null);
}

#[tokio::test]
async fn confirmation_queues() {
  let (app, ids) = app().await;

  let (_, photos) = get(&app, "/photos/unconfirmed").await;
  assert_eq!(photos[0]["id"], json!(ids.photo));
  assert_eq!(photos[0]["subject"]["name"], "Sgt. Okello");

  // The only fingerprint is already confirmed.
  let (_, prints) = get(&app, "/fingerprints/unconfirmed").await;
  assert_eq!(prints, json!([]));
}
