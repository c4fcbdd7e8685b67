//! Pure selection policies applied to already-fetched biometric lists.

use cellblock_core::biometric::{Biometric, Finger, Fingerprint, Photo};

/// The first photo flagged primary, else the first photo, else nothing.
pub fn primary_photo(photos: &[Photo]) -> Option<&Photo> {
  photos.iter().find(|p| p.is_primary).or_else(|| photos.first())
}

/// The confirmed subset, in input order.
pub fn confirmed<B: Biometric>(records: &[B]) -> Vec<B> {
  records.iter().filter(|r| r.is_confirmed()).cloned().collect()
}

pub fn confirmed_count<B: Biometric>(records: &[B]) -> usize {
  records.iter().filter(|r| r.is_confirmed()).count()
}

/// Which finger each print was taken from. Repeats are kept.
pub fn captured_fingers(fingerprints: &[Fingerprint]) -> Vec<Finger> {
  fingerprints.iter().map(|f| f.finger).collect()
}

#[cfg(test)]
mod tests {
  use cellblock_core::Id;
  use serde_json::json;

  use super::*;

  fn photo(is_primary: bool, is_confirmed: bool) -> Photo {
    serde_json::from_value(json!({
      "id":          Id::<Photo>::generate(),
      "subjectType": "inmate",
      "inmateId":    Id::<cellblock_core::inmate::Inmate>::generate(),
      "photoType":   "mugshot_front",
      "provider":    "internal",
      "isPrimary":   is_primary,
      "isConfirmed": is_confirmed,
    }))
    .unwrap()
  }

  fn print(finger: &str) -> Fingerprint {
    serde_json::from_value(json!({
      "id":          Id::<Fingerprint>::generate(),
      "subjectType": "inmate",
      "finger":      finger,
      "provider":    "internal",
    }))
    .unwrap()
  }

  #[test]
  fn primary_prefers_flagged_photo() {
    let photos = vec![photo(false, false), photo(true, false), photo(false, false)];
    assert_eq!(primary_photo(&photos).map(|p| p.id), Some(photos[1].id));
  }

  #[test]
  fn primary_takes_first_flagged_when_several() {
    let photos = vec![photo(false, false), photo(true, false), photo(true, false)];
    assert_eq!(primary_photo(&photos).map(|p| p.id), Some(photos[1].id));
  }

  #[test]
  fn primary_falls_back_to_first() {
    let photos = vec![photo(false, false), photo(false, false)];
    assert_eq!(primary_photo(&photos).map(|p| p.id), Some(photos[0].id));
  }

  #[test]
  fn primary_of_nothing_is_none() {
    assert!(primary_photo(&[]).is_none());
  }

  #[test]
  fn confirmed_keeps_order() {
    let photos = vec![
      photo(false, true),
      photo(false, false),
      photo(false, true),
      photo(false, true),
    ];
    let ids: Vec<_> = confirmed(&photos).iter().map(|p| p.id).collect();
    assert_eq!(ids, [photos[0].id, photos[2].id, photos[3].id]);
  }

  #[test]
  fn confirmed_count_matches_confirmed() {
    let photos = vec![photo(true, false), photo(false, true), photo(false, true)];
    assert_eq!(confirmed_count(&photos), 2);
    assert_eq!(confirmed_count::<Photo>(&[]), 0);
  }

  #[test]
  fn captured_fingers_keeps_duplicates() {
    let prints = vec![print("right_thumb"), print("left_index"), print("right_thumb")];
    assert_eq!(
      captured_fingers(&prints),
      [Finger::RightThumb, Finger::LeftIndex, Finger::RightThumb]
    );
  }
}
