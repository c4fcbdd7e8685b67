//! Typed record identifiers.
//!
//! An [`Id<R>`] is a UUID tagged with the record type it points at, so an
//! officer id can never be passed where a prison id is expected. On the wire
//! and in storage it is a plain hyphenated UUID string.

use std::{
  fmt,
  hash::{Hash, Hasher},
  marker::PhantomData,
  str::FromStr,
};

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use uuid::Uuid;

use crate::Error;

pub struct Id<R> {
  uuid:    Uuid,
  _record: PhantomData<fn() -> R>,
}

impl<R> Id<R> {
  /// Generate a fresh random id.
  pub fn generate() -> Self { Self::from_uuid(Uuid::new_v4()) }

  pub const fn from_uuid(uuid: Uuid) -> Self {
    Self { uuid, _record: PhantomData }
  }

  pub const fn uuid(self) -> Uuid { self.uuid }
}

// Manual impls: deriving would put spurious bounds on `R`.

impl<R> Clone for Id<R> {
  fn clone(&self) -> Self { *self }
}

impl<R> Copy for Id<R> {}

impl<R> PartialEq for Id<R> {
  fn eq(&self, other: &Self) -> bool { self.uuid == other.uuid }
}

impl<R> Eq for Id<R> {}

impl<R> Hash for Id<R> {
  fn hash<H: Hasher>(&self, state: &mut H) { self.uuid.hash(state) }
}

impl<R> fmt::Debug for Id<R> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "Id({})", self.uuid)
  }
}

impl<R> fmt::Display for Id<R> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    fmt::Display::fmt(&self.uuid.hyphenated(), f)
  }
}

impl<R> FromStr for Id<R> {
  type Err = Error;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    Uuid::parse_str(s)
      .map(Self::from_uuid)
      .map_err(|e| Error::InvalidId(s.to_owned(), e))
  }
}

impl<R> From<Uuid> for Id<R> {
  fn from(uuid: Uuid) -> Self { Self::from_uuid(uuid) }
}

impl<R> Serialize for Id<R> {
  fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
    self.uuid.serialize(serializer)
  }
}

impl<'de, R> Deserialize<'de> for Id<R> {
  fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
    Uuid::deserialize(deserializer).map(Self::from_uuid)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  struct Marker;

  #[test]
  fn display_and_parse_agree() {
    let id = Id::<Marker>::generate();
    let parsed: Id<Marker> = id.to_string().parse().unwrap();
    assert_eq!(id, parsed);
  }

  #[test]
  fn parse_rejects_garbage() {
    let err = "not-a-uuid".parse::<Id<Marker>>().unwrap_err();
    assert!(matches!(err, Error::InvalidId(ref s, _) if s == "not-a-uuid"));
  }

  #[test]
  fn serializes_as_plain_uuid_string() {
    let uuid = Uuid::new_v4();
    let json = serde_json::to_value(Id::<Marker>::from_uuid(uuid)).unwrap();
    assert_eq!(json, serde_json::Value::String(uuid.hyphenated().to_string()));
  }
}
