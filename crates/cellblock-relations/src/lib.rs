//! Relational hydration for Cellblock records.
//!
//! Every function here takes a [`RecordStore`] handle explicitly, fetches a
//! root record and, when it exists, resolves its foreign keys and child
//! collections concurrently. The result is a view struct whose JSON form has
//! the root's own fields next to one extra field per relation.
//!
//! - A missing root yields `Ok(None)`; a dangling foreign key yields a `null`
//!   relation. Neither is an error.
//! - A failing store call fails the whole hydration with the store's own
//!   error. There are no partial results.
//! - Nothing in this crate writes.
//!
//! [`RecordStore`]: cellblock_core::RecordStore

pub mod biometric;
pub mod custody;
pub mod inmate;
pub mod lookup;
pub mod officer;
pub mod select;
pub mod views;

pub use biometric::{
  fingerprint_with_relations, photo_with_relations, unconfirmed_fingerprints_with_subjects,
  unconfirmed_photos_with_subjects,
};
pub use custody::{
  court_appearance_with_relations, movement_with_relations, open_movements, upcoming_appearances,
  visit_with_relations, visitors_inside,
};
pub use inmate::{
  InmateFilter, charge_with_relations, inmate_with_relations, inmates_by_prison_with_offense,
  search_inmates, unreturned_items,
};
pub use lookup::{Subject, lookup, resolve_subject};
pub use officer::{
  attendance_summary, attendance_with_relations, daily_roster, officer_with_biometrics_summary,
  officer_with_relations, officers_by_prison_with_summary,
};
