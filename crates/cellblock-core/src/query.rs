//! Typed query descriptors consumed by [`RecordStore::query`].
//!
//! A [`Query`] names an optional [`Index`] (which fixes result ordering), a
//! conjunction of field [`Predicate`]s, an [`Order`] and an optional limit.
//! Field names are the camelCase JSON names of the record's fields.
//!
//! [`RecordStore::query`]: crate::store::RecordStore::query

use std::marker::PhantomData;

use chrono::NaiveDate;

use crate::{id::Id, record::Record};

// ─── Index ───────────────────────────────────────────────────────────────────

/// A named, ordered list of fields a collection can be scanned by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Index {
  pub name:   &'static str,
  pub fields: &'static [&'static str],
}

impl Index {
  pub const fn new(name: &'static str, fields: &'static [&'static str]) -> Self {
    Self { name, fields }
  }
}

// ─── Scalars ─────────────────────────────────────────────────────────────────

/// A comparison value. Dates and ids compare as their canonical strings.
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
  Text(String),
  Integer(i64),
  Real(f64),
  Bool(bool),
}

impl Scalar {
  /// Build a text scalar from anything string-like, e.g. a status enum.
  pub fn text(value: impl AsRef<str>) -> Self { Self::Text(value.as_ref().to_owned()) }
}

impl From<&str> for Scalar {
  fn from(v: &str) -> Self { Self::Text(v.to_owned()) }
}

impl From<String> for Scalar {
  fn from(v: String) -> Self { Self::Text(v) }
}

impl From<bool> for Scalar {
  fn from(v: bool) -> Self { Self::Bool(v) }
}

impl From<i64> for Scalar {
  fn from(v: i64) -> Self { Self::Integer(v) }
}

impl From<f64> for Scalar {
  fn from(v: f64) -> Self { Self::Real(v) }
}

impl From<NaiveDate> for Scalar {
  fn from(v: NaiveDate) -> Self { Self::Text(v.format("%Y-%m-%d").to_string()) }
}

impl<R> From<Id<R>> for Scalar {
  fn from(v: Id<R>) -> Self { Self::Text(v.to_string()) }
}

// ─── Predicates ──────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq)]
pub enum Op {
  Eq(Scalar),
  /// Inclusive lower bound.
  Gte(Scalar),
  /// Inclusive upper bound.
  Lte(Scalar),
  /// The field is missing or null.
  Absent,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Predicate {
  pub field: &'static str,
  pub op:    Op,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Order {
  #[default]
  Asc,
  Desc,
}

// ─── Query ───────────────────────────────────────────────────────────────────

/// A read over one collection, typed by the record it yields.
///
/// Results are ordered by the index fields (if any) and then by insertion
/// order; [`Order::Desc`] reverses both.
#[derive(Debug, Clone)]
pub struct Query<R> {
  pub index:      Option<Index>,
  pub predicates: Vec<Predicate>,
  pub order:      Order,
  pub limit:      Option<usize>,
  _record:        PhantomData<fn() -> R>,
}

impl<R: Record> Query<R> {
  /// Every record in the collection, in insertion order.
  pub fn all() -> Self {
    Self {
      index:      None,
      predicates: Vec::new(),
      order:      Order::Asc,
      limit:      None,
      _record:    PhantomData,
    }
  }

  /// Scan `index` without constraining it.
  pub fn by_index(index: Index) -> Self {
    Self { index: Some(index), ..Self::all() }
  }

  /// Scan `index` with its leading field equal to `value`.
  pub fn index_eq(index: Index, value: impl Into<Scalar>) -> Self {
    let query = Self::by_index(index);
    match index.fields.first() {
      Some(&field) => query.eq(field, value),
      None => query,
    }
  }

  pub fn eq(mut self, field: &'static str, value: impl Into<Scalar>) -> Self {
    self.predicates.push(Predicate { field, op: Op::Eq(value.into()) });
    self
  }

  pub fn gte(mut self, field: &'static str, value: impl Into<Scalar>) -> Self {
    self.predicates.push(Predicate { field, op: Op::Gte(value.into()) });
    self
  }

  pub fn lte(mut self, field: &'static str, value: impl Into<Scalar>) -> Self {
    self.predicates.push(Predicate { field, op: Op::Lte(value.into()) });
    self
  }

  pub fn absent(mut self, field: &'static str) -> Self {
    self.predicates.push(Predicate { field, op: Op::Absent });
    self
  }

  pub fn order(mut self, order: Order) -> Self {
    self.order = order;
    self
  }

  pub fn take(mut self, limit: usize) -> Self {
    self.limit = Some(limit);
    self
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::{facility::Prison, officer::Officer};

  #[test]
  fn index_eq_constrains_leading_field() {
    let prison = Id::<Prison>::generate();
    let q = Query::<Officer>::index_eq(Officer::BY_PRISON_ID, prison);

    assert_eq!(q.index, Some(Officer::BY_PRISON_ID));
    assert_eq!(q.predicates, vec![Predicate {
      field: "prisonId",
      op:    Op::Eq(Scalar::Text(prison.to_string())),
    }]);
    assert_eq!(q.order, Order::Asc);
    assert_eq!(q.limit, None);
  }

  #[test]
  fn dates_compare_as_iso_strings() {
    let d = NaiveDate::from_ymd_opt(2024, 3, 9).unwrap();
    assert_eq!(Scalar::from(d), Scalar::Text("2024-03-09".into()));
  }

  #[test]
  fn builder_accumulates() {
    let q = Query::<Officer>::all()
      .eq("isActive", true)
      .absent("rank")
      .order(Order::Desc)
      .take(5);
    assert_eq!(q.predicates.len(), 2);
    assert_eq!(q.predicates[1].op, Op::Absent);
    assert_eq!(q.order, Order::Desc);
    assert_eq!(q.limit, Some(5));
  }
}
