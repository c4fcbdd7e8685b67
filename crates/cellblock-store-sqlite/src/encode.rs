//! Encoding and decoding helpers between Rust domain types and the plain-text
//! representations stored in SQLite columns.
//!
//! Record bodies are stored as compact JSON. Ids are stored as hyphenated
//! lowercase strings. [`Query`] descriptors compile to a single `SELECT`
//! with positional parameters.

use cellblock_core::{
  Collection, Record,
  query::{Op, Order, Query, Scalar},
};
use rusqlite::types::Value;

use crate::{Result, schema::field_expr};

// ─── Scalars ─────────────────────────────────────────────────────────────────

/// Map a comparison value onto what `json_extract` yields for the same JSON.
///
/// JSON booleans come back from `json_extract` as integers 1/0.
pub fn encode_scalar(s: &Scalar) -> Value {
  match s {
    Scalar::Text(t) => Value::Text(t.clone()),
    Scalar::Integer(i) => Value::Integer(*i),
    Scalar::Real(r) => Value::Real(*r),
    Scalar::Bool(b) => Value::Integer(i64::from(*b)),
  }
}

// ─── Records ─────────────────────────────────────────────────────────────────

/// Raw strings for one `records` row.
pub struct RawRecord {
  pub collection: Collection,
  pub record_id:  String,
  pub body_json:  String,
}

impl RawRecord {
  pub fn encode<R: Record>(record: &R) -> Result<Self> {
    Ok(Self {
      collection: R::COLLECTION,
      record_id:  record.id().to_string(),
      body_json:  serde_json::to_string(record)?,
    })
  }

  pub fn encode_all<R: Record>(records: &[R]) -> Result<Vec<Self>> {
    records.iter().map(Self::encode).collect()
  }
}

pub fn decode_record<R: Record>(body_json: &str) -> Result<R> {
  Ok(serde_json::from_str(body_json)?)
}

// ─── Queries ─────────────────────────────────────────────────────────────────

/// A [`Query`] lowered to SQL text plus positional parameters.
#[derive(Debug)]
pub struct CompiledQuery {
  pub sql:    String,
  pub params: Vec<Value>,
}

pub fn compile_query<R: Record>(query: &Query<R>) -> CompiledQuery {
  let mut params = vec![Value::Text(R::COLLECTION.as_ref().to_owned())];
  let mut conds = vec!["collection = ?1".to_owned()];

  for predicate in &query.predicates {
    let column = field_expr(predicate.field);
    match &predicate.op {
      Op::Eq(v) => {
        params.push(encode_scalar(v));
        conds.push(format!("{column} = ?{}", params.len()));
      }
      Op::Gte(v) => {
        params.push(encode_scalar(v));
        conds.push(format!("{column} >= ?{}", params.len()));
      }
      Op::Lte(v) => {
        params.push(encode_scalar(v));
        conds.push(format!("{column} <= ?{}", params.len()));
      }
      Op::Absent => conds.push(format!("{column} IS NULL")),
    }
  }

  let direction = match query.order {
    Order::Asc => "ASC",
    Order::Desc => "DESC",
  };
  let mut order_by: Vec<String> = query
    .index
    .iter()
    .flat_map(|i| i.fields.iter())
    .map(|f| format!("{} {direction}", field_expr(f)))
    .collect();
  order_by.push(format!("seq {direction}"));

  let mut sql = format!(
    "SELECT body_json FROM records WHERE {} ORDER BY {}",
    conds.join(" AND "),
    order_by.join(", "),
  );

  if let Some(limit) = query.limit {
    params.push(Value::Integer(i64::try_from(limit).unwrap_or(i64::MAX)));
    sql.push_str(&format!(" LIMIT ?{}", params.len()));
  }

  CompiledQuery { sql, params }
}

#[cfg(test)]
mod tests {
  use cellblock_core::{
    Id,
    custody::{CourtAppearance, RecordMovement},
    facility::Prison,
    officer::{Officer, OfficerAttendance},
  };
  use chrono::NaiveDate;

  use super::*;

  #[test]
  fn unconstrained_scan_orders_by_insertion() {
    let q = compile_query(&Query::<Prison>::all());
    assert_eq!(
      q.sql,
      "SELECT body_json FROM records WHERE collection = ?1 ORDER BY seq ASC"
    );
    assert_eq!(q.params, vec![Value::Text("prisons".into())]);
  }

  #[test]
  fn range_scan_orders_by_index_field() {
    let from = NaiveDate::from_ymd_opt(2025, 1, 31).unwrap();
    let q = compile_query(
      &Query::<CourtAppearance>::by_index(CourtAppearance::BY_SCHEDULED_DATE)
        .gte("scheduledDate", from),
    );
    assert_eq!(
      q.sql,
      "SELECT body_json FROM records WHERE collection = ?1 AND \
       json_extract(body_json, '$.scheduledDate') >= ?2 ORDER BY \
       json_extract(body_json, '$.scheduledDate') ASC, seq ASC"
    );
    assert_eq!(q.params[1], Value::Text("2025-01-31".into()));
  }

  #[test]
  fn descending_with_limit() {
    let officer = Id::<Officer>::generate();
    let q = compile_query(
      &Query::<OfficerAttendance>::index_eq(OfficerAttendance::BY_OFFICER_ID, officer)
        .order(Order::Desc)
        .take(30),
    );
    assert!(q.sql.ends_with("ORDER BY json_extract(body_json, '$.officerId') DESC, seq DESC LIMIT ?3"));
    assert_eq!(q.params[2], Value::Integer(30));
  }

  #[test]
  fn absent_and_bool_predicates() {
    let q = compile_query(&Query::<RecordMovement>::all().absent("returnDate"));
    assert!(q.sql.contains("json_extract(body_json, '$.returnDate') IS NULL"));
    assert_eq!(q.params.len(), 1);

    assert_eq!(encode_scalar(&Scalar::Bool(false)), Value::Integer(0));
    assert_eq!(encode_scalar(&Scalar::Bool(true)), Value::Integer(1));
  }
}
