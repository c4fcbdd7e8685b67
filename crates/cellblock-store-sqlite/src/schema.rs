//! SQL schema for the Cellblock SQLite store.
//!
//! Executed once at connection startup. Every collection shares one table;
//! record bodies are stored as JSON and declared indexes become expression
//! indexes over `json_extract`.

use cellblock_core::{Collection, query::Index};

/// Base schema DDL; idempotent thanks to `IF NOT EXISTS`.
pub const SCHEMA: &str = "
PRAGMA journal_mode = WAL;

CREATE TABLE IF NOT EXISTS records (
    seq         INTEGER PRIMARY KEY AUTOINCREMENT,  -- insertion order
    collection  TEXT NOT NULL,
    record_id   TEXT NOT NULL,
    body_json   TEXT NOT NULL,
    UNIQUE (collection, record_id)
);

CREATE INDEX IF NOT EXISTS records_collection_idx ON records(collection, seq);

PRAGMA user_version = 1;
";

/// SQL expression reading `field` out of a record body.
///
/// Field names are compile-time constants on the record types, never user
/// input.
pub fn field_expr(field: &str) -> String { format!("json_extract(body_json, '$.{field}')") }

/// `CREATE INDEX` statement backing one declared [`Index`].
pub fn index_ddl(collection: Collection, index: &Index) -> String {
  let columns = index
    .fields
    .iter()
    .map(|f| field_expr(f))
    .collect::<Vec<_>>()
    .join(", ");
  format!(
    "CREATE INDEX IF NOT EXISTS \"{c}_{n}_idx\" ON records(collection, {columns}, seq);",
    c = collection.as_ref(),
    n = index.name,
  )
}

#[cfg(test)]
mod tests {
  use cellblock_core::officer::OfficerAttendance;

  use super::*;

  #[test]
  fn compound_index_covers_every_field_in_order() {
    let ddl = index_ddl(Collection::OfficerAttendance, &OfficerAttendance::BY_OFFICER_DATE);
    assert_eq!(
      ddl,
      "CREATE INDEX IF NOT EXISTS \"officerAttendance_byOfficerDate_idx\" ON records(collection, \
       json_extract(body_json, '$.officerId'), json_extract(body_json, '$.date'), seq);"
    );
  }
}
