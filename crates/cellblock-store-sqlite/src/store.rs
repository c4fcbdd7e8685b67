//! [`SqliteStore`], the SQLite implementation of [`RecordStore`].

use std::path::Path;

use cellblock_core::{
  Collection, Id, Record, RecordStore, dataset::Dataset, query::Query,
  record::declared_indexes,
};
use rusqlite::OptionalExtension as _;

use crate::{
  Error, Result,
  encode::{RawRecord, compile_query, decode_record},
  schema::{SCHEMA, index_ddl},
};

// ─── Store ───────────────────────────────────────────────────────────────────

/// A Cellblock record store backed by a single SQLite file.
///
/// Cloning is cheap; the inner connection is reference-counted.
#[derive(Clone)]
pub struct SqliteStore {
  conn: tokio_rusqlite::Connection,
}

impl SqliteStore {
  /// Open (or create) a store at `path` and run schema initialisation.
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open(path).await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  /// Open an in-memory store, for tests.
  pub async fn open_in_memory() -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open_in_memory().await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  async fn init_schema(&self) -> Result<()> {
    let index_ddls: Vec<String> = declared_indexes()
      .iter()
      .map(|(collection, index)| index_ddl(*collection, index))
      .collect();

    self
      .conn
      .call(move |conn| {
        conn.execute_batch(SCHEMA)?;
        for ddl in &index_ddls {
          conn.execute_batch(ddl)?;
        }
        Ok(())
      })
      .await?;
    Ok(())
  }

  // ── Writes (seeding and tests only) ─────────────────────────────────────

  /// Insert one record. Fails with [`Error::DuplicateId`] if the id is taken.
  pub async fn insert<R: Record>(&self, record: &R) -> Result<()> {
    self.insert_raw(vec![RawRecord::encode(record)?]).await
  }

  /// Insert every record of `dataset` in a single transaction.
  ///
  /// Returns the number of records written. On a duplicate id nothing is
  /// written.
  pub async fn load_dataset(&self, dataset: &Dataset) -> Result<usize> {
    let mut rows = Vec::with_capacity(dataset.len());
    rows.extend(RawRecord::encode_all(&dataset.prisons)?);
    rows.extend(RawRecord::encode_all(&dataset.courts)?);
    rows.extend(RawRecord::encode_all(&dataset.offenses)?);
    rows.extend(RawRecord::encode_all(&dataset.officers)?);
    rows.extend(RawRecord::encode_all(&dataset.inmates)?);
    rows.extend(RawRecord::encode_all(&dataset.inmate_charges)?);
    rows.extend(RawRecord::encode_all(&dataset.court_appearances)?);
    rows.extend(RawRecord::encode_all(&dataset.record_movements)?);
    rows.extend(RawRecord::encode_all(&dataset.inmate_visits)?);
    rows.extend(RawRecord::encode_all(&dataset.items_in_custody)?);
    rows.extend(RawRecord::encode_all(&dataset.medical_records)?);
    rows.extend(RawRecord::encode_all(&dataset.photo_bucket)?);
    rows.extend(RawRecord::encode_all(&dataset.finger_prints)?);
    rows.extend(RawRecord::encode_all(&dataset.officer_attendance)?);

    let written = rows.len();
    self.insert_raw(rows).await?;
    tracing::debug!(written, "dataset loaded");
    Ok(written)
  }

  /// Number of records in `collection`.
  pub async fn count(&self, collection: Collection) -> Result<usize> {
    let name = collection.as_ref().to_owned();
    let n: i64 = self
      .conn
      .call(move |conn| {
        Ok(conn.query_row(
          "SELECT COUNT(*) FROM records WHERE collection = ?1",
          rusqlite::params![name],
          |r| r.get(0),
        )?)
      })
      .await?;
    Ok(usize::try_from(n).unwrap_or_default())
  }

  /// True when no collection holds any record.
  pub async fn is_empty(&self) -> Result<bool> {
    let any: bool = self
      .conn
      .call(|conn| {
        Ok(conn.query_row("SELECT EXISTS (SELECT 1 FROM records)", [], |r| r.get(0))?)
      })
      .await?;
    Ok(!any)
  }

  async fn insert_raw(&self, rows: Vec<RawRecord>) -> Result<()> {
    // The closure reports the first conflicting (collection, id) and lets the
    // transaction roll back on drop.
    let conflict: Option<(Collection, String)> = self
      .conn
      .call(move |conn| {
        let tx = conn.transaction()?;
        {
          let mut stmt = tx.prepare(
            "INSERT INTO records (collection, record_id, body_json)
             VALUES (?1, ?2, ?3)
             ON CONFLICT (collection, record_id) DO NOTHING",
          )?;
          for row in rows {
            let changed = stmt.execute(rusqlite::params![
              row.collection.as_ref(),
              row.record_id,
              row.body_json,
            ])?;
            if changed == 0 {
              return Ok(Some((row.collection, row.record_id)));
            }
          }
        }
        tx.commit()?;
        Ok(None)
      })
      .await?;

    match conflict {
      None => Ok(()),
      Some((collection, id)) => Err(Error::DuplicateId { collection, id }),
    }
  }
}

// ─── RecordStore impl ────────────────────────────────────────────────────────

impl RecordStore for SqliteStore {
  type Error = Error;

  async fn get<R: Record>(&self, id: Id<R>) -> Result<Option<R>> {
    let collection = R::COLLECTION.as_ref().to_owned();
    let id_str     = id.to_string();

    let body: Option<String> = self
      .conn
      .call(move |conn| {
        Ok(conn
          .query_row(
            "SELECT body_json FROM records WHERE collection = ?1 AND record_id = ?2",
            rusqlite::params![collection, id_str],
            |row| row.get(0),
          )
          .optional()?)
      })
      .await?;

    body.as_deref().map(decode_record::<R>).transpose()
  }

  async fn query<'a, R: Record>(&'a self, query: &'a Query<R>) -> Result<Vec<R>> {
    let compiled = compile_query(query);

    let bodies: Vec<String> = self
      .conn
      .call(move |conn| {
        let mut stmt = conn.prepare(&compiled.sql)?;
        let rows = stmt
          .query_map(rusqlite::params_from_iter(compiled.params), |row| row.get(0))?
          .collect::<rusqlite::Result<Vec<String>>>()?;
        Ok(rows)
      })
      .await?;

    bodies.iter().map(|b| decode_record(b)).collect()
  }
}
