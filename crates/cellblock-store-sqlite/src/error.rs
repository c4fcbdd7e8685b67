//! Error type for `cellblock-store-sqlite`.

use cellblock_core::Collection;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("core error: {0}")]
  Core(#[from] cellblock_core::Error),

  #[error("database error: {0}")]
  Database(#[from] tokio_rusqlite::Error),

  #[error("json error: {0}")]
  Json(#[from] serde_json::Error),

  /// A record with this id already exists in the collection.
  #[error("duplicate id {id} in {collection}")]
  DuplicateId { collection: Collection, id: String },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
