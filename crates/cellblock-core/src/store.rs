//! The `RecordStore` trait: the read surface the hydration layer needs.
//!
//! The trait is implemented by storage backends (e.g.
//! `cellblock-store-sqlite`). Higher layers depend on this abstraction, not on
//! any concrete backend; a store handle is always passed in explicitly.

use std::future::Future;

use crate::{id::Id, query::Query, record::Record};

/// Abstraction over a Cellblock record store backend.
///
/// Only reads are part of the contract. How records get written is a
/// backend concern.
///
/// All methods return `Send` futures so the trait can be used in multi-threaded
/// async runtimes (e.g. tokio with `axum`).
pub trait RecordStore: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  /// Point lookup. Returns `None` if no record of type `R` has this id.
  fn get<R: Record>(
    &self,
    id: Id<R>,
  ) -> impl Future<Output = Result<Option<R>, Self::Error>> + Send + '_;

  /// Execute `query` against `R`'s collection.
  fn query<'a, R: Record>(
    &'a self,
    query: &'a Query<R>,
  ) -> impl Future<Output = Result<Vec<R>, Self::Error>> + Send + 'a;
}
