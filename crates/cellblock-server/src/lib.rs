//! Server wiring for Cellblock: configuration and the top-level router.
//!
//! The binary in `main.rs` loads a [`ServerConfig`], opens the store and
//! serves [`app`].

use std::{
  path::{Path, PathBuf},
  sync::Arc,
};

use anyhow::Context as _;
use axum::Router;
use cellblock_core::{RecordStore, dataset::Dataset};
use cellblock_store_sqlite::SqliteStore;
use config::{ConfigError, FileFormat};
use serde::Deserialize;
use tower_http::trace::TraceLayer;

// ─── Configuration ────────────────────────────────────────────────────────────

/// Server configuration, loaded from a TOML file layered with `CELLBLOCK_*`
/// environment variables.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
  pub host:       String,
  pub port:       u16,
  pub store_path: PathBuf,
  /// JSON dataset loaded into the store before serving.
  pub seed_path:  Option<PathBuf>,
}

impl ServerConfig {
  /// Load from `path` (which need not exist) plus the environment.
  pub fn load(path: &Path) -> Result<Self, ConfigError> {
    Self::from_source(config::File::from(path).required(false))
  }

  /// Load from an in-memory TOML document plus the environment.
  pub fn from_toml(toml: &str) -> Result<Self, ConfigError> {
    Self::from_source(config::File::from_str(toml, FileFormat::Toml))
  }

  fn from_source<S>(file: S) -> Result<Self, ConfigError>
  where
    S: config::Source + Send + Sync + 'static,
  {
    config::Config::builder()
      .set_default("host", "127.0.0.1")?
      .set_default("port", 8080)?
      .set_default("store_path", "cellblock.db")?
      .add_source(file)
      .add_source(config::Environment::with_prefix("CELLBLOCK"))
      .build()?
      .try_deserialize()
  }

  pub fn address(&self) -> String { format!("{}:{}", self.host, self.port) }
}

/// Expand a leading `~` to the user's home directory.
pub fn expand_tilde(path: &Path) -> PathBuf {
  let s = path.to_string_lossy();
  if let Some(rest) = s.strip_prefix("~/")
    && let Ok(home) = std::env::var("HOME")
  {
    return PathBuf::from(home).join(rest);
  }
  path.to_path_buf()
}

// ─── Seeding ─────────────────────────────────────────────────────────────────

/// Load the JSON dataset at `path` into `store`, unless the store already
/// holds records.
///
/// Returns the number of records written, or `None` when seeding was skipped.
/// A store populated by an earlier run is left as it is, so a configured
/// `seed_path` survives restarts.
pub async fn seed_if_empty(store: &SqliteStore, path: &Path) -> anyhow::Result<Option<usize>> {
  if !store.is_empty().await.context("failed to inspect store")? {
    tracing::info!(path = ?path, "store already populated, skipping seed");
    return Ok(None);
  }

  let json = tokio::fs::read_to_string(path)
    .await
    .with_context(|| format!("failed to read dataset {path:?}"))?;
  let dataset = Dataset::from_json(&json).context("failed to parse dataset")?;
  let written = store
    .load_dataset(&dataset)
    .await
    .with_context(|| format!("failed to load dataset {path:?}"))?;
  Ok(Some(written))
}

// ─── Router ───────────────────────────────────────────────────────────────────

/// The API router with request tracing.
pub fn app<S>(store: Arc<S>) -> Router
where
  S: RecordStore + 'static,
{
  cellblock_api::api_router(store).layer(TraceLayer::new_for_http())
}
