//! cellblock-server binary.
//!
//! Reads `config.toml` (or the path given with `--config`), opens the SQLite
//! store, seeds it from a JSON dataset if it is empty, and serves the read-only
//! API over HTTP.

use std::{path::PathBuf, sync::Arc};

use anyhow::Context as _;
use cellblock_server::{ServerConfig, expand_tilde, seed_if_empty};
use cellblock_store_sqlite::SqliteStore;
use clap::Parser;
use tokio::net::TcpListener;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about = "Cellblock records server")]
struct Cli {
  /// Path to the TOML configuration file.
  #[arg(short, long, default_value = "config.toml")]
  config: PathBuf,

  /// JSON dataset to load before serving. Overrides `seed_path`.
  #[arg(long)]
  seed: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
  // Initialise tracing.
  tracing_subscriber::fmt()
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy(),
    )
    .init();

  let cli = Cli::parse();

  let mut server_cfg =
    ServerConfig::load(&cli.config).context("failed to load ServerConfig")?;
  if let Some(seed) = cli.seed {
    server_cfg.seed_path = Some(seed);
  }

  let store_path = expand_tilde(&server_cfg.store_path);
  let store = SqliteStore::open(&store_path)
    .await
    .with_context(|| format!("failed to open store at {store_path:?}"))?;

  if let Some(seed_path) = &server_cfg.seed_path {
    let seed_path = expand_tilde(seed_path);
    if let Some(written) = seed_if_empty(&store, &seed_path).await? {
      tracing::info!(written, path = ?seed_path, "store seeded");
    }
  }

  let app = cellblock_server::app(Arc::new(store));
  let address = server_cfg.address();

  tracing::info!("Listening on http://{address}");
  let listener = TcpListener::bind(&address)
    .await
    .with_context(|| format!("failed to bind {address}"))?;

  axum::serve(listener, app).await.context("server error")?;

  Ok(())
}
