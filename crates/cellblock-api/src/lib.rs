//! Read-only JSON API for Cellblock.
//!
//! Exposes an axum [`Router`] backed by any [`cellblock_core::RecordStore`].
//! Every route is a `GET` that returns one hydrated view, a list of them, or
//! a plain read such as an inmate search.
//! Auth, TLS, and transport concerns are the caller's responsibility.
//!
//! # Mounting
//!
//! ```rust,ignore
//! .nest("/api", cellblock_api::api_router(store.clone()))
//! ```

pub mod biometrics;
pub mod custody;
pub mod error;
pub mod inmates;
pub mod officers;
pub mod params;
pub mod prisons;

use std::sync::Arc;

use axum::{Router, routing::get};
use cellblock_core::RecordStore;

pub use error::ApiError;

/// Build a fully-materialised API router for `store`.
///
/// The returned `Router<()>` can be nested into any parent router regardless
/// of its own state type.
pub fn api_router<S>(store: Arc<S>) -> Router<()>
where
  S: RecordStore + 'static,
{
  Router::new()
    // Inmates
    .route("/inmates", get(inmates::search::<S>))
    .route("/inmates/{id}", get(inmates::get_one::<S>))
    .route("/inmates/{id}/items/unreturned", get(inmates::unreturned::<S>))
    .route("/charges/{id}", get(inmates::charge::<S>))
    // Officers
    .route("/officers/{id}", get(officers::get_one::<S>))
    .route("/officers/{id}/biometrics", get(officers::biometrics::<S>))
    .route("/officers/{id}/attendance-summary", get(officers::summary::<S>))
    .route("/attendance/{id}", get(officers::attendance::<S>))
    // Prisons
    .route("/prisons/{id}/officers", get(prisons::officers::<S>))
    .route("/prisons/{id}/roster", get(prisons::roster::<S>))
    .route("/prisons/{id}/inmates", get(prisons::inmates::<S>))
    // Custody events
    .route("/court-appearances/upcoming", get(custody::upcoming::<S>))
    .route("/court-appearances/{id}", get(custody::appearance::<S>))
    .route("/visits/inside", get(custody::inside::<S>))
    .route("/visits/{id}", get(custody::visit::<S>))
    .route("/movements/open", get(custody::open::<S>))
    .route("/movements/{id}", get(custody::movement::<S>))
    // Biometrics
    .route("/photos/unconfirmed", get(biometrics::unconfirmed_photos::<S>))
    .route("/photos/{id}", get(biometrics::photo::<S>))
    .route("/fingerprints/unconfirmed", get(biometrics::unconfirmed_fingerprints::<S>))
    .route("/fingerprints/{id}", get(biometrics::fingerprint::<S>))
    .with_state(store)
}

#[cfg(test)]
mod tests;
