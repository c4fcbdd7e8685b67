//! Core types and trait definitions for the Cellblock record store.
//!
//! This crate has no HTTP or database dependencies.
//! Every other crate in the workspace builds on it.

pub mod biometric;
pub mod custody;
pub mod dataset;
pub mod error;
pub mod facility;
pub mod id;
pub mod inmate;
pub mod officer;
pub mod query;
pub mod record;
pub mod store;
pub mod time;

pub use error::{Error, Result};
pub use id::Id;
pub use record::{Collection, Record};
pub use store::RecordStore;
pub use time::RecordedTime;
