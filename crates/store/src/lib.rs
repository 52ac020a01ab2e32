//! HTTP client for the hosted content store.
//!
//! Rows live behind the store's Postgres REST interface and media behind
//! its storage API; both are reached over plain HTTPS with key-based
//! auth. Handlers never talk to [`SupabaseStore`] directly: access goes
//! through the port traits in [`ports`], which keeps them testable
//! against in-memory fakes.

pub mod client;
pub mod config;
pub mod error;
pub mod objects;
pub mod ports;

mod inquiries;
mod projects;

pub use client::SupabaseStore;
pub use config::StoreConfig;
pub use error::StoreError;
