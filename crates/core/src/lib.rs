//! Domain logic for the Thrive studio backend.
//!
//! Everything in this crate is pure: validation, normalization, escaping
//! and ordering rules shared by the store, mailer and API crates. I/O and
//! transport concerns live in the crates that depend on this one.

pub mod error;
pub mod html;
pub mod inquiry;
pub mod naming;
pub mod project;

pub use error::CoreError;
