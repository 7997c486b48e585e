//! In-memory, read-only store for the station and measurement tables.
//!
//! A [`Dataset`] is loaded once at startup and shared behind an `Arc`.
//! Every request opens its own [`Session`], which is released when dropped.

pub mod dataset;
pub mod session;

pub use dataset::Dataset;
pub use session::Session;
