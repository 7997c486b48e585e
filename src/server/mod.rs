//! HTTP surface: a GET-only JSON API over the shared [`Dataset`].

pub mod handlers;
pub mod routes;

pub use routes::{router, serve};

use crate::store::Dataset;
use std::sync::Arc;

/// State shared by every handler. The dataset is never mutated after startup.
pub type AppState = Arc<Dataset>;
