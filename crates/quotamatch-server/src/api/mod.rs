//! HTTP API handlers.

mod handlers;

pub use handlers::{health_check, reconcile};
