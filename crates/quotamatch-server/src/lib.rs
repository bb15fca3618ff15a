//! HTTP transport for the quotamatch reconciliation core.

pub mod api;
pub mod config;

pub use config::AppConfig;

use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use quotamatch_core::StatementReconciler;

/// Build the application router.
pub fn app() -> Router {
    let reconciler = Arc::new(StatementReconciler::new());

    Router::new()
        .route("/health", get(api::health_check))
        .route("/api/reconcile", post(api::reconcile))
        .with_state(reconciler)
}
