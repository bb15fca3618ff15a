//! Reconciliation endpoint handlers.
//!
//! `POST /api/reconcile` takes a multipart form with a `file` field (the
//! statement PDF) and a `members` field (the roster as a JSON array), and
//! answers with a status envelope. A malformed roster is a client error
//! (400); an unreadable document is reported distinctly (422); zero
//! matches is a successful, empty result.

use std::sync::Arc;

use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use tracing::{info, warn};

use quotamatch_core::{roster_from_json, MatchRecord, QuotamatchError, StatementReconciler};

/// Success envelope.
#[derive(Debug, Serialize)]
pub struct ReconcileResponse {
    pub status: &'static str,
    pub matches: Vec<MatchRecord>,
}

/// Error envelope.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub status: &'static str,
    pub message: String,
}

/// Liveness probe.
pub async fn health_check() -> &'static str {
    "OK"
}

/// Reconcile an uploaded statement against the supplied roster.
pub async fn reconcile(
    State(reconciler): State<Arc<StatementReconciler>>,
    mut multipart: Multipart,
) -> Response {
    let mut file: Option<Vec<u8>> = None;
    let mut members: Option<String> = None;

    loop {
        let field = match multipart.next_field().await {
            Ok(Some(field)) => field,
            Ok(None) => break,
            Err(e) => return client_error(format!("malformed multipart body: {}", e)),
        };

        let name = field.name().map(|s| s.to_string());
        match name.as_deref() {
            Some("file") => match field.bytes().await {
                Ok(bytes) => file = Some(bytes.to_vec()),
                Err(e) => return client_error(format!("failed to read file field: {}", e)),
            },
            Some("members") => match field.text().await {
                Ok(text) => members = Some(text),
                Err(e) => return client_error(format!("failed to read members field: {}", e)),
            },
            _ => {}
        }
    }

    let Some(file) = file else {
        return client_error("missing \"file\" field".to_string());
    };
    let Some(members) = members else {
        return client_error("missing \"members\" field".to_string());
    };

    let roster = match roster_from_json(&members) {
        Ok(roster) => roster,
        Err(e) => return client_error(e.to_string()),
    };

    match reconciler.reconcile_pdf(&file, &roster) {
        Ok(matches) => {
            info!(
                "reconciled statement against {} members: {} candidate matches",
                roster.len(),
                matches.len()
            );
            (
                StatusCode::OK,
                Json(ReconcileResponse {
                    status: "ok",
                    matches,
                }),
            )
                .into_response()
        }
        Err(e @ QuotamatchError::Pdf(_)) => {
            warn!("unreadable document: {}", e);
            error_response(StatusCode::UNPROCESSABLE_ENTITY, e.to_string())
        }
        Err(e) => error_response(StatusCode::INTERNAL_SERVER_ERROR, e.to_string()),
    }
}

fn client_error(message: String) -> Response {
    warn!("client error: {}", message);
    error_response(StatusCode::BAD_REQUEST, message)
}

fn error_response(status: StatusCode, message: String) -> Response {
    (
        status,
        Json(ErrorResponse {
            status: "error",
            message,
        }),
    )
        .into_response()
}
