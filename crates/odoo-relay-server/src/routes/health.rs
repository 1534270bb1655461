//! Liveness probe.

use std::sync::Arc;

use axum::routing::get;
use axum::{Json, Router};
use odoo_relay_chat::HealthStatus;

use crate::state::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route("/health", get(health))
}

/// GET /api/health. Always `{ "status": "OK" }`, never calls the provider.
async fn health() -> Json<HealthStatus> {
    Json(HealthStatus::ok())
}
