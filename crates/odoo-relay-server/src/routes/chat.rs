//! Chat route: relays one turn to the model.

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::routing::post;
use axum::{Json, Router};
use odoo_relay_chat::{ChatRequest, ChatResponse};
use tracing::info;

use crate::error::ApiError;
use crate::state::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route("/chat", post(chat))
}

/// POST /api/chat
async fn chat(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<Json<ChatResponse>, ApiError> {
    let req = match payload {
        Ok(Json(req)) => req,
        // A body that is not declared as JSON is ignored, leaving no message.
        Err(JsonRejection::MissingJsonContentType(_)) => ChatRequest::default(),
        Err(rejection) => return Err(rejection.into()),
    };
    let chat = req.validate(state.config.max_history_turns)?;

    info!(
        history_turns = chat.history.len(),
        model = state.relay.provider().model(),
        "relaying chat turn"
    );

    let response = state.relay.respond(chat).await?;
    Ok(Json(response))
}
