//! HTTP error mapping.
//!
//! Handlers return `Result<T, ApiError>`. Caller mistakes are reported as
//! 400 with a descriptive message; everything else is logged with full
//! detail and answered with a generic 500 so provider details never reach
//! the client.

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use odoo_relay_chat::ErrorResponse;
use odoo_relay_core::Error;
use tracing::{error, warn};

pub const GENERIC_FAILURE: &str = "Failed to generate response";

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error(transparent)]
    Relay(#[from] Error),

    /// The body could not be read or decoded as a chat request.
    #[error("invalid request body: {0}")]
    InvalidBody(#[from] JsonRejection),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            ApiError::Relay(Error::MissingField(field)) => {
                warn!(field = %field, "chat request without a message");
                (StatusCode::BAD_REQUEST, "Message is required".to_string())
            }
            ApiError::Relay(Error::Validation(detail)) => {
                warn!(detail = %detail, "rejected chat request");
                (StatusCode::BAD_REQUEST, detail.clone())
            }
            ApiError::InvalidBody(rejection) => {
                warn!(rejection = %rejection.body_text(), "unreadable request body");
                if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
                    (
                        StatusCode::PAYLOAD_TOO_LARGE,
                        "Request body too large".to_string(),
                    )
                } else {
                    (StatusCode::BAD_REQUEST, "Invalid JSON body".to_string())
                }
            }
            ApiError::Relay(e) => {
                error!(error = %e, "chat request failed");
                (StatusCode::INTERNAL_SERVER_ERROR, GENERIC_FAILURE.to_string())
            }
        };

        (status, Json(ErrorResponse { error: message })).into_response()
    }
}
