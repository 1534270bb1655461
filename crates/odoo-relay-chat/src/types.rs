//! Chat types matching the `/api/chat` JSON surface.

use odoo_relay_core::{Error, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Author of a chat turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Model,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Part {
    pub text: String,
}

/// One role-tagged message unit exchanged with the model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatTurn {
    pub role: Role,
    pub parts: Vec<Part>,
}

impl ChatTurn {
    pub fn user(text: impl Into<String>) -> Self {
        Self::single(Role::User, text)
    }

    pub fn model(text: impl Into<String>) -> Self {
        Self::single(Role::Model, text)
    }

    fn single(role: Role, text: impl Into<String>) -> Self {
        Self {
            role,
            parts: vec![Part { text: text.into() }],
        }
    }

    #[cfg(test)]
    pub(crate) fn text(&self) -> String {
        self.parts.iter().map(|p| p.text.as_str()).collect()
    }
}

/// Ordered, caller-owned sequence of chat turns.
pub type ConversationHistory = Vec<ChatTurn>;

/// Incoming chat request, as sent by the client.
///
/// History entries are kept as raw JSON until [`ChatRequest::validate`]
/// checks each one, so a bad entry can be reported by index.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default, rename = "conversationHistory")]
    pub conversation_history: Option<Vec<Value>>,
}

/// A chat request whose fields have passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedChat {
    pub message: String,
    pub history: ConversationHistory,
}

impl ChatRequest {
    /// Check the message and every history entry.
    ///
    /// The message is checked first, so a request with neither a message
    /// nor a well-formed history reports the missing message.
    pub fn validate(self, max_history_turns: usize) -> Result<ValidatedChat> {
        let message = match self.message {
            Some(m) if !m.is_empty() => m,
            _ => return Err(Error::MissingField("message")),
        };

        let raw_history = self.conversation_history.unwrap_or_default();
        if raw_history.len() > max_history_turns {
            return Err(Error::Validation(format!(
                "conversationHistory exceeds {} turns",
                max_history_turns
            )));
        }

        let history = raw_history
            .iter()
            .enumerate()
            .map(|(i, entry)| validate_turn(i, entry))
            .collect::<Result<Vec<_>>>()?;

        Ok(ValidatedChat { message, history })
    }
}

fn validate_turn(index: usize, entry: &Value) -> Result<ChatTurn> {
    let invalid =
        |reason: String| Error::Validation(format!("conversationHistory[{}]: {}", index, reason));

    let obj = entry
        .as_object()
        .ok_or_else(|| invalid("expected an object".into()))?;

    let role = match obj.get("role").and_then(Value::as_str) {
        Some("user") => Role::User,
        Some("model") => Role::Model,
        _ => return Err(invalid("role must be \"user\" or \"model\"".into())),
    };

    let raw_parts = obj
        .get("parts")
        .and_then(Value::as_array)
        .ok_or_else(|| invalid("parts must be an array".into()))?;
    if raw_parts.is_empty() {
        return Err(invalid("parts must not be empty".into()));
    }

    let parts = raw_parts
        .iter()
        .enumerate()
        .map(|(j, part)| {
            part.get("text")
                .and_then(Value::as_str)
                .map(|text| Part {
                    text: text.to_string(),
                })
                .ok_or_else(|| invalid(format!("parts[{}].text must be a string", j)))
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(ChatTurn { role, parts })
}

/// Successful chat response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatResponse {
    pub reply: String,
    #[serde(rename = "conversationHistory")]
    pub conversation_history: ConversationHistory,
}

/// Error body returned for every failed request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Liveness probe payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
}

impl HealthStatus {
    pub fn ok() -> Self {
        Self {
            status: "OK".into(),
        }
    }
}
