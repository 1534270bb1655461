//! Chat relay for the Odoo development assistant.
//!
//! Validates a chat turn, prepends the fixed assistant persona, makes a
//! single non-streamed call to the text-generation provider and threads
//! the caller's conversation history through the reply.

pub mod prompt;
pub mod providers;
pub mod relay;
pub mod types;

pub use providers::{ChatProvider, GeminiProvider};
pub use relay::ChatRelay;
pub use types::*;
