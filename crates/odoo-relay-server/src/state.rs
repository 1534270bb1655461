//! Shared application state.

use std::sync::Arc;

use odoo_relay_chat::{ChatProvider, ChatRelay, GeminiProvider};
use odoo_relay_core::{RelayConfig, Result};

/// State accessible from all route handlers. Built once at startup and
/// read-only afterwards.
pub struct AppState {
    pub config: RelayConfig,
    pub relay: ChatRelay,
}

impl AppState {
    pub fn new(config: RelayConfig, provider: Arc<dyn ChatProvider>) -> Self {
        Self {
            config,
            relay: ChatRelay::new(provider),
        }
    }

    /// Build state with the Gemini provider described by `config`.
    pub fn from_config(config: RelayConfig) -> Result<Self> {
        let provider = GeminiProvider::new(&config.provider)?;
        Ok(Self::new(config, Arc::new(provider)))
    }
}
