//! Process configuration, read once at startup.

use std::fmt;
use std::net::SocketAddr;
use std::str::FromStr;
use std::time::Duration;

use crate::error::{Error, Result};

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_MODEL: &str = "gemma-2-9b-it";
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_MAX_HISTORY_TURNS: usize = 100;

/// Connection settings for the text-generation provider.
#[derive(Clone)]
pub struct ProviderSettings {
    pub api_key: String,
    pub model: String,
    /// API root, without a trailing slash.
    pub base_url: String,
    /// Applied by the HTTP client; `None` means no timeout.
    pub timeout: Option<Duration>,
}

// The API key never ends up in logs.
impl fmt::Debug for ProviderSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProviderSettings")
            .field("api_key", &"<redacted>")
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .finish()
    }
}

/// Top-level relay configuration.
#[derive(Debug, Clone)]
pub struct RelayConfig {
    /// HTTP listen port.
    pub port: u16,
    pub provider: ProviderSettings,
    /// Longest conversation history a caller may submit.
    pub max_history_turns: usize,
}

impl RelayConfig {
    /// Create configuration from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Create configuration from an arbitrary variable source.
    ///
    /// Blank values are treated as unset. `GOOGLE_API_KEY` is the only
    /// required variable.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let api_key = var("GOOGLE_API_KEY").ok_or_else(|| {
            Error::Config("GOOGLE_API_KEY environment variable is not set".into())
        })?;

        let port = parse_or(var("PORT"), "PORT", DEFAULT_PORT)?;
        let max_history_turns = parse_or(
            var("MAX_HISTORY_TURNS"),
            "MAX_HISTORY_TURNS",
            DEFAULT_MAX_HISTORY_TURNS,
        )?;
        let timeout = var("PROVIDER_TIMEOUT_SECS")
            .map(|raw| parse_value::<u64>(&raw, "PROVIDER_TIMEOUT_SECS"))
            .transpose()?
            .map(Duration::from_secs);

        let model = var("GEMINI_MODEL").unwrap_or_else(|| DEFAULT_MODEL.into());
        let base_url = var("GEMINI_BASE_URL")
            .unwrap_or_else(|| DEFAULT_BASE_URL.into())
            .trim_end_matches('/')
            .to_string();

        Ok(Self {
            port,
            provider: ProviderSettings {
                api_key,
                model,
                base_url,
                timeout,
            },
            max_history_turns,
        })
    }

    /// Address the HTTP server binds to.
    pub fn listen_addr(&self) -> SocketAddr {
        SocketAddr::from(([0, 0, 0, 0], self.port))
    }
}

fn parse_or<T: FromStr>(raw: Option<String>, key: &str, default: T) -> Result<T> {
    match raw {
        Some(raw) => parse_value(&raw, key),
        None => Ok(default),
    }
}

fn parse_value<T: FromStr>(raw: &str, key: &str) -> Result<T> {
    raw.parse()
        .map_err(|_| Error::Config(format!("{} has an invalid value: {:?}", key, raw)))
}
