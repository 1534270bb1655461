//! Error types for the Odoo relay.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// A required request field was absent, null or empty.
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    /// Caller-supplied input did not have the expected shape.
    #[error("Validation error: {0}")]
    Validation(String),

    /// The text-generation provider failed or returned something unusable.
    #[error("Provider error: {0}")]
    Provider(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, Error>;
