//! Odoo relay core: configuration and the shared error taxonomy.

pub mod config;
pub mod error;

pub use config::RelayConfig;
pub use error::{Error, Result};
