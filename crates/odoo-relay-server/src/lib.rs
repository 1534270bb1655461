//! HTTP surface of the Odoo relay: `/api/chat` and `/api/health`.

pub mod error;
pub mod middleware;
pub mod routes;
pub mod state;

pub use routes::build_router;
pub use state::AppState;
