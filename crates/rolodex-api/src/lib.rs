//! Rolodex API crate - axum HTTP server and route handlers.
//!
//! Provides the REST API behind the dashboard: record fetch/query, the
//! assistant chat channel, campaign preview/editing, the mail-client
//! handoff, configuration, and health checks.

pub mod error;
pub mod handlers;
pub mod routes;
pub mod state;

pub use error::ApiError;
pub use routes::{create_router, start_server};
pub use state::AppState;
