//! AutoDocker Hello - a minimal greeting and liveness HTTP service.
//!
//! Answers `GET /` with a greeting, the current time and the configured
//! environment label, and `GET /health` with a fixed liveness body.

pub mod config;
pub mod error;
pub mod http;
pub mod middleware;
pub mod routes;
pub mod state;

pub use config::{ConfigError, ServerConfig};
pub use http::ServerError;
pub use routes::create_router;
pub use state::AppState;
