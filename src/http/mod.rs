//! HTTP listener module.
//!
//! Binds the wildcard address on the configured port and serves the router
//! until the process receives SIGINT or SIGTERM. Binding failures are fatal
//! and surface as [`ServerError`].

mod server;
mod shutdown;

pub use server::{bind_listener, serve, start_server, ServerError};
pub use shutdown::shutdown_signal;
