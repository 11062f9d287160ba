//! HTTP server startup logic.

use std::future::Future;
use std::net::SocketAddr;

use axum::Router;
use tokio::net::TcpListener;

use crate::config::ServerConfig;

use super::shutdown;

/// Server startup error
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("Failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },

    #[error("Server error: {0}")]
    Server(#[from] std::io::Error),
}

/// Bind the TCP listener for `addr`.
pub async fn bind_listener(addr: SocketAddr) -> Result<TcpListener, ServerError> {
    TcpListener::bind(addr)
        .await
        .map_err(|source| ServerError::Bind { addr, source })
}

/// Serve `app` on an already bound listener until `signal` resolves.
pub async fn serve<F>(listener: TcpListener, app: Router, signal: F) -> Result<(), ServerError>
where
    F: Future<Output = ()> + Send + 'static,
{
    if let Ok(addr) = listener.local_addr() {
        tracing::info!(%addr, "Listening");
    }

    axum::serve(listener, app)
        .with_graceful_shutdown(signal)
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

/// Start the HTTP server based on configuration.
///
/// This function blocks until the process is asked to terminate.
pub async fn start_server(app: Router, config: &ServerConfig) -> Result<(), ServerError> {
    let listener = bind_listener(config.bind_addr()).await?;
    serve(listener, app, shutdown::shutdown_signal()).await
}
