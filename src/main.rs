//! AutoDocker Hello: greeting and liveness HTTP service.
//!
//! This is the application entry point. It initializes tracing, resolves
//! configuration from the environment, sets up the Axum router and serves it
//! on all interfaces until the process is terminated.

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use autodocker_hello::config::{LogFormat, ServerConfig, DEFAULT_LOG_FILTER};
use autodocker_hello::http::start_server;
use autodocker_hello::{create_router, AppState};

/// AutoDocker Hello: a greeting and liveness HTTP service
///
/// The listening port comes from PORT (default 5000), the environment label
/// from APP_ENV or FLASK_ENV (default "development").
#[derive(Parser, Debug)]
#[command(name = "autodocker-hello", version, about)]
struct Args {
    /// Log level filter (e.g., "autodocker_hello=debug,tower_http=info")
    #[arg(short, long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Logging format is needed before anything else can be reported, so a bad
    // configuration is resolved first and reported once tracing is up.
    let config = ServerConfig::from_env();
    let log_format = config
        .as_ref()
        .map(|c| c.logging.format)
        .unwrap_or_default();

    // Initialize tracing with priority: CLI > env > default
    let log_filter = args
        .log_level
        .or_else(|| std::env::var("RUST_LOG").ok())
        .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

    let registry =
        tracing_subscriber::registry().with(tracing_subscriber::EnvFilter::new(&log_filter));
    match log_format {
        LogFormat::Text => registry.with(tracing_subscriber::fmt::layer()).init(),
        LogFormat::Json => registry
            .with(tracing_subscriber::fmt::layer().json())
            .init(),
    }

    let config = config.inspect_err(|e| {
        tracing::error!(error = %e, "Invalid configuration");
    })?;

    tracing::info!(
        port = config.port,
        environment = %config.environment,
        "Loaded configuration"
    );

    let app = create_router(AppState::new(config.clone()));

    start_server(app, &config).await.inspect_err(|e| {
        tracing::error!(error = %e, "Server failed");
    })?;

    Ok(())
}
