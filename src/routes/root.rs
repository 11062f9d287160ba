//! Handler for the greeting/status probe at `/`.
//!
//! Every call builds a fresh response from the wall clock and the startup
//! configuration; nothing is cached between requests.

use axum::{extract::State, Json};
use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;
use tracing::instrument;

use crate::config::{ServerConfig, GREETING};
use crate::state::AppState;

/// Body of `GET /`. Field order is the serialized key order.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct RootResponse {
    pub message: &'static str,
    /// RFC 3339 UTC timestamp with microsecond precision
    pub timestamp: String,
    pub environment: String,
}

impl RootResponse {
    /// Build the response for the given instant.
    pub fn at(config: &ServerConfig, now: DateTime<Utc>) -> Self {
        Self {
            message: GREETING,
            timestamp: now.to_rfc3339_opts(SecondsFormat::Micros, true),
            environment: config.environment.clone(),
        }
    }

    /// Build the response for the current instant.
    pub fn now(config: &ServerConfig) -> Self {
        Self::at(config, Utc::now())
    }
}

/// Greeting handler.
#[instrument(name = "root::index", skip(state))]
pub async fn index(State(state): State<AppState>) -> Json<RootResponse> {
    Json(RootResponse::now(&state.config))
}
