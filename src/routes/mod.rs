//! HTTP route handlers.
//!
//! Two fixed routes, `GET /` and `GET /health`. Unknown paths fall through to
//! a JSON 404, known paths with another method to a JSON 405.
//!
//! Request tracing is enabled via middleware that generates a unique request ID
//! for each incoming request, allowing correlation of all logs within a request.

pub mod health;
pub mod root;

use axum::http::header::{HeaderValue, CACHE_CONTROL};
use axum::{middleware, routing::get, Router};
use tower_http::set_header::SetResponseHeaderLayer;

use crate::config::CACHE_CONTROL_NO_STORE;
use crate::error;
use crate::middleware::request_id_layer;
use crate::state::AppState;

/// Creates the Axum router with both routes and the fallbacks.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(root::index))
        .route("/health", get(health::health))
        .fallback(error::not_found)
        .method_not_allowed_fallback(error::method_not_allowed)
        .with_state(state)
        // Every response is computed per request, never cache
        .layer(SetResponseHeaderLayer::if_not_present(
            CACHE_CONTROL,
            HeaderValue::from_static(CACHE_CONTROL_NO_STORE),
        ))
        // Request ID middleware - creates root span with request_id for correlation
        .layer(middleware::from_fn(request_id_layer))
}
