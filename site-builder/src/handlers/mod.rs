//! HTTP handlers and router
//!
//! ```rust
//! use site_builder::{handlers, state::AppState};
//!
//! let app = handlers::app(AppState::new());
//! ```

use axum::{
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use axum_htmx::AutoVaryLayer;
use serde_json::{json, Value};
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};

use crate::state::AppState;

pub mod sections;

/// Routes of the section service, without middleware
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health))
        .route("/sections", get(sections::dialog))
        .route("/sections/categories", get(sections::categories))
        .route("/sections/templates", get(sections::templates))
        .route("/sections/select", post(sections::select))
}

/// Complete application: routes, middleware and state
///
/// Adds request tracing, the configured request timeout and, when
/// `htmx.auto_vary` is set, `Vary` headers for HTMX-dependent responses.
pub fn app(state: AppState) -> Router {
    let config = state.config();
    let timeout = config.server.request_timeout();
    let auto_vary = config.htmx.auto_vary;

    let router = routes()
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            timeout,
        ))
        .layer(TraceLayer::new_for_http());

    let router = if auto_vary {
        router.layer(AutoVaryLayer)
    } else {
        router
    };

    router.with_state(state)
}

/// Liveness probe
///
/// # Example
///
/// ```bash
/// GET /health
/// ```
///
/// Response:
/// ```json
/// { "status": "ok", "version": "0.3.0" }
/// ```
pub async fn health() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
