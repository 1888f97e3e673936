//! HTTP API layer with Axum routes.
//!
//! This crate provides:
//! - The report generation endpoint
//! - Health probe
//! - Static front-end serving with cache-busting headers

pub mod routes;

use std::sync::Arc;

use axum::Router;
use axum::http::{HeaderValue, header};
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;

use abaco_core::report::ReportGenerator;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    /// Report generation pipeline.
    pub reports: Arc<ReportGenerator>,
}

/// Creates the main application router.
///
/// API routes live under `/api/v1`; everything else falls back to the
/// static front end. All responses carry `Cache-Control: no-store` so
/// the tablet UI never serves a stale page.
pub fn create_router(state: AppState, static_dir: &str) -> Router {
    Router::new()
        .nest("/api/v1", routes::api_routes())
        .fallback_service(ServeDir::new(static_dir))
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(SetResponseHeaderLayer::overriding(
            header::CACHE_CONTROL,
            HeaderValue::from_static("no-store, no-cache, must-revalidate"),
        ))
        .with_state(state)
}
