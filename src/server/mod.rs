//! HTTP server: router, handlers and configuration.
//!
//! This module provides:
//! - The axum router exposing `POST /api/v1/analyze-claim` (`router`)
//! - Request handlers and static metadata payloads (`routes`)
//! - The OpenAPI document served at `/openapi.json`, `/redoc` and `/docs` (`docs`)
//! - Configuration and secrets loading (`config`)

pub mod config;
pub mod docs;
mod error;
pub mod routes;

use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use utoipa_redoc::{Redoc, Servable};
use utoipa_swagger_ui::SwaggerUi;

use crate::ClaimAnalyzer;
use crate::types::ClaimLimits;
use docs::ApiDoc;

/// Shared, read-only state handed to every handler.
pub struct AppState {
    pub analyzer: ClaimAnalyzer,
    pub limits: ClaimLimits,
    /// OpenAPI document describing `limits`.
    pub openapi: utoipa::openapi::OpenApi,
}

impl AppState {
    pub fn new(analyzer: ClaimAnalyzer, limits: ClaimLimits) -> Self {
        Self {
            analyzer,
            openapi: ApiDoc::with_limits(&limits),
            limits,
        }
    }
}

/// Build the application router.
///
/// `cors` enables a permissive CORS policy (any origin, method and header).
pub fn router(state: AppState, cors: bool) -> Router {
    let app = Router::new()
        .merge(Redoc::with_url("/redoc", state.openapi.clone()))
        .merge(SwaggerUi::new("/docs").url("/docs/openapi.json", state.openapi.clone()))
        .route("/", get(routes::root))
        .route("/health", get(routes::health))
        .route("/openapi.json", get(routes::openapi))
        .route("/api/v1/analyze-claim", post(routes::analyze_claim))
        .layer(TraceLayer::new_for_http())
        .with_state(Arc::new(state));

    if cors {
        app.layer(CorsLayer::permissive())
    } else {
        app
    }
}
