//! HTTP handlers.

use std::sync::Arc;

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::AppState;
use crate::types::{ClaimRequest, ClassificationResult, ErrorResult};
use crate::{ClaimcheckError, PKG_VERSION, SERVICE_NAME};

/// Static service metadata returned by `GET /`.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ServiceInfo {
    pub message: String,
    pub version: String,
    pub docs: String,
}

/// Liveness payload returned by `GET /health`.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthStatus {
    pub status: String,
    pub service: String,
}

/// Analyze a news claim
///
/// Takes a news claim and returns its classification (likely true, likely
/// false or uncertain) with a confidence score and explanation.
#[utoipa::path(
    post,
    path = "/api/v1/analyze-claim",
    request_body = ClaimRequest,
    responses(
        (status = 200, description = "Claim classified", body = ClassificationResult),
        (status = 422, description = "Claim failed validation", body = ErrorResult),
        (status = 429, description = "Model rate limit reached", body = ErrorResult),
        (status = 500, description = "Model or parsing failure", body = ErrorResult),
        (status = 503, description = "Model unavailable or unreachable", body = ErrorResult),
        (status = 504, description = "Model request timed out", body = ErrorResult)
    ),
    tag = "claims"
)]
pub async fn analyze_claim(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<ClaimRequest>, JsonRejection>,
) -> Response {
    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => return ClaimcheckError::from(rejection).into_response(),
    };

    if let Err(e) = request.validate(&state.limits) {
        tracing::debug!(error = %e, "claim rejected");
        return e.into_response();
    }

    match state.analyzer.analyze(&request.claim).await {
        Ok(result) => Json(result).into_response(),
        Err(e) => e.into_response(),
    }
}

/// Service metadata
#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Service metadata", body = ServiceInfo)
    ),
    tag = "meta"
)]
pub async fn root() -> Json<ServiceInfo> {
    Json(ServiceInfo {
        message: format!("{SERVICE_NAME} API"),
        version: PKG_VERSION.to_string(),
        docs: "Visit /redoc for interactive API documentation".to_string(),
    })
}

/// Liveness probe
///
/// Always returns 200 OK while the process is serving requests.
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is alive", body = HealthStatus)
    ),
    tag = "meta"
)]
pub async fn health() -> Json<HealthStatus> {
    Json(HealthStatus {
        status: "healthy".to_string(),
        service: SERVICE_NAME.to_string(),
    })
}

/// Raw OpenAPI document.
pub async fn openapi(State(state): State<Arc<AppState>>) -> Json<utoipa::openapi::OpenApi> {
    Json(state.openapi.clone())
}
