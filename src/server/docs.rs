use utoipa::OpenApi;
use utoipa::openapi::RefOr;
use utoipa::openapi::schema::Schema;

use super::routes::{self, HealthStatus, ServiceInfo};
use crate::types::{ClaimLimits, ClaimRequest, ClassificationResult, ErrorResult, Verdict};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Fake News Claim Analyzer",
        description = "Analyzes news claims and classifies them as likely true, false, or uncertain"
    ),
    paths(routes::analyze_claim, routes::root, routes::health),
    components(schemas(
        ClaimRequest,
        ClassificationResult,
        ErrorResult,
        Verdict,
        ServiceInfo,
        HealthStatus
    )),
    tags(
        (name = "claims", description = "Claim analysis"),
        (name = "meta", description = "Service metadata and liveness")
    )
)]
pub struct ApiDoc;

impl ApiDoc {
    /// The OpenAPI document with the `claim` length bounds set to `limits`.
    pub fn with_limits(limits: &ClaimLimits) -> utoipa::openapi::OpenApi {
        let mut doc = Self::openapi();
        let request = doc
            .components
            .as_mut()
            .and_then(|components| components.schemas.get_mut("ClaimRequest"));
        if let Some(RefOr::T(Schema::Object(request))) = request
            && let Some(RefOr::T(Schema::Object(claim))) = request.properties.get_mut("claim")
        {
            claim.min_length = Some(limits.min_claim_chars);
            claim.max_length = Some(limits.max_claim_chars);
        }
        doc
    }
}
