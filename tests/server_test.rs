//! Router tests driven through `tower::ServiceExt::oneshot`.
#![cfg(feature = "server")]

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::{Method, Request, StatusCode, header};
use serde_json::{Value, json};
use tower::ServiceExt; // for .oneshot()
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use claimcheck::providers::{HuggingFaceClient, SentimentProvider};
use claimcheck::server::{AppState, router};
use claimcheck::{ClaimAnalyzer, ClaimLimits, ClaimcheckError, RawModelOutput, Result};

struct StaticProvider(Value);

#[async_trait]
impl SentimentProvider for StaticProvider {
    fn name(&self) -> &str {
        "static"
    }

    async fn classify(&self, _text: &str) -> Result<RawModelOutput> {
        Ok(RawModelOutput::from(self.0.clone()))
    }
}

struct FailingProvider(ClaimcheckError);

#[async_trait]
impl SentimentProvider for FailingProvider {
    fn name(&self) -> &str {
        "failing"
    }

    async fn classify(&self, _text: &str) -> Result<RawModelOutput> {
        Err(self.0.clone())
    }
}

fn app_with(provider: Arc<dyn SentimentProvider>) -> Router {
    let state = AppState::new(ClaimAnalyzer::new(provider), ClaimLimits::default());
    router(state, true)
}

fn positive_app() -> Router {
    app_with(Arc::new(StaticProvider(
        json!([[{"label": "POSITIVE", "score": 0.95}]]),
    )))
}

fn analyze_request(body: String) -> Request<Body> {
    Request::builder()
        .uri("/api/v1/analyze-claim")
        .method("POST")
        .header("Content-Type", "application/json")
        .body(Body::from(body))
        .unwrap()
}

async fn send(app: Router, req: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(req).await.unwrap();
    let status = response.status();
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json = serde_json::from_slice(&body).unwrap_or(Value::Null);
    (status, json)
}

#[tokio::test]
async fn analyze_claim_returns_classification() {
    let claim = "Global temperatures have risen since pre-industrial times.";
    let (status, body) = send(
        positive_app(),
        analyze_request(json!({ "claim": claim }).to_string()),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["claim"], claim);
    assert_eq!(body["classification"], "likely_true");
    assert_eq!(body["confidence"], 0.95);
    assert!(
        body["explanation"]
            .as_str()
            .unwrap()
            .contains("very strong characteristics of being true")
    );
    assert!(body.get("error").is_none());
}

#[tokio::test]
async fn claim_length_bounds_are_inclusive() {
    for len in [5, 500] {
        let (status, _) = send(
            positive_app(),
            analyze_request(json!({ "claim": "a".repeat(len) }).to_string()),
        )
        .await;
        assert_eq!(status, StatusCode::OK, "length {len} should be accepted");
    }
}

#[tokio::test]
async fn claim_length_violations_rejected_before_handler() {
    // A failing provider proves the analyzer is never reached.
    for len in [4, 501] {
        let app = app_with(Arc::new(FailingProvider(ClaimcheckError::ServerError)));
        let (status, body) = send(
            app,
            analyze_request(json!({ "claim": "a".repeat(len) }).to_string()),
        )
        .await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY, "length {len}");
        assert_eq!(body["error"], "validation_error");
        assert_eq!(body["status_code"], 422);
    }
}

#[tokio::test]
async fn malformed_body_rejected() {
    let (status, body) = send(positive_app(), analyze_request("{not json".to_string())).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["error"], "validation_error");

    let (status, _) = send(
        positive_app(),
        analyze_request(json!({ "text": "missing the claim field" }).to_string()),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn provider_error_uses_its_status_code() {
    let app = app_with(Arc::new(FailingProvider(ClaimcheckError::ModelUnavailable)));
    let (status, body) = send(
        app,
        analyze_request(json!({ "claim": "The Earth is flat" }).to_string()),
    )
    .await;

    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(
        body,
        json!({
            "error": "model_unavailable",
            "message": "The model is temporarily unavailable. Please try again in a few moments.",
            "status_code": 503
        })
    );
}

#[tokio::test]
async fn parsing_error_surfaces_as_500() {
    let app = app_with(Arc::new(StaticProvider(json!(42))));
    let (status, body) = send(
        app,
        analyze_request(json!({ "claim": "The Earth is flat" }).to_string()),
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "parsing_error");
    assert_eq!(body["status_code"], 500);
    assert!(body.get("classification").is_none());
}

#[tokio::test]
async fn end_to_end_against_mock_model() {
    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/models/sst2"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!([[{"label": "NEGATIVE", "score": 0.6543}]])),
        )
        .mount(&mock_server)
        .await;

    let client = HuggingFaceClient::with_endpoint(
        "test_token",
        format!("{}/models/sst2", mock_server.uri()),
        Duration::from_secs(5),
    )
    .unwrap();
    let (status, body) = send(
        app_with(Arc::new(client)),
        analyze_request(json!({ "claim": "Drinking bleach cures colds" }).to_string()),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["classification"], "likely_false");
    assert_eq!(body["confidence"], 0.654);
    assert!(
        body["explanation"]
            .as_str()
            .unwrap()
            .contains("weak characteristics of being false")
    );
}

#[tokio::test]
async fn root_returns_service_metadata() {
    let req = Request::builder().uri("/").body(Body::empty()).unwrap();
    let (status, body) = send(positive_app(), req).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Fake News Claim Analyzer API");
    assert_eq!(body["version"], claimcheck::PKG_VERSION);
    assert!(body["docs"].as_str().unwrap().contains("/redoc"));
}

#[tokio::test]
async fn health_returns_liveness() {
    let req = Request::builder().uri("/health").body(Body::empty()).unwrap();
    let (status, body) = send(positive_app(), req).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({ "status": "healthy", "service": "Fake News Claim Analyzer" })
    );
}

#[tokio::test]
async fn openapi_document_lists_analyze_path() {
    let req = Request::builder()
        .uri("/openapi.json")
        .body(Body::empty())
        .unwrap();
    let (status, body) = send(positive_app(), req).await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["paths"]["/api/v1/analyze-claim"]["post"].is_object());
    assert!(body["components"]["schemas"]["ClaimRequest"].is_object());
}

#[tokio::test]
async fn openapi_document_reflects_configured_limits() {
    let limits = ClaimLimits {
        min_claim_chars: 10,
        max_claim_chars: 200,
    };
    let state = AppState::new(
        ClaimAnalyzer::new(Arc::new(StaticProvider(json!({})))),
        limits,
    );
    let req = Request::builder()
        .uri("/openapi.json")
        .body(Body::empty())
        .unwrap();
    let (status, body) = send(router(state, true), req).await;

    assert_eq!(status, StatusCode::OK);
    let claim = &body["components"]["schemas"]["ClaimRequest"]["properties"]["claim"];
    assert_eq!(claim["minLength"], 10);
    assert_eq!(claim["maxLength"], 200);
}

#[tokio::test]
async fn swagger_ui_served_under_docs() {
    let req = Request::builder().uri("/docs/").body(Body::empty()).unwrap();
    let response = positive_app().oneshot(req).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let req = Request::builder()
        .uri("/docs/openapi.json")
        .body(Body::empty())
        .unwrap();
    let (status, body) = send(positive_app(), req).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["paths"]["/api/v1/analyze-claim"]["post"].is_object());
}

#[tokio::test]
async fn cors_preflight_allowed_when_enabled() {
    let req = Request::builder()
        .method(Method::OPTIONS)
        .uri("/api/v1/analyze-claim")
        .header(header::ORIGIN, "https://example.com")
        .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
        .body(Body::empty())
        .unwrap();
    let response = positive_app().oneshot(req).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
        "*"
    );
}

#[tokio::test]
async fn cors_headers_absent_when_disabled() {
    let state = AppState::new(
        ClaimAnalyzer::new(Arc::new(StaticProvider(json!({})))),
        ClaimLimits::default(),
    );
    let req = Request::builder()
        .uri("/health")
        .header(header::ORIGIN, "https://example.com")
        .body(Body::empty())
        .unwrap();
    let response = router(state, false).oneshot(req).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert!(
        !response
            .headers()
            .contains_key(header::ACCESS_CONTROL_ALLOW_ORIGIN)
    );
}
