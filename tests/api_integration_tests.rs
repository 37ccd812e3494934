//! Integration Tests for API Endpoints
//!
//! Tests the full request/response cycle against an in-process scripted
//! generator.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use serde_json::Value;
use tokio::sync::RwLock;
use tower::ServiceExt;

use prayer_gateway::cache::PrayerCache;
use prayer_gateway::generate::{
    GenerateError, GenerationResult, Prayer, PrayerGenerator, SourceRef,
};
use prayer_gateway::orchestrator::RetryPolicy;
use prayer_gateway::{api::create_router, AppState, PrayerFetcher};

// == Test Generator ==
/// Counts calls and either succeeds with a fixed result or fails with a
/// transport error, depending on construction.
struct TestGenerator {
    calls: AtomicUsize,
    fail_transport: bool,
}

impl TestGenerator {
    fn succeeding() -> Arc<Self> {
        Arc::new(Self {
            calls: AtomicUsize::new(0),
            fail_transport: false,
        })
    }

    fn failing() -> Arc<Self> {
        Arc::new(Self {
            calls: AtomicUsize::new(0),
            fail_transport: true,
        })
    }
}

#[async_trait]
impl PrayerGenerator for TestGenerator {
    async fn generate(
        &self,
        tradition: &str,
        _situation: &str,
    ) -> Result<GenerationResult, GenerateError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_transport {
            return Err(GenerateError::Transport("connection refused".to_string()));
        }
        let prayer = |title: &str| Prayer {
            title: title.to_string(),
            body: format!("{} body", title),
            explanation: "fits the situation".to_string(),
            is_canonical: title == "first",
            origin_label: tradition.to_string(),
        };
        Ok(GenerationResult {
            prayers: vec![prayer("first"), prayer("second"), prayer("third")],
            sources: vec![SourceRef {
                title: "A Source".to_string(),
                uri: "https://example.org/source".to_string(),
            }],
        })
    }
}

// == Helper Functions ==

fn create_test_app(generator: Arc<TestGenerator>) -> Router {
    // Fast retry schedule so the exhaustion test stays quick
    let policy = RetryPolicy::new(3, 10, 50);
    let cache = Arc::new(RwLock::new(PrayerCache::new(50, 86_400)));
    let fetcher = PrayerFetcher::new(cache, generator, policy);
    create_router(AppState::new(fetcher))
}

fn prayers_request(tradition: &str, situation: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/prayers")
        .header("content-type", "application/json")
        .body(Body::from(
            serde_json::json!({ "tradition": tradition, "situation": situation }).to_string(),
        ))
        .unwrap()
}

async fn body_to_json(body: Body) -> Value {
    let bytes = axum::body::to_bytes(body, usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

// == Prayers Endpoint Tests ==

#[tokio::test]
async fn test_prayers_endpoint_success() {
    let app = create_test_app(TestGenerator::succeeding());

    let response = app
        .oneshot(prayers_request("Buddhism", "i need calm"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let json = body_to_json(response.into_body()).await;
    assert_eq!(json["servedFromCache"], Value::Bool(false));
    assert_eq!(json["prayers"].as_array().unwrap().len(), 3);
    assert_eq!(json["prayers"][0]["title"], "first");
    assert_eq!(json["prayers"][0]["isCanonical"], Value::Bool(true));
    assert_eq!(json["sources"][0]["uri"], "https://example.org/source");
}

#[tokio::test]
async fn test_prayers_endpoint_dedupes_equivalent_inputs() {
    let generator = TestGenerator::succeeding();
    let app = create_test_app(generator.clone());

    let first = app
        .clone()
        .oneshot(prayers_request("Buddhism", "  I need Calm  "))
        .await
        .unwrap();
    assert_eq!(first.status(), StatusCode::OK);
    let first_json = body_to_json(first.into_body()).await;
    assert_eq!(first_json["servedFromCache"], Value::Bool(false));

    let second = app
        .oneshot(prayers_request("Buddhism", "i need calm"))
        .await
        .unwrap();
    assert_eq!(second.status(), StatusCode::OK);
    let second_json = body_to_json(second.into_body()).await;
    assert_eq!(second_json["servedFromCache"], Value::Bool(true));

    assert_eq!(
        generator.calls.load(Ordering::SeqCst),
        1,
        "equivalent inputs must not double-charge the generator"
    );
}

#[tokio::test]
async fn test_prayers_endpoint_validation_error() {
    let app = create_test_app(TestGenerator::succeeding());

    let response = app
        .oneshot(prayers_request("Buddhism", "   "))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_to_json(response.into_body()).await;
    assert!(json["error"].as_str().unwrap().contains("Situation"));
}

#[tokio::test]
async fn test_prayers_endpoint_exhausted_retries() {
    let generator = TestGenerator::failing();
    let app = create_test_app(generator.clone());

    let response = app
        .oneshot(prayers_request("Buddhism", "i need calm"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(generator.calls.load(Ordering::SeqCst), 3);
}

// == Cache Endpoint Tests ==

#[tokio::test]
async fn test_clear_cache_endpoint() {
    let generator = TestGenerator::succeeding();
    let app = create_test_app(generator.clone());

    let warm = app
        .clone()
        .oneshot(prayers_request("Buddhism", "i need calm"))
        .await
        .unwrap();
    assert_eq!(warm.status(), StatusCode::OK);

    let clear = app
        .clone()
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri("/cache")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(clear.status(), StatusCode::OK);
    let clear_json = body_to_json(clear.into_body()).await;
    assert_eq!(clear_json["removed"], 1);

    // The next identical request goes back to the generator
    let refetch = app
        .oneshot(prayers_request("Buddhism", "i need calm"))
        .await
        .unwrap();
    let refetch_json = body_to_json(refetch.into_body()).await;
    assert_eq!(refetch_json["servedFromCache"], Value::Bool(false));
    assert_eq!(generator.calls.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn test_stats_endpoint_reflects_traffic() {
    let app = create_test_app(TestGenerator::succeeding());

    // One miss, one hit
    app.clone()
        .oneshot(prayers_request("Buddhism", "i need calm"))
        .await
        .unwrap();
    app.clone()
        .oneshot(prayers_request("Buddhism", "I NEED CALM"))
        .await
        .unwrap();

    let response = app
        .oneshot(
            Request::builder()
                .uri("/stats")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_to_json(response.into_body()).await;
    assert_eq!(json["hits"], 1);
    assert_eq!(json["misses"], 1);
    assert_eq!(json["total_entries"], 1);
}

// == Health Endpoint Tests ==

#[tokio::test]
async fn test_health_endpoint() {
    let app = create_test_app(TestGenerator::succeeding());

    let response = app
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_to_json(response.into_body()).await;
    assert_eq!(json["status"], "healthy");
}
