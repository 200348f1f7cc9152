use std::net::SocketAddr;
use std::sync::Arc;

use flexirate::application::ml::predictor::ClaimPredictor;
use flexirate::application::quote_service::QuoteService;
use flexirate::interfaces::http;
use serde_json::{Value, json};

struct FixedClaim(f64);

impl ClaimPredictor for FixedClaim {
    fn predict(&self, _features: &[f64]) -> Result<f64, String> {
        Ok(self.0)
    }

    fn name(&self) -> &str {
        "fixed"
    }
}

/// Serves the router on an ephemeral port and returns the bound address.
async fn spawn_app(service: QuoteService) -> SocketAddr {
    let app = http::router(Arc::new(service));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    addr
}

#[tokio::test]
async fn test_e2e_root_is_up_even_without_model() -> anyhow::Result<()> {
    let addr = spawn_app(QuoteService::unavailable("artifact missing")).await;

    let body: Value = reqwest::get(format!("http://{}/", addr)).await?.json().await?;

    assert_eq!(body["status"], "running");
    assert_eq!(body["service"], "FlexiRate");
    assert_eq!(body["version"], http::VERSION);
    Ok(())
}

#[tokio::test]
async fn test_e2e_health_reports_missing_model() -> anyhow::Result<()> {
    let addr = spawn_app(QuoteService::unavailable("artifact missing")).await;

    let response = reqwest::get(format!("http://{}/health", addr)).await?;
    assert_eq!(response.status(), 200);

    let body: Value = response.json().await?;
    assert_eq!(body["status"], "model_not_loaded");
    assert_eq!(body["model_error"], "artifact missing");
    assert_eq!(body["version"], http::VERSION);

    // The advertised feature order is the model's training order.
    let features: Vec<&str> = body["features_expected"]
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v.as_str().unwrap())
        .collect();
    assert_eq!(
        features,
        vec![
            "Age",
            "Diabetes",
            "BloodPressureProblems",
            "AnyTransplants",
            "AnyChronicDiseases",
            "Height",
            "Weight",
            "KnownAllergies",
            "HistoryOfCancerInFamily",
            "NumberOfMajorSurgeries",
        ]
    );
    Ok(())
}

#[tokio::test]
async fn test_e2e_health_reports_loaded_model() -> anyhow::Result<()> {
    let addr = spawn_app(QuoteService::with_predictor(Arc::new(FixedClaim(1.0)))).await;

    let body: Value = reqwest::get(format!("http://{}/health", addr)).await?.json().await?;

    assert_eq!(body["status"], "ok");
    assert!(body["model_error"].is_null());
    Ok(())
}

#[tokio::test]
async fn test_e2e_predict_without_model_is_503() -> anyhow::Result<()> {
    let addr = spawn_app(QuoteService::unavailable("artifact missing")).await;

    let response = reqwest::Client::new()
        .post(format!("http://{}/predict", addr))
        .json(&json!({}))
        .send()
        .await?;

    assert_eq!(response.status(), 503);
    let body: Value = response.json().await?;
    assert_eq!(body["detail"], "Model not loaded: artifact missing");
    Ok(())
}

#[tokio::test]
async fn test_e2e_predict_happy_path() -> anyhow::Result<()> {
    // 1. Serve with a model that always predicts a 1000 INR claim
    let addr = spawn_app(QuoteService::with_predictor(Arc::new(FixedClaim(1000.0)))).await;

    // 2. An empty payload quotes the default applicant
    let response = reqwest::Client::new()
        .post(format!("http://{}/predict", addr))
        .json(&json!({}))
        .send()
        .await?;
    assert_eq!(response.status(), 200);

    // 3. Premium is claim * 1.20 * 1.10, coverage is ten premiums
    let body: Value = response.json().await?;
    assert_eq!(body["claim_inr"], 1000.0);
    assert_eq!(body["premium_inr"], 1320.0);
    assert_eq!(body["coverage_inr"], 13200.0);
    assert_eq!(body["version"], http::VERSION);
    Ok(())
}

#[tokio::test]
async fn test_e2e_predict_coerces_loose_payloads() -> anyhow::Result<()> {
    let addr = spawn_app(QuoteService::with_predictor(Arc::new(FixedClaim(500.0)))).await;

    let response = reqwest::Client::new()
        .post(format!("http://{}/predict", addr))
        .json(&json!({
            "Age": "30",
            "Diabetes": true,
            "Height": " 180.5 ",
            "Weight": 70,
            "SomeUnknownKey": "ignored",
        }))
        .send()
        .await?;

    assert_eq!(response.status(), 200);
    Ok(())
}

#[tokio::test]
async fn test_e2e_predict_rejects_bad_field() -> anyhow::Result<()> {
    let addr = spawn_app(QuoteService::with_predictor(Arc::new(FixedClaim(500.0)))).await;

    let response = reqwest::Client::new()
        .post(format!("http://{}/predict", addr))
        .json(&json!({ "Age": "abc" }))
        .send()
        .await?;

    assert_eq!(response.status(), 400);
    let body: Value = response.json().await?;
    assert!(body["detail"].as_str().unwrap().contains("Age"));
    Ok(())
}

#[tokio::test]
async fn test_e2e_predict_rejects_explicit_null() -> anyhow::Result<()> {
    let addr = spawn_app(QuoteService::with_predictor(Arc::new(FixedClaim(500.0)))).await;

    // A null field must not fall back to the default applicant.
    let response = reqwest::Client::new()
        .post(format!("http://{}/predict", addr))
        .json(&json!({ "Age": null }))
        .send()
        .await?;

    assert_eq!(response.status(), 400);
    let body: Value = response.json().await?;
    assert!(body["detail"].as_str().unwrap().contains("Invalid value for Age"));
    Ok(())
}

#[tokio::test]
async fn test_e2e_predict_range_edges() -> anyhow::Result<()> {
    let addr = spawn_app(QuoteService::with_predictor(Arc::new(FixedClaim(500.0)))).await;
    let client = reqwest::Client::new();

    let at_limit = client
        .post(format!("http://{}/predict", addr))
        .json(&json!({ "Age": 100 }))
        .send()
        .await?;
    assert_eq!(at_limit.status(), 200);

    let over_limit = client
        .post(format!("http://{}/predict", addr))
        .json(&json!({ "Age": 101 }))
        .send()
        .await?;
    assert_eq!(over_limit.status(), 400);
    Ok(())
}

#[tokio::test]
async fn test_e2e_predict_rejects_malformed_json() -> anyhow::Result<()> {
    let addr = spawn_app(QuoteService::with_predictor(Arc::new(FixedClaim(500.0)))).await;

    let response = reqwest::Client::new()
        .post(format!("http://{}/predict", addr))
        .header("content-type", "application/json")
        .body("{not json")
        .send()
        .await?;

    assert_eq!(response.status(), 400);
    Ok(())
}

#[tokio::test]
async fn test_e2e_cors_preflight_allows_any_method() -> anyhow::Result<()> {
    let addr = spawn_app(QuoteService::unavailable("artifact missing")).await;

    let response = reqwest::Client::new()
        .request(reqwest::Method::OPTIONS, format!("http://{}/predict", addr))
        .header("origin", "http://example.com")
        .header("access-control-request-method", "DELETE")
        .send()
        .await?;

    assert!(response.status().is_success());
    assert_eq!(response.headers()["access-control-allow-origin"], "*");
    assert_eq!(response.headers()["access-control-allow-methods"], "*");
    Ok(())
}
