//! HTTP interface for the quoting service.
//!
//! Three routes: `GET /` (liveness), `GET /health` (model status and the
//! expected feature order), `POST /predict` (quote one applicant).

use std::sync::Arc;

use anyhow::Context;
use axum::{
    Router,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::{get, post},
};
use serde::Serialize;
use serde_json::json;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::{error, info};

use crate::application::quote_service::QuoteService;
use crate::domain::errors::QuoteError;
use crate::domain::features::feature_names;
use crate::domain::quote::{QuoteRequest, RawQuote};

/// Service name reported by the root endpoint.
pub const SERVICE_NAME: &str = "FlexiRate";

/// Crate version reported by every endpoint.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Clone)]
struct AppState {
    service: Arc<QuoteService>,
}

/// Builds the application router with CORS and request tracing attached.
pub fn router(service: Arc<QuoteService>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(home))
        .route("/health", get(health))
        .route("/predict", post(predict))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(AppState { service })
}

/// Binds the listener and serves the router until Ctrl-C.
pub async fn serve(addr: &str, service: Arc<QuoteService>) -> anyhow::Result<()> {
    let app = router(service);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    info!("Listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("Failed to listen for shutdown signal: {}", e);
        return;
    }
    info!("Shutdown signal received, stopping server");
}

// ============ RESPONSES ============

#[derive(Debug, Serialize)]
struct HealthResponse {
    status: &'static str,
    features_expected: Vec<&'static str>,
    model_error: Option<String>,
    version: &'static str,
}

#[derive(Debug, Serialize)]
struct PredictResponse {
    claim_inr: f64,
    premium_inr: f64,
    coverage_inr: f64,
    version: &'static str,
}

/// Wire form of a [`QuoteError`]: the status code picks the failure class,
/// the body carries the human-readable detail.
struct ApiError(QuoteError);

impl From<QuoteError> for ApiError {
    fn from(err: QuoteError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            QuoteError::ModelUnavailable { .. } => StatusCode::SERVICE_UNAVAILABLE,
            QuoteError::InvalidField { .. } | QuoteError::Inference { .. } => {
                StatusCode::BAD_REQUEST
            }
        };

        (status, Json(json!({ "detail": self.0.to_string() }))).into_response()
    }
}

// ============ HANDLERS ============

async fn home() -> Json<serde_json::Value> {
    Json(json!({
        "status": "running",
        "service": SERVICE_NAME,
        "version": VERSION,
    }))
}

async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    let (status, model_error) = match state.service.load_error() {
        None => ("ok", None),
        Some(reason) => ("model_not_loaded", Some(reason.to_string())),
    };

    Json(HealthResponse {
        status,
        features_expected: feature_names(),
        model_error,
        version: VERSION,
    })
}

async fn predict(
    State(state): State<AppState>,
    Json(raw): Json<RawQuote>,
) -> Result<Json<PredictResponse>, ApiError> {
    let request = QuoteRequest::decode(&raw)?;
    let quote = state.service.quote(&request)?;

    Ok(Json(PredictResponse {
        claim_inr: quote.claim_inr,
        premium_inr: quote.premium_inr,
        coverage_inr: quote.coverage_inr,
        version: VERSION,
    }))
}
