// Axum API Server Module
//
// Purpose: REST API over the compost engine
// Endpoints: POST /api/analyze, GET /api/health, GET /api/plants

#[cfg(feature = "api")]
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json},
    routing::{get, post},
    Router,
};

#[cfg(feature = "api")]
use tower_http::{compression::CompressionLayer, cors::CorsLayer, trace::TraceLayer};

#[cfg(feature = "api")]
use moka::future::Cache;

#[cfg(feature = "api")]
use std::sync::Arc;

#[cfg(feature = "api")]
use std::time::Duration;

#[cfg(feature = "api")]
use serde_json::Value;

#[cfg(feature = "api")]
use crate::config::EngineConfig;

#[cfg(feature = "api")]
use crate::engine::CompostEngine;

#[cfg(feature = "api")]
use crate::error::EngineError;

#[cfg(feature = "api")]
use crate::formatters::JsonFormatter;

#[cfg(feature = "api")]
use crate::parameters::ParameterSet;

// ============================================================================
// Application State
// ============================================================================

#[cfg(feature = "api")]
#[derive(Clone)]
pub struct AppState {
    pub engine: Arc<CompostEngine>,
    /// Analysis responses keyed by parameter fingerprint
    pub cache: Cache<String, Value>,
}

#[cfg(feature = "api")]
impl AppState {
    pub fn new(engine: CompostEngine) -> Self {
        tracing::info!("Initializing Moka cache...");
        let cache = Cache::builder()
            .max_capacity(10_000) // 10K entries
            .time_to_live(Duration::from_secs(300)) // 5 min TTL
            .build();

        Self {
            engine: Arc::new(engine),
            cache,
        }
    }

    /// Load catalog and model as described by the configuration
    pub fn from_config(config: &EngineConfig) -> anyhow::Result<Self> {
        tracing::info!("Initializing compost engine...");
        let engine = config.build_engine()?;
        Ok(Self::new(engine))
    }
}

// ============================================================================
// Router
// ============================================================================

#[cfg(feature = "api")]
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/api/health", get(health_check))
        .route("/api/analyze", post(analyze))
        .route("/api/plants", get(list_plants))
        // Middleware (applied in reverse order)
        .layer(CompressionLayer::new()) // gzip + brotli compression
        .layer(CorsLayer::permissive()) // Frontend runs on a separate origin
        .layer(TraceLayer::new_for_http()) // Request logging
        .with_state(state)
}

// ============================================================================
// Endpoint Handlers
// ============================================================================

#[cfg(feature = "api")]
async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "model": state.engine.model().describe(),
        "plants_loaded": state.engine.catalog().len(),
        "timestamp": chrono::Utc::now().to_rfc3339()
    }))
}

#[cfg(feature = "api")]
async fn analyze(
    State(state): State<AppState>,
    Json(raw): Json<Value>,
) -> Result<Json<Value>, AppError> {
    let params = ParameterSet::from_json(&raw)?;
    let cache_key = format!("analyze:{}", params.fingerprint());

    // Check cache
    if let Some(cached) = state.cache.get(&cache_key).await {
        tracing::debug!("Cache hit for analysis");
        return Ok(Json(cached));
    }

    let report = state.engine.analyze_parameters(&params);
    tracing::info!(
        "Analysis complete: score={:.2} stage={}",
        report.score,
        report.stage.display_text()
    );

    let result = JsonFormatter::to_value(&report).map_err(|e| AppError::Internal(e.to_string()))?;

    // Cache result
    state.cache.insert(cache_key, result.clone()).await;

    Ok(Json(result))
}

#[cfg(feature = "api")]
async fn list_plants(State(state): State<AppState>) -> Result<Json<Value>, AppError> {
    let plants: Vec<&crate::catalog::PlantProfile> = state.engine.catalog().iter().collect();
    let plants = serde_json::to_value(&plants).map_err(|e| AppError::Internal(e.to_string()))?;

    Ok(Json(serde_json::json!({
        "count": state.engine.catalog().len(),
        "plants": plants,
    })))
}

// ============================================================================
// Error Handling
// ============================================================================

#[cfg(feature = "api")]
#[derive(Debug)]
pub enum AppError {
    BadRequest(String),
    Internal(String),
}

#[cfg(feature = "api")]
impl From<EngineError> for AppError {
    fn from(err: EngineError) -> Self {
        tracing::debug!("Rejected request: {}", err);
        AppError::BadRequest(err.to_string())
    }
}

#[cfg(feature = "api")]
impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, msg)
            }
        };

        let body = Json(serde_json::json!({
            "error": message
        }));

        (status, body).into_response()
    }
}
