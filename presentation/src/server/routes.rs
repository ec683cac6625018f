//! Proxy routes
//!
//! - `POST /api/predict`: relay the JSON body to the prediction service
//! - `GET /health`: liveness probe

use axum::{
    Json, Router,
    body::Bytes,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::Arc;
use sugar_signal_application::RelayPredictionUseCase;
use tower_http::trace::TraceLayer;
use tracing::warn;

/// Fixed error text returned when the prediction service fails
pub const UPSTREAM_ERROR: &str = "Failed to fetch prediction";

/// Shared state handed to every handler
pub struct ProxyState {
    pub relay: RelayPredictionUseCase,
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct PredictResponse {
    pub prediction: Value,
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct ErrorResponse {
    pub error: String,
}

/// Build the proxy router around a relay use case
pub fn router(relay: RelayPredictionUseCase) -> Router {
    Router::new()
        .route("/api/predict", post(predict_handler))
        .route("/health", get(health_handler))
        .with_state(Arc::new(ProxyState { relay }))
        .layer(TraceLayer::new_for_http())
}

/// POST /api/predict - relay without validation
///
/// The body is read as JSON whatever its `Content-Type`. A body that is not
/// JSON fails the same way an upstream error does.
async fn predict_handler(State(state): State<Arc<ProxyState>>, body: Bytes) -> Response {
    let body: Value = match serde_json::from_slice(&body) {
        Ok(body) => body,
        Err(e) => {
            warn!("Request body is not JSON: {}", e);
            return upstream_error();
        }
    };

    match state.relay.execute(&body).await {
        Ok(prediction) => (StatusCode::OK, Json(PredictResponse { prediction })).into_response(),
        Err(_) => upstream_error(),
    }
}

fn upstream_error() -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse {
            error: UPSTREAM_ERROR.to_string(),
        }),
    )
        .into_response()
}

/// GET /health - Liveness probe
async fn health_handler() -> StatusCode {
    StatusCode::OK
}
