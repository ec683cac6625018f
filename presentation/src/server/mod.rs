//! Local prediction proxy
//!
//! Single-route relay between the form and the hosted model. Each request is
//! handled independently; the only shared state is the immutable relay use
//! case. No retry and no timeout: a hung upstream holds the request open.

mod routes;

pub use routes::{ErrorResponse, PredictResponse, UPSTREAM_ERROR, router};

use std::future::Future;
use std::io;
use std::net::SocketAddr;
use sugar_signal_application::RelayPredictionUseCase;
use tokio::net::TcpListener;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

/// HTTP proxy bound to a socket address
pub struct ProxyServer {
    addr: SocketAddr,
    relay: RelayPredictionUseCase,
}

impl ProxyServer {
    pub fn new(addr: SocketAddr, relay: RelayPredictionUseCase) -> Self {
        Self { addr, relay }
    }

    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    /// Bind and serve until `shutdown` is cancelled
    pub async fn run(self, shutdown: CancellationToken) -> io::Result<()> {
        let listener = TcpListener::bind(self.addr).await?;
        serve(listener, self.relay, shutdown).await
    }
}

/// Serve the proxy on an already-bound listener until `shutdown` is cancelled
pub async fn serve(
    listener: TcpListener,
    relay: RelayPredictionUseCase,
    shutdown: CancellationToken,
) -> io::Result<()> {
    info!("Proxy listening on {}", listener.local_addr()?);

    axum::serve(listener, router(relay))
        .with_graceful_shutdown(async move { shutdown.cancelled().await })
        .await?;

    info!("Proxy stopped");
    Ok(())
}

/// Cancel `shutdown` once `signal` fires.
///
/// If the signal listener itself fails the server keeps running.
pub async fn cancel_on_signal<F>(signal: F, shutdown: CancellationToken)
where
    F: Future<Output = io::Result<()>>,
{
    match signal.await {
        Ok(()) => {
            info!("Shutdown signal received");
            shutdown.cancel();
        }
        Err(e) => warn!("Failed to listen for shutdown signal: {}", e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{Router, http::StatusCode, routing::post};
    use serde_json::{Value, json};
    use std::sync::Arc;
    use sugar_signal_application::SubmitAssessmentUseCase;
    use sugar_signal_domain::{AssessmentInput, RiskLevel};
    use sugar_signal_infrastructure::HttpPredictionGateway;

    /// Stand-in for the hosted model answering every POST with `status`/`body`
    async fn spawn_model(status: StatusCode, body: &'static str) -> String {
        let app = Router::new().route("/predict", post(move || async move { (status, body) }));
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://{}/predict", addr)
    }

    /// Start the proxy in front of `upstream_url`, returning its predict URL
    async fn spawn_proxy(upstream_url: &str) -> (String, CancellationToken) {
        let upstream = Arc::new(HttpPredictionGateway::new(upstream_url).unwrap());
        let relay = RelayPredictionUseCase::new(upstream);
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let shutdown = CancellationToken::new();
        tokio::spawn(serve(listener, relay, shutdown.clone()));
        (format!("http://{}/api/predict", addr), shutdown)
    }

    #[tokio::test]
    async fn test_elevated_risk_scenario_end_to_end() {
        let model = spawn_model(StatusCode::OK, r#"{"prediction": 1}"#).await;
        let (proxy_url, shutdown) = spawn_proxy(&model).await;

        let proxy = Arc::new(HttpPredictionGateway::new(&proxy_url).unwrap());
        let submit = SubmitAssessmentUseCase::new(proxy);

        let prediction = submit.execute(&AssessmentInput::default()).await.unwrap();
        let level = prediction.risk_level();
        assert_eq!(level, RiskLevel::Elevated);
        assert_eq!(level.outcome().guidance.len(), 4);

        shutdown.cancel();
    }

    #[tokio::test]
    async fn test_low_risk_end_to_end() {
        let model = spawn_model(StatusCode::OK, r#"{"prediction": 0}"#).await;
        let (proxy_url, shutdown) = spawn_proxy(&model).await;

        let proxy = Arc::new(HttpPredictionGateway::new(&proxy_url).unwrap());
        let prediction = SubmitAssessmentUseCase::new(proxy)
            .execute(&AssessmentInput::default())
            .await
            .unwrap();
        assert_eq!(prediction.risk_level(), RiskLevel::Low);

        shutdown.cancel();
    }

    #[tokio::test]
    async fn test_upstream_error_status_becomes_500() {
        let model = spawn_model(StatusCode::SERVICE_UNAVAILABLE, "down").await;
        let (proxy_url, shutdown) = spawn_proxy(&model).await;

        let response = reqwest::Client::new()
            .post(&proxy_url)
            .json(&AssessmentInput::default())
            .send()
            .await
            .unwrap();
        assert_eq!(response.status().as_u16(), 500);
        let body: Value = response.json().await.unwrap();
        assert_eq!(body, json!({"error": UPSTREAM_ERROR}));

        shutdown.cancel();
    }

    #[tokio::test]
    async fn test_accepts_json_without_json_content_type() {
        let model = spawn_model(StatusCode::OK, r#"{"prediction": 1}"#).await;
        let (proxy_url, shutdown) = spawn_proxy(&model).await;
        let client = reqwest::Client::new();

        let bare = client
            .post(&proxy_url)
            .body(r#"{"Glucose":120}"#)
            .send()
            .await
            .unwrap();
        assert_eq!(bare.status().as_u16(), 200);
        let body: Value = bare.json().await.unwrap();
        assert_eq!(body, json!({"prediction": 1}));

        let text_plain = client
            .post(&proxy_url)
            .header("content-type", "text/plain")
            .body(r#"{"Glucose":120}"#)
            .send()
            .await
            .unwrap();
        assert_eq!(text_plain.status().as_u16(), 200);

        shutdown.cancel();
    }

    #[tokio::test]
    async fn test_malformed_body_becomes_500() {
        let model = spawn_model(StatusCode::OK, r#"{"prediction": 0}"#).await;
        let (proxy_url, shutdown) = spawn_proxy(&model).await;

        let response = reqwest::Client::new()
            .post(&proxy_url)
            .header("content-type", "application/json")
            .body("{not json")
            .send()
            .await
            .unwrap();
        assert_eq!(response.status().as_u16(), 500);
        let body: Value = response.json().await.unwrap();
        assert_eq!(body, json!({"error": UPSTREAM_ERROR}));

        shutdown.cancel();
    }

    #[tokio::test]
    async fn test_health_route() {
        let model = spawn_model(StatusCode::OK, r#"{"prediction": 0}"#).await;
        let (proxy_url, shutdown) = spawn_proxy(&model).await;

        let health_url = proxy_url.replace("/api/predict", "/health");
        let response = reqwest::get(&health_url).await.unwrap();
        assert!(response.status().is_success());

        shutdown.cancel();
    }

    #[tokio::test]
    async fn test_signal_cancels_shutdown_token() {
        let shutdown = CancellationToken::new();
        cancel_on_signal(async { Ok(()) }, shutdown.clone()).await;
        assert!(shutdown.is_cancelled());
    }

    #[tokio::test]
    async fn test_failed_signal_listener_keeps_serving() {
        let shutdown = CancellationToken::new();
        let failing = async { Err(io::Error::other("no signal handler")) };
        cancel_on_signal(failing, shutdown.clone()).await;
        assert!(!shutdown.is_cancelled());
    }

    #[tokio::test]
    async fn test_shutdown_stops_server() {
        let upstream = Arc::new(HttpPredictionGateway::new("http://127.0.0.1:9/predict").unwrap());
        let relay = RelayPredictionUseCase::new(upstream);
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let shutdown = CancellationToken::new();
        let handle = tokio::spawn(serve(listener, relay, shutdown.clone()));

        shutdown.cancel();
        assert!(handle.await.unwrap().is_ok());
    }
}
