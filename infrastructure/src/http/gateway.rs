//! HTTP Prediction Gateway implementation

use crate::http::error::{HttpError, Result};
use async_trait::async_trait;
use reqwest::{Client, Url};
use serde_json::Value;
use sugar_signal_application::ports::prediction_gateway::{GatewayError, PredictionGateway};
use tracing::{debug, info};

const USER_AGENT: &str = concat!("sugar-signal/", env!("CARGO_PKG_VERSION"));

/// Prediction gateway that POSTs JSON to a fixed endpoint
///
/// No timeout is configured on the client: a request runs until the
/// endpoint answers or the connection fails.
pub struct HttpPredictionGateway {
    client: Client,
    endpoint: Url,
}

impl HttpPredictionGateway {
    /// Create a gateway for `endpoint` (must be an absolute http(s) URL)
    pub fn new(endpoint: &str) -> Result<Self> {
        let client = Client::builder().user_agent(USER_AGENT).build()?;
        Self::with_client(client, endpoint)
    }

    /// Create a gateway with an existing client
    pub fn with_client(client: Client, endpoint: &str) -> Result<Self> {
        let endpoint = parse_endpoint(endpoint)?;
        info!("HttpPredictionGateway initialized for {}", endpoint);
        Ok(Self { client, endpoint })
    }
}

fn parse_endpoint(endpoint: &str) -> Result<Url> {
    let url = Url::parse(endpoint).map_err(|e| HttpError::InvalidUrl {
        url: endpoint.to_string(),
        reason: e.to_string(),
    })?;

    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(HttpError::InvalidUrl {
            url: endpoint.to_string(),
            reason: format!("unsupported scheme '{}'", other),
        }),
    }
}

#[async_trait]
impl PredictionGateway for HttpPredictionGateway {
    async fn request_prediction(&self, body: &Value) -> std::result::Result<Value, GatewayError> {
        let response = self
            .client
            .post(self.endpoint.clone())
            .json(body)
            .send()
            .await
            .map_err(|e| GatewayError::Connection(e.to_string()))?;

        let status = response.status();
        debug!("{} answered HTTP {}", self.endpoint, status.as_u16());
        if !status.is_success() {
            return Err(GatewayError::Status(status.as_u16()));
        }

        let payload: Value = response
            .json()
            .await
            .map_err(|e| GatewayError::InvalidResponse(e.to_string()))?;

        Ok(payload.get("prediction").cloned().unwrap_or(Value::Null))
    }

    fn endpoint(&self) -> &str {
        self.endpoint.as_str()
    }
}
