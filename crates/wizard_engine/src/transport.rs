use std::time::Duration;

use engine_logging::{engine_debug, engine_warn};
use futures_util::StreamExt;
use reqwest::header::CONTENT_TYPE;
use serde_json::Value;
use wizard_core::RequestId;

use crate::{FailureKind, TransportError};

#[derive(Debug, Clone)]
pub struct TransportSettings {
    /// Generation webhook; keyword and content requests share it.
    pub endpoint: String,
    pub connect_timeout: Duration,
    /// `None` leaves a request pending until the server answers.
    pub request_timeout: Option<Duration>,
    pub max_bytes: u64,
}

impl Default for TransportSettings {
    fn default() -> Self {
        Self {
            endpoint: "http://localhost:5678/webhook/generate".to_string(),
            connect_timeout: Duration::from_secs(10),
            request_timeout: None,
            max_bytes: 5 * 1024 * 1024,
        }
    }
}

#[async_trait::async_trait]
pub trait Transport: Send + Sync {
    async fn post_json(&self, request_id: RequestId, body: &Value)
        -> Result<Value, TransportError>;
}

#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    settings: TransportSettings,
    endpoint: url::Url,
    client: reqwest::Client,
}

impl ReqwestTransport {
    pub fn new(settings: TransportSettings) -> Result<Self, TransportError> {
        let endpoint = url::Url::parse(&settings.endpoint)
            .map_err(|err| TransportError::new(FailureKind::InvalidUrl, err.to_string()))?;
        if !matches!(endpoint.scheme(), "http" | "https") {
            return Err(TransportError::new(
                FailureKind::InvalidUrl,
                format!("unsupported scheme {}", endpoint.scheme()),
            ));
        }
        let mut builder = reqwest::Client::builder().connect_timeout(settings.connect_timeout);
        if let Some(timeout) = settings.request_timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|err| TransportError::new(FailureKind::Network, err.to_string()))?;
        Ok(Self {
            settings,
            endpoint,
            client,
        })
    }
}

#[async_trait::async_trait]
impl Transport for ReqwestTransport {
    async fn post_json(
        &self,
        request_id: RequestId,
        body: &Value,
    ) -> Result<Value, TransportError> {
        let payload = serde_json::to_vec(body)
            .map_err(|err| TransportError::new(FailureKind::InvalidJson, err.to_string()))?;
        engine_debug!(
            "POST request_id={} endpoint={} bytes={}",
            request_id,
            self.endpoint,
            payload.len()
        );

        let response = self
            .client
            .post(self.endpoint.as_str())
            .header(CONTENT_TYPE, "application/json")
            .body(payload)
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        if !status.is_success() {
            engine_warn!("request_id={} answered with {}", request_id, status);
            return Err(TransportError::new(
                FailureKind::HttpStatus(status.as_u16()),
                status.to_string(),
            ));
        }

        let bytes = read_capped(response, self.settings.max_bytes).await?;
        engine_debug!("request_id={} received {} bytes", request_id, bytes.len());

        serde_json::from_slice(&bytes)
            .map_err(|err| TransportError::new(FailureKind::InvalidJson, err.to_string()))
    }
}

/// Collects the body, giving up as soon as it is known to exceed `max_bytes`.
async fn read_capped(response: reqwest::Response, max_bytes: u64) -> Result<Vec<u8>, TransportError> {
    let declared = response.content_length();
    if declared.is_some_and(|len| len > max_bytes) {
        return Err(too_large(max_bytes, declared));
    }

    let mut body = Vec::with_capacity(declared.unwrap_or(0).min(max_bytes) as usize);
    let mut chunks = response.bytes_stream();
    while let Some(chunk) = chunks.next().await {
        let chunk = chunk.map_err(map_reqwest_error)?;
        let received = (body.len() + chunk.len()) as u64;
        if received > max_bytes {
            return Err(too_large(max_bytes, Some(received)));
        }
        body.extend_from_slice(&chunk);
    }
    Ok(body)
}

fn too_large(max_bytes: u64, actual: Option<u64>) -> TransportError {
    TransportError::new(
        FailureKind::TooLarge { max_bytes, actual },
        format!("body of {actual:?} bytes exceeds the {max_bytes} byte cap"),
    )
}

fn map_reqwest_error(err: reqwest::Error) -> TransportError {
    if err.is_timeout() {
        return TransportError::new(FailureKind::Timeout, err.to_string());
    }
    TransportError::new(FailureKind::Network, err.to_string())
}
