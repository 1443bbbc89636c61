//! HTTP JSON-RPC client backed by `reqwest`.
//!
//! Features:
//! - Basic auth (bitcoind `rpcuser` / `rpcpassword`)
//! - Per-request timeout
//! - Retry with exponential backoff for transient transport errors
//! - bitcoind's HTTP 500 + JSON error body is surfaced as an RPC error, not
//!   as a transport failure

use std::time::Duration;

use async_trait::async_trait;

use chainstatus_core::error::TransportError;
use chainstatus_core::policy::{RetryConfig, RetryPolicy};
use chainstatus_core::request::{JsonRpcRequest, JsonRpcResponse};
use chainstatus_core::transport::RpcTransport;

use crate::config::RpcConfig;

/// Configuration for `HttpRpcClient`.
#[derive(Debug, Clone)]
pub struct HttpClientConfig {
    pub retry: RetryConfig,
    pub request_timeout: Duration,
    pub credentials: Option<(String, String)>,
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        Self {
            retry: RetryConfig::default(),
            request_timeout: Duration::from_secs(25),
            credentials: None,
        }
    }
}

impl From<&RpcConfig> for HttpClientConfig {
    fn from(cfg: &RpcConfig) -> Self {
        Self {
            retry: cfg.retry.clone(),
            request_timeout: cfg.request_timeout(),
            credentials: cfg.credentials(),
        }
    }
}

/// HTTP JSON-RPC client for bitcoind-family nodes.
pub struct HttpRpcClient {
    url: String,
    http: reqwest::Client,
    retry: RetryPolicy,
    credentials: Option<(String, String)>,
    request_timeout: Duration,
}

impl HttpRpcClient {
    /// Create a new client for the given JSON-RPC endpoint URL.
    pub fn new(url: impl Into<String>, config: HttpClientConfig) -> Result<Self, TransportError> {
        let http = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()
            .map_err(|e| TransportError::Other(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            url: url.into(),
            http,
            retry: RetryPolicy::new(config.retry),
            credentials: config.credentials,
            request_timeout: config.request_timeout,
        })
    }

    /// Create a client from a coin's backend settings.
    pub fn from_config(cfg: &RpcConfig) -> Result<Self, TransportError> {
        Self::new(cfg.rpc_url.clone(), HttpClientConfig::from(cfg))
    }

    fn map_reqwest(&self, e: reqwest::Error) -> TransportError {
        if e.is_timeout() {
            TransportError::Timeout {
                ms: self.request_timeout.as_millis() as u64,
            }
        } else {
            TransportError::Http(e.to_string())
        }
    }

    async fn send_once(&self, req: &JsonRpcRequest) -> Result<JsonRpcResponse, TransportError> {
        let mut builder = self.http.post(&self.url).json(req);
        if let Some((user, pass)) = &self.credentials {
            builder = builder.basic_auth(user, Some(pass));
        }

        let resp = builder.send().await.map_err(|e| self.map_reqwest(e))?;
        let status = resp.status();
        let body = resp.text().await.map_err(|e| self.map_reqwest(e))?;

        match serde_json::from_str::<JsonRpcResponse>(&body) {
            Ok(rpc) if status.is_success() || rpc.error.is_some() => Ok(rpc),
            Ok(_) => Err(TransportError::Status {
                status: status.as_u16(),
                body,
            }),
            Err(_) if !status.is_success() => Err(TransportError::Status {
                status: status.as_u16(),
                body,
            }),
            Err(e) => Err(TransportError::Deserialization(e)),
        }
    }
}

#[async_trait]
impl RpcTransport for HttpRpcClient {
    async fn send(&self, req: JsonRpcRequest) -> Result<JsonRpcResponse, TransportError> {
        let mut attempt = 0u32;
        loop {
            attempt += 1;
            match self.send_once(&req).await {
                Ok(resp) => return Ok(resp),
                Err(e) if e.is_retryable() => match self.retry.next_delay(attempt) {
                    Some(delay) => {
                        tracing::warn!(
                            attempt,
                            method = %req.method,
                            delay_ms = delay.as_millis() as u64,
                            error = %e,
                            url = %self.url,
                            "retrying request"
                        );
                        tokio::time::sleep(delay).await;
                    }
                    None => {
                        tracing::error!(
                            attempt,
                            method = %req.method,
                            error = %e,
                            url = %self.url,
                            "giving up on request"
                        );
                        return Err(e);
                    }
                },
                Err(e) => return Err(e),
            }
        }
    }

    fn url(&self) -> &str {
        &self.url
    }
}
