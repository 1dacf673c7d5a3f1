//! Transport layer between the client and the gateway.
//!
//! `GatewayClient` shapes every call into an [`ApiRequest`]; a [`Transport`]
//! turns it into an actual exchange and hands back the JSON body.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;

use crate::config::{ClientConfig, DEFAULT_BASE_URL};
use crate::error::{Error, Result};
use crate::params::Params;

/// HTTP method of a gateway call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    /// Parameters go in the query string.
    Get,
    /// Parameters go in a form-encoded body.
    Post,
}

impl std::fmt::Display for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Method::Get => write!(f, "GET"),
            Method::Post => write!(f, "POST"),
        }
    }
}

/// A fully scoped request: `path` already carries the instance id and
/// `params` already carries the token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiRequest {
    pub method: Method,
    pub path: String,
    pub params: Params,
}

#[async_trait]
pub trait Transport: Send + Sync {
    /// Perform one exchange and return the decoded JSON body.
    ///
    /// A gateway error record is a successful exchange; only network,
    /// status-without-JSON and decoding problems are `Err`.
    async fn execute(&self, request: ApiRequest) -> Result<Value>;
}

/// reqwest-backed transport.
pub struct HttpTransport {
    http_client: Client,
    base_url: String,
}

impl HttpTransport {
    pub fn new(base_url: &str) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    pub fn with_client(http_client: Client, base_url: &str) -> Self {
        Self {
            http_client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn from_config(config: &ClientConfig) -> Result<Self> {
        let http_client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self::with_client(http_client, &config.base_url))
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl Default for HttpTransport {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn execute(&self, request: ApiRequest) -> Result<Value> {
        let url = format!("{}/{}", self.base_url, request.path);

        let builder = match request.method {
            Method::Get => {
                let query = request.params.to_query_string();
                if query.is_empty() {
                    self.http_client.get(&url)
                } else {
                    self.http_client.get(format!("{}?{}", url, query))
                }
            }
            Method::Post => self.http_client.post(&url).form(request.params.entries()),
        };

        let response = builder.send().await?;
        let status = response.status();
        let body = response.text().await?;

        match serde_json::from_str::<Value>(&body) {
            Ok(json) => {
                if !status.is_success() {
                    tracing::warn!(
                        status = status.as_u16(),
                        path = %request.path,
                        "Gateway answered with an error status"
                    );
                }
                Ok(json)
            }
            Err(e) if status.is_success() => Err(Error::InvalidResponse(e.to_string())),
            Err(_) => Err(Error::Status {
                status: status.as_u16(),
                body,
            }),
        }
    }
}
