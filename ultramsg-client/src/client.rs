//! Gateway client core.

use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde_json::Value;
use ultramsg_types::ApiResponse;

use crate::config::ClientConfig;
use crate::error::{Error, Result};
use crate::params::Params;
use crate::transport::{ApiRequest, HttpTransport, Method, Transport};

/// Client for one gateway instance.
///
/// Holds only the instance id, the token and a shared transport, so it is
/// cheap to clone and safe to use from many tasks at once.
#[derive(Clone)]
pub struct GatewayClient {
    instance_id: String,
    token: String,
    transport: Arc<dyn Transport>,
}

impl std::fmt::Debug for GatewayClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GatewayClient")
            .field("instance_id", &self.instance_id)
            .field("token", &"<redacted>")
            .finish()
    }
}

impl GatewayClient {
    /// Client against the public gateway. Does no I/O.
    pub fn new(instance_id: impl Into<String>, token: impl Into<String>) -> Self {
        Self::with_transport(instance_id, token, Arc::new(HttpTransport::default()))
    }

    pub fn with_transport(
        instance_id: impl Into<String>,
        token: impl Into<String>,
        transport: Arc<dyn Transport>,
    ) -> Self {
        Self {
            instance_id: instance_id.into(),
            token: token.into(),
            transport,
        }
    }

    pub fn from_config(config: &ClientConfig) -> Result<Self> {
        let transport = HttpTransport::from_config(config)?;
        Ok(Self::with_transport(
            config.instance_id.clone(),
            config.token.clone(),
            Arc::new(transport),
        ))
    }

    pub fn instance_id(&self) -> &str {
        &self.instance_id
    }

    /// Issue one request against `path` under this instance.
    ///
    /// Used by every typed operation, and available for gateway endpoints
    /// this crate doesn't wrap yet. The token is added to `params`.
    pub async fn send_request(
        &self,
        method: Method,
        path: &str,
        mut params: Params,
    ) -> Result<Value> {
        params.insert("token", self.token.as_str());
        let path = format!("{}/{}", self.instance_id, path.trim_start_matches('/'));

        tracing::debug!(method = %method, path = %path, "Sending gateway request");

        self.transport
            .execute(ApiRequest { method, path, params })
            .await
    }

    pub(crate) async fn get(&self, path: &str, params: Params) -> Result<Value> {
        self.send_request(Method::Get, path, params).await
    }

    pub(crate) async fn post(&self, path: &str, params: Params) -> Result<Value> {
        self.send_request(Method::Post, path, params).await
    }

    pub(crate) async fn get_typed<T: DeserializeOwned>(
        &self,
        path: &str,
        params: Params,
    ) -> Result<ApiResponse<T>> {
        let value = self.get(path, params).await?;
        decode(value)
    }

    pub(crate) async fn post_typed<T: DeserializeOwned>(
        &self,
        path: &str,
        params: Params,
    ) -> Result<ApiResponse<T>> {
        let value = self.post(path, params).await?;
        decode(value)
    }
}

fn decode<T: DeserializeOwned>(value: Value) -> Result<ApiResponse<T>> {
    ApiResponse::from_value(value).map_err(|e| Error::InvalidResponse(e.to_string()))
}
