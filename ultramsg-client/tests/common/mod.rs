//! Test doubles shared by the integration tests.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde_json::Value;
use ultramsg_client::{ApiRequest, GatewayClient, Result, Transport};

pub const INSTANCE_ID: &str = "instance123";
pub const TOKEN: &str = "tok_abc";

/// Transport that records every request and answers with a fixed body.
pub struct RecordingTransport {
    response: Value,
    requests: Mutex<Vec<ApiRequest>>,
}

impl RecordingTransport {
    pub fn new(response: Value) -> Arc<Self> {
        Arc::new(Self {
            response,
            requests: Mutex::new(Vec::new()),
        })
    }

    pub fn requests(&self) -> Vec<ApiRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn single_request(&self) -> ApiRequest {
        let requests = self.requests();
        assert_eq!(requests.len(), 1, "expected exactly one request");
        requests.into_iter().next().unwrap()
    }
}

#[async_trait]
impl Transport for RecordingTransport {
    async fn execute(&self, request: ApiRequest) -> Result<Value> {
        self.requests.lock().unwrap().push(request);
        Ok(self.response.clone())
    }
}

/// Transport that echoes the request parameters back as the response body.
pub struct EchoTransport;

#[async_trait]
impl Transport for EchoTransport {
    async fn execute(&self, request: ApiRequest) -> Result<Value> {
        tokio::task::yield_now().await;
        let map = request
            .params
            .iter()
            .map(|(k, v)| (k.to_string(), Value::String(v.to_string())))
            .collect();
        Ok(Value::Object(map))
    }
}

pub fn client_with(transport: Arc<dyn Transport>) -> GatewayClient {
    GatewayClient::with_transport(INSTANCE_ID, TOKEN, transport)
}

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
