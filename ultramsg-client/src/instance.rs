//! Instance (account session) operations.
//!
//! Apart from the status call these are administrative pass-throughs: the
//! gateway's JSON comes back as-is.

use serde_json::Value;
use ultramsg_types::{ApiResponse, InstanceSettings, InstanceStatus};

use crate::client::GatewayClient;
use crate::error::Result;
use crate::params::Params;

impl From<&InstanceSettings> for Params {
    fn from(settings: &InstanceSettings) -> Self {
        settings.fields().into_iter().collect()
    }
}

impl GatewayClient {
    pub async fn get_instance_status(&self) -> Result<ApiResponse<InstanceStatus>> {
        self.get_typed("instance/status", Params::new()).await
    }

    /// Pairing QR code (`instance/qr`).
    pub async fn get_instance_qr(&self) -> Result<Value> {
        self.get("instance/qr", Params::new()).await
    }

    /// Pairing QR code as served by `instance/qrCode`.
    pub async fn get_instance_qr_code(&self) -> Result<Value> {
        self.get("instance/qrCode", Params::new()).await
    }

    /// Screenshot of the session, optionally in a given `encoding`.
    pub async fn get_instance_screenshot(&self, encoding: Option<&str>) -> Result<Value> {
        let params = Params::new().with_opt("encoding", encoding);
        self.get("instance/screenshot", params).await
    }

    /// Identity of the paired account.
    pub async fn get_instance_me(&self) -> Result<Value> {
        self.get("instance/me", Params::new()).await
    }

    pub async fn get_instance_settings(&self) -> Result<Value> {
        self.get("instance/settings", Params::new()).await
    }

    /// Move the session back to this instance when opened elsewhere.
    pub async fn instance_takeover(&self) -> Result<Value> {
        self.post("instance/takeover", Params::new()).await
    }

    pub async fn instance_logout(&self) -> Result<Value> {
        self.post("instance/logout", Params::new()).await
    }

    pub async fn instance_restart(&self) -> Result<Value> {
        self.post("instance/restart", Params::new()).await
    }

    /// Update settings. Only options set in `settings` are sent.
    pub async fn update_instance_settings(&self, settings: &InstanceSettings) -> Result<Value> {
        self.post("instance/settings", Params::from(settings)).await
    }

    /// Drop the session so the instance has to be paired again.
    pub async fn instance_clear(&self) -> Result<Value> {
        self.post("instance/clear", Params::new()).await
    }
}
