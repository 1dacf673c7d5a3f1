//! Instance (account session) records.

use serde::{Deserialize, Serialize};

/// Response of `instance/status`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstanceStatus {
    pub status: InstanceState,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstanceState {
    #[serde(rename = "accountStatus")]
    pub account_status: AccountStatus,
}

/// Connection state of the paired account, e.g. `authenticated`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountStatus {
    pub status: String,
    #[serde(default)]
    pub substatus: String,
}

impl InstanceStatus {
    pub fn account(&self) -> &AccountStatus {
        &self.status.account_status
    }
}

/// Settings accepted by the settings update.
///
/// A `None` field leaves the remote value unchanged and is not sent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstanceSettings {
    /// Delay between sent messages, in seconds.
    #[serde(rename = "sendDelay", default, skip_serializing_if = "Option::is_none")]
    pub send_delay: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub webhook_url: Option<String>,
    /// Notify on incoming messages.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub webhook_message_received: Option<bool>,
    /// Notify on messages created by this instance.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub webhook_message_create: Option<bool>,
    /// Notify on delivery acknowledgements.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub webhook_message_ack: Option<bool>,
    /// Notify when received media has been downloaded.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub webhook_message_download_media: Option<bool>,
}

impl InstanceSettings {
    /// Wire name and value of every set option.
    pub fn fields(&self) -> Vec<(&'static str, String)> {
        let mut out = Vec::new();
        if let Some(delay) = &self.send_delay {
            out.push(("sendDelay", delay.clone()));
        }
        if let Some(url) = &self.webhook_url {
            out.push(("webhook_url", url.clone()));
        }
        let toggles = [
            ("webhook_message_received", self.webhook_message_received),
            ("webhook_message_create", self.webhook_message_create),
            ("webhook_message_ack", self.webhook_message_ack),
            ("webhook_message_download_media", self.webhook_message_download_media),
        ];
        for (name, value) in toggles {
            if let Some(v) = value {
                out.push((name, v.to_string()));
            }
        }
        out
    }
}
