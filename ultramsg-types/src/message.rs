//! Message records returned by the gateway's message endpoints.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Delivery status of a message as reported by the gateway.
///
/// Unknown values are kept verbatim in `Other` so nothing is lost on a
/// round trip.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum MessageStatus {
    Queue,
    Sent,
    Unsent,
    Invalid,
    Expired,
    Other(String),
}

impl MessageStatus {
    pub fn as_str(&self) -> &str {
        match self {
            MessageStatus::Queue => "queue",
            MessageStatus::Sent => "sent",
            MessageStatus::Unsent => "unsent",
            MessageStatus::Invalid => "invalid",
            MessageStatus::Expired => "expired",
            MessageStatus::Other(s) => s,
        }
    }
}

impl From<String> for MessageStatus {
    fn from(s: String) -> Self {
        match s.as_str() {
            "queue" => MessageStatus::Queue,
            "sent" => MessageStatus::Sent,
            "unsent" => MessageStatus::Unsent,
            "invalid" => MessageStatus::Invalid,
            "expired" => MessageStatus::Expired,
            _ => MessageStatus::Other(s),
        }
    }
}

impl From<MessageStatus> for String {
    fn from(status: MessageStatus) -> Self {
        match status {
            MessageStatus::Other(s) => s,
            known => known.as_str().to_string(),
        }
    }
}

impl std::fmt::Display for MessageStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Payload kind of a stored message.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum MessageType {
    Chat,
    Image,
    Document,
    Audio,
    Voice,
    Video,
    Link,
    Contact,
    Location,
    Vcard,
    Other(String),
}

impl MessageType {
    pub fn as_str(&self) -> &str {
        match self {
            MessageType::Chat => "chat",
            MessageType::Image => "image",
            MessageType::Document => "document",
            MessageType::Audio => "audio",
            MessageType::Voice => "voice",
            MessageType::Video => "video",
            MessageType::Link => "link",
            MessageType::Contact => "contact",
            MessageType::Location => "location",
            MessageType::Vcard => "vcard",
            MessageType::Other(s) => s,
        }
    }
}

impl From<String> for MessageType {
    fn from(s: String) -> Self {
        match s.as_str() {
            "chat" => MessageType::Chat,
            "image" => MessageType::Image,
            "document" => MessageType::Document,
            "audio" => MessageType::Audio,
            "voice" => MessageType::Voice,
            "video" => MessageType::Video,
            "link" => MessageType::Link,
            "contact" => MessageType::Contact,
            "location" => MessageType::Location,
            "vcard" => MessageType::Vcard,
            _ => MessageType::Other(s),
        }
    }
}

impl From<MessageType> for String {
    fn from(kind: MessageType) -> Self {
        match kind {
            MessageType::Other(s) => s,
            known => known.as_str().to_string(),
        }
    }
}

impl std::fmt::Display for MessageType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A message stored on the gateway.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub id: i64,
    #[serde(rename = "referenceId", default)]
    pub reference_id: Option<String>,
    pub from: String,
    pub to: String,
    #[serde(default)]
    pub body: String,
    #[serde(default)]
    pub priority: i64,
    pub status: MessageStatus,
    #[serde(default)]
    pub ack: String,
    #[serde(rename = "type")]
    pub message_type: MessageType,
    /// Unix seconds.
    #[serde(default)]
    pub created_at: i64,
    /// Unix seconds, 0 while the message is still queued.
    #[serde(default)]
    pub sent_at: i64,
    #[serde(default)]
    pub metadata: HashMap<String, String>,
}

impl Message {
    pub fn created_at_utc(&self) -> Option<DateTime<Utc>> {
        unix_to_utc(self.created_at)
    }

    pub fn sent_at_utc(&self) -> Option<DateTime<Utc>> {
        unix_to_utc(self.sent_at)
    }
}

fn unix_to_utc(secs: i64) -> Option<DateTime<Utc>> {
    if secs <= 0 {
        return None;
    }
    DateTime::from_timestamp(secs, 0)
}

/// One page of the message listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessagePage {
    pub total: u64,
    pub pages: u64,
    pub limit: u64,
    pub page: u64,
    #[serde(default)]
    pub messages: Vec<Message>,
}

/// Message counts per status bucket.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageStatistics {
    pub sent: u64,
    pub queue: u64,
    pub unsent: u64,
    pub invalid: u64,
    pub expired: u64,
}

/// Wire envelope of the statistics endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatisticsEnvelope {
    pub messages_statistics: MessageStatistics,
}

/// Filters for the message listing. Unset fields are not sent.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MessageFilters {
    pub page: Option<u32>,
    pub limit: Option<u32>,
    /// `all`, `queue`, `sent`, `unsent`, `invalid` or `expired`.
    pub status: Option<String>,
    /// `asc` or `desc`.
    pub sort: Option<String>,
    pub id: Option<String>,
    pub reference_id: Option<String>,
    pub from: Option<String>,
    pub to: Option<String>,
    pub ack: Option<String>,
}
