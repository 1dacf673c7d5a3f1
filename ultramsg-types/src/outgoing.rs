//! Outgoing message payloads and the gateway's documented size limits.

use serde::{Deserialize, Serialize};

/// Max characters of a text body or caption.
pub const MAX_BODY_CHARS: usize = 4096;
/// Max characters of an inline base64 media payload. This also keeps inline
/// images and documents under the gateway's 16MB and 30MB file limits.
pub const MAX_BASE64_CHARS: usize = 10_000_000;
/// Max characters of a comma-separated contact id list (about 15 contacts).
pub const MAX_CONTACT_CHARS: usize = 300;
/// Max characters of the text shown under a location.
pub const MAX_ADDRESS_CHARS: usize = 300;
/// Max characters of a vCard 3.0 block.
pub const MAX_VCARD_CHARS: usize = 4096;

/// Local validation failure. Raised before any request is made.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("{0} must not be empty")]
    Empty(&'static str),

    #[error("{field} is {len} characters, limit is {max}")]
    TooLong {
        field: &'static str,
        len: usize,
        max: usize,
    },

    #[error("{field} is out of range: {value}")]
    OutOfRange { field: &'static str, value: f64 },
}

/// One message payload, per gateway endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum OutgoingMessage {
    Chat { body: String },
    /// `image` is an http(s) link or a base64-encoded file.
    Image { caption: String, image: String },
    Document { filename: String, document: String },
    Audio { audio: String },
    /// Voice note; same payload as audio, different endpoint.
    Voice { audio: String },
    Video { caption: String, video: String },
    Link { link: String },
    /// One contact id or a comma-separated list, e.g. `14000000001@c.us`.
    Contact { contact: String },
    /// `address` supports two lines separated by `\n`.
    Location { address: String, lat: f64, lng: f64 },
    Vcard { vcard: String },
}

impl OutgoingMessage {
    /// Endpoint name under `messages/`.
    pub fn endpoint(&self) -> &'static str {
        match self {
            OutgoingMessage::Chat { .. } => "chat",
            OutgoingMessage::Image { .. } => "image",
            OutgoingMessage::Document { .. } => "document",
            OutgoingMessage::Audio { .. } => "audio",
            OutgoingMessage::Voice { .. } => "voice",
            OutgoingMessage::Video { .. } => "video",
            OutgoingMessage::Link { .. } => "link",
            OutgoingMessage::Contact { .. } => "contact",
            OutgoingMessage::Location { .. } => "location",
            OutgoingMessage::Vcard { .. } => "vcard",
        }
    }

    /// Whether the payload references media, and so accepts the no-cache hint.
    pub fn is_media(&self) -> bool {
        matches!(
            self,
            OutgoingMessage::Image { .. }
                | OutgoingMessage::Document { .. }
                | OutgoingMessage::Audio { .. }
                | OutgoingMessage::Voice { .. }
                | OutgoingMessage::Video { .. }
        )
    }

    /// Payload fields in wire order, without recipient or options.
    pub fn fields(&self) -> Vec<(&'static str, String)> {
        match self {
            OutgoingMessage::Chat { body } => vec![("body", body.clone())],
            OutgoingMessage::Image { caption, image } => {
                vec![("caption", caption.clone()), ("image", image.clone())]
            }
            OutgoingMessage::Document { filename, document } => {
                vec![("filename", filename.clone()), ("document", document.clone())]
            }
            OutgoingMessage::Audio { audio } | OutgoingMessage::Voice { audio } => {
                vec![("audio", audio.clone())]
            }
            OutgoingMessage::Video { caption, video } => {
                vec![("caption", caption.clone()), ("video", video.clone())]
            }
            OutgoingMessage::Link { link } => vec![("link", link.clone())],
            OutgoingMessage::Contact { contact } => vec![("contact", contact.clone())],
            OutgoingMessage::Location { address, lat, lng } => vec![
                ("address", address.clone()),
                ("lat", lat.to_string()),
                ("lng", lng.to_string()),
            ],
            OutgoingMessage::Vcard { vcard } => vec![("vcard", vcard.clone())],
        }
    }

    /// Check the documented limits locally.
    pub fn validate(&self) -> Result<(), ValidationError> {
        match self {
            OutgoingMessage::Chat { body } => {
                require("body", body)?;
                max_chars("body", body, MAX_BODY_CHARS)
            }
            OutgoingMessage::Image { caption, image } => {
                max_chars("caption", caption, MAX_BODY_CHARS)?;
                check_media("image", image)
            }
            OutgoingMessage::Document { filename, document } => {
                require("filename", filename)?;
                check_media("document", document)
            }
            OutgoingMessage::Audio { audio } | OutgoingMessage::Voice { audio } => {
                check_media("audio", audio)
            }
            OutgoingMessage::Video { caption, video } => {
                max_chars("caption", caption, MAX_BODY_CHARS)?;
                check_media("video", video)
            }
            OutgoingMessage::Link { link } => require("link", link),
            OutgoingMessage::Contact { contact } => {
                require("contact", contact)?;
                max_chars("contact", contact, MAX_CONTACT_CHARS)
            }
            OutgoingMessage::Location { address, lat, lng } => {
                require("address", address)?;
                max_chars("address", address, MAX_ADDRESS_CHARS)?;
                in_range("lat", *lat, 90.0)?;
                in_range("lng", *lng, 180.0)
            }
            OutgoingMessage::Vcard { vcard } => {
                require("vcard", vcard)?;
                max_chars("vcard", vcard, MAX_VCARD_CHARS)
            }
        }
    }
}

/// Validate a recipient: phone in international format or a chat/group id.
pub fn validate_recipient(to: &str) -> Result<(), ValidationError> {
    require("to", to)
}

/// True for media given as an http(s) link rather than inline base64.
pub fn is_media_url(media: &str) -> bool {
    let head: String = media.trim_start().chars().take(8).collect();
    let head = head.to_ascii_lowercase();
    head.starts_with("http://") || head.starts_with("https://")
}

fn require(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::Empty(field));
    }
    Ok(())
}

fn max_chars(field: &'static str, value: &str, max: usize) -> Result<(), ValidationError> {
    let len = value.chars().count();
    if len > max {
        return Err(ValidationError::TooLong { field, len, max });
    }
    Ok(())
}

fn in_range(field: &'static str, value: f64, bound: f64) -> Result<(), ValidationError> {
    if !value.is_finite() || value < -bound || value > bound {
        return Err(ValidationError::OutOfRange { field, value });
    }
    Ok(())
}

fn check_media(field: &'static str, media: &str) -> Result<(), ValidationError> {
    require(field, media)?;
    if is_media_url(media) {
        return Ok(());
    }
    max_chars(field, media, MAX_BASE64_CHARS)
}

/// Per-call send options.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SendOptions {
    /// Higher values are sent sooner by the gateway queue.
    pub priority: Option<i64>,
    /// Caller correlation id, echoed back as `referenceId`.
    pub reference_id: Option<String>,
    /// Ask the gateway not to reuse a cached copy of the same media.
    /// Only sent for media payloads.
    pub nocache: Option<bool>,
}

impl SendOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn priority(mut self, priority: i64) -> Self {
        self.priority = Some(priority);
        self
    }

    pub fn reference_id(mut self, reference_id: impl Into<String>) -> Self {
        self.reference_id = Some(reference_id.into());
        self
    }

    pub fn nocache(mut self, nocache: bool) -> Self {
        self.nocache = Some(nocache);
        self
    }

    /// Attach a random UUID v4 as the reference id.
    pub fn with_generated_reference(mut self) -> Self {
        self.reference_id = Some(uuid::Uuid::new_v4().to_string());
        self
    }
}

/// Buckets accepted by the clear operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClearStatus {
    Queue,
    Sent,
    Unsent,
    Invalid,
}

impl ClearStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ClearStatus::Queue => "queue",
            ClearStatus::Sent => "sent",
            ClearStatus::Unsent => "unsent",
            ClearStatus::Invalid => "invalid",
        }
    }
}

/// Buckets accepted by the resend-by-status operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResendStatus {
    Unsent,
    Expired,
}

impl ResendStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResendStatus::Unsent => "unsent",
            ResendStatus::Expired => "expired",
        }
    }
}
