//! Message listing, sending and maintenance operations.

use serde_json::Value;
use ultramsg_types::{
    validate_recipient, ApiResponse, ClearResult, ClearStatus, Done, MessageFilters, MessagePage,
    MessageStatistics, OutgoingMessage, ResendStatus, SendOptions, SendResult, StatisticsEnvelope,
};

use crate::client::GatewayClient;
use crate::error::Result;
use crate::params::Params;

impl From<&MessageFilters> for Params {
    fn from(filters: &MessageFilters) -> Self {
        Params::new()
            .with_opt("page", filters.page)
            .with_opt("limit", filters.limit)
            .with_opt("status", filters.status.as_deref())
            .with_opt("sort", filters.sort.as_deref())
            .with_opt("id", filters.id.as_deref())
            .with_opt("referenceId", filters.reference_id.as_deref())
            .with_opt("from", filters.from.as_deref())
            .with_opt("to", filters.to.as_deref())
            .with_opt("ack", filters.ack.as_deref())
    }
}

/// Request parameters of one send call.
fn send_params(to: &str, message: &OutgoingMessage, options: &SendOptions) -> Params {
    let mut params = Params::new().with("to", to);
    for (key, value) in message.fields() {
        params.insert(key, value);
    }
    params.insert_opt("priority", options.priority);
    params.insert_opt("referenceId", options.reference_id.as_deref());
    if message.is_media() {
        params.insert_opt("nocache", options.nocache);
    } else if options.nocache.is_some() {
        tracing::warn!(
            kind = message.endpoint(),
            "nocache only applies to media messages, ignoring"
        );
    }
    params
}

impl GatewayClient {
    /// List messages. Filters left as `None` are not sent.
    pub async fn list_messages(
        &self,
        filters: &MessageFilters,
    ) -> Result<ApiResponse<MessagePage>> {
        self.get_typed("messages", Params::from(filters)).await
    }

    pub async fn get_statistics(&self) -> Result<ApiResponse<MessageStatistics>> {
        let resp: ApiResponse<StatisticsEnvelope> =
            self.get_typed("messages/statistics", Params::new()).await?;
        Ok(resp.map(|env| env.messages_statistics))
    }

    /// Validate and send any payload variant to `to`.
    pub async fn send_message(
        &self,
        to: &str,
        message: &OutgoingMessage,
        options: &SendOptions,
    ) -> Result<ApiResponse<SendResult>> {
        validate_recipient(to)?;
        message.validate()?;

        let path = format!("messages/{}", message.endpoint());
        self.post_typed(&path, send_params(to, message, options)).await
    }

    /// Text message, up to 4096 characters.
    pub async fn send_chat_message(
        &self,
        to: &str,
        body: &str,
        options: &SendOptions,
    ) -> Result<ApiResponse<SendResult>> {
        let message = OutgoingMessage::Chat { body: body.to_string() };
        self.send_message(to, &message, options).await
    }

    /// Image by http(s) link or base64 (jpg, jpeg, gif, png, webp, bmp).
    pub async fn send_image_message(
        &self,
        to: &str,
        caption: &str,
        image: &str,
        options: &SendOptions,
    ) -> Result<ApiResponse<SendResult>> {
        let message = OutgoingMessage::Image {
            caption: caption.to_string(),
            image: image.to_string(),
        };
        self.send_message(to, &message, options).await
    }

    pub async fn send_document_message(
        &self,
        to: &str,
        filename: &str,
        document: &str,
        options: &SendOptions,
    ) -> Result<ApiResponse<SendResult>> {
        let message = OutgoingMessage::Document {
            filename: filename.to_string(),
            document: document.to_string(),
        };
        self.send_message(to, &message, options).await
    }

    pub async fn send_audio_message(
        &self,
        to: &str,
        audio: &str,
        options: &SendOptions,
    ) -> Result<ApiResponse<SendResult>> {
        let message = OutgoingMessage::Audio { audio: audio.to_string() };
        self.send_message(to, &message, options).await
    }

    /// Voice note (push-to-talk) rather than an audio file.
    pub async fn send_voice_message(
        &self,
        to: &str,
        audio: &str,
        options: &SendOptions,
    ) -> Result<ApiResponse<SendResult>> {
        let message = OutgoingMessage::Voice { audio: audio.to_string() };
        self.send_message(to, &message, options).await
    }

    pub async fn send_video_message(
        &self,
        to: &str,
        caption: &str,
        video: &str,
        options: &SendOptions,
    ) -> Result<ApiResponse<SendResult>> {
        let message = OutgoingMessage::Video {
            caption: caption.to_string(),
            video: video.to_string(),
        };
        self.send_message(to, &message, options).await
    }

    pub async fn send_link_message(
        &self,
        to: &str,
        link: &str,
        options: &SendOptions,
    ) -> Result<ApiResponse<SendResult>> {
        let message = OutgoingMessage::Link { link: link.to_string() };
        self.send_message(to, &message, options).await
    }

    /// `contact` is one contact id or a comma-separated list of them.
    pub async fn send_contact_message(
        &self,
        to: &str,
        contact: &str,
        options: &SendOptions,
    ) -> Result<ApiResponse<SendResult>> {
        let message = OutgoingMessage::Contact { contact: contact.to_string() };
        self.send_message(to, &message, options).await
    }

    pub async fn send_location_message(
        &self,
        to: &str,
        address: &str,
        lat: f64,
        lng: f64,
        options: &SendOptions,
    ) -> Result<ApiResponse<SendResult>> {
        let message = OutgoingMessage::Location {
            address: address.to_string(),
            lat,
            lng,
        };
        self.send_message(to, &message, options).await
    }

    pub async fn send_vcard_message(
        &self,
        to: &str,
        vcard: &str,
        options: &SendOptions,
    ) -> Result<ApiResponse<SendResult>> {
        let message = OutgoingMessage::Vcard { vcard: vcard.to_string() };
        self.send_message(to, &message, options).await
    }

    /// Delete every message in one status bucket.
    pub async fn clear_messages(&self, status: ClearStatus) -> Result<ApiResponse<ClearResult>> {
        let params = Params::new().with("status", status.as_str());
        self.post_typed("messages/clear", params).await
    }

    /// Requeue every unsent or expired message.
    pub async fn resend_by_status(&self, status: ResendStatus) -> Result<Value> {
        let params = Params::new().with("status", status.as_str());
        self.post("messages/resendByStatus", params).await
    }

    pub async fn resend_by_id(&self, id: i64) -> Result<ApiResponse<Done>> {
        let params = Params::new().with("id", id);
        self.post_typed("messages/resendById", params).await
    }
}
