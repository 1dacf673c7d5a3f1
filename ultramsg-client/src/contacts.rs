//! Chat and contact operations. Responses are passed through untyped.

use serde_json::Value;

use crate::client::GatewayClient;
use crate::error::Result;
use crate::params::Params;

impl GatewayClient {
    pub async fn get_chats(&self) -> Result<Value> {
        self.get("chats", Params::new()).await
    }

    /// Latest messages of one chat, `limit` defaulting to the gateway's.
    pub async fn get_chat_messages(&self, chat_id: &str, limit: Option<u32>) -> Result<Value> {
        let params = Params::new()
            .with("chatId", chat_id)
            .with_opt("limit", limit);
        self.get("chats/messages", params).await
    }

    pub async fn get_contacts(&self) -> Result<Value> {
        self.get("contacts", Params::new()).await
    }

    pub async fn get_contact(&self, chat_id: &str) -> Result<Value> {
        self.get("contacts/contact", chat_params(chat_id)).await
    }

    pub async fn get_blocked_contacts(&self) -> Result<Value> {
        self.get("contacts/blocked", Params::new()).await
    }

    /// Whether `chat_id` is a registered account.
    pub async fn check_contact(&self, chat_id: &str) -> Result<Value> {
        self.get("contacts/check", chat_params(chat_id)).await
    }

    pub async fn block_contact(&self, chat_id: &str) -> Result<Value> {
        self.post("contacts/block", chat_params(chat_id)).await
    }

    pub async fn unblock_contact(&self, chat_id: &str) -> Result<Value> {
        self.post("contacts/unblock", chat_params(chat_id)).await
    }
}

fn chat_params(chat_id: &str) -> Params {
    Params::new().with("chatId", chat_id)
}
