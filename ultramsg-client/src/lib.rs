//! Async client for the UltraMsg messaging gateway.
//!
//! ```no_run
//! use ultramsg_client::{GatewayClient, SendOptions};
//!
//! # async fn run() -> ultramsg_client::Result<()> {
//! let client = GatewayClient::new("instance123", "tok_abc");
//! let resp = client
//!     .send_chat_message("+14155550100", "hello", &SendOptions::new().priority(10))
//!     .await?;
//! if let Some(err) = resp.error() {
//!     eprintln!("gateway refused: {}", err);
//! }
//! # Ok(())
//! # }
//! ```

mod client;
mod contacts;
mod instance;
mod messages;

pub mod config;
pub mod error;
pub mod params;
pub mod transport;

pub use client::GatewayClient;
pub use config::ClientConfig;
pub use error::{Error, Result};
pub use params::{query_string, ParamValue, Params};
pub use transport::{ApiRequest, HttpTransport, Method, Transport};

pub use ultramsg_types::{
    AccountStatus, ApiError, ApiResponse, ClearResult, ClearStatus, Done, InstanceSettings,
    InstanceStatus, Message, MessageFilters, MessagePage, MessageStatistics, MessageStatus,
    MessageType, OutgoingMessage, ResendStatus, SendOptions, SendResult, ValidationError,
};
