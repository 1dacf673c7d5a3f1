//! UltraMsg wire types
//!
//! Records exchanged with the UltraMsg gateway, shared by the client and by
//! callers that store or forward them.

pub mod instance;
pub mod message;
pub mod outgoing;
pub mod response;

pub use instance::{AccountStatus, InstanceSettings, InstanceState, InstanceStatus};
pub use message::{
    Message, MessageFilters, MessagePage, MessageStatistics, MessageStatus, MessageType,
    StatisticsEnvelope,
};
pub use outgoing::{
    validate_recipient, ClearStatus, OutgoingMessage, ResendStatus, SendOptions, ValidationError,
};
pub use response::{ApiError, ApiResponse, ClearResult, Done, SendResult};
