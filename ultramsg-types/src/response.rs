//! Response envelopes.
//!
//! The gateway signals application errors by shape: any JSON object carrying
//! an `error` key is a failure, everything else is the endpoint's success
//! record. [`ApiResponse`] turns that convention into an explicit enum while
//! keeping the wire format intact in both directions.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};

/// Error reported by the gateway (`{"error": "..."}`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
#[error("{error}")]
pub struct ApiError {
    pub error: String,
}

impl ApiError {
    pub fn new(error: impl Into<String>) -> Self {
        Self { error: error.into() }
    }

    /// Build from the raw `error` value. Non-string values (the gateway
    /// sometimes reports per-field errors as an array) keep their JSON text.
    pub fn from_wire(value: &Value) -> Self {
        match value {
            Value::String(s) => Self::new(s.clone()),
            other => Self::new(other.to_string()),
        }
    }

    pub fn message(&self) -> &str {
        &self.error
    }
}

/// Outcome of a typed gateway operation.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiResponse<T> {
    Success(T),
    Failure(ApiError),
}

impl<T> ApiResponse<T> {
    /// True when the gateway answered with an `error` record.
    pub fn is_error(&self) -> bool {
        matches!(self, ApiResponse::Failure(_))
    }

    pub fn is_success(&self) -> bool {
        !self.is_error()
    }

    pub fn ok(self) -> Option<T> {
        match self {
            ApiResponse::Success(v) => Some(v),
            ApiResponse::Failure(_) => None,
        }
    }

    pub fn error(&self) -> Option<&ApiError> {
        match self {
            ApiResponse::Success(_) => None,
            ApiResponse::Failure(e) => Some(e),
        }
    }

    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> ApiResponse<U> {
        match self {
            ApiResponse::Success(v) => ApiResponse::Success(f(v)),
            ApiResponse::Failure(e) => ApiResponse::Failure(e),
        }
    }

    pub fn into_result(self) -> Result<T, ApiError> {
        match self {
            ApiResponse::Success(v) => Ok(v),
            ApiResponse::Failure(e) => Err(e),
        }
    }
}

impl<T: DeserializeOwned> ApiResponse<T> {
    /// Branch on the presence of a non-null `error` key, otherwise decode `T`.
    pub fn from_value(value: Value) -> Result<Self, serde_json::Error> {
        if let Some(error) = value.as_object().and_then(|o| o.get("error")) {
            if !error.is_null() {
                return Ok(ApiResponse::Failure(ApiError::from_wire(error)));
            }
        }
        serde_json::from_value(value).map(ApiResponse::Success)
    }
}

impl<'de, T: DeserializeOwned> Deserialize<'de> for ApiResponse<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        ApiResponse::from_value(value).map_err(serde::de::Error::custom)
    }
}

impl<T: Serialize> Serialize for ApiResponse<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            ApiResponse::Success(v) => v.serialize(serializer),
            ApiResponse::Failure(e) => e.serialize(serializer),
        }
    }
}

/// Success record of every send operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SendResult {
    /// `"true"` when the gateway accepted the message.
    pub sent: String,
    pub message: String,
    pub id: i64,
    /// Fields this crate doesn't know about, kept as received.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl SendResult {
    pub fn is_sent(&self) -> bool {
        self.sent == "true"
    }
}

/// Generic `{"success": "done"}` acknowledgement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Done {
    pub success: String,
}

/// Response of the clear-by-status operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ClearResult {
    Status { status: String },
    Done(Done),
}
