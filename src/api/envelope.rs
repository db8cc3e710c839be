//! Response envelope validation
//!
//! Every endpoint wraps its payload as `{status, code, data, error}`. The
//! envelope is checked here and `data` is decoded into a typed schema, so
//! nothing downstream sees raw JSON.

use crate::error::ApiError;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EnvelopeStatus {
    Success,
    Error,
}

/// Wire envelope around every API payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Envelope {
    pub status: EnvelopeStatus,
    #[serde(default)]
    pub code: Option<u16>,
    #[serde(default)]
    pub data: Option<serde_json::Value>,
    #[serde(default)]
    pub error: Option<String>,
}

#[cfg(test)]
impl Envelope {
    pub fn success(data: serde_json::Value) -> Self {
        Self {
            status: EnvelopeStatus::Success,
            code: Some(200),
            data: Some(data),
            error: None,
        }
    }

    pub fn failure(code: u16, message: impl Into<String>) -> Self {
        Self {
            status: EnvelopeStatus::Error,
            code: Some(code),
            data: None,
            error: Some(message.into()),
        }
    }
}

/// Validate an envelope and decode its `data` as `T`
pub fn unwrap_envelope<T: DeserializeOwned>(envelope: Envelope) -> Result<T, ApiError> {
    match envelope.status {
        EnvelopeStatus::Error => Err(ApiError::Server {
            code: envelope.code.unwrap_or(500),
            message: envelope
                .error
                .unwrap_or_else(|| "unspecified server error".to_string()),
        }),
        EnvelopeStatus::Success => {
            let data = match envelope.data {
                Some(serde_json::Value::Null) | None => {
                    return Err(ApiError::MalformedPayload(
                        "success envelope without data".to_string(),
                    ))
                }
                Some(data) => data,
            };
            serde_json::from_value(data).map_err(|e| {
                ApiError::MalformedPayload(format!("data does not match schema: {}", e))
            })
        }
    }
}

/// Parse a response body into an envelope and unwrap it
pub fn decode_body<T: DeserializeOwned>(body: &str) -> Result<T, ApiError> {
    let envelope: Envelope = serde_json::from_str(body)
        .map_err(|e| ApiError::MalformedPayload(format!("invalid envelope: {}", e)))?;
    unwrap_envelope(envelope)
}
