//! Failure kinds surfaced at the API-client boundary.

use serde::Deserialize;
use thiserror::Error;

/// Error returned by every backend call.
///
/// Views branch on the variant instead of inspecting response bodies:
/// validation failures never reached the network, `Http` carries the
/// backend's `detail` text when it sent one.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("HTTP {status}: {}", .detail.as_deref().unwrap_or("request failed"))]
    Http { status: u16, detail: Option<String> },

    #[error("Network error: {0}")]
    Network(String),

    #[error("Failed to parse response: {0}")]
    Decode(String),
}

/// Error body the backend sends alongside non-success statuses.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub detail: Option<serde_json::Value>,
}

impl ErrorBody {
    /// Extracts a displayable detail. FastAPI-style validation errors send
    /// `detail` as a list of objects, those are rendered as compact JSON.
    pub fn detail_text(&self) -> Option<String> {
        match self.detail.as_ref()? {
            serde_json::Value::Null => None,
            serde_json::Value::String(s) if s.trim().is_empty() => None,
            serde_json::Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
    }
}

impl ApiError {
    /// Builds an `Http` error from a status and the raw response text.
    pub fn from_status(status: u16, body: &str) -> Self {
        let detail = serde_json::from_str::<ErrorBody>(body)
            .ok()
            .and_then(|b| b.detail_text());
        ApiError::Http { status, detail }
    }

    /// Server-supplied detail, if any.
    pub fn detail(&self) -> Option<&str> {
        match self {
            ApiError::Http { detail, .. } => detail.as_deref(),
            ApiError::Validation(msg) => Some(msg.as_str()),
            ApiError::Network(_) | ApiError::Decode(_) => None,
        }
    }

    /// Text for the user: the server detail when present, `fallback` otherwise.
    pub fn user_message(&self, fallback: &str) -> String {
        self.detail()
            .map(str::to_string)
            .unwrap_or_else(|| fallback.to_string())
    }
}
