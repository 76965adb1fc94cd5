//! API Response types
//!
//! The admin API returns raw JSON payloads on reads, a `{success}` message
//! envelope on writes, and an `{errors}` body on failures.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Write-endpoint response (create / update submissions)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SubmitOutcome {
    /// Human-readable success message
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub success: Option<String>,
}

impl SubmitOutcome {
    /// Message to surface, with a fallback when the API omits one
    pub fn message_or(&self, fallback: &str) -> String {
        self.success.clone().unwrap_or_else(|| fallback.to_string())
    }
}

/// Error body attached to failed responses
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ErrorBody {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub errors: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ErrorBody {
    /// Best human-readable description of the failure
    pub fn describe(&self) -> Option<String> {
        if let Some(errors) = &self.errors {
            return Some(match errors {
                Value::String(text) => text.clone(),
                other => other.to_string(),
            });
        }
        self.message.clone()
    }
}
