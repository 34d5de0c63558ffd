//! Audit-trail records as returned by the API.
//!
//! Decoding is lenient the same way the API's own clients are: unknown
//! fields are ignored and absent strings decode as empty. Only `timestamp`
//! is required, and it must be RFC 3339.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Top-level response body: `{"data": [...]}`.
///
/// `data` keeps the order the server sent, which is also the display order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResponseEnvelope {
    #[serde(default)]
    pub data: Vec<AuditEvent>,
}

/// A single recorded action in the organization's activity log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditEvent {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub version: String,
    #[serde(rename = "type", default)]
    pub kind: String,
    pub timestamp: DateTime<Utc>,
    #[serde(default)]
    pub auth: Auth,
    #[serde(default)]
    pub request: Request,
    #[serde(default)]
    pub resource: Resource,
}

/// Who performed the action.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Auth {
    #[serde(default)]
    pub accessor_id: String,
    #[serde(default)]
    pub description: String,
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub impersonator_id: Option<String>,
    #[serde(default)]
    pub organization_id: String,
    #[serde(default)]
    pub organization_name: String,
}

/// The API call that produced the event.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Request {
    #[serde(default)]
    pub id: String,
}

/// What the action was performed on.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Resource {
    #[serde(default)]
    pub id: String,
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub action: String,
    /// Resource-specific payload. Kept as-is, never interpreted.
    #[serde(default)]
    pub meta: Value,
}
