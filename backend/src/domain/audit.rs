//! Audit trail rows.
//!
//! Audit records are opaque: the dashboard enumerates them but never inspects
//! the entry payload structurally.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// An opaque logged event row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AuditRecord {
    pub id: Uuid,
    pub recorded_at: DateTime<Utc>,
    pub entry: serde_json::Value,
}
