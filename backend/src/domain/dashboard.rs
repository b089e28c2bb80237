//! Dashboard aggregate counts.

use serde::Serialize;
use utoipa::ToSchema;

/// The four counts rendered on the dashboard cards.
///
/// Produced by four counting queries issued concurrently; one failing
/// sub-query fails the whole aggregate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DashboardCards {
    pub total_documents: u64,
    pub total_users: u64,
    pub total_audit_records: u64,
    pub total_pending_documents: u64,
}
