//! Driving port for audit record listing.

use async_trait::async_trait;

use crate::domain::Error;
use crate::domain::audit::AuditRecord;

/// Read-side audit operations exposed to inbound adapters.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AuditQuery: Send + Sync {
    /// Every audit row, newest first.
    async fn list_audit_records(&self) -> Result<Vec<AuditRecord>, Error>;
}
