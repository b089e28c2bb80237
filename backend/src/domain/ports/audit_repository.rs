//! Port for audit record persistence.

use async_trait::async_trait;

use crate::domain::audit::AuditRecord;

use super::RepositoryError;

/// Port for enumerating and counting audit rows.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AuditRepository: Send + Sync {
    /// Every audit row, oldest first.
    async fn list_all(&self) -> Result<Vec<AuditRecord>, RepositoryError>;

    /// Total number of audit rows.
    async fn count_all(&self) -> Result<u64, RepositoryError>;
}
