//! Audit record enumeration.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::audit::AuditRecord;
use crate::domain::ports::{AuditQuery, AuditRepository};
use crate::domain::{Error, map_repository_error};

/// Audit trail service backed by the audit repository.
#[derive(Clone)]
pub struct AuditTrailService<R> {
    audit: Arc<R>,
}

impl<R> AuditTrailService<R> {
    /// Create a new service with the given repository.
    pub fn new(audit: Arc<R>) -> Self {
        Self { audit }
    }
}

#[async_trait]
impl<R> AuditQuery for AuditTrailService<R>
where
    R: AuditRepository,
{
    async fn list_audit_records(&self) -> Result<Vec<AuditRecord>, Error> {
        self.audit
            .list_all()
            .await
            .map_err(|err| map_repository_error(err, "failed to fetch audit data"))
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;
    use crate::domain::ErrorCode;
    use crate::domain::ports::{MockAuditRepository, RepositoryError};

    #[tokio::test]
    async fn listing_keeps_fixed_message_on_failure() {
        let mut audit = MockAuditRepository::new();
        audit
            .expect_list_all()
            .returning(|| Err(RepositoryError::connection("refused")));

        let service = AuditTrailService::new(Arc::new(audit));
        let err = service
            .list_audit_records()
            .await
            .expect_err("listing should fail");
        assert_eq!(err.code(), ErrorCode::ServiceUnavailable);
        assert_eq!(err.message(), "failed to fetch audit data");
    }
}
