//! Dashboard card aggregate.
//!
//! The four counting queries run concurrently with no ordering dependency;
//! the first failing sub-query fails the whole aggregate and no partial
//! result is returned.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::dashboard::DashboardCards;
use crate::domain::document::DocumentStatus;
use crate::domain::ports::{
    AuditRepository, DashboardQuery, DocumentRepository, UserRepository,
};
use crate::domain::{Error, map_repository_error};

/// Dashboard service backed by the document, user, and audit repositories.
#[derive(Clone)]
pub struct DashboardService<D, U, A> {
    documents: Arc<D>,
    users: Arc<U>,
    audit: Arc<A>,
}

impl<D, U, A> DashboardService<D, U, A> {
    /// Create a new service with the given repositories.
    pub fn new(documents: Arc<D>, users: Arc<U>, audit: Arc<A>) -> Self {
        Self {
            documents,
            users,
            audit,
        }
    }
}

#[async_trait]
impl<D, U, A> DashboardQuery for DashboardService<D, U, A>
where
    D: DocumentRepository,
    U: UserRepository,
    A: AuditRepository,
{
    async fn card_data(&self) -> Result<DashboardCards, Error> {
        let (total_documents, total_users, total_audit_records, total_pending_documents) =
            tokio::try_join!(
                self.documents.count_all(),
                self.users.count_all(),
                self.audit.count_all(),
                self.documents.count_with_status(DocumentStatus::Pending),
            )
            .map_err(|err| map_repository_error(err, "failed to fetch card data"))?;

        Ok(DashboardCards {
            total_documents,
            total_users,
            total_audit_records,
            total_pending_documents,
        })
    }
}
