//! Port for document persistence.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::document::{
    Document, DocumentDetail, DocumentListItem, DocumentStatus, LatestDocument, NewDocument,
};

use super::RepositoryError;

/// Port for document storage and retrieval.
///
/// Filter terms are matched as case-sensitive substrings (OR) across title,
/// status, category, owner name, and owner email.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DocumentRepository: Send + Sync {
    /// One page of filtered documents, newest first, enriched with owner
    /// id/name/avatar.
    async fn list_filtered(
        &self,
        term: &str,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<DocumentListItem>, RepositoryError>;

    /// Number of documents matching the filter term.
    async fn count_filtered(&self, term: &str) -> Result<u64, RepositoryError>;

    /// The most recently updated documents, condensed to id/title/owner.
    async fn list_latest(&self, limit: i64) -> Result<Vec<LatestDocument>, RepositoryError>;

    /// All documents ordered by title ascending.
    async fn list_all_by_title(&self) -> Result<Vec<Document>, RepositoryError>;

    /// One document joined with its owner (plus avatar) and department.
    ///
    /// Returns `None` when the id does not exist.
    async fn find_by_id(&self, id: Uuid) -> Result<Option<DocumentDetail>, RepositoryError>;

    /// Documents owned by any of the given users.
    async fn list_owned_by(&self, user_ids: &[Uuid]) -> Result<Vec<Document>, RepositoryError>;

    /// Total number of documents.
    async fn count_all(&self) -> Result<u64, RepositoryError>;

    /// Number of documents in the given lifecycle stage.
    async fn count_with_status(&self, status: DocumentStatus) -> Result<u64, RepositoryError>;

    /// Insert a new document and return the stored row.
    async fn insert(&self, document: NewDocument) -> Result<Document, RepositoryError>;
}
