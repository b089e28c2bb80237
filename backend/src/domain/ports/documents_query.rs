//! Driving port for document read queries.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::Error;
use crate::domain::document::{Document, DocumentDetail, DocumentListItem, LatestDocument};

/// Read-side document operations exposed to inbound adapters.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DocumentsQuery: Send + Sync {
    /// One page (at most six rows) of filtered documents, newest first.
    ///
    /// `page` is 1-based; values below 1 are clamped to the first page.
    async fn list_documents(
        &self,
        term: &str,
        page: u32,
    ) -> Result<Vec<DocumentListItem>, Error>;

    /// Total page count for the filter term: `ceil(matches / 6)`.
    async fn count_document_pages(&self, term: &str) -> Result<u64, Error>;

    /// The five most recently updated documents.
    async fn list_latest_documents(&self) -> Result<Vec<LatestDocument>, Error>;

    /// All documents ordered by title.
    async fn list_all_documents(&self) -> Result<Vec<Document>, Error>;

    /// One document with owner and department; `None` when absent.
    async fn fetch_document(&self, id: Uuid) -> Result<Option<DocumentDetail>, Error>;
}
