//! Document read queries and the creation command.
//!
//! Implements [`DocumentsQuery`] and [`DocumentsCommand`] over the repository
//! ports. Persistence failures are logged and re-signalled with fixed
//! human-readable messages; the original cause survives only in the logs.

use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::document::{
    Document, DocumentDetail, DocumentListItem, LatestDocument, NewDocument, PAGE_SIZE,
    page_count,
};
use crate::domain::form::{
    DocumentFormPayload, FieldErrors, SubmissionResult, ValidationFeedback, validate,
};
use crate::domain::ports::{
    DepartmentRepository, DocumentRepository, DocumentsCommand, DocumentsQuery, UserRepository,
};
use crate::domain::{Error, map_repository_error};

/// Number of rows returned by the latest-documents query.
const LATEST_DOCUMENTS: i64 = 5;

/// Document service backed by document, user, and department repositories.
///
/// The user and department repositories exist solely for referential checks
/// during creation.
#[derive(Clone)]
pub struct DocumentService<D, U, P> {
    documents: Arc<D>,
    users: Arc<U>,
    departments: Arc<P>,
}

impl<D, U, P> DocumentService<D, U, P> {
    /// Create a new service with the given repositories.
    pub fn new(documents: Arc<D>, users: Arc<U>, departments: Arc<P>) -> Self {
        Self {
            documents,
            users,
            departments,
        }
    }
}

#[async_trait]
impl<D, U, P> DocumentsQuery for DocumentService<D, U, P>
where
    D: DocumentRepository,
    U: UserRepository,
    P: DepartmentRepository,
{
    async fn list_documents(
        &self,
        term: &str,
        page: u32,
    ) -> Result<Vec<DocumentListItem>, Error> {
        let offset = (i64::from(page.max(1)) - 1) * i64::from(PAGE_SIZE);
        self.documents
            .list_filtered(term, i64::from(PAGE_SIZE), offset)
            .await
            .map_err(|err| map_repository_error(err, "failed to fetch documents"))
    }

    async fn count_document_pages(&self, term: &str) -> Result<u64, Error> {
        let matches = self.documents.count_filtered(term).await.map_err(|err| {
            map_repository_error(err, "failed to fetch total number of documents")
        })?;
        Ok(page_count(matches))
    }

    async fn list_latest_documents(&self) -> Result<Vec<LatestDocument>, Error> {
        self.documents
            .list_latest(LATEST_DOCUMENTS)
            .await
            .map_err(|err| map_repository_error(err, "failed to fetch the latest documents"))
    }

    async fn list_all_documents(&self) -> Result<Vec<Document>, Error> {
        self.documents
            .list_all_by_title()
            .await
            .map_err(|err| map_repository_error(err, "failed to fetch all documents"))
    }

    async fn fetch_document(&self, id: Uuid) -> Result<Option<DocumentDetail>, Error> {
        self.documents
            .find_by_id(id)
            .await
            .map_err(|err| map_repository_error(err, "failed to fetch document"))
    }
}

#[async_trait]
impl<D, U, P> DocumentsCommand for DocumentService<D, U, P>
where
    D: DocumentRepository,
    U: UserRepository,
    P: DepartmentRepository,
{
    async fn create_document(
        &self,
        payload: DocumentFormPayload,
    ) -> Result<SubmissionResult, Error> {
        let form = match validate(&payload) {
            Ok(form) => form,
            Err(errors) => {
                return Ok(SubmissionResult::Rejected(ValidationFeedback::new(errors)));
            }
        };

        // The payload parsed; the ids must still reference existing rows.
        let mut errors = FieldErrors::default();
        let user = self
            .users
            .find_by_id(form.user_id)
            .await
            .map_err(|err| map_repository_error(err, "failed to create document"))?;
        if user.is_none() {
            errors.push("user", "Unknown user.");
        }
        let department = self
            .departments
            .find_by_id(form.department_id)
            .await
            .map_err(|err| map_repository_error(err, "failed to create document"))?;
        if department.is_none() {
            errors.push("department", "Unknown department.");
        }
        if !errors.is_empty() {
            return Ok(SubmissionResult::Rejected(ValidationFeedback::new(errors)));
        }

        let document = self
            .documents
            .insert(NewDocument {
                title: form.title,
                category: form.category,
                status: form.status,
                content_ref: form.content_ref,
                user_id: form.user_id,
                department_id: form.department_id,
            })
            .await
            .map_err(|err| map_repository_error(err, "failed to create document"))?;

        Ok(SubmissionResult::Created(document))
    }
}
