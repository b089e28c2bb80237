//! Driving port for the document creation mutation.

use async_trait::async_trait;

use crate::domain::Error;
use crate::domain::form::{DocumentFormPayload, SubmissionResult};

/// Write-side document operations exposed to inbound adapters.
///
/// Validation failures are part of the success value
/// ([`SubmissionResult::Rejected`]); the error channel is reserved for
/// persistence faults.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DocumentsCommand: Send + Sync {
    /// Validate a form payload and, when it passes, insert the document.
    async fn create_document(
        &self,
        payload: DocumentFormPayload,
    ) -> Result<SubmissionResult, Error>;
}
