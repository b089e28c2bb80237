//! Port for department persistence.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::department::Department;

use super::RepositoryError;

/// Port for department storage and retrieval.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DepartmentRepository: Send + Sync {
    /// All departments ordered by name ascending.
    async fn list_ordered_by_name(&self) -> Result<Vec<Department>, RepositoryError>;

    /// One department by id; `None` when the id does not exist.
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Department>, RepositoryError>;
}
