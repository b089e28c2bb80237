//! Driving port for department read queries.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::Error;
use crate::domain::department::Department;

/// Read-side department operations exposed to inbound adapters.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DepartmentsQuery: Send + Sync {
    /// All departments ordered by name; populates the creation form's selector.
    async fn list_departments(&self) -> Result<Vec<Department>, Error>;

    /// One department by id; `None` when absent.
    async fn fetch_department(&self, id: Uuid) -> Result<Option<Department>, Error>;
}
