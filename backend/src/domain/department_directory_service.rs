//! Department listing and lookup.

use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::department::Department;
use crate::domain::ports::{DepartmentRepository, DepartmentsQuery};
use crate::domain::{Error, map_repository_error};

/// Department directory service backed by the department repository.
#[derive(Clone)]
pub struct DepartmentDirectoryService<R> {
    departments: Arc<R>,
}

impl<R> DepartmentDirectoryService<R> {
    /// Create a new service with the given repository.
    pub fn new(departments: Arc<R>) -> Self {
        Self { departments }
    }
}

#[async_trait]
impl<R> DepartmentsQuery for DepartmentDirectoryService<R>
where
    R: DepartmentRepository,
{
    async fn list_departments(&self) -> Result<Vec<Department>, Error> {
        self.departments
            .list_ordered_by_name()
            .await
            .map_err(|err| map_repository_error(err, "failed to fetch all departments"))
    }

    async fn fetch_department(&self, id: Uuid) -> Result<Option<Department>, Error> {
        self.departments
            .find_by_id(id)
            .await
            .map_err(|err| map_repository_error(err, "failed to fetch department"))
    }
}
