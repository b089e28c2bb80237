//! Diesel-backed department repository.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use uuid::Uuid;

use crate::domain::department::Department;
use crate::domain::ports::{DepartmentRepository, RepositoryError};

use super::error_mapping::{map_diesel_error, map_pool_error};
use super::models::DepartmentRow;
use super::pool::DbPool;
use super::schema::departments;

/// Department repository backed by PostgreSQL.
#[derive(Clone)]
pub struct DieselDepartmentRepository {
    pool: DbPool,
}

impl DieselDepartmentRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl DepartmentRepository for DieselDepartmentRepository {
    async fn list_ordered_by_name(&self) -> Result<Vec<Department>, RepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows: Vec<DepartmentRow> = departments::table
            .order(departments::name.asc())
            .select(DepartmentRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(rows.into_iter().map(Department::from).collect())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Department>, RepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row: Option<DepartmentRow> = departments::table
            .find(id)
            .select(DepartmentRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        Ok(row.map(Department::from))
    }
}
