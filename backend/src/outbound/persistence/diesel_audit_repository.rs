//! Diesel-backed audit record repository.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::audit::AuditRecord;
use crate::domain::ports::{AuditRepository, RepositoryError};

use super::error_mapping::{map_diesel_error, map_pool_error};
use super::models::AuditRecordRow;
use super::pool::DbPool;
use super::schema::audit_records;

/// Audit record repository backed by PostgreSQL.
#[derive(Clone)]
pub struct DieselAuditRepository {
    pool: DbPool,
}

impl DieselAuditRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AuditRepository for DieselAuditRepository {
    async fn list_all(&self) -> Result<Vec<AuditRecord>, RepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows: Vec<AuditRecordRow> = audit_records::table
            .order(audit_records::recorded_at.desc())
            .select(AuditRecordRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(rows.into_iter().map(AuditRecord::from).collect())
    }

    async fn count_all(&self) -> Result<u64, RepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let count: i64 = audit_records::table
            .count()
            .get_result(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(u64::try_from(count).unwrap_or_default())
    }
}
