//! PostgreSQL persistence adapters.
//!
//! Each adapter implements one repository port over the shared async
//! connection pool. Schema migrations are embedded in the binary and applied
//! at startup.

mod diesel_audit_repository;
mod diesel_department_repository;
mod diesel_document_repository;
mod diesel_user_repository;
mod error_mapping;
mod models;
pub mod pool;
pub mod schema;

pub use diesel_audit_repository::DieselAuditRepository;
pub use diesel_department_repository::DieselDepartmentRepository;
pub use diesel_document_repository::DieselDocumentRepository;
pub use diesel_user_repository::DieselUserRepository;
pub use pool::{DbPool, PoolConfig, PoolError};

use diesel::Connection;
use diesel::pg::PgConnection;
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};

/// Embedded migrations from the backend/migrations directory.
pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// Errors raised while applying embedded migrations.
#[derive(Debug, thiserror::Error)]
pub enum MigrationError {
    /// The database could not be reached.
    #[error("failed to connect for migrations: {0}")]
    Connect(#[from] diesel::ConnectionError),
    /// A migration failed to apply.
    #[error("failed to run migrations: {0}")]
    Apply(String),
}

/// Apply all pending embedded migrations.
///
/// Uses a dedicated synchronous connection because the Diesel migration
/// harness is blocking; call from `spawn_blocking` in async contexts.
///
/// # Errors
///
/// Returns [`MigrationError`] when the database cannot be reached or a
/// migration fails to apply.
pub fn run_pending_migrations(database_url: &str) -> Result<(), MigrationError> {
    let mut conn = PgConnection::establish(database_url)?;
    conn.run_pending_migrations(MIGRATIONS)
        .map_err(|err| MigrationError::Apply(err.to_string()))?;
    Ok(())
}

/// Build a LIKE pattern matching the term as a substring anywhere in the
/// column, with LIKE metacharacters in the term escaped.
fn like_pattern(term: &str) -> String {
    let escaped = term
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_");
    format!("%{escaped}%")
}
