//! Domain entities, ports, and services.
//!
//! Purpose: define strongly typed records for the dashboard (documents,
//! users, profiles, departments, audit rows), the ports adapters plug into,
//! and the services that implement the read queries and the creation command
//! over those ports.

pub mod audit;
pub mod audit_trail_service;
pub mod dashboard;
pub mod dashboard_service;
pub mod department;
pub mod department_directory_service;
pub mod document;
pub mod document_service;
pub mod error;
pub mod form;
pub mod ports;
pub mod user;
pub mod user_directory_service;

pub use self::audit_trail_service::AuditTrailService;
pub use self::dashboard_service::DashboardService;
pub use self::department_directory_service::DepartmentDirectoryService;
pub use self::document_service::DocumentService;
pub use self::error::{Error, ErrorCode};
pub use self::user_directory_service::UserDirectoryService;

use self::ports::RepositoryError;

/// Convenient API result alias.
pub type ApiResult<T> = Result<T, Error>;

/// Translate a repository failure into the domain error for one operation.
///
/// The original cause is logged; callers see only the fixed message.
pub(crate) fn map_repository_error(error: RepositoryError, message: &str) -> Error {
    tracing::error!(error = %error, "database error");
    match error {
        RepositoryError::Connection { .. } => Error::service_unavailable(message),
        RepositoryError::Query { .. } => Error::internal(message),
    }
}
