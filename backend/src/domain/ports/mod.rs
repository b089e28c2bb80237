//! Domain ports for the hexagonal boundary.
//!
//! Driven ports (repositories) are implemented by persistence adapters and
//! report [`RepositoryError`]; driving ports (queries and the creation
//! command) are implemented by domain services and report the domain
//! [`Error`](crate::domain::Error).

mod audit_query;
mod audit_repository;
mod dashboard_query;
mod departments_query;
mod department_repository;
mod documents_command;
mod documents_query;
mod document_repository;
mod user_repository;
mod users_query;

pub use audit_query::AuditQuery;
#[cfg(test)]
pub use audit_query::MockAuditQuery;
pub use audit_repository::AuditRepository;
#[cfg(test)]
pub use audit_repository::MockAuditRepository;
pub use dashboard_query::DashboardQuery;
#[cfg(test)]
pub use dashboard_query::MockDashboardQuery;
pub use department_repository::DepartmentRepository;
#[cfg(test)]
pub use department_repository::MockDepartmentRepository;
pub use departments_query::DepartmentsQuery;
#[cfg(test)]
pub use departments_query::MockDepartmentsQuery;
pub use document_repository::DocumentRepository;
#[cfg(test)]
pub use document_repository::MockDocumentRepository;
pub use documents_command::DocumentsCommand;
#[cfg(test)]
pub use documents_command::MockDocumentsCommand;
pub use documents_query::DocumentsQuery;
#[cfg(test)]
pub use documents_query::MockDocumentsQuery;
pub use user_repository::UserRepository;
#[cfg(test)]
pub use user_repository::MockUserRepository;
pub use users_query::UsersQuery;
#[cfg(test)]
pub use users_query::MockUsersQuery;

/// Failures raised by repository adapters.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RepositoryError {
    /// The backing store could not be reached.
    #[error("repository connection failed: {message}")]
    Connection { message: String },
    /// A query or mutation failed during execution.
    #[error("repository query failed: {message}")]
    Query { message: String },
}

impl RepositoryError {
    /// Create a connection error with the given message.
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection {
            message: message.into(),
        }
    }

    /// Create a query error with the given message.
    pub fn query(message: impl Into<String>) -> Self {
        Self::Query {
            message: message.into(),
        }
    }
}
