//! Shared HTTP adapter state.
//!
//! Handlers receive this state via `actix_web::web::Data`, so they depend
//! only on the domain's driving ports and stay testable with mocks.

use std::sync::Arc;

use crate::domain::ports::{
    AuditQuery, DashboardQuery, DepartmentsQuery, DocumentsCommand, DocumentsQuery, UsersQuery,
};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub documents: Arc<dyn DocumentsQuery>,
    pub documents_command: Arc<dyn DocumentsCommand>,
    pub users: Arc<dyn UsersQuery>,
    pub departments: Arc<dyn DepartmentsQuery>,
    pub dashboard: Arc<dyn DashboardQuery>,
    pub audit: Arc<dyn AuditQuery>,
}
