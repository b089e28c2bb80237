//! Helpers for exercising HTTP handlers against mocked ports.

use std::sync::Arc;

use actix_web::web;

use crate::domain::ports::{
    MockAuditQuery, MockDashboardQuery, MockDepartmentsQuery, MockDocumentsCommand,
    MockDocumentsQuery, MockUsersQuery,
};
use crate::inbound::http::state::HttpState;

/// Builder assembling an [`HttpState`] from mocks, defaulting every port to
/// a mock with no expectations.
#[derive(Default)]
pub(crate) struct TestState {
    documents: MockDocumentsQuery,
    documents_command: MockDocumentsCommand,
    users: MockUsersQuery,
    departments: MockDepartmentsQuery,
    dashboard: MockDashboardQuery,
    audit: MockAuditQuery,
}

impl TestState {
    pub(crate) fn with_documents(mut self, documents: MockDocumentsQuery) -> Self {
        self.documents = documents;
        self
    }

    pub(crate) fn with_documents_command(mut self, command: MockDocumentsCommand) -> Self {
        self.documents_command = command;
        self
    }

    pub(crate) fn with_users(mut self, users: MockUsersQuery) -> Self {
        self.users = users;
        self
    }

    pub(crate) fn with_departments(mut self, departments: MockDepartmentsQuery) -> Self {
        self.departments = departments;
        self
    }

    pub(crate) fn with_dashboard(mut self, dashboard: MockDashboardQuery) -> Self {
        self.dashboard = dashboard;
        self
    }

    pub(crate) fn with_audit(mut self, audit: MockAuditQuery) -> Self {
        self.audit = audit;
        self
    }

    pub(crate) fn build(self) -> web::Data<HttpState> {
        web::Data::new(HttpState {
            documents: Arc::new(self.documents),
            documents_command: Arc::new(self.documents_command),
            users: Arc::new(self.users),
            departments: Arc::new(self.departments),
            dashboard: Arc::new(self.dashboard),
            audit: Arc::new(self.audit),
        })
    }
}
