//! Server construction and wiring.
//!
//! Assembles the Diesel-backed repositories into domain services, the
//! services into the shared HTTP state, and the state into a running Actix
//! server. Swagger UI is mounted in debug builds only.

mod config;

pub use config::{ServerConfig, ServerOptions};

use std::sync::Arc;

use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};

#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

#[cfg(debug_assertions)]
use crate::doc::ApiDoc;
use crate::domain::ports::{
    AuditQuery, DashboardQuery, DepartmentsQuery, DocumentsCommand, DocumentsQuery, UsersQuery,
};
use crate::domain::{
    AuditTrailService, DashboardService, DepartmentDirectoryService, DocumentService,
    UserDirectoryService,
};
use crate::inbound::http::health::{HealthState, live, ready};
use crate::inbound::http::{HttpState, configure_api};
use crate::middleware::Trace;
use crate::outbound::persistence::{
    DbPool, DieselAuditRepository, DieselDepartmentRepository, DieselDocumentRepository,
    DieselUserRepository,
};

/// Build the shared HTTP state from Diesel-backed adapters.
#[must_use]
pub fn build_http_state(pool: &DbPool) -> web::Data<HttpState> {
    let documents = Arc::new(DieselDocumentRepository::new(pool.clone()));
    let users = Arc::new(DieselUserRepository::new(pool.clone()));
    let departments = Arc::new(DieselDepartmentRepository::new(pool.clone()));
    let audit = Arc::new(DieselAuditRepository::new(pool.clone()));

    let document_service = Arc::new(DocumentService::new(
        documents.clone(),
        users.clone(),
        departments.clone(),
    ));
    let user_service = Arc::new(UserDirectoryService::new(users.clone(), documents.clone()));
    let department_service = Arc::new(DepartmentDirectoryService::new(departments));
    let dashboard_service = Arc::new(DashboardService::new(documents, users, audit.clone()));
    let audit_service = Arc::new(AuditTrailService::new(audit));

    web::Data::new(HttpState {
        documents: document_service.clone() as Arc<dyn DocumentsQuery>,
        documents_command: document_service as Arc<dyn DocumentsCommand>,
        users: user_service as Arc<dyn UsersQuery>,
        departments: department_service as Arc<dyn DepartmentsQuery>,
        dashboard: dashboard_service as Arc<dyn DashboardQuery>,
        audit: audit_service as Arc<dyn AuditQuery>,
    })
}

fn build_app(
    health_state: web::Data<HealthState>,
    http_state: web::Data<HttpState>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let app = App::new()
        .app_data(health_state)
        .app_data(http_state)
        .wrap(Trace)
        .configure(configure_api)
        .service(ready)
        .service(live);

    #[cfg(debug_assertions)]
    let app = app.service(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()));

    app
}

/// Construct an Actix HTTP server bound to the configured address.
///
/// Marks the health state ready once the listener is bound; the returned
/// [`Server`] must be awaited to drive it.
///
/// # Errors
///
/// Propagates [`std::io::Error`] when binding the socket fails.
pub fn create_server(
    health_state: web::Data<HealthState>,
    config: ServerConfig,
) -> std::io::Result<Server> {
    let server_health_state = health_state.clone();
    let http_state = build_http_state(&config.db_pool);

    let server = HttpServer::new(move || {
        build_app(server_health_state.clone(), http_state.clone())
    })
    .bind(config.bind_addr)?
    .run();

    health_state.mark_ready();
    Ok(server)
}
