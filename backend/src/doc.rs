//! OpenAPI documentation configuration.
//!
//! Defines [`ApiDoc`], the generated specification covering every REST
//! endpoint and the schemas they exchange. Swagger UI serves the document in
//! debug builds at `/docs`.

use utoipa::OpenApi;

use crate::domain::audit::AuditRecord;
use crate::domain::dashboard::DashboardCards;
use crate::domain::department::Department;
use crate::domain::document::{
    Document, DocumentDetail, DocumentListItem, DocumentOwner, DocumentStatus, LatestDocument,
};
use crate::domain::error::{Error, ErrorCode};
use crate::domain::form::{DocumentFormPayload, FieldErrors, ValidationFeedback};
use crate::domain::user::{Profile, User, UserDocumentSummary};
use crate::inbound::http::documents::PageCount;

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Docudesk API",
        description = "Document-management dashboard: filtered listings, lookups, aggregates, and document creation."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::documents::list_documents,
        crate::inbound::http::documents::count_document_pages,
        crate::inbound::http::documents::list_latest_documents,
        crate::inbound::http::documents::list_all_documents,
        crate::inbound::http::documents::fetch_document,
        crate::inbound::http::documents::create_document,
        crate::inbound::http::users::list_users,
        crate::inbound::http::users::list_user_summaries,
        crate::inbound::http::users::fetch_user,
        crate::inbound::http::users::fetch_profile,
        crate::inbound::http::departments::list_departments,
        crate::inbound::http::departments::fetch_department,
        crate::inbound::http::dashboard::card_data,
        crate::inbound::http::audit::list_audit_records,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        AuditRecord,
        DashboardCards,
        Department,
        Document,
        DocumentDetail,
        DocumentFormPayload,
        DocumentListItem,
        DocumentOwner,
        DocumentStatus,
        Error,
        ErrorCode,
        FieldErrors,
        LatestDocument,
        PageCount,
        Profile,
        User,
        UserDocumentSummary,
        ValidationFeedback,
    )),
    tags(
        (name = "documents", description = "Filtered listings, lookups, and creation"),
        (name = "users", description = "User directory and per-user document counts"),
        (name = "departments", description = "Department directory"),
        (name = "dashboard", description = "Aggregate card counts"),
        (name = "audit", description = "Audit trail"),
        (name = "health", description = "Liveness and readiness probes")
    )
)]
pub struct ApiDoc;
