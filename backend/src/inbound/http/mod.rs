//! HTTP adapter: handlers, shared state, and error mapping.
//!
//! All API routes live under the `/api/v1` scope; health probes sit at the
//! root so orchestrators can reach them without the API prefix.

pub mod audit;
pub mod dashboard;
pub mod departments;
pub mod documents;
pub mod error;
pub mod health;
pub mod state;
#[cfg(test)]
pub(crate) mod test_utils;
pub mod users;

pub use error::ApiResult;
pub use state::HttpState;

use actix_web::web;

/// Register the `/api/v1` routes.
///
/// Literal segments (`/documents/pages`, `/users/summaries`, ...) are
/// registered before their sibling `{id}` routes so they are matched first.
pub fn configure_api(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1")
            .service(documents::count_document_pages)
            .service(documents::list_latest_documents)
            .service(documents::list_all_documents)
            .service(documents::list_documents)
            .service(documents::create_document)
            .service(documents::fetch_document)
            .service(users::list_user_summaries)
            .service(users::list_users)
            .service(users::fetch_profile)
            .service(users::fetch_user)
            .service(departments::list_departments)
            .service(departments::fetch_department)
            .service(dashboard::card_data)
            .service(audit::list_audit_records),
    );
}
