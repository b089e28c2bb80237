//! Document API handlers.
//!
//! ```text
//! GET /api/v1/documents?query=report&page=2
//! GET /api/v1/documents/pages?query=report
//! GET /api/v1/documents/latest
//! GET /api/v1/documents/all
//! GET /api/v1/documents/{id}
//! POST /api/v1/documents {"name":"...","category":"...",...}
//! ```

use actix_web::{HttpResponse, get, post, web};
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

use crate::domain::Error;
use crate::domain::document::{Document, DocumentDetail, DocumentListItem, LatestDocument};
use crate::domain::form::{DocumentFormPayload, SubmissionResult, ValidationFeedback};
use crate::inbound::http::ApiResult;
use crate::inbound::http::state::HttpState;

/// Query string for the filtered, paginated listing.
#[derive(Debug, Default, Deserialize, IntoParams)]
pub struct ListDocumentsQuery {
    /// Filter term; empty or absent matches everything.
    pub query: Option<String>,
    /// 1-based page number; defaults to the first page.
    pub page: Option<u32>,
}

/// Query string for endpoints that filter without paginating.
#[derive(Debug, Default, Deserialize, IntoParams)]
pub struct FilterQuery {
    pub query: Option<String>,
}

/// Total page count for a filter term.
#[derive(Debug, serde::Serialize, ToSchema)]
pub struct PageCount {
    pub pages: u64,
}

/// List one page of filtered documents, newest first.
#[utoipa::path(
    get,
    path = "/api/v1/documents",
    params(ListDocumentsQuery),
    responses(
        (status = 200, description = "One page of documents", body = [DocumentListItem]),
        (status = 500, description = "Internal server error", body = Error),
        (status = 503, description = "Database unavailable", body = Error)
    ),
    tags = ["documents"],
    operation_id = "listDocuments"
)]
#[get("/documents")]
pub async fn list_documents(
    state: web::Data<HttpState>,
    query: web::Query<ListDocumentsQuery>,
) -> ApiResult<web::Json<Vec<DocumentListItem>>> {
    let term = query.query.as_deref().unwrap_or_default();
    let page = query.page.unwrap_or(1);
    let items = state.documents.list_documents(term, page).await?;
    Ok(web::Json(items))
}

/// Total page count for a filter term.
#[utoipa::path(
    get,
    path = "/api/v1/documents/pages",
    params(FilterQuery),
    responses(
        (status = 200, description = "Page count", body = PageCount),
        (status = 500, description = "Internal server error", body = Error),
        (status = 503, description = "Database unavailable", body = Error)
    ),
    tags = ["documents"],
    operation_id = "countDocumentPages"
)]
#[get("/documents/pages")]
pub async fn count_document_pages(
    state: web::Data<HttpState>,
    query: web::Query<FilterQuery>,
) -> ApiResult<web::Json<PageCount>> {
    let term = query.query.as_deref().unwrap_or_default();
    let pages = state.documents.count_document_pages(term).await?;
    Ok(web::Json(PageCount { pages }))
}

/// The five most recently updated documents.
#[utoipa::path(
    get,
    path = "/api/v1/documents/latest",
    responses(
        (status = 200, description = "Latest documents", body = [LatestDocument]),
        (status = 500, description = "Internal server error", body = Error),
        (status = 503, description = "Database unavailable", body = Error)
    ),
    tags = ["documents"],
    operation_id = "listLatestDocuments"
)]
#[get("/documents/latest")]
pub async fn list_latest_documents(
    state: web::Data<HttpState>,
) -> ApiResult<web::Json<Vec<LatestDocument>>> {
    let items = state.documents.list_latest_documents().await?;
    Ok(web::Json(items))
}

/// Every document ordered by title.
#[utoipa::path(
    get,
    path = "/api/v1/documents/all",
    responses(
        (status = 200, description = "All documents", body = [Document]),
        (status = 500, description = "Internal server error", body = Error),
        (status = 503, description = "Database unavailable", body = Error)
    ),
    tags = ["documents"],
    operation_id = "listAllDocuments"
)]
#[get("/documents/all")]
pub async fn list_all_documents(
    state: web::Data<HttpState>,
) -> ApiResult<web::Json<Vec<Document>>> {
    let items = state.documents.list_all_documents().await?;
    Ok(web::Json(items))
}

/// One document with its owner and department.
#[utoipa::path(
    get,
    path = "/api/v1/documents/{id}",
    params(("id" = Uuid, Path, description = "Document id")),
    responses(
        (status = 200, description = "Document detail", body = DocumentDetail),
        (status = 404, description = "No such document", body = Error),
        (status = 500, description = "Internal server error", body = Error),
        (status = 503, description = "Database unavailable", body = Error)
    ),
    tags = ["documents"],
    operation_id = "fetchDocument"
)]
#[get("/documents/{id}")]
pub async fn fetch_document(
    state: web::Data<HttpState>,
    id: web::Path<Uuid>,
) -> ApiResult<web::Json<DocumentDetail>> {
    let detail = state
        .documents
        .fetch_document(id.into_inner())
        .await?
        .ok_or_else(|| Error::not_found("document not found"))?;
    Ok(web::Json(detail))
}

/// Create a document from a form payload.
///
/// Validation failures respond 422 with the `{message, errors}` envelope;
/// nothing is written in that case.
#[utoipa::path(
    post,
    path = "/api/v1/documents",
    request_body = DocumentFormPayload,
    responses(
        (status = 201, description = "Document created", body = Document),
        (status = 422, description = "Validation rejected the payload", body = ValidationFeedback),
        (status = 500, description = "Internal server error", body = Error),
        (status = 503, description = "Database unavailable", body = Error)
    ),
    tags = ["documents"],
    operation_id = "createDocument"
)]
#[post("/documents")]
pub async fn create_document(
    state: web::Data<HttpState>,
    payload: web::Json<DocumentFormPayload>,
) -> ApiResult<HttpResponse> {
    let outcome = state
        .documents_command
        .create_document(payload.into_inner())
        .await?;
    Ok(match outcome {
        SubmissionResult::Created(document) => HttpResponse::Created().json(document),
        SubmissionResult::Rejected(feedback) => HttpResponse::UnprocessableEntity().json(feedback),
    })
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;
    use actix_web::{App, http::StatusCode, test as actix_test};
    use chrono::Utc;
    use serde_json::Value;

    use crate::domain::document::{DEFAULT_AVATAR, DocumentOwner, DocumentStatus};
    use crate::domain::form::{FieldErrors, ValidationFeedback};
    use crate::domain::ports::{MockDocumentsCommand, MockDocumentsQuery};
    use crate::inbound::http::test_utils::TestState;

    fn list_item() -> DocumentListItem {
        DocumentListItem {
            id: Uuid::new_v4(),
            title: "Budget report".to_owned(),
            created_at: Utc::now(),
            category: "Reports".to_owned(),
            status: DocumentStatus::Pending,
            owner: DocumentOwner {
                user_id: Uuid::new_v4(),
                name: "Ada".to_owned(),
                avatar_url: DEFAULT_AVATAR.to_owned(),
            },
        }
    }

    fn document() -> Document {
        Document {
            id: Uuid::new_v4(),
            title: "Budget report".to_owned(),
            category: "Reports".to_owned(),
            status: DocumentStatus::Pending,
            content_ref: "budget.pdf".to_owned(),
            user_id: Uuid::new_v4(),
            department_id: Uuid::new_v4(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    async fn call(
        state: web::Data<HttpState>,
        request: actix_test::TestRequest,
    ) -> actix_web::dev::ServiceResponse {
        let app = actix_test::init_service(
            App::new().app_data(state).service(
                web::scope("/api/v1")
                    .service(list_documents)
                    .service(count_document_pages)
                    .service(list_latest_documents)
                    .service(list_all_documents)
                    .service(fetch_document)
                    .service(create_document),
            ),
        )
        .await;
        actix_test::call_service(&app, request.to_request()).await
    }

    #[actix_web::test]
    async fn listing_forwards_term_and_page() {
        let mut documents = MockDocumentsQuery::new();
        documents
            .expect_list_documents()
            .withf(|term, page| term == "report" && *page == 2)
            .returning(|_, _| Ok(vec![list_item()]));

        let state = TestState::default().with_documents(documents).build();
        let res = call(
            state,
            actix_test::TestRequest::get().uri("/api/v1/documents?query=report&page=2"),
        )
        .await;

        assert_eq!(res.status(), StatusCode::OK);
        let value: Value = actix_test::read_body_json(res).await;
        assert_eq!(value.as_array().map(Vec::len), Some(1));
        assert_eq!(value[0]["avatarUrl"], "/");
    }

    #[actix_web::test]
    async fn listing_defaults_to_first_page_and_empty_term() {
        let mut documents = MockDocumentsQuery::new();
        documents
            .expect_list_documents()
            .withf(|term, page| term.is_empty() && *page == 1)
            .returning(|_, _| Ok(Vec::new()));

        let state = TestState::default().with_documents(documents).build();
        let res = call(state, actix_test::TestRequest::get().uri("/api/v1/documents")).await;
        assert_eq!(res.status(), StatusCode::OK);
    }

    #[actix_web::test]
    async fn page_count_wraps_the_number() {
        let mut documents = MockDocumentsQuery::new();
        documents
            .expect_count_document_pages()
            .returning(|_| Ok(3));

        let state = TestState::default().with_documents(documents).build();
        let res = call(
            state,
            actix_test::TestRequest::get().uri("/api/v1/documents/pages?query=x"),
        )
        .await;

        assert_eq!(res.status(), StatusCode::OK);
        let value: Value = actix_test::read_body_json(res).await;
        assert_eq!(value, serde_json::json!({ "pages": 3 }));
    }

    #[actix_web::test]
    async fn latest_route_is_not_captured_by_the_id_route() {
        let mut documents = MockDocumentsQuery::new();
        documents
            .expect_list_latest_documents()
            .returning(|| Ok(Vec::new()));

        let state = TestState::default().with_documents(documents).build();
        let res = call(
            state,
            actix_test::TestRequest::get().uri("/api/v1/documents/latest"),
        )
        .await;
        assert_eq!(res.status(), StatusCode::OK);
    }

    #[actix_web::test]
    async fn missing_document_maps_to_404() {
        let mut documents = MockDocumentsQuery::new();
        documents.expect_fetch_document().returning(|_| Ok(None));

        let state = TestState::default().with_documents(documents).build();
        let res = call(
            state,
            actix_test::TestRequest::get().uri(&format!("/api/v1/documents/{}", Uuid::new_v4())),
        )
        .await;

        assert_eq!(res.status(), StatusCode::NOT_FOUND);
        let value: Value = actix_test::read_body_json(res).await;
        assert_eq!(value["code"], "not_found");
    }

    #[actix_web::test]
    async fn unavailable_database_maps_to_503() {
        let mut documents = MockDocumentsQuery::new();
        documents
            .expect_list_documents()
            .returning(|_, _| Err(Error::service_unavailable("failed to fetch documents")));

        let state = TestState::default().with_documents(documents).build();
        let res = call(state, actix_test::TestRequest::get().uri("/api/v1/documents")).await;

        assert_eq!(res.status(), StatusCode::SERVICE_UNAVAILABLE);
        let value: Value = actix_test::read_body_json(res).await;
        assert_eq!(value["message"], "failed to fetch documents");
    }

    #[actix_web::test]
    async fn creation_returns_201_with_the_document() {
        let created = document();
        let response_doc = created.clone();
        let mut command = MockDocumentsCommand::new();
        command
            .expect_create_document()
            .returning(move |_| Ok(SubmissionResult::Created(response_doc.clone())));

        let state = TestState::default().with_documents_command(command).build();
        let res = call(
            state,
            actix_test::TestRequest::post()
                .uri("/api/v1/documents")
                .set_json(serde_json::json!({
                    "name": "Budget report",
                    "category": "Reports",
                    "department": Uuid::nil(),
                    "status": "pending",
                    "content": "budget.pdf",
                    "user": Uuid::nil(),
                })),
        )
        .await;

        assert_eq!(res.status(), StatusCode::CREATED);
        let value: Value = actix_test::read_body_json(res).await;
        assert_eq!(value["id"], created.id.to_string());
    }

    #[actix_web::test]
    async fn rejected_creation_returns_422_with_field_errors() {
        let mut errors = FieldErrors::default();
        errors.push("name", "Please enter a title.");
        let feedback = ValidationFeedback::new(errors);
        let mut command = MockDocumentsCommand::new();
        command
            .expect_create_document()
            .returning(move |_| Ok(SubmissionResult::Rejected(feedback.clone())));

        let state = TestState::default().with_documents_command(command).build();
        let res = call(
            state,
            actix_test::TestRequest::post()
                .uri("/api/v1/documents")
                .set_json(serde_json::json!({})),
        )
        .await;

        assert_eq!(res.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let value: Value = actix_test::read_body_json(res).await;
        assert_eq!(value["errors"]["name"][0], "Please enter a title.");
    }
}
