//! Audit API handlers.
//!
//! ```text
//! GET /api/v1/audit
//! ```

use actix_web::{get, web};

use crate::domain::Error;
use crate::domain::audit::AuditRecord;
use crate::inbound::http::ApiResult;
use crate::inbound::http::state::HttpState;

/// Every audit record, newest first.
#[utoipa::path(
    get,
    path = "/api/v1/audit",
    responses(
        (status = 200, description = "Audit records", body = [AuditRecord]),
        (status = 500, description = "Internal server error", body = Error),
        (status = 503, description = "Database unavailable", body = Error)
    ),
    tags = ["audit"],
    operation_id = "listAuditRecords"
)]
#[get("/audit")]
pub async fn list_audit_records(
    state: web::Data<HttpState>,
) -> ApiResult<web::Json<Vec<AuditRecord>>> {
    let records = state.audit.list_audit_records().await?;
    Ok(web::Json(records))
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;
    use actix_web::{App, http::StatusCode, test as actix_test};
    use chrono::Utc;
    use serde_json::{Value, json};
    use uuid::Uuid;

    use crate::domain::ports::MockAuditQuery;
    use crate::inbound::http::test_utils::TestState;

    #[actix_web::test]
    async fn entries_pass_through_as_opaque_json() {
        let mut audit = MockAuditQuery::new();
        audit.expect_list_audit_records().returning(|| {
            Ok(vec![AuditRecord {
                id: Uuid::nil(),
                recorded_at: Utc::now(),
                entry: json!({ "action": "login", "actor": "ada@example.com" }),
            }])
        });

        let state = TestState::default().with_audit(audit).build();
        let app = actix_test::init_service(
            App::new()
                .app_data(state)
                .service(web::scope("/api/v1").service(list_audit_records)),
        )
        .await;
        let res = actix_test::call_service(
            &app,
            actix_test::TestRequest::get().uri("/api/v1/audit").to_request(),
        )
        .await;

        assert_eq!(res.status(), StatusCode::OK);
        let value: Value = actix_test::read_body_json(res).await;
        assert_eq!(value[0]["entry"]["action"], "login");
    }
}
