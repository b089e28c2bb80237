//! Dashboard API handlers.
//!
//! ```text
//! GET /api/v1/dashboard/cards
//! ```

use actix_web::{get, web};

use crate::domain::Error;
use crate::domain::dashboard::DashboardCards;
use crate::inbound::http::ApiResult;
use crate::inbound::http::state::HttpState;

/// The four dashboard card counts.
#[utoipa::path(
    get,
    path = "/api/v1/dashboard/cards",
    responses(
        (status = 200, description = "Card counts", body = DashboardCards),
        (status = 500, description = "Internal server error", body = Error),
        (status = 503, description = "Database unavailable", body = Error)
    ),
    tags = ["dashboard"],
    operation_id = "cardData"
)]
#[get("/dashboard/cards")]
pub async fn card_data(state: web::Data<HttpState>) -> ApiResult<web::Json<DashboardCards>> {
    let cards = state.dashboard.card_data().await?;
    Ok(web::Json(cards))
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;
    use actix_web::{App, http::StatusCode, test as actix_test};
    use serde_json::Value;

    use crate::domain::ports::MockDashboardQuery;
    use crate::inbound::http::test_utils::TestState;

    #[actix_web::test]
    async fn cards_serialise_camel_case() {
        let mut dashboard = MockDashboardQuery::new();
        dashboard.expect_card_data().returning(|| {
            Ok(DashboardCards {
                total_documents: 3,
                total_users: 2,
                total_audit_records: 7,
                total_pending_documents: 1,
            })
        });

        let state = TestState::default().with_dashboard(dashboard).build();
        let app = actix_test::init_service(
            App::new()
                .app_data(state)
                .service(web::scope("/api/v1").service(card_data)),
        )
        .await;
        let res = actix_test::call_service(
            &app,
            actix_test::TestRequest::get()
                .uri("/api/v1/dashboard/cards")
                .to_request(),
        )
        .await;

        assert_eq!(res.status(), StatusCode::OK);
        let value: Value = actix_test::read_body_json(res).await;
        assert_eq!(value["totalDocuments"], 3);
        assert_eq!(value["totalPendingDocuments"], 1);
    }
}
