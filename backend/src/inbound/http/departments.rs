//! Department API handlers.
//!
//! ```text
//! GET /api/v1/departments
//! GET /api/v1/departments/{id}
//! ```

use actix_web::{get, web};
use uuid::Uuid;

use crate::domain::Error;
use crate::domain::department::Department;
use crate::inbound::http::ApiResult;
use crate::inbound::http::state::HttpState;

/// All departments ordered by name.
#[utoipa::path(
    get,
    path = "/api/v1/departments",
    responses(
        (status = 200, description = "Departments ordered by name", body = [Department]),
        (status = 500, description = "Internal server error", body = Error),
        (status = 503, description = "Database unavailable", body = Error)
    ),
    tags = ["departments"],
    operation_id = "listDepartments"
)]
#[get("/departments")]
pub async fn list_departments(
    state: web::Data<HttpState>,
) -> ApiResult<web::Json<Vec<Department>>> {
    let departments = state.departments.list_departments().await?;
    Ok(web::Json(departments))
}

/// One department by id.
#[utoipa::path(
    get,
    path = "/api/v1/departments/{id}",
    params(("id" = Uuid, Path, description = "Department id")),
    responses(
        (status = 200, description = "Department", body = Department),
        (status = 404, description = "No such department", body = Error),
        (status = 500, description = "Internal server error", body = Error),
        (status = 503, description = "Database unavailable", body = Error)
    ),
    tags = ["departments"],
    operation_id = "fetchDepartment"
)]
#[get("/departments/{id}")]
pub async fn fetch_department(
    state: web::Data<HttpState>,
    id: web::Path<Uuid>,
) -> ApiResult<web::Json<Department>> {
    let department = state
        .departments
        .fetch_department(id.into_inner())
        .await?
        .ok_or_else(|| Error::not_found("department not found"))?;
    Ok(web::Json(department))
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;
    use actix_web::{App, http::StatusCode, test as actix_test};
    use serde_json::Value;

    use crate::domain::ports::MockDepartmentsQuery;
    use crate::inbound::http::test_utils::TestState;

    async fn call(
        state: web::Data<HttpState>,
        uri: &str,
    ) -> actix_web::dev::ServiceResponse {
        let app = actix_test::init_service(
            App::new().app_data(state).service(
                web::scope("/api/v1")
                    .service(list_departments)
                    .service(fetch_department),
            ),
        )
        .await;
        actix_test::call_service(&app, actix_test::TestRequest::get().uri(uri).to_request()).await
    }

    #[actix_web::test]
    async fn listing_returns_departments() {
        let mut departments = MockDepartmentsQuery::new();
        departments.expect_list_departments().returning(|| {
            Ok(vec![Department {
                id: Uuid::nil(),
                name: "Archives".to_owned(),
                description: "Records management".to_owned(),
            }])
        });

        let state = TestState::default().with_departments(departments).build();
        let res = call(state, "/api/v1/departments").await;
        assert_eq!(res.status(), StatusCode::OK);
        let value: Value = actix_test::read_body_json(res).await;
        assert_eq!(value[0]["name"], "Archives");
    }

    #[actix_web::test]
    async fn missing_department_maps_to_404() {
        let mut departments = MockDepartmentsQuery::new();
        departments.expect_fetch_department().returning(|_| Ok(None));

        let state = TestState::default().with_departments(departments).build();
        let res = call(state, &format!("/api/v1/departments/{}", Uuid::new_v4())).await;
        assert_eq!(res.status(), StatusCode::NOT_FOUND);
    }
}
