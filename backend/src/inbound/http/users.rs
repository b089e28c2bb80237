//! User API handlers.
//!
//! ```text
//! GET /api/v1/users
//! GET /api/v1/users/summaries?query=ada
//! GET /api/v1/users/{id}
//! GET /api/v1/users/{id}/profile
//! ```
//!
//! `/users/summaries` must be registered before `/users/{id}` so the literal
//! segment is not captured as an id.

use actix_web::{get, web};
use uuid::Uuid;

use crate::domain::Error;
use crate::domain::user::{Profile, User, UserDocumentSummary};
use crate::inbound::http::ApiResult;
use crate::inbound::http::documents::FilterQuery;
use crate::inbound::http::state::HttpState;

/// All users ordered by name.
#[utoipa::path(
    get,
    path = "/api/v1/users",
    responses(
        (status = 200, description = "Users ordered by name", body = [User]),
        (status = 500, description = "Internal server error", body = Error),
        (status = 503, description = "Database unavailable", body = Error)
    ),
    tags = ["users"],
    operation_id = "listUsers"
)]
#[get("/users")]
pub async fn list_users(state: web::Data<HttpState>) -> ApiResult<web::Json<Vec<User>>> {
    let users = state.users.list_users().await?;
    Ok(web::Json(users))
}

/// Filtered users with per-status document counts.
#[utoipa::path(
    get,
    path = "/api/v1/users/summaries",
    params(FilterQuery),
    responses(
        (status = 200, description = "User summaries", body = [UserDocumentSummary]),
        (status = 500, description = "Internal server error", body = Error),
        (status = 503, description = "Database unavailable", body = Error)
    ),
    tags = ["users"],
    operation_id = "listUserSummaries"
)]
#[get("/users/summaries")]
pub async fn list_user_summaries(
    state: web::Data<HttpState>,
    query: web::Query<FilterQuery>,
) -> ApiResult<web::Json<Vec<UserDocumentSummary>>> {
    let term = query.query.as_deref().unwrap_or_default();
    let summaries = state.users.list_user_summaries(term).await?;
    Ok(web::Json(summaries))
}

/// One user by id.
#[utoipa::path(
    get,
    path = "/api/v1/users/{id}",
    params(("id" = Uuid, Path, description = "User id")),
    responses(
        (status = 200, description = "User", body = User),
        (status = 404, description = "No such user", body = Error),
        (status = 500, description = "Internal server error", body = Error),
        (status = 503, description = "Database unavailable", body = Error)
    ),
    tags = ["users"],
    operation_id = "fetchUser"
)]
#[get("/users/{id}")]
pub async fn fetch_user(
    state: web::Data<HttpState>,
    id: web::Path<Uuid>,
) -> ApiResult<web::Json<User>> {
    let user = state
        .users
        .fetch_user(id.into_inner())
        .await?
        .ok_or_else(|| Error::not_found("user not found"))?;
    Ok(web::Json(user))
}

/// A user's profile record.
#[utoipa::path(
    get,
    path = "/api/v1/users/{id}/profile",
    params(("id" = Uuid, Path, description = "User id")),
    responses(
        (status = 200, description = "Profile", body = Profile),
        (status = 404, description = "The user has no profile", body = Error),
        (status = 500, description = "Internal server error", body = Error),
        (status = 503, description = "Database unavailable", body = Error)
    ),
    tags = ["users"],
    operation_id = "fetchProfile"
)]
#[get("/users/{id}/profile")]
pub async fn fetch_profile(
    state: web::Data<HttpState>,
    id: web::Path<Uuid>,
) -> ApiResult<web::Json<Profile>> {
    let profile = state
        .users
        .fetch_profile(id.into_inner())
        .await?
        .ok_or_else(|| Error::not_found("profile not found"))?;
    Ok(web::Json(profile))
}
