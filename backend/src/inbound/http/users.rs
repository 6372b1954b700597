//! User HTTP handlers.
//!
//! ```text
//! POST   /api/v1/users
//! GET    /api/v1/users?active=true
//! GET    /api/v1/users/{id}
//! PUT    /api/v1/users/{id}
//! DELETE /api/v1/users/{id}
//! POST   /api/v1/users/{id}/activate
//! DELETE /api/v1/users/{id}/permanent
//! ```

use actix_web::{HttpResponse, delete, get, post, put, web};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::domain::ports::{UpdateUserRequest, UserListFilter};
use crate::domain::{User, UserDetails};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{FieldName, require};

const FIRST_NAME: FieldName = FieldName::new("firstName");
const LAST_NAME: FieldName = FieldName::new("lastName");
const EMAIL: FieldName = FieldName::new("email");
const AGE: FieldName = FieldName::new("age");

/// Request payload for creating or updating a user.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserRequest {
    #[schema(example = "Ann")]
    pub first_name: Option<String>,
    #[schema(example = "Lee")]
    pub last_name: Option<String>,
    #[schema(example = "ann@x.com")]
    pub email: Option<String>,
    #[schema(example = 30)]
    pub age: Option<i32>,
}

impl TryFrom<UserRequest> for UserDetails {
    type Error = crate::domain::Error;

    fn try_from(value: UserRequest) -> Result<Self, Self::Error> {
        Ok(Self {
            first_name: require(value.first_name, FIRST_NAME)?,
            last_name: require(value.last_name, LAST_NAME)?,
            email: require(value.email, EMAIL)?,
            age: require(value.age, AGE)?,
        })
    }
}

/// User representation returned to clients.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    #[schema(example = "3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    #[schema(example = "Ann Lee")]
    pub full_name: String,
    pub email: String,
    pub age: u8,
    pub active: bool,
    pub created_at: String,
    pub updated_at: String,
}

impl From<User> for UserResponse {
    fn from(value: User) -> Self {
        Self {
            id: value.id().to_string(),
            first_name: value.first_name().to_owned(),
            last_name: value.last_name().to_owned(),
            full_name: value.full_name(),
            email: value.email().to_string(),
            age: value.age(),
            active: value.is_active(),
            created_at: value.created_at().to_rfc3339(),
            updated_at: value.updated_at().to_rfc3339(),
        }
    }
}

/// Query string accepted by the user listing.
#[derive(Debug, Default, Deserialize, IntoParams)]
pub struct ListUsersQuery {
    /// When `true`, deactivated users are omitted.
    pub active: Option<bool>,
}

/// Register a new user.
#[utoipa::path(
    post,
    path = "/api/v1/users",
    request_body = UserRequest,
    responses(
        (status = 201, description = "User created", body = UserResponse),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 409, description = "Email already registered", body = ErrorSchema),
        (status = 503, description = "Service unavailable", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "createUser"
)]
#[post("/users")]
pub async fn create_user(
    state: web::Data<HttpState>,
    payload: web::Json<UserRequest>,
) -> ApiResult<HttpResponse> {
    let details = UserDetails::try_from(payload.into_inner())?;
    let user = state.users.create(details).await?;
    Ok(HttpResponse::Created().json(UserResponse::from(user)))
}

/// List users, optionally only the active ones.
#[utoipa::path(
    get,
    path = "/api/v1/users",
    params(ListUsersQuery),
    responses(
        (status = 200, description = "Users", body = [UserResponse]),
        (status = 503, description = "Service unavailable", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "listUsers"
)]
#[get("/users")]
pub async fn list_users(
    state: web::Data<HttpState>,
    query: web::Query<ListUsersQuery>,
) -> ApiResult<web::Json<Vec<UserResponse>>> {
    let filter = UserListFilter {
        active_only: query.active.unwrap_or(false),
    };
    let users = state.users_query.list(filter).await?;
    Ok(web::Json(users.into_iter().map(UserResponse::from).collect()))
}

/// Fetch one user, including deactivated ones.
#[utoipa::path(
    get,
    path = "/api/v1/users/{id}",
    params(("id" = String, Path, description = "User identifier")),
    responses(
        (status = 200, description = "User", body = UserResponse),
        (status = 400, description = "Malformed identifier", body = ErrorSchema),
        (status = 404, description = "Not found", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "getUser"
)]
#[get("/users/{id}")]
pub async fn get_user(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<UserResponse>> {
    let user = state.users_query.get(&path).await?;
    Ok(web::Json(UserResponse::from(user)))
}

/// Replace a user's editable fields.
#[utoipa::path(
    put,
    path = "/api/v1/users/{id}",
    params(("id" = String, Path, description = "User identifier")),
    request_body = UserRequest,
    responses(
        (status = 200, description = "Updated user", body = UserResponse),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 404, description = "Not found", body = ErrorSchema),
        (status = 409, description = "Email already registered", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "updateUser"
)]
#[put("/users/{id}")]
pub async fn update_user(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    payload: web::Json<UserRequest>,
) -> ApiResult<web::Json<UserResponse>> {
    let details = UserDetails::try_from(payload.into_inner())?;
    let user = state
        .users
        .update(UpdateUserRequest {
            user_id: path.into_inner(),
            details,
        })
        .await?;
    Ok(web::Json(UserResponse::from(user)))
}

/// Soft delete: the user stays stored but is marked inactive.
#[utoipa::path(
    delete,
    path = "/api/v1/users/{id}",
    params(("id" = String, Path, description = "User identifier")),
    responses(
        (status = 200, description = "Deactivated user", body = UserResponse),
        (status = 404, description = "Not found", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "deactivateUser"
)]
#[delete("/users/{id}")]
pub async fn deactivate_user(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<UserResponse>> {
    let user = state.users.deactivate(&path).await?;
    Ok(web::Json(UserResponse::from(user)))
}

/// Reactivate a soft-deleted user.
#[utoipa::path(
    post,
    path = "/api/v1/users/{id}/activate",
    params(("id" = String, Path, description = "User identifier")),
    responses(
        (status = 200, description = "Reactivated user", body = UserResponse),
        (status = 404, description = "Not found", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "activateUser"
)]
#[post("/users/{id}/activate")]
pub async fn activate_user(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<UserResponse>> {
    let user = state.users.activate(&path).await?;
    Ok(web::Json(UserResponse::from(user)))
}

/// Physically remove a user.
#[utoipa::path(
    delete,
    path = "/api/v1/users/{id}/permanent",
    params(("id" = String, Path, description = "User identifier")),
    responses(
        (status = 204, description = "User removed"),
        (status = 404, description = "Not found", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "deleteUserPermanently"
)]
#[delete("/users/{id}/permanent")]
pub async fn delete_user_permanently(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    state.users.delete_permanently(&path).await?;
    Ok(HttpResponse::NoContent().finish())
}
