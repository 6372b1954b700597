//! Content HTTP handlers.
//!
//! ```text
//! POST   /api/v1/content
//! GET    /api/v1/content
//! GET    /api/v1/content/search?cond=
//! GET    /api/v1/content/{id}
//! PUT    /api/v1/content/{id}
//! DELETE /api/v1/content/{id}
//! ```
//!
//! `search` must be registered before `{id}` so the literal segment wins.

use actix_web::{HttpResponse, delete, get, post, put, web};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::domain::Content;
use crate::domain::ports::{CreateContentRequest, UpdateContentRequest};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{FieldName, require};

const TITLE: FieldName = FieldName::new("title");
const TYPE: FieldName = FieldName::new("type");
const TOPIC: FieldName = FieldName::new("topic");
const CREATED_BY: FieldName = FieldName::new("createdBy");

/// Request payload for creating a content item.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateContentBody {
    #[schema(example = "Ownership basics")]
    pub title: Option<String>,
    pub description: Option<String>,
    /// One of `text`, `video`, `quiz`, `interactive_lab`.
    #[serde(rename = "type")]
    #[schema(example = "video")]
    pub content_type: Option<String>,
    /// Category identifier.
    pub topic: Option<String>,
    /// Identifier of the authoring user.
    pub created_by: Option<String>,
}

impl TryFrom<CreateContentBody> for CreateContentRequest {
    type Error = crate::domain::Error;

    fn try_from(value: CreateContentBody) -> Result<Self, Self::Error> {
        Ok(Self {
            title: require(value.title, TITLE)?,
            description: value.description,
            content_type: require(value.content_type, TYPE)?,
            topic: require(value.topic, TOPIC)?,
            created_by: require(value.created_by, CREATED_BY)?,
        })
    }
}

/// Request payload for updating a content item.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateContentBody {
    pub title: Option<String>,
    pub description: Option<String>,
    pub topic: Option<String>,
    /// New type; omitted keeps the current one.
    #[serde(rename = "type")]
    pub content_type: Option<String>,
}

impl UpdateContentBody {
    fn into_request(self, content_id: String) -> Result<UpdateContentRequest, crate::domain::Error> {
        Ok(UpdateContentRequest {
            content_id,
            title: require(self.title, TITLE)?,
            description: self.description,
            topic: require(self.topic, TOPIC)?,
            content_type: self.content_type,
        })
    }
}

/// Content representation returned to clients.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ContentResponse {
    pub content_id: String,
    pub title: String,
    pub description: Option<String>,
    #[serde(rename = "type")]
    #[schema(example = "video")]
    pub content_type: String,
    pub topic: String,
    pub created_by: String,
    pub created_at: String,
    pub updated_at: String,
}

impl From<Content> for ContentResponse {
    fn from(value: Content) -> Self {
        Self {
            content_id: value.id().to_string(),
            title: value.title().to_owned(),
            description: value.description().map(str::to_owned),
            content_type: value.content_type().to_string(),
            topic: value.topic().to_string(),
            created_by: value.created_by().to_string(),
            created_at: value.created_at().to_rfc3339(),
            updated_at: value.updated_at().to_rfc3339(),
        }
    }
}

/// Query string accepted by content search.
#[derive(Debug, Default, Deserialize, IntoParams)]
pub struct SearchQuery {
    /// Text matched case-insensitively against title and description.
    /// Blank or absent returns every item.
    pub cond: Option<String>,
}

fn into_responses(contents: Vec<Content>) -> Vec<ContentResponse> {
    contents.into_iter().map(ContentResponse::from).collect()
}

/// Create a content item.
#[utoipa::path(
    post,
    path = "/api/v1/content",
    request_body = CreateContentBody,
    responses(
        (status = 201, description = "Content created", body = ContentResponse),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 404, description = "Topic or creator not found", body = ErrorSchema),
        (status = 409, description = "Duplicate title or inactive creator", body = ErrorSchema)
    ),
    tags = ["content"],
    operation_id = "createContent"
)]
#[post("/content")]
pub async fn create_content(
    state: web::Data<HttpState>,
    payload: web::Json<CreateContentBody>,
) -> ApiResult<HttpResponse> {
    let request = CreateContentRequest::try_from(payload.into_inner())?;
    let content = state.contents.create(request).await?;
    Ok(HttpResponse::Created().json(ContentResponse::from(content)))
}

/// List every content item.
#[utoipa::path(
    get,
    path = "/api/v1/content",
    responses(
        (status = 200, description = "Content items", body = [ContentResponse]),
        (status = 503, description = "Service unavailable", body = ErrorSchema)
    ),
    tags = ["content"],
    operation_id = "listContent"
)]
#[get("/content")]
pub async fn list_content(
    state: web::Data<HttpState>,
) -> ApiResult<web::Json<Vec<ContentResponse>>> {
    let contents = state.contents_query.list().await?;
    Ok(web::Json(into_responses(contents)))
}

/// Search content by title or description.
#[utoipa::path(
    get,
    path = "/api/v1/content/search",
    params(SearchQuery),
    responses(
        (status = 200, description = "Matching content ordered by title", body = [ContentResponse]),
        (status = 503, description = "Service unavailable", body = ErrorSchema)
    ),
    tags = ["content"],
    operation_id = "searchContent"
)]
#[get("/content/search")]
pub async fn search_content(
    state: web::Data<HttpState>,
    query: web::Query<SearchQuery>,
) -> ApiResult<web::Json<Vec<ContentResponse>>> {
    let text = query.cond.as_deref().unwrap_or_default();
    let contents = state.contents_query.search(text).await?;
    Ok(web::Json(into_responses(contents)))
}

/// Fetch one content item.
#[utoipa::path(
    get,
    path = "/api/v1/content/{id}",
    params(("id" = String, Path, description = "Content identifier")),
    responses(
        (status = 200, description = "Content item", body = ContentResponse),
        (status = 404, description = "Not found", body = ErrorSchema)
    ),
    tags = ["content"],
    operation_id = "getContent"
)]
#[get("/content/{id}")]
pub async fn get_content(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<ContentResponse>> {
    let content = state.contents_query.get(&path).await?;
    Ok(web::Json(ContentResponse::from(content)))
}

/// Update a content item, optionally changing its type.
#[utoipa::path(
    put,
    path = "/api/v1/content/{id}",
    params(("id" = String, Path, description = "Content identifier")),
    request_body = UpdateContentBody,
    responses(
        (status = 200, description = "Updated content", body = ContentResponse),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 404, description = "Content or topic not found", body = ErrorSchema),
        (status = 409, description = "Duplicate title", body = ErrorSchema)
    ),
    tags = ["content"],
    operation_id = "updateContent"
)]
#[put("/content/{id}")]
pub async fn update_content(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    payload: web::Json<UpdateContentBody>,
) -> ApiResult<web::Json<ContentResponse>> {
    let request = payload.into_inner().into_request(path.into_inner())?;
    let content = state.contents.update(request).await?;
    Ok(web::Json(ContentResponse::from(content)))
}

/// Remove a content item.
#[utoipa::path(
    delete,
    path = "/api/v1/content/{id}",
    params(("id" = String, Path, description = "Content identifier")),
    responses(
        (status = 204, description = "Content removed"),
        (status = 404, description = "Not found", body = ErrorSchema)
    ),
    tags = ["content"],
    operation_id = "deleteContent"
)]
#[delete("/content/{id}")]
pub async fn delete_content(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    state.contents.delete(&path).await?;
    Ok(HttpResponse::NoContent().finish())
}
