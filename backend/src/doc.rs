//! OpenAPI documentation configuration.
//!
//! This module defines the [`ApiDoc`] struct which generates the OpenAPI
//! document for the REST API. It registers:
//!
//! - **Paths**: every HTTP endpoint from the inbound layer
//! - **Schemas**: request and response DTOs plus the domain error wrappers
//!   ([`ErrorSchema`], [`ErrorCodeSchema`]) that keep domain types free of
//!   utoipa derives
//!
//! The generated document backs Swagger UI in debug builds.

use crate::inbound::http::categories::{CategoryBody, CategoryResponse};
use crate::inbound::http::contents::{ContentResponse, CreateContentBody, UpdateContentBody};
use crate::inbound::http::schemas::{ErrorCodeSchema, ErrorSchema};
use crate::inbound::http::users::{UserRequest, UserResponse};
use utoipa::OpenApi;

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Courseware API",
        description = "Users, categories and learning content.",
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::users::create_user,
        crate::inbound::http::users::list_users,
        crate::inbound::http::users::get_user,
        crate::inbound::http::users::update_user,
        crate::inbound::http::users::deactivate_user,
        crate::inbound::http::users::activate_user,
        crate::inbound::http::users::delete_user_permanently,
        crate::inbound::http::categories::create_category,
        crate::inbound::http::categories::list_categories,
        crate::inbound::http::categories::get_category,
        crate::inbound::http::categories::update_category,
        crate::inbound::http::categories::delete_category,
        crate::inbound::http::contents::create_content,
        crate::inbound::http::contents::list_content,
        crate::inbound::http::contents::search_content,
        crate::inbound::http::contents::get_content,
        crate::inbound::http::contents::update_content,
        crate::inbound::http::contents::delete_content,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        ErrorSchema,
        ErrorCodeSchema,
        UserRequest,
        UserResponse,
        CategoryBody,
        CategoryResponse,
        CreateContentBody,
        UpdateContentBody,
        ContentResponse,
    )),
    tags(
        (name = "users", description = "User registration and lifecycle"),
        (name = "categories", description = "Topics that content belongs to"),
        (name = "content", description = "Learning material"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
