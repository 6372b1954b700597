//! Domain primitives, aggregates and use cases.
//!
//! Purpose: Define strongly typed domain entities used by the API and
//! persistence layers, together with the services that enforce rules spanning
//! more than one aggregate. Nothing in here knows about HTTP or SQL.
//!
//! Public surface:
//! - Error (alias to `error::Error`): API error response payload.
//! - ErrorCode (alias to `error::ErrorCode`): stable error identifier.
//! - User, Category, Content: aggregate roots with their identifiers.
//! - UserService, CategoryService, ContentService: driving port
//!   implementations consumed by inbound adapters.

pub mod error;
mod identifier;
pub mod trace_id;
mod validation;

pub mod category;
pub mod content;
pub mod user;

mod error_mapping;
pub mod ports;

mod category_service;
mod content_domain_service;
mod content_service;
mod user_domain_service;
mod user_service;

#[cfg(test)]
pub(crate) mod test_support;

pub use self::category::{
    CATEGORY_NAME_MAX, Category, CategoryId, CategorySnapshot, CategoryValidationError,
};
pub use self::category_service::CategoryService;
pub use self::content::{
    Content, ContentDraft, ContentId, ContentSnapshot, ContentType, ContentValidationError,
    TITLE_MAX,
};
pub use self::content_domain_service::ContentDomainService;
pub use self::content_service::ContentService;
pub use self::error::{Error, ErrorCode, ErrorValidationError};
pub use self::identifier::IdentifierError;
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};
pub use self::user::{
    AGE_MAX, EMAIL_MAX, Email, NAME_MAX, User, UserDetails, UserId, UserSnapshot,
    UserValidationError,
};
pub use self::user_domain_service::UserDomainService;
pub use self::user_service::UserService;
pub use self::validation::FieldViolation;

/// Convenient API result alias.
///
/// # Examples
/// ```
/// use actix_web::HttpResponse;
/// use courseware::domain::{ApiResult, Error};
///
/// fn handler() -> ApiResult<HttpResponse> {
///     Err(Error::not_found("no such user"))
/// }
/// ```
pub type ApiResult<T> = Result<T, Error>;
