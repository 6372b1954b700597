//! Conversions from aggregate and port failures into [`Error`].
//!
//! Validation failures keep the offending field in `details`. Storage
//! failures become `service_unavailable` when the store is unreachable,
//! `internal_error` for query failures and `conflict` when a storage-level
//! uniqueness constraint fired.

use serde_json::json;

use super::ports::{CategoryPersistenceError, ContentPersistenceError, UserPersistenceError};
use super::validation::field_error;
use super::{CategoryValidationError, ContentValidationError, Error, UserValidationError};

impl From<UserValidationError> for Error {
    fn from(value: UserValidationError) -> Self {
        field_error(&value)
    }
}

impl From<CategoryValidationError> for Error {
    fn from(value: CategoryValidationError) -> Self {
        field_error(&value)
    }
}

impl From<ContentValidationError> for Error {
    fn from(value: ContentValidationError) -> Self {
        field_error(&value)
    }
}

/// Conflict raised when another user already owns an email address.
pub(crate) fn email_taken() -> Error {
    Error::conflict("email is already registered").with_details(json!({
        "field": "email",
        "code": "duplicate",
    }))
}

/// Conflict raised when another content item already uses a title.
pub(crate) fn title_taken() -> Error {
    Error::conflict("content title already exists").with_details(json!({
        "field": "title",
        "code": "duplicate",
    }))
}

impl From<UserPersistenceError> for Error {
    fn from(value: UserPersistenceError) -> Self {
        match value {
            UserPersistenceError::Connection { message } => {
                Self::service_unavailable(format!("user repository unavailable: {message}"))
            }
            UserPersistenceError::Query { message } => {
                Self::internal(format!("user repository error: {message}"))
            }
            UserPersistenceError::Duplicate { .. } => email_taken(),
        }
    }
}

impl From<CategoryPersistenceError> for Error {
    fn from(value: CategoryPersistenceError) -> Self {
        match value {
            CategoryPersistenceError::Connection { message } => {
                Self::service_unavailable(format!("category repository unavailable: {message}"))
            }
            CategoryPersistenceError::Query { message } => {
                Self::internal(format!("category repository error: {message}"))
            }
        }
    }
}

impl From<ContentPersistenceError> for Error {
    fn from(value: ContentPersistenceError) -> Self {
        match value {
            ContentPersistenceError::Connection { message } => {
                Self::service_unavailable(format!("content repository unavailable: {message}"))
            }
            ContentPersistenceError::Query { message } => {
                Self::internal(format!("content repository error: {message}"))
            }
            ContentPersistenceError::Duplicate { .. } => title_taken(),
        }
    }
}
