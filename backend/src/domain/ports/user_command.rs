//! Driving port for user mutations.

use async_trait::async_trait;

use crate::domain::{Error, User, UserDetails};

/// Request to replace a user's editable fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateUserRequest {
    /// Identifier of the user to update, as supplied by the caller.
    pub user_id: String,
    /// New field values.
    pub details: UserDetails,
}

/// Driving port for creating, updating and removing users.
///
/// Identifiers arrive as raw strings; a malformed identifier fails with
/// [`crate::domain::ErrorCode::InvalidRequest`].
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserCommand: Send + Sync {
    /// Register a new active user with a unique email.
    async fn create(&self, details: UserDetails) -> Result<User, Error>;

    /// Replace every editable field of an existing user.
    async fn update(&self, request: UpdateUserRequest) -> Result<User, Error>;

    /// Soft delete: mark the user inactive and return it.
    async fn deactivate(&self, user_id: &str) -> Result<User, Error>;

    /// Reverse a soft delete.
    async fn activate(&self, user_id: &str) -> Result<User, Error>;

    /// Physically remove the user.
    async fn delete_permanently(&self, user_id: &str) -> Result<(), Error>;
}
