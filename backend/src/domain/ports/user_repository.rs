//! Driven port for user storage.

use async_trait::async_trait;

use crate::domain::{Email, User, UserId};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by user repository adapters.
    pub enum UserPersistenceError {
        /// The store could not be reached.
        Connection => "user repository connection failed",
        /// A query or mutation failed during execution.
        Query => "user repository query failed",
        /// A storage-level uniqueness constraint rejected the write.
        Duplicate => "user repository rejected duplicate",
    }
}

/// Storage contract for [`User`] aggregates.
///
/// Adapters must enforce email uniqueness themselves and report a clash as
/// [`UserPersistenceError::Duplicate`]; the pre-insert lookup in
/// `UserDomainService` cannot close the race between two concurrent writers.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Fetch a user by identifier.
    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserPersistenceError>;

    /// Fetch the user registered with `email`.
    async fn find_by_email(&self, email: &Email) -> Result<Option<User>, UserPersistenceError>;

    /// Whether any user is registered with `email`.
    async fn exists_by_email(&self, email: &Email) -> Result<bool, UserPersistenceError>;

    /// Every user, ordered by creation time.
    async fn find_all(&self) -> Result<Vec<User>, UserPersistenceError>;

    /// Active users only, ordered by creation time.
    async fn find_all_active(&self) -> Result<Vec<User>, UserPersistenceError>;

    /// Insert or replace a user by identifier.
    async fn save(&self, user: &User) -> Result<(), UserPersistenceError>;

    /// Physically remove a user. Returns `false` when no row matched.
    async fn delete_by_id(&self, id: &UserId) -> Result<bool, UserPersistenceError>;
}
