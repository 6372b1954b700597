//! Driving port for reading users.

use async_trait::async_trait;

use crate::domain::{Error, User};

/// Filter applied when listing users.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UserListFilter {
    /// Skip deactivated users.
    pub active_only: bool,
}

/// Driving port for user lookups.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserQuery: Send + Sync {
    /// Fetch one user; soft-deleted users are still returned.
    async fn get(&self, user_id: &str) -> Result<User, Error>;

    /// List users matching `filter`.
    async fn list(&self, filter: UserListFilter) -> Result<Vec<User>, Error>;
}
