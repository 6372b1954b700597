//! Email uniqueness rules for users.

use std::sync::Arc;

use super::error_mapping::email_taken;
use super::ports::UserRepository;
use super::{Email, Error};

/// Invariants spanning the whole user store.
pub struct UserDomainService<R> {
    users: Arc<R>,
}

impl<R> Clone for UserDomainService<R> {
    fn clone(&self) -> Self {
        Self {
            users: Arc::clone(&self.users),
        }
    }
}

impl<R: UserRepository> UserDomainService<R> {
    /// Create the service over a user repository.
    pub fn new(users: Arc<R>) -> Self {
        Self { users }
    }

    /// Fail with a conflict when any user already uses `email`.
    ///
    /// # Errors
    /// Returns [`crate::domain::ErrorCode::Conflict`] when the address is taken,
    /// or the mapped repository error.
    pub async fn ensure_email_is_unique(&self, email: &Email) -> Result<(), Error> {
        if self.users.exists_by_email(email).await? {
            return Err(email_taken());
        }
        Ok(())
    }

    /// Like [`Self::ensure_email_is_unique`], but a user keeping its own
    /// address always passes without touching the store.
    ///
    /// # Errors
    /// See [`Self::ensure_email_is_unique`].
    pub async fn ensure_email_is_unique_for_update(
        &self,
        new_email: &Email,
        current_email: &Email,
    ) -> Result<(), Error> {
        if new_email == current_email {
            return Ok(());
        }
        self.ensure_email_is_unique(new_email).await
    }
}
