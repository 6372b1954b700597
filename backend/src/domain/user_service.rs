//! User use cases.
//!
//! Implements the [`UserCommand`] and [`UserQuery`] driving ports on top of a
//! [`UserRepository`].

use std::sync::Arc;

use async_trait::async_trait;
use mockable::Clock;
use tracing::info;

use super::ports::{UpdateUserRequest, UserCommand, UserListFilter, UserQuery, UserRepository};
use super::{Email, Error, User, UserDetails, UserDomainService, UserId};

/// User service implementing the user driving ports.
pub struct UserService<R> {
    users: Arc<R>,
    rules: UserDomainService<R>,
    clock: Arc<dyn Clock>,
}

impl<R> Clone for UserService<R> {
    fn clone(&self) -> Self {
        Self {
            users: Arc::clone(&self.users),
            rules: self.rules.clone(),
            clock: Arc::clone(&self.clock),
        }
    }
}

impl<R: UserRepository> UserService<R> {
    /// Create a service over `users`, reading time from `clock`.
    pub fn new(users: Arc<R>, clock: Arc<dyn Clock>) -> Self {
        Self {
            rules: UserDomainService::new(Arc::clone(&users)),
            users,
            clock,
        }
    }

    fn parse_id(raw: &str) -> Result<UserId, Error> {
        UserId::new(raw).map_err(|err| err.into_error("id", raw))
    }

    async fn load(&self, raw_id: &str) -> Result<User, Error> {
        let id = Self::parse_id(raw_id)?;
        self.users
            .find_by_id(&id)
            .await?
            .ok_or_else(|| Error::not_found(format!("user {id} not found")))
    }

    async fn set_active(&self, raw_id: &str, active: bool) -> Result<User, Error> {
        let mut user = self.load(raw_id).await?;
        let now = self.clock.utc();
        if active {
            user.activate(now);
        } else {
            user.deactivate(now);
        }
        self.users.save(&user).await?;
        info!(user_id = %user.id(), active, "user status changed");
        Ok(user)
    }
}

#[async_trait]
impl<R: UserRepository> UserCommand for UserService<R> {
    async fn create(&self, details: UserDetails) -> Result<User, Error> {
        let email = Email::new(&details.email)?;
        self.rules.ensure_email_is_unique(&email).await?;
        let user = User::create(details, self.clock.utc())?;
        self.users.save(&user).await?;
        info!(user_id = %user.id(), "user created");
        Ok(user)
    }

    async fn update(&self, request: UpdateUserRequest) -> Result<User, Error> {
        let UpdateUserRequest { user_id, details } = request;
        let mut user = self.load(&user_id).await?;
        let new_email = Email::new(&details.email)?;
        self.rules
            .ensure_email_is_unique_for_update(&new_email, user.email())
            .await?;
        user.update_information(details, self.clock.utc())?;
        self.users.save(&user).await?;
        info!(user_id = %user.id(), "user updated");
        Ok(user)
    }

    async fn deactivate(&self, user_id: &str) -> Result<User, Error> {
        self.set_active(user_id, false).await
    }

    async fn activate(&self, user_id: &str) -> Result<User, Error> {
        self.set_active(user_id, true).await
    }

    async fn delete_permanently(&self, user_id: &str) -> Result<(), Error> {
        let id = Self::parse_id(user_id)?;
        if !self.users.delete_by_id(&id).await? {
            return Err(Error::not_found(format!("user {id} not found")));
        }
        info!(user_id = %id, "user deleted permanently");
        Ok(())
    }
}

#[async_trait]
impl<R: UserRepository> UserQuery for UserService<R> {
    async fn get(&self, user_id: &str) -> Result<User, Error> {
        self.load(user_id).await
    }

    async fn list(&self, filter: UserListFilter) -> Result<Vec<User>, Error> {
        let users = if filter.active_only {
            self.users.find_all_active().await?
        } else {
            self.users.find_all().await?
        };
        Ok(users)
    }
}

#[cfg(test)]
#[path = "user_service_tests.rs"]
mod tests;
