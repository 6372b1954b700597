//! In-memory `UserRepository`.

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;

use crate::domain::ports::{UserPersistenceError, UserRepository};
use crate::domain::{Email, User, UserId};

use super::{read, write};

/// Users keyed by identifier.
#[derive(Debug, Default)]
pub struct InMemoryUserRepository {
    users: RwLock<HashMap<UserId, User>>,
}

impl InMemoryUserRepository {
    /// Create an empty repository.
    pub fn new() -> Self {
        Self::default()
    }

    fn sorted(&self, keep: impl Fn(&User) -> bool) -> Vec<User> {
        let mut users: Vec<User> = read(&self.users)
            .values()
            .filter(|user| keep(user))
            .cloned()
            .collect();
        users.sort_by_key(|user| (user.created_at(), *user.id()));
        users
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserPersistenceError> {
        Ok(read(&self.users).get(id).cloned())
    }

    async fn find_by_email(&self, email: &Email) -> Result<Option<User>, UserPersistenceError> {
        Ok(read(&self.users)
            .values()
            .find(|user| user.email() == email)
            .cloned())
    }

    async fn exists_by_email(&self, email: &Email) -> Result<bool, UserPersistenceError> {
        Ok(read(&self.users).values().any(|user| user.email() == email))
    }

    async fn find_all(&self) -> Result<Vec<User>, UserPersistenceError> {
        Ok(self.sorted(|_| true))
    }

    async fn find_all_active(&self) -> Result<Vec<User>, UserPersistenceError> {
        Ok(self.sorted(User::is_active))
    }

    async fn save(&self, user: &User) -> Result<(), UserPersistenceError> {
        let mut users = write(&self.users);
        let clash = users
            .values()
            .any(|other| other.id() != user.id() && other.email() == user.email());
        if clash {
            return Err(UserPersistenceError::duplicate(format!(
                "email {} already registered",
                user.email()
            )));
        }
        users.insert(*user.id(), user.clone());
        Ok(())
    }

    async fn delete_by_id(&self, id: &UserId) -> Result<bool, UserPersistenceError> {
        Ok(write(&self.users).remove(id).is_some())
    }
}
