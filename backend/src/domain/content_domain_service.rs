//! Cross-aggregate rules guarding content writes.

use std::sync::Arc;

use serde_json::json;

use super::error_mapping::title_taken;
use super::ports::{CategoryRepository, ContentRepository, UserRepository};
use super::{CategoryId, ContentId, ContentValidationError, Error, UserId};

/// Checks that need the content, category and user stores.
///
/// `C`, `K` and `U` are the content, category and user repositories.
pub struct ContentDomainService<C, K, U> {
    contents: Arc<C>,
    categories: Arc<K>,
    users: Arc<U>,
}

impl<C, K, U> Clone for ContentDomainService<C, K, U> {
    fn clone(&self) -> Self {
        Self {
            contents: Arc::clone(&self.contents),
            categories: Arc::clone(&self.categories),
            users: Arc::clone(&self.users),
        }
    }
}

impl<C, K, U> ContentDomainService<C, K, U>
where
    C: ContentRepository,
    K: CategoryRepository,
    U: UserRepository,
{
    /// Create the service over the three stores.
    pub fn new(contents: Arc<C>, categories: Arc<K>, users: Arc<U>) -> Self {
        Self {
            contents,
            categories,
            users,
        }
    }

    /// Fail with a conflict when another item has the same title, ignoring
    /// case and surrounding whitespace.
    ///
    /// # Errors
    /// Returns [`crate::domain::ErrorCode::InvalidRequest`] for a blank title,
    /// [`crate::domain::ErrorCode::Conflict`] on a clash, or the mapped
    /// repository error.
    pub async fn ensure_title_is_unique(&self, title: &str) -> Result<(), Error> {
        self.ensure_title_free(title, None).await
    }

    /// Like [`Self::ensure_title_is_unique`], ignoring the item being updated.
    ///
    /// # Errors
    /// See [`Self::ensure_title_is_unique`].
    pub async fn ensure_title_is_unique_for_update(
        &self,
        title: &str,
        current: &ContentId,
    ) -> Result<(), Error> {
        self.ensure_title_free(title, Some(current)).await
    }

    async fn ensure_title_free(
        &self,
        title: &str,
        exclude: Option<&ContentId>,
    ) -> Result<(), Error> {
        let wanted = title.trim();
        if wanted.is_empty() {
            return Err(ContentValidationError::BlankTitle.into());
        }
        let wanted = wanted.to_lowercase();

        // The search is substring based; only an exact match is a clash.
        let candidates = self.contents.search(title.trim()).await?;
        let clash = candidates.iter().any(|candidate| {
            exclude != Some(candidate.id()) && candidate.title().to_lowercase() == wanted
        });
        if clash {
            return Err(title_taken());
        }
        Ok(())
    }

    /// Fail with not-found when `topic` names no category.
    ///
    /// # Errors
    /// Returns [`crate::domain::ErrorCode::NotFound`] or the mapped repository
    /// error.
    pub async fn ensure_category_topic_exists(&self, topic: &CategoryId) -> Result<(), Error> {
        match self.categories.find_by_id(topic).await? {
            Some(_) => Ok(()),
            None => Err(Error::not_found(format!("category {topic} not found"))
                .with_details(json!({ "field": "topic", "code": "not_found" }))),
        }
    }

    /// Parse `creator`, then require an existing, active user.
    ///
    /// Returns the parsed identifier so callers need not parse it again.
    ///
    /// # Errors
    /// - [`crate::domain::ErrorCode::InvalidRequest`] for a malformed id.
    /// - [`crate::domain::ErrorCode::NotFound`] when no such user exists.
    /// - [`crate::domain::ErrorCode::Conflict`] when the user is inactive.
    pub async fn ensure_creator_exists_and_is_active(
        &self,
        creator: &str,
    ) -> Result<UserId, Error> {
        let user_id = UserId::new(creator).map_err(|err| err.into_error("createdBy", creator))?;
        let Some(user) = self.users.find_by_id(&user_id).await? else {
            return Err(Error::not_found(format!("user {user_id} not found"))
                .with_details(json!({ "field": "createdBy", "code": "not_found" })));
        };
        if !user.is_active() {
            return Err(Error::conflict(format!("user {user_id} is inactive"))
                .with_details(json!({ "field": "createdBy", "code": "inactive" })));
        }
        Ok(user_id)
    }
}

#[cfg(test)]
mod tests;
