//! Content use cases.
//!
//! Implements [`ContentCommand`] and [`ContentQuery`]. Writes run the
//! [`ContentDomainService`] checks in the order documented on
//! [`ContentCommand`] before any field validation or storage call.

use std::sync::Arc;

use async_trait::async_trait;
use mockable::Clock;
use tracing::info;

use super::ports::{
    CategoryRepository, ContentCommand, ContentQuery, ContentRepository, CreateContentRequest,
    UpdateContentRequest, UserRepository,
};
use super::{CategoryId, Content, ContentDomainService, ContentDraft, ContentId, Error};

/// Content service implementing the content driving ports.
///
/// `C`, `K` and `U` are the content, category and user repositories.
pub struct ContentService<C, K, U> {
    contents: Arc<C>,
    rules: ContentDomainService<C, K, U>,
    clock: Arc<dyn Clock>,
}

impl<C, K, U> Clone for ContentService<C, K, U> {
    fn clone(&self) -> Self {
        Self {
            contents: Arc::clone(&self.contents),
            rules: self.rules.clone(),
            clock: Arc::clone(&self.clock),
        }
    }
}

impl<C, K, U> ContentService<C, K, U>
where
    C: ContentRepository,
    K: CategoryRepository,
    U: UserRepository,
{
    /// Create a service over the three stores, reading time from `clock`.
    pub fn new(
        contents: Arc<C>,
        categories: Arc<K>,
        users: Arc<U>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            rules: ContentDomainService::new(Arc::clone(&contents), categories, users),
            contents,
            clock,
        }
    }

    fn parse_id(raw: &str) -> Result<ContentId, Error> {
        ContentId::new(raw).map_err(|err| err.into_error("id", raw))
    }

    fn parse_topic(raw: &str) -> Result<CategoryId, Error> {
        CategoryId::new(raw).map_err(|err| err.into_error("topic", raw))
    }

    async fn load(&self, raw_id: &str) -> Result<Content, Error> {
        let id = Self::parse_id(raw_id)?;
        self.contents
            .find_by_id(&id)
            .await?
            .ok_or_else(|| Error::not_found(format!("content {id} not found")))
    }
}

#[async_trait]
impl<C, K, U> ContentCommand for ContentService<C, K, U>
where
    C: ContentRepository,
    K: CategoryRepository,
    U: UserRepository,
{
    async fn create(&self, request: CreateContentRequest) -> Result<Content, Error> {
        let CreateContentRequest {
            title,
            description,
            content_type,
            topic,
            created_by,
        } = request;

        let topic = Self::parse_topic(&topic)?;
        self.rules.ensure_category_topic_exists(&topic).await?;
        self.rules.ensure_title_is_unique(&title).await?;
        let created_by = self
            .rules
            .ensure_creator_exists_and_is_active(&created_by)
            .await?;

        let content = Content::create(
            ContentDraft {
                title,
                description,
                content_type,
                topic,
                created_by,
            },
            self.clock.utc(),
        )?;
        let stored = self.contents.add(&content).await?;
        info!(content_id = %stored.id(), "content created");
        Ok(stored)
    }

    async fn update(&self, request: UpdateContentRequest) -> Result<Content, Error> {
        let UpdateContentRequest {
            content_id,
            title,
            description,
            topic,
            content_type,
        } = request;

        let mut content = self.load(&content_id).await?;
        let topic = Self::parse_topic(&topic)?;
        self.rules.ensure_category_topic_exists(&topic).await?;
        self.rules
            .ensure_title_is_unique_for_update(&title, content.id())
            .await?;

        let now = self.clock.utc();
        content.update_information(&title, description, topic, now)?;
        if let Some(kind) = content_type {
            content.change_type(&kind, now)?;
        }
        self.contents.update(&content).await?;
        info!(content_id = %content.id(), "content updated");
        Ok(content)
    }

    async fn delete(&self, content_id: &str) -> Result<(), Error> {
        let id = Self::parse_id(content_id)?;
        if !self.contents.delete(&id).await? {
            return Err(Error::not_found(format!("content {id} not found")));
        }
        info!(content_id = %id, "content deleted");
        Ok(())
    }
}

#[async_trait]
impl<C, K, U> ContentQuery for ContentService<C, K, U>
where
    C: ContentRepository,
    K: CategoryRepository,
    U: UserRepository,
{
    async fn get(&self, content_id: &str) -> Result<Content, Error> {
        self.load(content_id).await
    }

    async fn list(&self) -> Result<Vec<Content>, Error> {
        Ok(self.contents.find_all().await?)
    }

    async fn search(&self, text: &str) -> Result<Vec<Content>, Error> {
        Ok(self.contents.search(text.trim()).await?)
    }
}

#[cfg(test)]
#[path = "content_service_tests.rs"]
mod tests;
