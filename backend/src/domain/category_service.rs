//! Category use cases.

use std::sync::Arc;

use async_trait::async_trait;
use mockable::Clock;
use tracing::info;

use super::ports::{CategoryCommand, CategoryQuery, CategoryRepository, CategoryRequest};
use super::{Category, CategoryId, Error};

/// Category service implementing the category driving ports.
pub struct CategoryService<R> {
    categories: Arc<R>,
    clock: Arc<dyn Clock>,
}

impl<R> Clone for CategoryService<R> {
    fn clone(&self) -> Self {
        Self {
            categories: Arc::clone(&self.categories),
            clock: Arc::clone(&self.clock),
        }
    }
}

impl<R: CategoryRepository> CategoryService<R> {
    /// Create a service over `categories`, reading time from `clock`.
    pub fn new(categories: Arc<R>, clock: Arc<dyn Clock>) -> Self {
        Self { categories, clock }
    }

    fn parse_id(raw: &str) -> Result<CategoryId, Error> {
        CategoryId::new(raw).map_err(|err| err.into_error("id", raw))
    }

    async fn load(&self, raw_id: &str) -> Result<Category, Error> {
        let id = Self::parse_id(raw_id)?;
        self.categories
            .find_by_id(&id)
            .await?
            .ok_or_else(|| Error::not_found(format!("category {id} not found")))
    }
}

#[async_trait]
impl<R: CategoryRepository> CategoryCommand for CategoryService<R> {
    async fn create(&self, request: CategoryRequest) -> Result<Category, Error> {
        let category = Category::create(&request.name, request.description, self.clock.utc())?;
        let stored = self.categories.add(&category).await?;
        info!(category_id = %stored.id(), "category created");
        Ok(stored)
    }

    async fn update(
        &self,
        category_id: &str,
        request: CategoryRequest,
    ) -> Result<Category, Error> {
        let mut category = self.load(category_id).await?;
        category.update_information(&request.name, request.description, self.clock.utc())?;
        self.categories.update(&category).await?;
        info!(category_id = %category.id(), "category updated");
        Ok(category)
    }

    async fn delete(&self, category_id: &str) -> Result<(), Error> {
        let id = Self::parse_id(category_id)?;
        if !self.categories.delete(&id).await? {
            return Err(Error::not_found(format!("category {id} not found")));
        }
        info!(category_id = %id, "category deleted");
        Ok(())
    }
}

#[async_trait]
impl<R: CategoryRepository> CategoryQuery for CategoryService<R> {
    async fn get(&self, category_id: &str) -> Result<Category, Error> {
        self.load(category_id).await
    }

    async fn list(&self) -> Result<Vec<Category>, Error> {
        Ok(self.categories.find_all().await?)
    }
}
