//! In-memory `CategoryRepository`.

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;

use crate::domain::ports::{CategoryPersistenceError, CategoryRepository};
use crate::domain::{Category, CategoryId};

use super::{read, write};

/// Categories keyed by identifier.
#[derive(Debug, Default)]
pub struct InMemoryCategoryRepository {
    categories: RwLock<HashMap<CategoryId, Category>>,
}

impl InMemoryCategoryRepository {
    /// Create an empty repository.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CategoryRepository for InMemoryCategoryRepository {
    async fn find_by_id(
        &self,
        id: &CategoryId,
    ) -> Result<Option<Category>, CategoryPersistenceError> {
        Ok(read(&self.categories).get(id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<Category>, CategoryPersistenceError> {
        let mut categories: Vec<Category> = read(&self.categories).values().cloned().collect();
        categories.sort_by(|a, b| a.name().cmp(b.name()).then(a.id().cmp(b.id())));
        Ok(categories)
    }

    async fn add(&self, category: &Category) -> Result<Category, CategoryPersistenceError> {
        let mut categories = write(&self.categories);
        if categories.contains_key(category.id()) {
            return Err(CategoryPersistenceError::query(format!(
                "category {} already stored",
                category.id()
            )));
        }
        categories.insert(*category.id(), category.clone());
        Ok(category.clone())
    }

    async fn update(&self, category: &Category) -> Result<(), CategoryPersistenceError> {
        let mut categories = write(&self.categories);
        match categories.get_mut(category.id()) {
            Some(slot) => {
                *slot = category.clone();
                Ok(())
            }
            None => Err(CategoryPersistenceError::query(format!(
                "category {} not stored",
                category.id()
            ))),
        }
    }

    async fn delete(&self, id: &CategoryId) -> Result<bool, CategoryPersistenceError> {
        Ok(write(&self.categories).remove(id).is_some())
    }
}
