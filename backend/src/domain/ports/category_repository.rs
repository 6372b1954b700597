//! Driven port for category storage.

use async_trait::async_trait;

use crate::domain::{Category, CategoryId};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by category repository adapters.
    pub enum CategoryPersistenceError {
        /// The store could not be reached.
        Connection => "category repository connection failed",
        /// A query or mutation failed during execution.
        Query => "category repository query failed",
    }
}

/// Storage contract for [`Category`] aggregates.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CategoryRepository: Send + Sync {
    /// Fetch a category by identifier.
    async fn find_by_id(&self, id: &CategoryId)
    -> Result<Option<Category>, CategoryPersistenceError>;

    /// Every category, ordered by name.
    async fn find_all(&self) -> Result<Vec<Category>, CategoryPersistenceError>;

    /// Insert a new category and return it as stored.
    async fn add(&self, category: &Category) -> Result<Category, CategoryPersistenceError>;

    /// Overwrite an existing category.
    async fn update(&self, category: &Category) -> Result<(), CategoryPersistenceError>;

    /// Remove a category. Returns `false` when no row matched.
    async fn delete(&self, id: &CategoryId) -> Result<bool, CategoryPersistenceError>;
}
