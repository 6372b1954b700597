//! Driving port for reading categories.

use async_trait::async_trait;

use crate::domain::{Category, Error};

/// Driving port for category lookups.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CategoryQuery: Send + Sync {
    /// Fetch one category.
    async fn get(&self, category_id: &str) -> Result<Category, Error>;

    /// List every category.
    async fn list(&self) -> Result<Vec<Category>, Error>;
}
