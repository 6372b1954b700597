//! Driving port for category mutations.

use async_trait::async_trait;

use crate::domain::{Category, Error};

/// Name and description submitted for a category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryRequest {
    pub name: String,
    pub description: Option<String>,
}

/// Driving port for category mutations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CategoryCommand: Send + Sync {
    /// Create a category.
    async fn create(&self, request: CategoryRequest) -> Result<Category, Error>;

    /// Replace a category's name and description.
    async fn update(&self, category_id: &str, request: CategoryRequest)
    -> Result<Category, Error>;

    /// Remove a category.
    async fn delete(&self, category_id: &str) -> Result<(), Error>;
}
