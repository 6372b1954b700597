//! Driving port for reading content.

use async_trait::async_trait;

use crate::domain::{Content, Error};

/// Driving port for content lookups.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ContentQuery: Send + Sync {
    /// Fetch one content item.
    async fn get(&self, content_id: &str) -> Result<Content, Error>;

    /// List every content item.
    async fn list(&self) -> Result<Vec<Content>, Error>;

    /// Case-insensitive substring search over title and description.
    async fn search(&self, text: &str) -> Result<Vec<Content>, Error>;
}
