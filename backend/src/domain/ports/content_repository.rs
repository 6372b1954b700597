//! Driven port for content storage.

use async_trait::async_trait;

use crate::domain::{Content, ContentId};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by content repository adapters.
    pub enum ContentPersistenceError {
        /// The store could not be reached.
        Connection => "content repository connection failed",
        /// A query or mutation failed during execution.
        Query => "content repository query failed",
        /// A storage-level uniqueness constraint rejected the write.
        Duplicate => "content repository rejected duplicate",
    }
}

/// Storage contract for [`Content`] aggregates.
///
/// Adapters must reject two items whose titles differ only by case with
/// [`ContentPersistenceError::Duplicate`].
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ContentRepository: Send + Sync {
    /// Fetch a content item by identifier.
    async fn find_by_id(&self, id: &ContentId) -> Result<Option<Content>, ContentPersistenceError>;

    /// Every content item, ordered by title.
    async fn find_all(&self) -> Result<Vec<Content>, ContentPersistenceError>;

    /// Items whose title or description contains `text`, ignoring case.
    ///
    /// A blank `text` matches every item.
    async fn search(&self, text: &str) -> Result<Vec<Content>, ContentPersistenceError>;

    /// Insert a new item and return it as stored.
    async fn add(&self, content: &Content) -> Result<Content, ContentPersistenceError>;

    /// Overwrite an existing item.
    async fn update(&self, content: &Content) -> Result<(), ContentPersistenceError>;

    /// Remove an item. Returns `false` when no row matched.
    async fn delete(&self, id: &ContentId) -> Result<bool, ContentPersistenceError>;
}
