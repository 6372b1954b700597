//! In-memory `ContentRepository`.

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;

use crate::domain::ports::{ContentPersistenceError, ContentRepository};
use crate::domain::{Content, ContentId};

use super::{read, write};

/// Content items keyed by identifier.
#[derive(Debug, Default)]
pub struct InMemoryContentRepository {
    contents: RwLock<HashMap<ContentId, Content>>,
}

impl InMemoryContentRepository {
    /// Create an empty repository.
    pub fn new() -> Self {
        Self::default()
    }

    fn sorted(&self, keep: impl Fn(&Content) -> bool) -> Vec<Content> {
        let mut contents: Vec<Content> = read(&self.contents)
            .values()
            .filter(|content| keep(content))
            .cloned()
            .collect();
        contents.sort_by(|a, b| a.title().cmp(b.title()).then(a.id().cmp(b.id())));
        contents
    }

    /// Store `content` unless another item already uses its title.
    fn put(
        map: &mut HashMap<ContentId, Content>,
        content: &Content,
    ) -> Result<(), ContentPersistenceError> {
        let title = content.title().to_lowercase();
        let clash = map
            .values()
            .any(|other| other.id() != content.id() && other.title().to_lowercase() == title);
        if clash {
            return Err(ContentPersistenceError::duplicate(format!(
                "title '{}' already used",
                content.title()
            )));
        }
        map.insert(*content.id(), content.clone());
        Ok(())
    }
}

fn matches(content: &Content, needle: &str) -> bool {
    content.title().to_lowercase().contains(needle)
        || content
            .description()
            .is_some_and(|text| text.to_lowercase().contains(needle))
}

#[async_trait]
impl ContentRepository for InMemoryContentRepository {
    async fn find_by_id(&self, id: &ContentId) -> Result<Option<Content>, ContentPersistenceError> {
        Ok(read(&self.contents).get(id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<Content>, ContentPersistenceError> {
        Ok(self.sorted(|_| true))
    }

    async fn search(&self, text: &str) -> Result<Vec<Content>, ContentPersistenceError> {
        let needle = text.trim().to_lowercase();
        if needle.is_empty() {
            return Ok(self.sorted(|_| true));
        }
        Ok(self.sorted(|content| matches(content, &needle)))
    }

    async fn add(&self, content: &Content) -> Result<Content, ContentPersistenceError> {
        let mut contents = write(&self.contents);
        if contents.contains_key(content.id()) {
            return Err(ContentPersistenceError::duplicate(format!(
                "content {} already stored",
                content.id()
            )));
        }
        Self::put(&mut contents, content)?;
        Ok(content.clone())
    }

    async fn update(&self, content: &Content) -> Result<(), ContentPersistenceError> {
        let mut contents = write(&self.contents);
        if !contents.contains_key(content.id()) {
            return Err(ContentPersistenceError::query(format!(
                "content {} not stored",
                content.id()
            )));
        }
        Self::put(&mut contents, content)
    }

    async fn delete(&self, id: &ContentId) -> Result<bool, ContentPersistenceError> {
        Ok(write(&self.contents).remove(id).is_some())
    }
}
