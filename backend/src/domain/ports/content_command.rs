//! Driving port for content mutations.
//!
//! Command implementations must run the cross-aggregate checks in a fixed
//! order so callers see a predictable error when several rules are broken at
//! once:
//!
//! - create: topic exists, title unique, creator exists and is active, field
//!   validation, persistence.
//! - update: content exists, topic exists, title unique among other items,
//!   field validation, persistence. The creator is not re-checked.

use async_trait::async_trait;

use crate::domain::{Content, Error};

/// Raw fields for a new content item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateContentRequest {
    pub title: String,
    pub description: Option<String>,
    pub content_type: String,
    /// Category identifier.
    pub topic: String,
    /// User identifier of the author.
    pub created_by: String,
}

/// Raw fields replacing an existing content item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateContentRequest {
    pub content_id: String,
    pub title: String,
    pub description: Option<String>,
    /// Category identifier.
    pub topic: String,
    /// Optional new type; `None` keeps the current one.
    pub content_type: Option<String>,
}

/// Driving port for content mutations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ContentCommand: Send + Sync {
    /// Create a content item.
    async fn create(&self, request: CreateContentRequest) -> Result<Content, Error>;

    /// Update an existing content item.
    async fn update(&self, request: UpdateContentRequest) -> Result<Content, Error>;

    /// Remove a content item.
    async fn delete(&self, content_id: &str) -> Result<(), Error>;
}
