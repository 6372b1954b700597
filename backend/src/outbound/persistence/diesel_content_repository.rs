//! PostgreSQL-backed `ContentRepository` implementation using Diesel ORM.
//!
//! Search uses `ILIKE` over title and description with the caller's text
//! escaped, so `%` and `_` match literally. The `contents_title_lower_key`
//! index rejects titles that differ only by case.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{ContentPersistenceError, ContentRepository};
use crate::domain::{CategoryId, Content, ContentId, ContentSnapshot, ContentType, UserId};

use super::diesel_basic_error_mapping::DbFailure;
use super::models::{ContentRow, ContentUpdate, NewContentRow};
use super::pool::DbPool;
use super::schema::contents;

/// Diesel-backed implementation of the `ContentRepository` port.
#[derive(Clone)]
pub struct DieselContentRepository {
    pool: DbPool,
}

impl DieselContentRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_failure(failure: impl Into<DbFailure>) -> ContentPersistenceError {
    match failure.into() {
        DbFailure::Connection(message) => ContentPersistenceError::connection(message),
        DbFailure::Query(message) => ContentPersistenceError::query(message),
        DbFailure::UniqueViolation(constraint) => ContentPersistenceError::duplicate(constraint),
    }
}

/// Escape `LIKE` metacharacters and wrap the text for a substring match.
fn contains_pattern(text: &str) -> String {
    let mut pattern = String::with_capacity(text.len() + 2);
    pattern.push('%');
    for ch in text.chars() {
        if matches!(ch, '\\' | '%' | '_') {
            pattern.push('\\');
        }
        pattern.push(ch);
    }
    pattern.push('%');
    pattern
}

fn row_to_content(row: ContentRow) -> Result<Content, ContentPersistenceError> {
    let content_type: ContentType = row.content_type.parse().map_err(|_| {
        ContentPersistenceError::query(format!(
            "content {} has unknown type '{}'",
            row.id, row.content_type
        ))
    })?;
    Ok(Content::reconstitute(ContentSnapshot {
        id: ContentId::from_uuid(row.id),
        title: row.title,
        description: row.description,
        content_type,
        topic: CategoryId::from_uuid(row.topic),
        created_by: UserId::from_uuid(row.created_by),
        created_at: row.created_at,
        updated_at: row.updated_at,
    }))
}

fn rows_to_contents(rows: Vec<ContentRow>) -> Result<Vec<Content>, ContentPersistenceError> {
    rows.into_iter().map(row_to_content).collect()
}

#[async_trait]
impl ContentRepository for DieselContentRepository {
    async fn find_by_id(&self, id: &ContentId) -> Result<Option<Content>, ContentPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_failure)?;

        let row: Option<ContentRow> = contents::table
            .filter(contents::id.eq(id.as_uuid()))
            .select(ContentRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_failure)?;

        row.map(row_to_content).transpose()
    }

    async fn find_all(&self) -> Result<Vec<Content>, ContentPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_failure)?;

        let rows: Vec<ContentRow> = contents::table
            .select(ContentRow::as_select())
            .order_by((contents::title.asc(), contents::id.asc()))
            .load(&mut conn)
            .await
            .map_err(map_failure)?;

        rows_to_contents(rows)
    }

    async fn search(&self, text: &str) -> Result<Vec<Content>, ContentPersistenceError> {
        let needle = text.trim();
        if needle.is_empty() {
            return self.find_all().await;
        }

        let mut conn = self.pool.get().await.map_err(map_failure)?;
        let pattern = contains_pattern(needle);

        let rows: Vec<ContentRow> = contents::table
            .filter(
                contents::title
                    .ilike(&pattern)
                    .or(contents::description.ilike(&pattern)),
            )
            .select(ContentRow::as_select())
            .order_by((contents::title.asc(), contents::id.asc()))
            .load(&mut conn)
            .await
            .map_err(map_failure)?;

        rows_to_contents(rows)
    }

    async fn add(&self, content: &Content) -> Result<Content, ContentPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_failure)?;

        let new_row = NewContentRow {
            id: *content.id().as_uuid(),
            title: content.title(),
            description: content.description(),
            content_type: content.content_type().as_str(),
            topic: *content.topic().as_uuid(),
            created_by: *content.created_by().as_uuid(),
            created_at: content.created_at(),
            updated_at: content.updated_at(),
        };

        let stored: ContentRow = diesel::insert_into(contents::table)
            .values(&new_row)
            .returning(ContentRow::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(map_failure)?;

        row_to_content(stored)
    }

    async fn update(&self, content: &Content) -> Result<(), ContentPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_failure)?;

        let changes = ContentUpdate {
            title: content.title(),
            description: content.description(),
            content_type: content.content_type().as_str(),
            topic: *content.topic().as_uuid(),
            updated_at: content.updated_at(),
        };

        let target = contents::table.filter(contents::id.eq(content.id().as_uuid()));
        let updated = diesel::update(target)
            .set(&changes)
            .execute(&mut conn)
            .await
            .map_err(map_failure)?;

        if updated == 0 {
            return Err(ContentPersistenceError::query(format!(
                "content {} not stored",
                content.id()
            )));
        }
        Ok(())
    }

    async fn delete(&self, id: &ContentId) -> Result<bool, ContentPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_failure)?;

        let deleted = diesel::delete(contents::table.filter(contents::id.eq(id.as_uuid())))
            .execute(&mut conn)
            .await
            .map_err(map_failure)?;

        Ok(deleted > 0)
    }
}
