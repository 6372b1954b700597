//! PostgreSQL-backed `CategoryRepository` implementation using Diesel ORM.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{CategoryPersistenceError, CategoryRepository};
use crate::domain::{Category, CategoryId, CategorySnapshot};

use super::diesel_basic_error_mapping::DbFailure;
use super::models::{CategoryRow, CategoryUpdate, NewCategoryRow};
use super::pool::DbPool;
use super::schema::categories;

/// Diesel-backed implementation of the `CategoryRepository` port.
#[derive(Clone)]
pub struct DieselCategoryRepository {
    pool: DbPool,
}

impl DieselCategoryRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

// Categories carry no unique index, so a unique violation can only be a
// primary-key clash and is reported as a query failure.
fn map_failure(failure: impl Into<DbFailure>) -> CategoryPersistenceError {
    match failure.into() {
        DbFailure::Connection(message) => CategoryPersistenceError::connection(message),
        DbFailure::Query(message) | DbFailure::UniqueViolation(message) => {
            CategoryPersistenceError::query(message)
        }
    }
}

fn row_to_category(row: CategoryRow) -> Category {
    Category::reconstitute(CategorySnapshot {
        id: CategoryId::from_uuid(row.id),
        name: row.name,
        description: row.description,
        created_at: row.created_at,
        updated_at: row.updated_at,
    })
}

#[async_trait]
impl CategoryRepository for DieselCategoryRepository {
    async fn find_by_id(
        &self,
        id: &CategoryId,
    ) -> Result<Option<Category>, CategoryPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_failure)?;

        let row: Option<CategoryRow> = categories::table
            .filter(categories::id.eq(id.as_uuid()))
            .select(CategoryRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_failure)?;

        Ok(row.map(row_to_category))
    }

    async fn find_all(&self) -> Result<Vec<Category>, CategoryPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_failure)?;

        let rows: Vec<CategoryRow> = categories::table
            .select(CategoryRow::as_select())
            .order_by((categories::name.asc(), categories::id.asc()))
            .load(&mut conn)
            .await
            .map_err(map_failure)?;

        Ok(rows.into_iter().map(row_to_category).collect())
    }

    async fn add(&self, category: &Category) -> Result<Category, CategoryPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_failure)?;

        let new_row = NewCategoryRow {
            id: *category.id().as_uuid(),
            name: category.name(),
            description: category.description(),
            created_at: category.created_at(),
            updated_at: category.updated_at(),
        };

        let stored: CategoryRow = diesel::insert_into(categories::table)
            .values(&new_row)
            .returning(CategoryRow::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(map_failure)?;

        Ok(row_to_category(stored))
    }

    async fn update(&self, category: &Category) -> Result<(), CategoryPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_failure)?;

        let changes = CategoryUpdate {
            name: category.name(),
            description: category.description(),
            updated_at: category.updated_at(),
        };

        let target = categories::table.filter(categories::id.eq(category.id().as_uuid()));
        let updated = diesel::update(target)
            .set(&changes)
            .execute(&mut conn)
            .await
            .map_err(map_failure)?;

        if updated == 0 {
            return Err(CategoryPersistenceError::query(format!(
                "category {} not stored",
                category.id()
            )));
        }
        Ok(())
    }

    async fn delete(&self, id: &CategoryId) -> Result<bool, CategoryPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_failure)?;

        let deleted = diesel::delete(categories::table.filter(categories::id.eq(id.as_uuid())))
            .execute(&mut conn)
            .await
            .map_err(map_failure)?;

        Ok(deleted > 0)
    }
}
