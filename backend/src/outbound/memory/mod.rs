//! In-process repository adapters.
//!
//! These adapters keep aggregates in `RwLock`-guarded maps. The server falls
//! back to them when no database is configured, and the HTTP integration
//! tests run against them. They enforce the same uniqueness rules as the
//! PostgreSQL schema so the storage backstop behaves identically.

mod category_repository;
mod content_repository;
mod user_repository;

use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

pub use category_repository::InMemoryCategoryRepository;
pub use content_repository::InMemoryContentRepository;
pub use user_repository::InMemoryUserRepository;

// A panic while holding the lock cannot leave a map half-written: every
// mutation is a single insert or remove.
fn read<T>(lock: &RwLock<T>) -> RwLockReadGuard<'_, T> {
    lock.read().unwrap_or_else(PoisonError::into_inner)
}

fn write<T>(lock: &RwLock<T>) -> RwLockWriteGuard<'_, T> {
    lock.write().unwrap_or_else(PoisonError::into_inner)
}
