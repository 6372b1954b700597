//! Builders wiring repositories into services and services into HTTP state.

use std::sync::Arc;

use actix_web::web;
use mockable::{Clock, DefaultClock};

use courseware::domain::ports::{CategoryRepository, ContentRepository, UserRepository};
use courseware::domain::{CategoryService, ContentService, UserService};
use courseware::inbound::http::state::HttpState;
use courseware::outbound::memory::{
    InMemoryCategoryRepository, InMemoryContentRepository, InMemoryUserRepository,
};
use courseware::outbound::persistence::{
    DbPool, DieselCategoryRepository, DieselContentRepository, DieselUserRepository,
};

use super::ServerConfig;

/// Wire one repository per aggregate into the use-case services.
///
/// The content service shares the user and category repositories so its
/// cross-aggregate checks read the same store the other services write.
fn build_services<U, K, C>(
    users: Arc<U>,
    categories: Arc<K>,
    contents: Arc<C>,
    clock: Arc<dyn Clock>,
) -> HttpState
where
    U: UserRepository + 'static,
    K: CategoryRepository + 'static,
    C: ContentRepository + 'static,
{
    let user_service = Arc::new(UserService::new(Arc::clone(&users), Arc::clone(&clock)));
    let category_service = Arc::new(CategoryService::new(
        Arc::clone(&categories),
        Arc::clone(&clock),
    ));
    let content_service = Arc::new(ContentService::new(contents, categories, users, clock));
    HttpState::from_services(user_service, category_service, content_service)
}

fn diesel_state(pool: &DbPool, clock: Arc<dyn Clock>) -> HttpState {
    build_services(
        Arc::new(DieselUserRepository::new(pool.clone())),
        Arc::new(DieselCategoryRepository::new(pool.clone())),
        Arc::new(DieselContentRepository::new(pool.clone())),
        clock,
    )
}

fn in_memory_state(clock: Arc<dyn Clock>) -> HttpState {
    build_services(
        Arc::new(InMemoryUserRepository::new()),
        Arc::new(InMemoryCategoryRepository::new()),
        Arc::new(InMemoryContentRepository::new()),
        clock,
    )
}

/// Build the shared HTTP state: PostgreSQL-backed when a pool is configured,
/// otherwise in-memory.
pub(super) fn build_http_state(config: &ServerConfig) -> web::Data<HttpState> {
    let clock: Arc<dyn Clock> = Arc::new(DefaultClock);
    let state = match &config.db_pool {
        Some(pool) => diesel_state(pool, clock),
        None => in_memory_state(clock),
    };
    web::Data::new(state)
}
