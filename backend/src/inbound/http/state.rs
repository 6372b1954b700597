//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on driving ports and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{
    CategoryCommand, CategoryQuery, ContentCommand, ContentQuery, UserCommand, UserQuery,
};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub users: Arc<dyn UserCommand>,
    pub users_query: Arc<dyn UserQuery>,
    pub categories: Arc<dyn CategoryCommand>,
    pub categories_query: Arc<dyn CategoryQuery>,
    pub contents: Arc<dyn ContentCommand>,
    pub contents_query: Arc<dyn ContentQuery>,
}

impl HttpState {
    /// Build state from one service per aggregate that serves both its
    /// command and query port.
    pub fn from_services<U, K, C>(users: Arc<U>, categories: Arc<K>, contents: Arc<C>) -> Self
    where
        U: UserCommand + UserQuery + 'static,
        K: CategoryCommand + CategoryQuery + 'static,
        C: ContentCommand + ContentQuery + 'static,
    {
        Self {
            users: users.clone(),
            users_query: users,
            categories: categories.clone(),
            categories_query: categories,
            contents: contents.clone(),
            contents_query: contents,
        }
    }
}
