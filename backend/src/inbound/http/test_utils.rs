//! Test helpers for inbound HTTP components.

use std::sync::Arc;

use actix_web::web;

use crate::domain::ports::{
    MockCategoryCommand, MockCategoryQuery, MockContentCommand, MockContentQuery,
    MockUserCommand, MockUserQuery,
};
use crate::inbound::http::state::HttpState;

/// One mock per driving port. Tests set expectations on the ports they
/// exercise and leave the rest untouched, so any stray call panics.
#[derive(Default)]
pub struct MockPorts {
    pub users: MockUserCommand,
    pub users_query: MockUserQuery,
    pub categories: MockCategoryCommand,
    pub categories_query: MockCategoryQuery,
    pub contents: MockContentCommand,
    pub contents_query: MockContentQuery,
}

impl MockPorts {
    pub fn into_state(self) -> web::Data<HttpState> {
        web::Data::new(HttpState {
            users: Arc::new(self.users),
            users_query: Arc::new(self.users_query),
            categories: Arc::new(self.categories),
            categories_query: Arc::new(self.categories_query),
            contents: Arc::new(self.contents),
            contents_query: Arc::new(self.contents_query),
        })
    }
}
