//! In-memory wiring shared by the HTTP and behaviour suites.

use std::sync::Arc;

use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, web};
use courseware::Trace;
use courseware::domain::{CategoryService, ContentService, UserService};
use courseware::inbound::http::configure_api;
use courseware::inbound::http::state::HttpState;
use courseware::outbound::memory::{
    InMemoryCategoryRepository, InMemoryContentRepository, InMemoryUserRepository,
};
use mockable::DefaultClock;

/// Services over fresh in-memory repositories, sharing stores the same way
/// the server does.
pub(crate) fn in_memory_state() -> HttpState {
    let clock: Arc<dyn mockable::Clock> = Arc::new(DefaultClock);
    let users = Arc::new(InMemoryUserRepository::new());
    let categories = Arc::new(InMemoryCategoryRepository::new());
    let contents = Arc::new(InMemoryContentRepository::new());

    HttpState::from_services(
        Arc::new(UserService::new(Arc::clone(&users), Arc::clone(&clock))),
        Arc::new(CategoryService::new(Arc::clone(&categories), Arc::clone(&clock))),
        Arc::new(ContentService::new(contents, categories, users, clock)),
    )
}

/// The production route table and middleware over in-memory state.
pub(crate) fn in_memory_app() -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(web::Data::new(in_memory_state()))
        .wrap(Trace)
        .configure(configure_api)
}
