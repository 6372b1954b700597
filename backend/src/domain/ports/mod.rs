//! Domain ports for the hexagonal boundary.
//!
//! Driven ports (`*Repository`) are implemented by outbound adapters. Driving
//! ports (`*Command`, `*Query`) are implemented by the domain services and
//! consumed by inbound adapters.

mod macros;
pub(crate) use macros::define_port_error;

mod category_command;
mod category_query;
mod category_repository;
mod content_command;
mod content_query;
mod content_repository;
mod user_command;
mod user_query;
mod user_repository;

#[cfg(test)]
pub use category_command::MockCategoryCommand;
pub use category_command::{CategoryCommand, CategoryRequest};
#[cfg(test)]
pub use category_query::MockCategoryQuery;
pub use category_query::CategoryQuery;
#[cfg(test)]
pub use category_repository::MockCategoryRepository;
pub use category_repository::{CategoryPersistenceError, CategoryRepository};
#[cfg(test)]
pub use content_command::MockContentCommand;
pub use content_command::{ContentCommand, CreateContentRequest, UpdateContentRequest};
#[cfg(test)]
pub use content_query::MockContentQuery;
pub use content_query::ContentQuery;
#[cfg(test)]
pub use content_repository::MockContentRepository;
pub use content_repository::{ContentPersistenceError, ContentRepository};
#[cfg(test)]
pub use user_command::MockUserCommand;
pub use user_command::{UpdateUserRequest, UserCommand};
#[cfg(test)]
pub use user_query::MockUserQuery;
pub use user_query::{UserListFilter, UserQuery};
#[cfg(test)]
pub use user_repository::MockUserRepository;
pub use user_repository::{UserPersistenceError, UserRepository};
