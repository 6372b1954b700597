//! Behaviour tests for the user lifecycle over in-memory repositories.

// The shared module also builds a full actix app, unused here.
#[expect(
    dead_code,
    reason = "Shared in-memory wiring includes helpers for the HTTP suite."
)]
#[path = "support/in_memory_app.rs"]
mod in_memory_app;

use std::cell::RefCell;
use std::future::Future;

use courseware::domain::ports::UpdateUserRequest;
use courseware::domain::{Error, ErrorCode, User, UserDetails};
use courseware::inbound::http::state::HttpState;
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use tokio::runtime::Runtime;

struct LifecycleWorld {
    runtime: Runtime,
    state: HttpState,
    ann: RefCell<Option<User>>,
    last: RefCell<Option<Result<User, Error>>>,
}

impl LifecycleWorld {
    fn new() -> Self {
        Self {
            runtime: Runtime::new().expect("runtime"),
            state: in_memory_app::in_memory_state(),
            ann: RefCell::new(None),
            last: RefCell::new(None),
        }
    }

    fn run<T>(&self, future: impl Future<Output = T>) -> T {
        self.runtime.block_on(future)
    }

    fn ann(&self) -> User {
        self.ann.borrow().clone().expect("Ann registered")
    }

    fn ann_id(&self) -> String {
        self.ann().id().to_string()
    }

    fn record(&self, result: Result<User, Error>) {
        *self.last.borrow_mut() = Some(result);
    }

    fn last_user(&self) -> User {
        match self.last.borrow().as_ref().expect("an operation ran") {
            Ok(user) => user.clone(),
            Err(err) => panic!("expected success, got {err:?}"),
        }
    }
}

fn details(first_name: &str, last_name: &str, email: &str) -> UserDetails {
    UserDetails {
        first_name: first_name.to_owned(),
        last_name: last_name.to_owned(),
        email: email.to_owned(),
        age: 30,
    }
}

#[fixture]
fn world() -> LifecycleWorld {
    LifecycleWorld::new()
}

#[given("an empty user directory")]
fn an_empty_user_directory(world: &LifecycleWorld) {
    let users = world
        .run(world.state.users_query.list(Default::default()))
        .expect("list users");
    assert!(users.is_empty());
}

#[when("Ann Lee registers with email {email}")]
fn ann_lee_registers(world: &LifecycleWorld, email: String) {
    let result = world.run(world.state.users.create(details("Ann", "Lee", &email)));
    if let Ok(user) = &result {
        *world.ann.borrow_mut() = Some(user.clone());
    }
    world.record(result);
}

#[then("the registration succeeds and Ann is active")]
fn the_registration_succeeds(world: &LifecycleWorld) {
    let user = world.last_user();
    assert!(user.is_active());
    assert_eq!(user.full_name(), "Ann Lee");
    assert_eq!(user.created_at(), user.updated_at());
}

#[when("another user registers with email {email}")]
fn another_user_registers(world: &LifecycleWorld, email: String) {
    let result = world.run(world.state.users.create(details("Ben", "Ode", &email)));
    world.record(result);
}

#[then("the registration fails with a conflict")]
fn the_registration_fails_with_a_conflict(world: &LifecycleWorld) {
    let last = world.last.borrow();
    let err = last
        .as_ref()
        .expect("an operation ran")
        .as_ref()
        .expect_err("duplicate email must fail");
    assert_eq!(err.code(), ErrorCode::Conflict);
}

#[when("Ann's email is updated to {email}")]
fn anns_email_is_updated(world: &LifecycleWorld, email: String) {
    let result = world.run(world.state.users.update(UpdateUserRequest {
        user_id: world.ann_id(),
        details: details("Ann", "Lee", &email),
    }));
    world.record(result);
}

#[then("the update succeeds")]
fn the_update_succeeds(world: &LifecycleWorld) {
    let updated = world.last_user();
    assert_eq!(updated.email(), world.ann().email());
    *world.ann.borrow_mut() = Some(updated);
}

#[when("Ann is soft deleted")]
fn ann_is_soft_deleted(world: &LifecycleWorld) {
    let result = world.run(world.state.users.deactivate(&world.ann_id()));
    world.record(result);
}

#[then("Ann is inactive")]
fn ann_is_inactive(world: &LifecycleWorld) {
    assert!(!world.last_user().is_active());
}

#[then("Ann can still be fetched by id with unchanged details")]
fn ann_can_still_be_fetched(world: &LifecycleWorld) {
    let before = world.ann();
    let fetched = world
        .run(world.state.users_query.get(&world.ann_id()))
        .expect("soft-deleted user is retrievable");

    assert!(!fetched.is_active());
    assert_eq!(fetched.first_name(), before.first_name());
    assert_eq!(fetched.last_name(), before.last_name());
    assert_eq!(fetched.email(), before.email());
    assert_eq!(fetched.age(), before.age());
    assert_eq!(fetched.created_at(), before.created_at());
}

#[scenario(path = "tests/features/user_lifecycle.feature")]
fn user_lifecycle(world: LifecycleWorld) {
    drop(world);
}
