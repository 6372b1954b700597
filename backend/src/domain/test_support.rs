//! Fixtures shared by domain service tests.

use std::sync::{Arc, Mutex, MutexGuard};

use chrono::{DateTime, Local, TimeDelta, Utc};
use mockable::Clock;

use super::{
    Category, CategoryId, Content, ContentDraft, Email, User, UserDetails, UserId, UserSnapshot,
};

/// Clock that advances one second on every read, so consecutive mutations
/// observe strictly increasing timestamps.
#[derive(Debug)]
pub(crate) struct TickingClock(Mutex<DateTime<Utc>>);

impl TickingClock {
    pub(crate) fn starting_at(start: DateTime<Utc>) -> Arc<Self> {
        Arc::new(Self(Mutex::new(start)))
    }

    fn lock(&self) -> MutexGuard<'_, DateTime<Utc>> {
        match self.0.lock() {
            Ok(guard) => guard,
            Err(_) => panic!("clock mutex poisoned"),
        }
    }
}

impl Clock for TickingClock {
    fn local(&self) -> DateTime<Local> {
        self.utc().with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        let mut now = self.lock();
        let current = *now;
        *now += TimeDelta::seconds(1);
        current
    }
}

pub(crate) fn epoch() -> DateTime<Utc> {
    DateTime::from_timestamp(1_767_225_600, 0).expect("valid timestamp")
}

pub(crate) fn ann_details() -> UserDetails {
    UserDetails {
        first_name: "Ann".to_owned(),
        last_name: "Lee".to_owned(),
        email: "ann@x.com".to_owned(),
        age: 30,
    }
}

pub(crate) fn sample_user(active: bool) -> User {
    User::reconstitute(UserSnapshot {
        id: UserId::random(),
        first_name: "Ann".to_owned(),
        last_name: "Lee".to_owned(),
        email: Email::from_stored("ann@x.com".to_owned()),
        age: 30,
        active,
        created_at: epoch(),
        updated_at: epoch(),
    })
}

pub(crate) fn sample_category() -> Category {
    Category::create("Rust", None, epoch()).expect("valid category")
}

pub(crate) fn sample_content(title: &str) -> Content {
    Content::create(
        ContentDraft {
            title: title.to_owned(),
            description: None,
            content_type: "text".to_owned(),
            topic: CategoryId::random(),
            created_by: UserId::random(),
        },
        epoch(),
    )
    .expect("valid content")
}
