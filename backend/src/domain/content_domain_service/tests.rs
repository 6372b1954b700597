//! Tests for the content consistency rules.

use super::*;
use crate::domain::ErrorCode;
use crate::domain::ports::{
    MockCategoryRepository, MockContentRepository, MockUserRepository, UserPersistenceError,
};
use crate::domain::test_support::{sample_category, sample_content, sample_user};

type Service =
    ContentDomainService<MockContentRepository, MockCategoryRepository, MockUserRepository>;

fn service(
    contents: MockContentRepository,
    categories: MockCategoryRepository,
    users: MockUserRepository,
) -> Service {
    ContentDomainService::new(Arc::new(contents), Arc::new(categories), Arc::new(users))
}

fn with_contents(contents: MockContentRepository) -> Service {
    service(
        contents,
        MockCategoryRepository::new(),
        MockUserRepository::new(),
    )
}

#[tokio::test]
async fn title_clash_ignores_case() {
    let mut contents = MockContentRepository::new();
    contents
        .expect_search()
        .withf(|text| text == "Intro")
        .times(1)
        .return_once(|_| Ok(vec![sample_content("intro")]));

    let error = with_contents(contents)
        .ensure_title_is_unique("Intro")
        .await
        .expect_err("title taken");
    assert_eq!(error.code(), ErrorCode::Conflict);
}

#[tokio::test]
async fn partial_matches_are_not_clashes() {
    let mut contents = MockContentRepository::new();
    contents.expect_search().times(1).return_once(|_| {
        Ok(vec![
            sample_content("Intro to Rust"),
            sample_content("A gentle intro"),
        ])
    });

    with_contents(contents)
        .ensure_title_is_unique("Intro")
        .await
        .expect("no exact match");
}

#[tokio::test]
async fn surrounding_whitespace_is_ignored() {
    let mut contents = MockContentRepository::new();
    contents
        .expect_search()
        .withf(|text| text == "Intro")
        .times(1)
        .return_once(|_| Ok(vec![sample_content("INTRO")]));

    let error = with_contents(contents)
        .ensure_title_is_unique("  Intro  ")
        .await
        .expect_err("title taken");
    assert_eq!(error.code(), ErrorCode::Conflict);
}

#[tokio::test]
async fn blank_title_is_rejected_before_searching() {
    let mut contents = MockContentRepository::new();
    contents.expect_search().times(0);

    let error = with_contents(contents)
        .ensure_title_is_unique("   ")
        .await
        .expect_err("blank title");
    assert_eq!(error.code(), ErrorCode::InvalidRequest);
    assert_eq!(
        error.details(),
        Some(&serde_json::json!({ "field": "title", "code": "blank" }))
    );
}

#[tokio::test]
async fn update_may_keep_its_own_title() {
    let existing = sample_content("intro");
    let id = *existing.id();
    let mut contents = MockContentRepository::new();
    contents
        .expect_search()
        .times(1)
        .return_once(move |_| Ok(vec![existing]));

    with_contents(contents)
        .ensure_title_is_unique_for_update("intro", &id)
        .await
        .expect("own title allowed");
}

#[tokio::test]
async fn update_cannot_take_another_items_title() {
    let mut contents = MockContentRepository::new();
    contents
        .expect_search()
        .times(1)
        .return_once(|_| Ok(vec![sample_content("intro")]));

    let error = with_contents(contents)
        .ensure_title_is_unique_for_update("Intro", &ContentId::random())
        .await
        .expect_err("title taken");
    assert_eq!(error.code(), ErrorCode::Conflict);
}

#[tokio::test]
async fn missing_topic_is_not_found() {
    let mut categories = MockCategoryRepository::new();
    categories
        .expect_find_by_id()
        .times(1)
        .return_once(|_| Ok(None));

    let error = service(
        MockContentRepository::new(),
        categories,
        MockUserRepository::new(),
    )
    .ensure_category_topic_exists(&CategoryId::random())
    .await
    .expect_err("unknown topic");
    assert_eq!(error.code(), ErrorCode::NotFound);
}

#[tokio::test]
async fn existing_topic_passes() {
    let mut categories = MockCategoryRepository::new();
    categories
        .expect_find_by_id()
        .times(1)
        .return_once(|_| Ok(Some(sample_category())));

    service(
        MockContentRepository::new(),
        categories,
        MockUserRepository::new(),
    )
    .ensure_category_topic_exists(&CategoryId::random())
    .await
    .expect("topic exists");
}

#[tokio::test]
async fn malformed_creator_is_invalid_without_lookup() {
    let mut users = MockUserRepository::new();
    users.expect_find_by_id().times(0);

    let error = service(
        MockContentRepository::new(),
        MockCategoryRepository::new(),
        users,
    )
    .ensure_creator_exists_and_is_active("user-42")
    .await
    .expect_err("malformed id");
    assert_eq!(error.code(), ErrorCode::InvalidRequest);
    assert_eq!(
        error.details().and_then(|d| d.get("field")),
        Some(&serde_json::json!("createdBy"))
    );
}

#[tokio::test]
async fn absent_creator_is_not_found() {
    let mut users = MockUserRepository::new();
    users.expect_find_by_id().times(1).return_once(|_| Ok(None));

    let error = service(
        MockContentRepository::new(),
        MockCategoryRepository::new(),
        users,
    )
    .ensure_creator_exists_and_is_active(&UserId::random().to_string())
    .await
    .expect_err("unknown user");
    assert_eq!(error.code(), ErrorCode::NotFound);
}

#[tokio::test]
async fn inactive_creator_conflicts() {
    let mut users = MockUserRepository::new();
    users
        .expect_find_by_id()
        .times(1)
        .return_once(|_| Ok(Some(sample_user(false))));

    let error = service(
        MockContentRepository::new(),
        MockCategoryRepository::new(),
        users,
    )
    .ensure_creator_exists_and_is_active(&UserId::random().to_string())
    .await
    .expect_err("inactive user");
    assert_eq!(error.code(), ErrorCode::Conflict);
}

#[tokio::test]
async fn active_creator_returns_parsed_id() {
    let creator = UserId::random();
    let mut users = MockUserRepository::new();
    users
        .expect_find_by_id()
        .withf(move |id| *id == creator)
        .times(1)
        .return_once(|_| Ok(Some(sample_user(true))));

    let parsed = service(
        MockContentRepository::new(),
        MockCategoryRepository::new(),
        users,
    )
    .ensure_creator_exists_and_is_active(&creator.to_string())
    .await
    .expect("active creator");
    assert_eq!(parsed, creator);
}

#[tokio::test]
async fn user_store_failure_propagates() {
    let mut users = MockUserRepository::new();
    users
        .expect_find_by_id()
        .times(1)
        .return_once(|_| Err(UserPersistenceError::query("boom")));

    let error = service(
        MockContentRepository::new(),
        MockCategoryRepository::new(),
        users,
    )
    .ensure_creator_exists_and_is_active(&UserId::random().to_string())
    .await
    .expect_err("store failure");
    assert_eq!(error.code(), ErrorCode::InternalError);
}
