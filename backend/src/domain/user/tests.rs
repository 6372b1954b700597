//! Tests for the user aggregate and its value objects.

use super::*;
use chrono::{Duration, TimeZone};
use rstest::{fixture, rstest};

#[fixture]
fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 3, 1, 12, 0, 0)
        .single()
        .expect("valid timestamp")
}

#[fixture]
fn details() -> UserDetails {
    UserDetails {
        first_name: "Ann".to_owned(),
        last_name: "Lee".to_owned(),
        email: "ann@x.com".to_owned(),
        age: 30,
    }
}

#[fixture]
fn user(details: UserDetails, now: DateTime<Utc>) -> User {
    User::create(details, now).expect("valid user")
}

#[rstest]
fn create_populates_identity_and_timestamps(details: UserDetails, now: DateTime<Utc>) {
    let user = User::create(details, now).expect("valid user");

    assert_eq!(user.created_at(), now);
    assert_eq!(user.updated_at(), user.created_at());
    assert!(user.is_active());
    assert_eq!(user.first_name(), "Ann");
    assert_eq!(user.email().as_str(), "ann@x.com");
}

#[rstest]
fn create_assigns_distinct_ids(details: UserDetails, now: DateTime<Utc>) {
    let first = User::create(details.clone(), now).expect("valid user");
    let second = User::create(details, now).expect("valid user");
    assert_ne!(first.id(), second.id());
}

#[rstest]
fn create_trims_names(mut details: UserDetails, now: DateTime<Utc>) {
    details.first_name = "  Ann ".to_owned();
    details.last_name = "\tLee".to_owned();
    let user = User::create(details, now).expect("valid user");
    assert_eq!(user.full_name(), "Ann Lee");
}

#[rstest]
#[case::blank_first("  ", "Lee", "ann@x.com", 30, UserValidationError::BlankFirstName)]
#[case::blank_last("Ann", "", "ann@x.com", 30, UserValidationError::BlankLastName)]
#[case::blank_email("Ann", "Lee", " ", 30, UserValidationError::BlankEmail)]
#[case::bad_email("Ann", "Lee", "ann.x.com", 30, UserValidationError::InvalidEmail)]
#[case::negative_age("Ann", "Lee", "ann@x.com", -1, UserValidationError::AgeOutOfRange { min: 0, max: AGE_MAX })]
#[case::old_age("Ann", "Lee", "ann@x.com", 151, UserValidationError::AgeOutOfRange { min: 0, max: AGE_MAX })]
fn create_rejects_invalid_fields(
    #[case] first_name: &str,
    #[case] last_name: &str,
    #[case] email: &str,
    #[case] age: i32,
    #[case] expected: UserValidationError,
    now: DateTime<Utc>,
) {
    let details = UserDetails {
        first_name: first_name.to_owned(),
        last_name: last_name.to_owned(),
        email: email.to_owned(),
        age,
    };
    assert_eq!(User::create(details, now), Err(expected));
}

#[rstest]
fn create_rejects_overlong_names(details: UserDetails, now: DateTime<Utc>) {
    let long = "a".repeat(NAME_MAX + 1);

    let mut first = details.clone();
    first.first_name.clone_from(&long);
    assert_eq!(
        User::create(first, now),
        Err(UserValidationError::FirstNameTooLong { max: NAME_MAX })
    );

    let mut last = details;
    last.last_name = long;
    assert_eq!(
        User::create(last, now),
        Err(UserValidationError::LastNameTooLong { max: NAME_MAX })
    );
}

#[rstest]
fn create_accepts_names_at_the_limit(mut details: UserDetails, now: DateTime<Utc>) {
    details.first_name = "a".repeat(NAME_MAX);
    assert!(User::create(details, now).is_ok());
}

#[rstest]
fn create_reports_first_invalid_field(now: DateTime<Utc>) {
    let details = UserDetails {
        first_name: String::new(),
        last_name: String::new(),
        email: "bad".to_owned(),
        age: 999,
    };
    let err = User::create(details, now).expect_err("invalid user");
    assert_eq!(err.field(), "firstName");
}

#[rstest]
#[case(0)]
#[case(150)]
fn age_bounds_are_inclusive(mut details: UserDetails, now: DateTime<Utc>, #[case] age: i32) {
    details.age = age;
    assert!(User::create(details, now).is_ok());
}

#[rstest]
#[case("ann@x.com", "ann@x.com")]
#[case("  Ann@X.Com  ", "ann@x.com")]
#[case("first.last+tag@sub.example.org", "first.last+tag@sub.example.org")]
fn email_normalises(#[case] raw: &str, #[case] expected: &str) {
    let email = Email::new(raw).expect("valid email");
    assert_eq!(email.as_str(), expected);
}

#[rstest]
#[case("ann")]
#[case("ann@")]
#[case("@x.com")]
#[case("ann@x")]
#[case("ann lee@x.com")]
#[case("ann@-x.com")]
fn email_rejects_malformed(#[case] raw: &str) {
    assert_eq!(Email::new(raw), Err(UserValidationError::InvalidEmail));
}

#[rstest]
fn email_equality_uses_normalised_value() {
    assert_eq!(
        Email::new("ANN@x.com").expect("valid"),
        Email::new("ann@X.COM").expect("valid")
    );
}

#[rstest]
fn email_rejects_overlong_addresses() {
    let raw = format!("{}@x.com", "a".repeat(EMAIL_MAX));
    assert_eq!(
        Email::new(raw),
        Err(UserValidationError::EmailTooLong { max: EMAIL_MAX })
    );
}

#[rstest]
fn update_information_replaces_fields_and_bumps_timestamp(mut user: User, now: DateTime<Utc>) {
    let later = now + Duration::seconds(5);
    let id = *user.id();
    user.update_information(
        UserDetails {
            first_name: "Annie".to_owned(),
            last_name: "Leigh".to_owned(),
            email: "annie@x.com".to_owned(),
            age: 31,
        },
        later,
    )
    .expect("valid update");

    assert_eq!(user.id(), &id);
    assert_eq!(user.full_name(), "Annie Leigh");
    assert_eq!(user.email().as_str(), "annie@x.com");
    assert_eq!(user.age(), 31);
    assert_eq!(user.created_at(), now);
    assert_eq!(user.updated_at(), later);
}

#[rstest]
fn failed_update_leaves_user_untouched(mut user: User, now: DateTime<Utc>) {
    let before = user.clone();
    let result = user.update_information(
        UserDetails {
            first_name: "Annie".to_owned(),
            last_name: "Leigh".to_owned(),
            email: "broken".to_owned(),
            age: 31,
        },
        now + Duration::seconds(5),
    );

    assert_eq!(result, Err(UserValidationError::InvalidEmail));
    assert_eq!(user, before);
}

#[rstest]
fn deactivate_preserves_other_fields(mut user: User, now: DateTime<Utc>) {
    let before = user.clone();
    let later = now + Duration::minutes(1);
    user.deactivate(later);

    assert!(!user.is_active());
    assert_eq!(user.updated_at(), later);
    assert_eq!(user.id(), before.id());
    assert_eq!(user.full_name(), before.full_name());
    assert_eq!(user.email(), before.email());
    assert_eq!(user.age(), before.age());
    assert_eq!(user.created_at(), before.created_at());
}

#[rstest]
fn activate_restores_active_flag(mut user: User, now: DateTime<Utc>) {
    user.deactivate(now + Duration::seconds(1));
    user.activate(now + Duration::seconds(2));
    assert!(user.is_active());
    assert_eq!(user.updated_at(), now + Duration::seconds(2));
}

#[rstest]
fn updated_at_never_moves_backwards(mut user: User, now: DateTime<Utc>) {
    user.deactivate(now - Duration::hours(1));
    assert_eq!(user.updated_at(), now);
}

#[rstest]
fn reconstitute_keeps_stored_values(now: DateTime<Utc>) {
    let id = UserId::random();
    let snapshot = UserSnapshot {
        id,
        first_name: "Ann".to_owned(),
        last_name: "Lee".to_owned(),
        email: Email::from_stored("ann@x.com".to_owned()),
        age: 30,
        active: false,
        created_at: now,
        updated_at: now + Duration::days(1),
    };

    let user = User::reconstitute(snapshot);
    assert_eq!(user.id(), &id);
    assert!(!user.is_active());
    assert_eq!(user.updated_at(), now + Duration::days(1));
}

#[rstest]
#[case(UserValidationError::BlankFirstName, "first name must not be blank")]
#[case(
    UserValidationError::EmailTooLong { max: EMAIL_MAX },
    "email must be at most 254 characters"
)]
#[case(
    UserValidationError::AgeOutOfRange { min: 0, max: AGE_MAX },
    "age must be between 0 and 150"
)]
fn validation_errors_describe_the_rule(
    #[case] error: UserValidationError,
    #[case] message: &str,
) {
    let as_std: &dyn std::error::Error = &error;
    assert_eq!(as_std.to_string(), message);
}
