//! User aggregate and its value objects.

use std::fmt;
use std::sync::OnceLock;

use chrono::{DateTime, Utc};
use regex::Regex;

use super::identifier::uuid_identifier;
use super::validation::{FieldViolation, TextViolation, required_text, rule};

uuid_identifier! {
    /// Stable user identifier.
    UserId
}

/// Maximum length of a first or last name, in characters.
pub const NAME_MAX: usize = 50;
/// Maximum length of an email address.
pub const EMAIL_MAX: usize = 254;
/// Oldest accepted age.
pub const AGE_MAX: i32 = 150;

/// Validation errors raised by the user aggregate.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UserValidationError {
    /// First name is empty after trimming.
    #[error("first name must not be blank")]
    BlankFirstName,
    /// First name exceeds its character limit.
    #[error("first name must be at most {max} characters")]
    FirstNameTooLong { max: usize },
    /// Last name is empty after trimming.
    #[error("last name must not be blank")]
    BlankLastName,
    /// Last name exceeds its character limit.
    #[error("last name must be at most {max} characters")]
    LastNameTooLong { max: usize },
    /// Email is empty after trimming.
    #[error("email must not be blank")]
    BlankEmail,
    /// Email exceeds [`EMAIL_MAX`] characters.
    #[error("email must be at most {max} characters")]
    EmailTooLong { max: usize },
    /// Email does not look like `local@domain.tld`.
    #[error("email must be a valid email address")]
    InvalidEmail,
    /// Age lies outside the accepted range.
    #[error("age must be between {min} and {max}")]
    AgeOutOfRange { min: i32, max: i32 },
}

impl FieldViolation for UserValidationError {
    fn field(&self) -> &'static str {
        match self {
            Self::BlankFirstName | Self::FirstNameTooLong { .. } => "firstName",
            Self::BlankLastName | Self::LastNameTooLong { .. } => "lastName",
            Self::BlankEmail | Self::EmailTooLong { .. } | Self::InvalidEmail => "email",
            Self::AgeOutOfRange { .. } => "age",
        }
    }

    fn rule(&self) -> &'static str {
        match self {
            Self::BlankFirstName | Self::BlankLastName | Self::BlankEmail => rule::BLANK,
            Self::FirstNameTooLong { .. }
            | Self::LastNameTooLong { .. }
            | Self::EmailTooLong { .. } => rule::TOO_LONG,
            Self::InvalidEmail => rule::INVALID_FORMAT,
            Self::AgeOutOfRange { .. } => rule::OUT_OF_RANGE,
        }
    }
}

static EMAIL_RE: OnceLock<Regex> = OnceLock::new();

fn email_regex() -> &'static Regex {
    EMAIL_RE.get_or_init(|| {
        // Length is enforced separately; the pattern only checks shape.
        let pattern = r"^[a-z0-9._%+\-]+@[a-z0-9](?:[a-z0-9\-]*[a-z0-9])?(?:\.[a-z0-9](?:[a-z0-9\-]*[a-z0-9])?)*\.[a-z]{2,}$";
        Regex::new(pattern).unwrap_or_else(|error| panic!("email regex failed to compile: {error}"))
    })
}

/// Email address, stored trimmed and lowercased.
///
/// # Examples
/// ```
/// use courseware::domain::Email;
///
/// let email = Email::new(" Ann@X.com ").expect("valid email");
/// assert_eq!(email.as_str(), "ann@x.com");
/// assert!(Email::new("not an email").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Email(String);

impl Email {
    /// Validate, normalise and construct an email address.
    ///
    /// # Errors
    /// Returns [`UserValidationError`] when the address is blank, too long or
    /// syntactically invalid.
    pub fn new(raw: impl AsRef<str>) -> Result<Self, UserValidationError> {
        let normalised = raw.as_ref().trim().to_lowercase();
        if normalised.is_empty() {
            return Err(UserValidationError::BlankEmail);
        }
        if normalised.chars().count() > EMAIL_MAX {
            return Err(UserValidationError::EmailTooLong { max: EMAIL_MAX });
        }
        if !email_regex().is_match(&normalised) {
            return Err(UserValidationError::InvalidEmail);
        }
        Ok(Self(normalised))
    }

    /// Wrap an address loaded from storage without re-validating it.
    #[must_use]
    pub const fn from_stored(value: String) -> Self {
        Self(value)
    }

    /// Borrow the normalised address.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Raw user fields as submitted by a caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserDetails {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub age: i32,
}

/// Every persisted user field, used to rebuild an aggregate from storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserSnapshot {
    pub id: UserId,
    pub first_name: String,
    pub last_name: String,
    pub email: Email,
    pub age: u8,
    pub active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

struct ValidatedDetails {
    first_name: String,
    last_name: String,
    email: Email,
    age: u8,
}

impl TryFrom<UserDetails> for ValidatedDetails {
    type Error = UserValidationError;

    fn try_from(details: UserDetails) -> Result<Self, Self::Error> {
        let first_name = required_text(&details.first_name, NAME_MAX).map_err(|v| match v {
            TextViolation::Blank => UserValidationError::BlankFirstName,
            TextViolation::TooLong => UserValidationError::FirstNameTooLong { max: NAME_MAX },
        })?;
        let last_name = required_text(&details.last_name, NAME_MAX).map_err(|v| match v {
            TextViolation::Blank => UserValidationError::BlankLastName,
            TextViolation::TooLong => UserValidationError::LastNameTooLong { max: NAME_MAX },
        })?;
        let email = Email::new(&details.email)?;
        let age = u8::try_from(details.age)
            .ok()
            .filter(|age| i32::from(*age) <= AGE_MAX)
            .ok_or(UserValidationError::AgeOutOfRange {
                min: 0,
                max: AGE_MAX,
            })?;
        Ok(Self {
            first_name,
            last_name,
            email,
            age,
        })
    }
}

/// User aggregate root.
///
/// ## Invariants
/// - Names are trimmed, non-blank and at most [`NAME_MAX`] characters.
/// - `age` lies within `0..=150`.
/// - `updated_at` never moves backwards and never precedes `created_at`.
///
/// # Examples
/// ```
/// use chrono::Utc;
/// use courseware::domain::{User, UserDetails};
///
/// let now = Utc::now();
/// let user = User::create(
///     UserDetails {
///         first_name: "Ann".into(),
///         last_name: "Lee".into(),
///         email: "ann@x.com".into(),
///         age: 30,
///     },
///     now,
/// )
/// .expect("valid user");
/// assert!(user.is_active());
/// assert_eq!(user.full_name(), "Ann Lee");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    id: UserId,
    first_name: String,
    last_name: String,
    email: Email,
    age: u8,
    active: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl User {
    /// Validate `details` and create a new active user.
    ///
    /// Fields are checked in declaration order and the first failure wins.
    ///
    /// # Errors
    /// Returns the first [`UserValidationError`] encountered.
    pub fn create(details: UserDetails, now: DateTime<Utc>) -> Result<Self, UserValidationError> {
        let ValidatedDetails {
            first_name,
            last_name,
            email,
            age,
        } = details.try_into()?;
        Ok(Self {
            id: UserId::random(),
            first_name,
            last_name,
            email,
            age,
            active: true,
            created_at: now,
            updated_at: now,
        })
    }

    /// Rebuild a user from trusted storage without validation.
    #[must_use]
    pub fn reconstitute(snapshot: UserSnapshot) -> Self {
        let UserSnapshot {
            id,
            first_name,
            last_name,
            email,
            age,
            active,
            created_at,
            updated_at,
        } = snapshot;
        Self {
            id,
            first_name,
            last_name,
            email,
            age,
            active,
            created_at,
            updated_at,
        }
    }

    /// Replace every editable field. Nothing changes if validation fails.
    ///
    /// # Errors
    /// Returns the first [`UserValidationError`] encountered.
    pub fn update_information(
        &mut self,
        details: UserDetails,
        now: DateTime<Utc>,
    ) -> Result<(), UserValidationError> {
        let validated = ValidatedDetails::try_from(details)?;
        self.first_name = validated.first_name;
        self.last_name = validated.last_name;
        self.email = validated.email;
        self.age = validated.age;
        self.touch(now);
        Ok(())
    }

    /// Mark the user inactive.
    pub fn deactivate(&mut self, now: DateTime<Utc>) {
        self.active = false;
        self.touch(now);
    }

    /// Mark the user active again.
    pub fn activate(&mut self, now: DateTime<Utc>) {
        self.active = true;
        self.touch(now);
    }

    fn touch(&mut self, now: DateTime<Utc>) {
        self.updated_at = self.updated_at.max(now);
    }

    #[must_use]
    pub const fn id(&self) -> &UserId {
        &self.id
    }

    #[must_use]
    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    #[must_use]
    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    /// First and last name separated by a space.
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    #[must_use]
    pub const fn email(&self) -> &Email {
        &self.email
    }

    #[must_use]
    pub const fn age(&self) -> u8 {
        self.age
    }

    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.active
    }

    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }
}

#[cfg(test)]
mod tests;
