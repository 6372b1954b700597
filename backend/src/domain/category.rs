//! Category aggregate.
//!
//! Categories group content by topic. A content item refers to its category by
//! [`CategoryId`]; nothing here knows about content.

use chrono::{DateTime, Utc};

use super::identifier::uuid_identifier;
use super::validation::{FieldViolation, TextViolation, required_text, rule};

uuid_identifier! {
    /// Stable category identifier.
    CategoryId
}

/// Maximum category name length, in characters.
pub const CATEGORY_NAME_MAX: usize = 100;

/// Validation errors raised by the category aggregate.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CategoryValidationError {
    /// Name is empty after trimming.
    #[error("category name must not be blank")]
    BlankName,
    /// Name exceeds [`CATEGORY_NAME_MAX`] characters.
    #[error("category name must be at most {max} characters")]
    NameTooLong { max: usize },
}

impl FieldViolation for CategoryValidationError {
    fn field(&self) -> &'static str {
        "name"
    }

    fn rule(&self) -> &'static str {
        match self {
            Self::BlankName => rule::BLANK,
            Self::NameTooLong { .. } => rule::TOO_LONG,
        }
    }
}

fn validate_name(raw: &str) -> Result<String, CategoryValidationError> {
    required_text(raw, CATEGORY_NAME_MAX).map_err(|violation| match violation {
        TextViolation::Blank => CategoryValidationError::BlankName,
        TextViolation::TooLong => CategoryValidationError::NameTooLong {
            max: CATEGORY_NAME_MAX,
        },
    })
}

/// Every persisted category field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategorySnapshot {
    pub id: CategoryId,
    pub name: String,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Category aggregate root.
///
/// The description is stored exactly as supplied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    id: CategoryId,
    name: String,
    description: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Category {
    /// Validate the name and create a new category.
    ///
    /// # Errors
    /// Returns [`CategoryValidationError`] when the name is blank or too long.
    pub fn create(
        name: &str,
        description: Option<String>,
        now: DateTime<Utc>,
    ) -> Result<Self, CategoryValidationError> {
        Ok(Self {
            id: CategoryId::random(),
            name: validate_name(name)?,
            description,
            created_at: now,
            updated_at: now,
        })
    }

    /// Rebuild a category from trusted storage without validation.
    #[must_use]
    pub fn reconstitute(snapshot: CategorySnapshot) -> Self {
        Self {
            id: snapshot.id,
            name: snapshot.name,
            description: snapshot.description,
            created_at: snapshot.created_at,
            updated_at: snapshot.updated_at,
        }
    }

    /// Replace the name and description.
    ///
    /// # Errors
    /// Returns [`CategoryValidationError`] and leaves the category unchanged
    /// when the name is invalid.
    pub fn update_information(
        &mut self,
        name: &str,
        description: Option<String>,
        now: DateTime<Utc>,
    ) -> Result<(), CategoryValidationError> {
        self.name = validate_name(name)?;
        self.description = description;
        self.updated_at = self.updated_at.max(now);
        Ok(())
    }

    #[must_use]
    pub const fn id(&self) -> &CategoryId {
        &self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
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
mod tests {
    use super::*;
    use chrono::Duration;
    use rstest::{fixture, rstest};

    #[fixture]
    fn now() -> DateTime<Utc> {
        DateTime::from_timestamp(1_767_225_600, 0).expect("valid timestamp")
    }

    #[rstest]
    fn create_trims_name_and_keeps_description(now: DateTime<Utc>) {
        let category = Category::create("  Rust  ", Some(" Systems ".to_owned()), now)
            .expect("valid category");

        assert_eq!(category.name(), "Rust");
        assert_eq!(category.description(), Some(" Systems "));
        assert_eq!(category.created_at(), category.updated_at());
    }

    #[rstest]
    #[case("", CategoryValidationError::BlankName)]
    #[case("   ", CategoryValidationError::BlankName)]
    fn create_rejects_blank_names(
        now: DateTime<Utc>,
        #[case] name: &str,
        #[case] expected: CategoryValidationError,
    ) {
        assert_eq!(Category::create(name, None, now), Err(expected));
    }

    #[rstest]
    fn create_rejects_overlong_names(now: DateTime<Utc>) {
        let name = "c".repeat(CATEGORY_NAME_MAX + 1);
        let err = Category::create(&name, None, now).expect_err("too long");
        assert_eq!(
            err,
            CategoryValidationError::NameTooLong {
                max: CATEGORY_NAME_MAX
            }
        );
        assert_eq!(err.field(), "name");
        assert_eq!(err.rule(), "too_long");
    }

    #[rstest]
    fn update_information_bumps_timestamp_only(now: DateTime<Utc>) {
        let mut category = Category::create("Rust", None, now).expect("valid category");
        let id = *category.id();
        let later = now + Duration::seconds(1);

        category
            .update_information("Go", Some("Concurrency".to_owned()), later)
            .expect("valid update");

        assert_eq!(category.id(), &id);
        assert_eq!(category.name(), "Go");
        assert_eq!(category.description(), Some("Concurrency"));
        assert_eq!(category.created_at(), now);
        assert_eq!(category.updated_at(), later);
    }

    #[rstest]
    fn invalid_update_changes_nothing(now: DateTime<Utc>) {
        let mut category =
            Category::create("Rust", Some("Systems".to_owned()), now).expect("valid category");
        let before = category.clone();

        let result = category.update_information(" ", None, now + Duration::seconds(1));

        assert_eq!(result, Err(CategoryValidationError::BlankName));
        assert_eq!(category, before);
    }
}
