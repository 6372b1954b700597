//! Content aggregate.
//!
//! A content item belongs to one category (its topic) and records the user who
//! created it. Both are soft references: the aggregate stores the typed
//! identifiers, and existence is checked by `ContentDomainService` before a
//! write.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};

use super::category::CategoryId;
use super::identifier::uuid_identifier;
use super::user::UserId;
use super::validation::{FieldViolation, TextViolation, required_text, rule};

uuid_identifier! {
    /// Stable content identifier.
    ContentId
}

/// Maximum title length, in characters.
pub const TITLE_MAX: usize = 255;

/// Validation errors raised by the content aggregate.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ContentValidationError {
    /// Title is empty after trimming.
    #[error("title must not be blank")]
    BlankTitle,
    /// Title exceeds [`TITLE_MAX`] characters.
    #[error("title must be at most {max} characters")]
    TitleTooLong { max: usize },
    /// Type is not one of the supported kinds.
    #[error("unsupported content type '{value}'; expected one of text, video, quiz, interactive_lab")]
    UnsupportedType { value: String },
}

impl FieldViolation for ContentValidationError {
    fn field(&self) -> &'static str {
        match self {
            Self::BlankTitle | Self::TitleTooLong { .. } => "title",
            Self::UnsupportedType { .. } => "type",
        }
    }

    fn rule(&self) -> &'static str {
        match self {
            Self::BlankTitle => rule::BLANK,
            Self::TitleTooLong { .. } => rule::TOO_LONG,
            Self::UnsupportedType { .. } => rule::UNSUPPORTED_VALUE,
        }
    }
}

/// Kind of learning material.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContentType {
    Text,
    Video,
    Quiz,
    InteractiveLab,
}

impl ContentType {
    /// Every supported type.
    pub const ALL: [Self; 4] = [Self::Text, Self::Video, Self::Quiz, Self::InteractiveLab];

    /// Lowercase wire and storage form.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Video => "video",
            Self::Quiz => "quiz",
            Self::InteractiveLab => "interactive_lab",
        }
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ContentType {
    type Err = ContentValidationError;

    /// Parse case-insensitively after trimming.
    ///
    /// # Examples
    /// ```
    /// use courseware::domain::ContentType;
    ///
    /// assert_eq!(" VIDEO ".parse::<ContentType>(), Ok(ContentType::Video));
    /// assert!("podcast".parse::<ContentType>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalised = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == normalised)
            .ok_or_else(|| ContentValidationError::UnsupportedType {
                value: s.to_owned(),
            })
    }
}

fn validate_title(raw: &str) -> Result<String, ContentValidationError> {
    required_text(raw, TITLE_MAX).map_err(|violation| match violation {
        TextViolation::Blank => ContentValidationError::BlankTitle,
        TextViolation::TooLong => ContentValidationError::TitleTooLong { max: TITLE_MAX },
    })
}

fn normalise_description(raw: Option<String>) -> Option<String> {
    raw.map(|text| text.trim().to_owned())
}

/// Fields for a new content item. References are already parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentDraft {
    pub title: String,
    pub description: Option<String>,
    pub content_type: String,
    pub topic: CategoryId,
    pub created_by: UserId,
}

/// Every persisted content field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentSnapshot {
    pub id: ContentId,
    pub title: String,
    pub description: Option<String>,
    pub content_type: ContentType,
    pub topic: CategoryId,
    pub created_by: UserId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Content aggregate root.
///
/// ## Invariants
/// - `title` is trimmed, non-blank and at most [`TITLE_MAX`] characters.
/// - `description` is trimmed; a blank description stays present but empty.
/// - `updated_at` never moves backwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Content {
    id: ContentId,
    title: String,
    description: Option<String>,
    content_type: ContentType,
    topic: CategoryId,
    created_by: UserId,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Content {
    /// Validate `draft` and create a new content item.
    ///
    /// # Errors
    /// Returns the first [`ContentValidationError`] in field order: title,
    /// then type.
    pub fn create(draft: ContentDraft, now: DateTime<Utc>) -> Result<Self, ContentValidationError> {
        let title = validate_title(&draft.title)?;
        let content_type = draft.content_type.parse()?;
        Ok(Self {
            id: ContentId::random(),
            title,
            description: normalise_description(draft.description),
            content_type,
            topic: draft.topic,
            created_by: draft.created_by,
            created_at: now,
            updated_at: now,
        })
    }

    /// Rebuild a content item from trusted storage without validation.
    #[must_use]
    pub fn reconstitute(snapshot: ContentSnapshot) -> Self {
        Self {
            id: snapshot.id,
            title: snapshot.title,
            description: snapshot.description,
            content_type: snapshot.content_type,
            topic: snapshot.topic,
            created_by: snapshot.created_by,
            created_at: snapshot.created_at,
            updated_at: snapshot.updated_at,
        }
    }

    /// Replace title, description and topic.
    ///
    /// # Errors
    /// Returns [`ContentValidationError`] and leaves the item unchanged when the
    /// title is invalid.
    pub fn update_information(
        &mut self,
        title: &str,
        description: Option<String>,
        topic: CategoryId,
        now: DateTime<Utc>,
    ) -> Result<(), ContentValidationError> {
        self.title = validate_title(title)?;
        self.description = normalise_description(description);
        self.topic = topic;
        self.touch(now);
        Ok(())
    }

    /// Switch to another content type.
    ///
    /// # Errors
    /// Returns [`ContentValidationError::UnsupportedType`] for unknown types.
    pub fn change_type(&mut self, raw: &str, now: DateTime<Utc>) -> Result<(), ContentValidationError> {
        self.content_type = raw.parse()?;
        self.touch(now);
        Ok(())
    }

    fn touch(&mut self, now: DateTime<Utc>) {
        self.updated_at = self.updated_at.max(now);
    }

    #[must_use]
    pub const fn id(&self) -> &ContentId {
        &self.id
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    #[must_use]
    pub const fn content_type(&self) -> ContentType {
        self.content_type
    }

    #[must_use]
    pub const fn topic(&self) -> &CategoryId {
        &self.topic
    }

    #[must_use]
    pub const fn created_by(&self) -> &UserId {
        &self.created_by
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
