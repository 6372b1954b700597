//! UUID-backed identifier value objects.

use serde_json::json;

use super::Error;
use super::validation::rule;

/// Failure to parse an identifier from its string form.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IdentifierError {
    /// The input was empty after trimming.
    #[error("identifier must not be empty")]
    Empty,
    /// The input is not a well-formed UUID.
    #[error("identifier must be a valid UUID")]
    InvalidFormat,
}

impl IdentifierError {
    /// Convert into an [`Error`] naming the field that carried `value`.
    pub fn into_error(self, field: &'static str, value: &str) -> Error {
        let code = match self {
            Self::Empty => rule::BLANK,
            Self::InvalidFormat => rule::INVALID_FORMAT,
        };
        Error::invalid_request(format!("{field} must be a valid UUID")).with_details(json!({
            "field": field,
            "code": code,
            "value": value,
        }))
    }
}

/// Declare a `Copy` UUID newtype that serialises as its hyphenated string.
macro_rules! uuid_identifier {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        #[derive(::serde::Serialize, ::serde::Deserialize)]
        #[serde(try_from = "String", into = "String")]
        pub struct $name(::uuid::Uuid);

        impl $name {
            /// Parse an identifier from its string form.
            ///
            /// # Errors
            /// Returns [`IdentifierError`] when `raw` is blank or not a UUID.
            pub fn new(
                raw: impl AsRef<str>,
            ) -> Result<Self, $crate::domain::identifier::IdentifierError> {
                use $crate::domain::identifier::IdentifierError;

                let trimmed = raw.as_ref().trim();
                if trimmed.is_empty() {
                    return Err(IdentifierError::Empty);
                }
                ::uuid::Uuid::parse_str(trimmed)
                    .map(Self)
                    .map_err(|_| IdentifierError::InvalidFormat)
            }

            /// Generate a fresh random identifier.
            #[must_use]
            pub fn random() -> Self {
                Self(::uuid::Uuid::new_v4())
            }

            /// Wrap an existing UUID.
            #[must_use]
            pub const fn from_uuid(uuid: ::uuid::Uuid) -> Self {
                Self(uuid)
            }

            /// Access the underlying UUID.
            #[must_use]
            pub const fn as_uuid(&self) -> &::uuid::Uuid {
                &self.0
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                self.0.fmt(f)
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = $crate::domain::identifier::IdentifierError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::new(s)
            }
        }

        impl TryFrom<String> for $name {
            type Error = $crate::domain::identifier::IdentifierError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                value.0.to_string()
            }
        }
    };
}

pub(crate) use uuid_identifier;

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use uuid::Uuid;

    uuid_identifier! {
        /// Identifier used only by these tests.
        SampleId
    }

    #[rstest]
    fn parses_hyphenated_uuid() {
        let uuid = Uuid::new_v4();
        let id = SampleId::new(uuid.to_string()).expect("valid id");
        assert_eq!(id.as_uuid(), &uuid);
        assert_eq!(id.to_string(), uuid.to_string());
    }

    #[rstest]
    #[case("", IdentifierError::Empty)]
    #[case("   ", IdentifierError::Empty)]
    #[case("1234", IdentifierError::InvalidFormat)]
    #[case("not-a-uuid-at-all", IdentifierError::InvalidFormat)]
    fn rejects_malformed_input(#[case] raw: &str, #[case] expected: IdentifierError) {
        assert_eq!(SampleId::new(raw), Err(expected));
    }

    #[rstest]
    fn equality_follows_underlying_value() {
        let uuid = Uuid::new_v4();
        let upper = SampleId::new(uuid.to_string().to_uppercase()).expect("valid id");
        assert_eq!(upper, SampleId::from_uuid(uuid));
        assert_ne!(upper, SampleId::random());
    }

    #[rstest]
    fn serde_uses_string_form() {
        let id = SampleId::random();
        let json = serde_json::to_value(id).expect("serialise");
        assert_eq!(json, serde_json::Value::String(id.to_string()));
        let back: SampleId = serde_json::from_value(json).expect("deserialise");
        assert_eq!(back, id);
    }

    #[rstest]
    fn into_error_names_the_field() {
        let error = IdentifierError::InvalidFormat.into_error("topic", "abc");
        let details = error.details().expect("details present");
        assert_eq!(details["field"], "topic");
        assert_eq!(details["code"], "invalid_format");
        assert_eq!(details["value"], "abc");
    }
}
