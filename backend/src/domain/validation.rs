//! Field validation shared by the aggregates.
//!
//! Aggregate validation enums implement [`FieldViolation`] so the service layer
//! can report which field failed and which rule it broke without knowing the
//! concrete aggregate.

use serde_json::json;

use super::Error;

/// A validation failure tied to a single named field.
pub trait FieldViolation: std::error::Error {
    /// Wire name of the offending field, e.g. `firstName`.
    fn field(&self) -> &'static str;

    /// Stable rule identifier, e.g. `blank` or `too_long`.
    fn rule(&self) -> &'static str;
}

/// Convert a field violation into an [`Error`] carrying `{ field, code }`.
pub fn field_error(violation: &impl FieldViolation) -> Error {
    Error::invalid_request(violation.to_string()).with_details(json!({
        "field": violation.field(),
        "code": violation.rule(),
    }))
}

/// Rule identifiers reported in error details.
pub(crate) mod rule {
    pub const BLANK: &str = "blank";
    pub const TOO_LONG: &str = "too_long";
    pub const OUT_OF_RANGE: &str = "out_of_range";
    pub const INVALID_FORMAT: &str = "invalid_format";
    pub const UNSUPPORTED_VALUE: &str = "unsupported_value";
}

/// Outcome of checking a required text field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum TextViolation {
    Blank,
    TooLong,
}

/// Trim `raw` and enforce non-blank plus a maximum length in characters.
pub(crate) fn required_text(raw: &str, max: usize) -> Result<String, TextViolation> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(TextViolation::Blank);
    }
    if trimmed.chars().count() > max {
        return Err(TextViolation::TooLong);
    }
    Ok(trimmed.to_owned())
}
