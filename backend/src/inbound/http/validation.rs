//! Shared validation helpers for inbound HTTP adapters.
//!
//! Request bodies declare required fields as `Option` so a missing field is
//! reported in the domain error shape rather than as an opaque JSON parse
//! failure.

use serde_json::json;

use crate::domain::Error;

/// Validation error codes raised before a request reaches the domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ErrorCode {
    MissingField,
    MalformedBody,
}

impl ErrorCode {
    fn as_str(self) -> &'static str {
        match self {
            ErrorCode::MissingField => "missing_field",
            ErrorCode::MalformedBody => "malformed_body",
        }
    }
}

/// Newtype wrapper for HTTP field names to provide type safety.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FieldName(&'static str);

impl FieldName {
    pub(crate) const fn new(name: &'static str) -> Self {
        Self(name)
    }

    fn as_str(self) -> &'static str {
        self.0
    }
}

pub(crate) fn missing_field_error(field: FieldName) -> Error {
    let field = field.as_str();
    Error::invalid_request(format!("missing required field: {field}")).with_details(json!({
        "field": field,
        "code": ErrorCode::MissingField.as_str(),
    }))
}

/// Unwrap a required field or report it as missing.
pub(crate) fn require<T>(value: Option<T>, field: FieldName) -> Result<T, Error> {
    value.ok_or_else(|| missing_field_error(field))
}

/// Error for a body that is not valid JSON or has wrongly typed fields.
pub(crate) fn malformed_body_error(reason: &str) -> Error {
    Error::invalid_request("request body is not valid JSON for this endpoint").with_details(
        json!({
            "code": ErrorCode::MalformedBody.as_str(),
            "reason": reason,
        }),
    )
}
