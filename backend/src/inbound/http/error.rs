//! Domain errors rendered as HTTP responses.
//!
//! Every failure leaves as the domain `Error` JSON payload with the status its
//! code implies. Storage failures (`service_unavailable` and
//! `internal_error`) carry adapter text such as pool or driver messages, so
//! their bodies are replaced by a fixed message. The original is logged
//! against the trace id instead.

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use tracing::error;

pub use crate::domain::ApiResult;
use crate::domain::{Error, ErrorCode, TRACE_ID_HEADER};

/// Message returned in place of a redacted `service_unavailable` error.
pub const UNAVAILABLE_MESSAGE: &str = "Service temporarily unavailable";
/// Message returned in place of a redacted `internal_error`.
pub const INTERNAL_MESSAGE: &str = "Internal server error";

/// Public message for codes whose text must not reach clients.
fn public_message(code: ErrorCode) -> Option<&'static str> {
    match code {
        ErrorCode::ServiceUnavailable => Some(UNAVAILABLE_MESSAGE),
        ErrorCode::InternalError => Some(INTERNAL_MESSAGE),
        ErrorCode::InvalidRequest | ErrorCode::NotFound | ErrorCode::Conflict => None,
    }
}

/// Body sent to the client: caller-facing errors unchanged, storage errors
/// stripped of message and details.
fn client_body(err: &Error) -> Error {
    let Some(message) = public_message(err.code()) else {
        return err.clone();
    };
    error!(
        code = ?err.code(),
        trace_id = err.trace_id().unwrap_or_default(),
        message = err.message(),
        "storage failure hidden from client"
    );
    let body = Error::new(err.code(), message);
    match err.trace_id() {
        Some(id) => body.with_trace_id(id.to_owned()),
        None => body,
    }
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        match self.code() {
            ErrorCode::InvalidRequest => StatusCode::BAD_REQUEST,
            ErrorCode::NotFound => StatusCode::NOT_FOUND,
            ErrorCode::Conflict => StatusCode::CONFLICT,
            ErrorCode::ServiceUnavailable => StatusCode::SERVICE_UNAVAILABLE,
            ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let mut response = HttpResponse::build(self.status_code());
        if let Some(id) = self.trace_id() {
            response.insert_header((TRACE_ID_HEADER, id.to_owned()));
        }
        response.json(client_body(self))
    }
}

impl From<actix_web::Error> for Error {
    fn from(err: actix_web::Error) -> Self {
        error!(error = %err, "actix error promoted to domain error");
        Self::internal(INTERNAL_MESSAGE)
    }
}
