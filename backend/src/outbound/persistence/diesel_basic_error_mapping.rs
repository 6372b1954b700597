//! Shared Diesel error classification for the repositories.
//!
//! Each repository owns its port error type; this module sorts pool and Diesel
//! failures into the outcomes those types distinguish, so the mapping rules
//! live in one place. Repositories convert with a local `map_failure`.

use tracing::debug;

use super::pool::PoolError;

/// Outcome of a failed database call, before conversion to a port error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum DbFailure {
    /// The database could not be reached.
    Connection(String),
    /// The statement failed for any other reason.
    Query(String),
    /// A unique index rejected the write; carries the constraint name.
    UniqueViolation(String),
}

impl From<PoolError> for DbFailure {
    fn from(error: PoolError) -> Self {
        Self::Connection(error.message().to_owned())
    }
}

impl From<diesel::result::Error> for DbFailure {
    fn from(error: diesel::result::Error) -> Self {
        use diesel::result::{DatabaseErrorKind, Error as DieselError};

        match &error {
            DieselError::DatabaseError(kind, info) => {
                debug!(?kind, message = info.message(), "diesel operation failed");
            }
            _ => debug!(
                error_type = %std::any::type_name_of_val(&error),
                "diesel operation failed"
            ),
        }

        match error {
            DieselError::NotFound => Self::Query("record not found".to_owned()),
            DieselError::QueryBuilderError(_) => Self::Query("database query error".to_owned()),
            DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, info) => {
                Self::UniqueViolation(
                    info.constraint_name()
                        .unwrap_or("unique constraint")
                        .to_owned(),
                )
            }
            DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, _) => {
                Self::Connection("database connection error".to_owned())
            }
            _ => Self::Query("database error".to_owned()),
        }
    }
}
