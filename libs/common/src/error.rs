//! Custom error types for the common library
//!
//! This module defines the failures the persistence layer can surface to
//! the services built on top of it.

use sqlx::Error as SqlxError;
use thiserror::Error;

/// SQLSTATE raised by PostgreSQL when a unique constraint is violated.
const UNIQUE_VIOLATION: &str = "23505";

/// Custom error type for database operations
#[derive(Error, Debug)]
pub enum DatabaseError {
    /// Error occurred during database connection
    #[error("Database connection error: {0}")]
    Connection(#[source] SqlxError),

    /// Error occurred during database query execution
    #[error("Database query error: {0}")]
    Query(#[source] SqlxError),

    /// A write was rejected by a uniqueness constraint
    #[error("Unique constraint violated on {field}: {value}")]
    UniqueViolation { field: String, value: String },

    /// Error occurred during database migration
    #[error("Database migration error: {0}")]
    Migration(String),

    /// Configuration error
    #[error("Database configuration error: {0}")]
    Configuration(String),
}

impl DatabaseError {
    /// Classify an error raised by a write touching `field`.
    ///
    /// Unique violations become [`DatabaseError::UniqueViolation`] carrying the
    /// offending value, everything else is a plain query failure.
    pub fn from_write(err: SqlxError, field: &str, value: &str) -> Self {
        let is_unique_violation = match &err {
            SqlxError::Database(db) => db.code().as_deref() == Some(UNIQUE_VIOLATION),
            _ => false,
        };

        if is_unique_violation {
            DatabaseError::UniqueViolation {
                field: field.to_string(),
                value: value.to_string(),
            }
        } else {
            DatabaseError::Query(err)
        }
    }
}

impl From<SqlxError> for DatabaseError {
    fn from(err: SqlxError) -> Self {
        DatabaseError::Query(err)
    }
}

/// Type alias for Result with DatabaseError
pub type DatabaseResult<T> = Result<T, DatabaseError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_database_errors_are_query_failures() {
        let err = DatabaseError::from_write(SqlxError::RowNotFound, "username", "root");
        assert!(matches!(err, DatabaseError::Query(SqlxError::RowNotFound)));
    }

    #[test]
    fn test_unique_violation_message() {
        let err = DatabaseError::UniqueViolation {
            field: "username".to_string(),
            value: "root".to_string(),
        };
        assert_eq!(err.to_string(), "Unique constraint violated on username: root");
    }
}
