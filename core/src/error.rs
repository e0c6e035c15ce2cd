//! Core error types for the user service

use thiserror::Error;

/// Core error type for all storage operations
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("User not found: {0}")]
    UserNotFound(i32),
}

impl CoreError {
    /// Whether the underlying database error is a unique-constraint violation
    pub fn is_unique_violation(&self) -> bool {
        match self {
            CoreError::Database(sqlx::Error::Database(db_err)) => db_err.is_unique_violation(),
            _ => false,
        }
    }
}

/// Result type alias using CoreError
pub type Result<T> = std::result::Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CoreError::UserNotFound(42);
        assert_eq!(err.to_string(), "User not found: 42");
    }

    #[test]
    fn test_database_error_display() {
        let err = CoreError::from(sqlx::Error::RowNotFound);
        assert!(err.to_string().starts_with("Database error:"));
    }

    #[test]
    fn test_non_database_errors_are_not_unique_violations() {
        assert!(!CoreError::UserNotFound(1).is_unique_violation());
        assert!(!CoreError::Database(sqlx::Error::PoolTimedOut).is_unique_violation());
    }
}
