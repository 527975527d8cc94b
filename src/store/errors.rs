//! Store error types

use thiserror::Error;

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Any failure of the underlying database.
///
/// The message of the driver error is kept verbatim so it can be surfaced to
/// API callers unchanged.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The database URL could not be parsed
    #[error("{0}")]
    InvalidUrl(String),

    /// A statement or connection failed
    #[error("{0}")]
    Database(#[from] sqlx::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_database_message_is_verbatim() {
        let err = StoreError::from(sqlx::Error::RowNotFound);
        assert_eq!(err.to_string(), sqlx::Error::RowNotFound.to_string());
    }
}
