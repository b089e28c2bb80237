//! Translation of pool and Diesel failures into repository errors.

use crate::domain::ports::RepositoryError;

use super::pool::PoolError;

/// A pool failure means the backing store could not be reached.
pub(crate) fn map_pool_error(error: PoolError) -> RepositoryError {
    tracing::debug!(error = %error, "connection pool error");
    RepositoryError::connection(error.to_string())
}

/// A Diesel failure is an executed query going wrong, except for the broken
/// connection variant which is reported as a connection fault.
pub(crate) fn map_diesel_error(error: diesel::result::Error) -> RepositoryError {
    tracing::debug!(error = %error, "diesel error");
    match error {
        diesel::result::Error::BrokenTransactionManager => {
            RepositoryError::connection(error.to_string())
        }
        other => RepositoryError::query(other.to_string()),
    }
}
