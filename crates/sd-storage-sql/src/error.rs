//! SQL storage error types.

use sd_storage::StorageError;
use sqlx::Error as SqlxError;

/// Converts a `SQLx` error to a storage error.
#[allow(clippy::needless_pass_by_value)]
pub fn from_sqlx_error(err: SqlxError) -> StorageError {
    match err {
        SqlxError::Io(e) => StorageError::Connection(e.to_string()),
        SqlxError::Tls(e) => StorageError::Connection(e.to_string()),
        SqlxError::PoolTimedOut => StorageError::Connection("Connection pool timeout".to_string()),
        SqlxError::PoolClosed => StorageError::Connection("Connection pool closed".to_string()),
        SqlxError::Configuration(e) => StorageError::Connection(e.to_string()),
        SqlxError::Database(db_err) => StorageError::Query(db_err.to_string()),
        e @ (SqlxError::ColumnDecode { .. } | SqlxError::Decode(_) | SqlxError::TypeNotFound { .. }) => {
            StorageError::Query(e.to_string())
        }
        _ => StorageError::Internal(err.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pool_errors_map_to_connection() {
        let err = from_sqlx_error(SqlxError::PoolTimedOut);
        assert!(err.is_connection());

        let err = from_sqlx_error(SqlxError::PoolClosed);
        assert!(err.is_connection());
    }

    #[test]
    fn row_not_found_maps_to_internal() {
        let err = from_sqlx_error(SqlxError::RowNotFound);
        assert!(!err.is_connection());
        assert!(!err.is_query());
    }
}
