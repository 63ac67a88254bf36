use sea_orm::DbErr;
use tracing::error;

use crate::domain::common::entities::app_errors::CoreError;

pub mod postgres;

/// Logs a failed query and lifts it into the domain's storage error.
pub fn storage_error(action: &str, e: DbErr) -> CoreError {
    error!("Failed to {}: {}", action, e);
    CoreError::StorageError(e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_failure_becomes_storage_error() {
        let error = storage_error(
            "create prediction",
            DbErr::Custom("value too long for type character varying(200)".to_string()),
        );

        match error {
            CoreError::StorageError(message) => assert!(message.contains("value too long")),
            other => panic!("expected storage error, got {other:?}"),
        }
    }
}
