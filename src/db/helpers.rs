//! Database query helper functions to reduce boilerplate error handling.
//!
//! # Usage
//!
//! ```ignore
//! let player = require_record(
//!     sqlx::query_as::<_, Player>("SELECT * FROM players WHERE id = $1")
//!         .bind(player_id)
//!         .fetch_optional(pool)
//!         .await,
//!     "Player",
//! )?;
//! ```

use crate::error::AppError;

/// Unwrap an optional database result, returning NotFound if None.
pub fn require_record<T>(
    result: Result<Option<T>, sqlx::Error>,
    what: &str,
) -> Result<T, AppError> {
    match result {
        Ok(Some(record)) => Ok(record),
        Ok(None) => Err(AppError::not_found(what)),
        Err(e) => {
            tracing::error!("Database error while loading {}: {:?}", what, e);
            Err(AppError::Database(e))
        }
    }
}

/// Turn a unique-key violation into a validation error with `message`.
pub fn map_unique_violation(error: sqlx::Error, message: &str) -> AppError {
    match &error {
        sqlx::Error::Database(db_error) if db_error.is_unique_violation() => {
            AppError::validation(message)
        }
        _ => AppError::Database(error),
    }
}

/// Turn a foreign-key violation into NotFound for `what`.
pub fn map_foreign_key_violation(error: sqlx::Error, what: &str) -> AppError {
    match &error {
        sqlx::Error::Database(db_error) if db_error.is_foreign_key_violation() => {
            AppError::not_found(what)
        }
        _ => AppError::Database(error),
    }
}
