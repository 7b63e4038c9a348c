use rusqlite::ErrorCode;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, DbError>;

/// Errors callers can act on. Everything else stays a wrapped `rusqlite::Error`.
#[derive(Error, Debug)]
pub enum DbError {
    /// Unique constraint violation, e.g. a second user with the same username.
    #[error("Unique constraint violation: {message}")]
    UniqueViolation { message: String },

    /// A thread panicked while holding the connection.
    #[error("DB lock poisoned")]
    LockPoisoned,

    #[error(transparent)]
    Sqlite(rusqlite::Error),
}

impl From<rusqlite::Error> for DbError {
    fn from(err: rusqlite::Error) -> Self {
        match &err {
            rusqlite::Error::SqliteFailure(e, message)
                if e.code == ErrorCode::ConstraintViolation
                    && e.extended_code == rusqlite::ffi::SQLITE_CONSTRAINT_UNIQUE =>
            {
                DbError::UniqueViolation {
                    message: message.clone().unwrap_or_else(|| e.to_string()),
                }
            }
            _ => DbError::Sqlite(err),
        }
    }
}
