use sea_orm::{DbErr, SqlErr};
use thiserror::Error;

/// Errors returned by the store helpers.
///
/// Constraint violations raised by the database are classified into
/// [`RegistryError::Conflict`] and [`RegistryError::Protected`]; everything
/// else stays a [`RegistryError::Database`].
#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Not found: {0}")]
    NotFound(String),

    /// A unique constraint rejected the write.
    #[error("Conflict: {0}")]
    Conflict(String),

    /// A foreign key still references the row being deleted.
    ///
    /// Inserts that hit a missing parent are reported as
    /// [`RegistryError::NotFound`] instead; see [`RegistryError::on_missing_parent`].
    #[error("Protected: {0}")]
    Protected(String),

    #[error("Password hash error: {0}")]
    Hash(String),

    #[error("Database error: {0}")]
    Database(DbErr),
}

impl RegistryError {
    /// Replace the database detail of a conflict with a readable message.
    pub(crate) fn on_conflict(self, message: impl FnOnce() -> String) -> Self {
        match self {
            RegistryError::Conflict(detail) => {
                tracing::debug!("Unique constraint violated: {}", detail);
                RegistryError::Conflict(message())
            }
            other => other,
        }
    }

    /// Replace the database detail of a protected delete with a readable message.
    pub(crate) fn on_protected(self, message: impl FnOnce() -> String) -> Self {
        match self {
            RegistryError::Protected(detail) => {
                tracing::debug!("Foreign key constraint violated: {}", detail);
                RegistryError::Protected(message())
            }
            other => other,
        }
    }

    /// A foreign key failure on insert or update means the referenced row is gone.
    pub(crate) fn on_missing_parent(self, message: impl FnOnce() -> String) -> Self {
        match self {
            RegistryError::Protected(detail) => {
                tracing::debug!("Referenced row missing: {}", detail);
                RegistryError::NotFound(message())
            }
            other => other,
        }
    }
}

/// SQLite's text for every foreign key failure, whatever the extended code.
const SQLITE_FOREIGN_KEY_FAILED: &str = "FOREIGN KEY constraint failed";

impl From<DbErr> for RegistryError {
    fn from(err: DbErr) -> Self {
        match err.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(detail)) => RegistryError::Conflict(detail),
            Some(SqlErr::ForeignKeyConstraintViolation(detail)) => {
                RegistryError::Protected(detail)
            }
            // ON DELETE RESTRICT fires as a trigger in SQLite (code 1811),
            // which `sql_err` does not classify.
            _ if err.to_string().contains(SQLITE_FOREIGN_KEY_FAILED) => {
                RegistryError::Protected(err.to_string())
            }
            _ => RegistryError::Database(err),
        }
    }
}

impl From<argon2::password_hash::Error> for RegistryError {
    fn from(err: argon2::password_hash::Error) -> Self {
        RegistryError::Hash(err.to_string())
    }
}

pub type Result<T, E = RegistryError> = std::result::Result<T, E>;
