use diesel::r2d2::{Error as R2D2Error, PoolError};
use diesel::result::{DatabaseErrorKind, Error as DieselError};
use thiserror::Error;

/// Storage failure surfaced by every repository operation.
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("row not found")]
    NotFound,

    /// A unique key is already used, e.g. a taken product slug.
    #[error("conflict: {0}")]
    Conflict(String),

    #[error("constraint violation: {0}")]
    ConstraintViolation(String),

    #[error("database error: {0}")]
    Database(String),

    #[error("connection error: {0}")]
    Connection(String),

    /// A stored row or an incoming value violates a domain constraint.
    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("unexpected error: {0}")]
    Unexpected(String),
}

pub type RepositoryResult<T> = Result<T, RepositoryError>;

impl RepositoryError {
    pub fn is_unique_violation(&self) -> bool {
        matches!(self, RepositoryError::Conflict(_))
    }
}

impl From<DieselError> for RepositoryError {
    fn from(err: DieselError) -> Self {
        match err {
            DieselError::NotFound => RepositoryError::NotFound,
            DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, info) => {
                RepositoryError::Conflict(info.message().to_string())
            }
            DieselError::DatabaseError(
                kind @ (DatabaseErrorKind::ForeignKeyViolation
                | DatabaseErrorKind::NotNullViolation
                | DatabaseErrorKind::CheckViolation),
                info,
            ) => RepositoryError::ConstraintViolation(format!("{kind:?}: {}", info.message())),
            DieselError::DatabaseError(_, info) => {
                RepositoryError::Database(info.message().to_string())
            }
            DieselError::SerializationError(e) | DieselError::DeserializationError(e) => {
                RepositoryError::InvalidData(e.to_string())
            }
            other => RepositoryError::Unexpected(other.to_string()),
        }
    }
}

impl From<R2D2Error> for RepositoryError {
    fn from(err: R2D2Error) -> Self {
        RepositoryError::Connection(err.to_string())
    }
}

impl From<PoolError> for RepositoryError {
    fn from(err: PoolError) -> Self {
        RepositoryError::Connection(err.to_string())
    }
}

impl From<serde_json::Error> for RepositoryError {
    fn from(err: serde_json::Error) -> Self {
        RepositoryError::InvalidData(format!("malformed JSON column: {err}"))
    }
}
