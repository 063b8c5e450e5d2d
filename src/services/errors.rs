use thiserror::Error;

use crate::catalog::{CatalogError, ValidationError};
use crate::forms::FormError;
use crate::payments::PaymentError;
use crate::repository::errors::RepositoryError;

/// Failure of a service operation, mapped to an HTTP status by the routes.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("unauthorized")]
    Unauthorized,

    #[error("not found")]
    NotFound,

    /// Submitted payload failed validation; the message is shown to the caller.
    #[error("{0}")]
    Form(String),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("type constraint violation: {0}")]
    TypeConstraint(String),

    #[error("repository error: {0}")]
    Repository(RepositoryError),

    #[error("payment error: {0}")]
    Payment(#[from] PaymentError),

    #[error("internal error: {0}")]
    Internal(String),
}

pub type ServiceResult<T> = Result<T, ServiceError>;

impl From<RepositoryError> for ServiceError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound => ServiceError::NotFound,
            other => ServiceError::Repository(other),
        }
    }
}

impl From<CatalogError> for ServiceError {
    fn from(err: CatalogError) -> Self {
        match err {
            CatalogError::Validation(err) => ServiceError::Validation(err),
            CatalogError::Storage(err) => err.into(),
        }
    }
}

impl From<FormError> for ServiceError {
    fn from(err: FormError) -> Self {
        ServiceError::Form(err.to_string())
    }
}
