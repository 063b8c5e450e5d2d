//! Error conversion glue between the domain and the layers above it.
//!
//! The domain layer does not depend on repository or service error types, so
//! the conversions live here.

use crate::domain::types::TypeConstraintError;
use crate::repository::errors::RepositoryError;
#[cfg(feature = "server")]
use crate::services::errors::ServiceError;

#[cfg(feature = "server")]
impl From<TypeConstraintError> for ServiceError {
    fn from(val: TypeConstraintError) -> Self {
        ServiceError::TypeConstraint(val.to_string())
    }
}

impl From<TypeConstraintError> for RepositoryError {
    fn from(val: TypeConstraintError) -> Self {
        RepositoryError::InvalidData(val.to_string())
    }
}
