//! JSON payloads accepted by the API and their conversion into domain values.

use thiserror::Error;
use validator::ValidationErrors;

pub mod checkout;
pub mod lead;
pub mod product;

#[derive(Debug, Error)]
/// Errors that can occur when processing submitted payloads.
pub enum FormError {
    #[error("validation errors: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("invalid email address")]
    InvalidEmail,

    #[error("invalid name")]
    InvalidName,

    #[error("invalid slug")]
    InvalidSlug,

    #[error("invalid url")]
    InvalidUrl,

    #[error("invalid quantity")]
    InvalidQuantity,

    #[error("invalid {field}: {value}")]
    InvalidValue { field: &'static str, value: String },
}
