//! Use cases behind the HTTP handlers, generic over the repository traits.

pub mod admin;
pub mod catalog;
pub mod checkout;
pub mod errors;
pub mod leads;
pub mod products;

pub use errors::{ServiceError, ServiceResult};
