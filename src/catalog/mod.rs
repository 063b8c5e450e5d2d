//! Catalog browsing: raw query parameters in, one page of products out.
//!
//! The pipeline is `params` (raw multi-map) -> `filter` (validated filter) ->
//! `predicate` (storage predicate) + `sort` (ordering) + `pagination` (page
//! window), composed by [`query::search_products`] against any
//! [`crate::repository::ProductReader`].

use thiserror::Error;

use crate::repository::errors::RepositoryError;

pub mod filter;
pub mod pagination;
pub mod params;
pub mod predicate;
pub mod query;
pub mod sort;

pub use filter::ProductFilter;
pub use params::CatalogParams;
pub use predicate::{Constraint, ProductPredicate};
pub use query::{ProductPage, search_products};
pub use sort::{SortKey, SortOption};

/// Raw catalog parameters that could not be coerced to their expected shape.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("invalid catalog parameters: {}", .fields.join(", "))]
pub struct ValidationError {
    /// Every offending parameter key, in parameter-key order.
    pub fields: Vec<&'static str>,
}

/// Failure of a catalog query as a whole.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("storage error: {0}")]
    Storage(#[from] RepositoryError),
}
