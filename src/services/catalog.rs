//! Public catalog browsing.

use crate::catalog::sort::sort_options;
use crate::catalog::{CatalogError, CatalogParams, ProductPage, SortOption, search_products};
use crate::domain::product::Product;
use crate::domain::types::ProductSlug;
use crate::repository::ProductReader;
use crate::services::{ServiceError, ServiceResult};

/// Runs a catalog search for a raw URL query string.
pub fn search_catalog<R>(repo: &R, query_string: &str) -> ServiceResult<ProductPage>
where
    R: ProductReader + Sync + ?Sized,
{
    let params = CatalogParams::from_query_str(query_string)
        .map_err(|e| ServiceError::Form(format!("malformed query string: {e}")))?;

    search_products(repo, &params).map_err(|err| {
        log::log!(failure_level(&err), "Failed to search products: {err}");
        ServiceError::from(err)
    })
}

/// Bad parameters are the caller's mistake; only storage failures are errors.
fn failure_level(err: &CatalogError) -> log::Level {
    match err {
        CatalogError::Validation(_) => log::Level::Debug,
        CatalogError::Storage(_) => log::Level::Error,
    }
}

/// Loads the public product page data.
pub fn get_product_by_slug<R>(repo: &R, slug: &str) -> ServiceResult<Product>
where
    R: ProductReader + ?Sized,
{
    // A string that cannot be a slug cannot match a product either.
    let slug = ProductSlug::new(slug).map_err(|_| ServiceError::NotFound)?;

    repo.get_product_by_slug(&slug)?
        .ok_or(ServiceError::NotFound)
}

pub fn list_sort_options() -> Vec<SortOption> {
    sort_options()
}
