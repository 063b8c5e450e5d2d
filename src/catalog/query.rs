//! Catalog query facade.

use std::thread;

use serde::Serialize;

use crate::catalog::filter::ProductFilter;
use crate::catalog::pagination::{PageWindow, page_links};
use crate::catalog::params::CatalogParams;
use crate::catalog::predicate::compile;
use crate::catalog::sort::{SortKey, SortOption, sort_options};
use crate::catalog::CatalogError;
use crate::domain::product::Product;
use crate::repository::errors::RepositoryError;
use crate::repository::{ProductListQuery, ProductReader};

/// One page of catalog results.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProductPage {
    pub items: Vec<Product>,
    /// Matching products across all pages.
    pub total: usize,
    pub page: usize,
    pub limit: usize,
    pub total_pages: usize,
    pub pages: Vec<Option<usize>>,
    pub sort: SortKey,
    pub sort_options: Vec<SortOption>,
}

/// Runs a catalog query for raw request parameters.
///
/// The page query and the count query share one predicate and run
/// concurrently; either failing fails the whole call. Parameters are validated
/// before storage is touched.
pub fn search_products<R>(repo: &R, params: &CatalogParams) -> Result<ProductPage, CatalogError>
where
    R: ProductReader + Sync + ?Sized,
{
    let filter = ProductFilter::parse(params)?;
    let predicate = compile(&filter);
    let window = PageWindow::new(filter.page, filter.limit);
    let query = ProductListQuery::new(predicate, filter.sort.ordering())
        .paginate(window.page, window.limit);

    let (items, total) = thread::scope(|scope| {
        let count = scope.spawn(|| repo.count_products(&query.predicate));
        let items = repo.list_products(&query);
        let total = count.join().map_err(|_| {
            RepositoryError::Unexpected("count query thread panicked".to_string())
        })?;
        Ok::<_, RepositoryError>((items?, total?))
    })?;

    let total_pages = window.total_pages(total);

    Ok(ProductPage {
        items,
        total,
        page: window.page,
        limit: window.limit,
        total_pages,
        pages: page_links(total_pages, window.page),
        sort: filter.sort,
        sort_options: sort_options(),
    })
}
