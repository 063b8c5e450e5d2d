use chrono::NaiveDateTime;

use crate::catalog::ProductPredicate;
use crate::catalog::sort::Ordering;
use crate::db::{DbConnection, DbPool, get_connection};
use crate::domain::lead::{Lead, NewLead};
use crate::domain::product::{NewProduct, Product};
use crate::domain::types::{ProductId, ProductSlug};
use crate::repository::errors::RepositoryResult;

pub mod errors;
pub mod lead;
#[cfg(any(test, feature = "test-mocks"))]
pub mod mock;
pub mod product;

/// Diesel-backed storage client shared by every handler.
///
/// Cloning is cheap: clones share the same connection pool.
#[derive(Clone)]
pub struct DieselRepository {
    pool: DbPool,
}

impl DieselRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    fn conn(&self) -> RepositoryResult<DbConnection> {
        Ok(get_connection(&self.pool)?)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pagination {
    pub page: usize,
    pub per_page: usize,
}

impl Pagination {
    /// Rows to skip before this page, saturating for absurd page numbers.
    pub fn offset(&self) -> usize {
        self.page.max(1).saturating_sub(1).saturating_mul(self.per_page)
    }
}

/// Filtered, ordered and optionally paginated product listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductListQuery {
    pub predicate: ProductPredicate,
    pub ordering: Ordering,
    pub pagination: Option<Pagination>,
}

impl ProductListQuery {
    pub fn new(predicate: ProductPredicate, ordering: Ordering) -> Self {
        Self {
            predicate,
            ordering,
            pagination: None,
        }
    }

    pub fn paginate(mut self, page: usize, per_page: usize) -> Self {
        self.pagination = Some(Pagination { page, per_page });
        self
    }
}

pub trait ProductReader {
    fn get_product_by_id(&self, id: ProductId) -> RepositoryResult<Option<Product>>;
    fn get_product_by_slug(&self, slug: &ProductSlug) -> RepositoryResult<Option<Product>>;
    /// Rows matching the query's predicate, in the query's order.
    fn list_products(&self, query: &ProductListQuery) -> RepositoryResult<Vec<Product>>;
    /// Number of rows matching `predicate`, ignoring any pagination.
    fn count_products(&self, predicate: &ProductPredicate) -> RepositoryResult<usize>;
}

pub trait ProductWriter {
    fn create_product(&self, new_product: &NewProduct) -> RepositoryResult<Product>;
    /// Replaces every editable field of the product.
    fn update_product(&self, id: ProductId, product: &NewProduct) -> RepositoryResult<Product>;
    fn delete_product(&self, id: ProductId) -> RepositoryResult<()>;
}

pub trait LeadReader {
    /// All leads, newest first.
    fn list_leads(&self) -> RepositoryResult<Vec<Lead>>;
    /// Number of leads, optionally only those created at or after `since`.
    fn count_leads(&self, since: Option<NaiveDateTime>) -> RepositoryResult<usize>;
}

pub trait LeadWriter {
    fn create_lead(&self, new_lead: &NewLead) -> RepositoryResult<Lead>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::SortKey;

    #[test]
    fn pagination_offset_saturates() {
        let pagination = Pagination {
            page: 3,
            per_page: 24,
        };
        assert_eq!(pagination.offset(), 48);

        let pagination = Pagination {
            page: 0,
            per_page: 24,
        };
        assert_eq!(pagination.offset(), 0);

        let pagination = Pagination {
            page: usize::MAX,
            per_page: 24,
        };
        assert_eq!(pagination.offset(), usize::MAX);
    }

    #[test]
    fn list_query_builder_sets_pagination() {
        let query = ProductListQuery::new(ProductPredicate::all(), SortKey::default().ordering());
        assert_eq!(query.pagination, None);

        let query = query.paginate(2, 10);
        assert_eq!(
            query.pagination,
            Some(Pagination {
                page: 2,
                per_page: 10,
            })
        );
    }
}
