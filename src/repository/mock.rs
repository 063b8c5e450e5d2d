//! Mock repository implementations for isolating services in tests.

use chrono::NaiveDateTime;
use mockall::mock;

use crate::catalog::ProductPredicate;
use crate::domain::lead::{Lead, NewLead};
use crate::domain::product::{NewProduct, Product};
use crate::domain::types::{ProductId, ProductSlug};
use crate::repository::errors::RepositoryResult;
use crate::repository::{
    LeadReader, LeadWriter, ProductListQuery, ProductReader, ProductWriter,
};

mock! {
    pub Repository {}

    impl ProductReader for Repository {
        fn get_product_by_id(&self, id: ProductId) -> RepositoryResult<Option<Product>>;
        fn get_product_by_slug(&self, slug: &ProductSlug) -> RepositoryResult<Option<Product>>;
        fn list_products(&self, query: &ProductListQuery) -> RepositoryResult<Vec<Product>>;
        fn count_products(&self, predicate: &ProductPredicate) -> RepositoryResult<usize>;
    }

    impl ProductWriter for Repository {
        fn create_product(&self, new_product: &NewProduct) -> RepositoryResult<Product>;
        fn update_product(&self, id: ProductId, product: &NewProduct) -> RepositoryResult<Product>;
        fn delete_product(&self, id: ProductId) -> RepositoryResult<()>;
    }

    impl LeadReader for Repository {
        fn list_leads(&self) -> RepositoryResult<Vec<Lead>>;
        fn count_leads(&self, since: Option<NaiveDateTime>) -> RepositoryResult<usize>;
    }

    impl LeadWriter for Repository {
        fn create_lead(&self, new_lead: &NewLead) -> RepositoryResult<Lead>;
    }
}
