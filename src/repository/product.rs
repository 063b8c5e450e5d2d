use chrono::Utc;
use diesel::prelude::*;
use diesel::sqlite::Sqlite;

use crate::catalog::sort::{Direction, Ordering, SortField};
use crate::catalog::{Constraint, ProductPredicate};
use crate::domain::product::{NewProduct, Product};
use crate::domain::types::{ProductId, ProductSlug};
use crate::models::product::{NewProduct as DbNewProduct, Product as DbProduct};
use crate::repository::errors::{RepositoryError, RepositoryResult};
use crate::repository::{DieselRepository, ProductListQuery, ProductReader, ProductWriter};
use crate::schema::products;

type BoxedProductQuery = products::BoxedQuery<'static, Sqlite>;

/// Narrows `query` by every constraint of the predicate.
pub(crate) fn apply_predicate(
    mut query: BoxedProductQuery,
    predicate: &ProductPredicate,
) -> BoxedProductQuery {
    for constraint in predicate.constraints() {
        query = match constraint {
            Constraint::ManufacturerIn(values) => {
                query.filter(products::manufacturer.eq_any(values.clone()))
            }
            Constraint::StatusIn(values) => {
                query.filter(products::status.eq_any(labels(values, |v| v.as_str())))
            }
            Constraint::MemoryTypeIn(values) => {
                query.filter(products::memory_type.eq_any(labels(values, |v| v.as_str())))
            }
            Constraint::FormFactorIn(values) => {
                query.filter(products::form_factor.eq_any(labels(values, |v| v.as_str())))
            }
            Constraint::CapacityIn(values) => {
                query.filter(products::capacity_gb.eq_any(values.clone()))
            }
            Constraint::CapacityBetween(bounds) => {
                if let Some(min) = bounds.min {
                    query = query.filter(products::capacity_gb.ge(min));
                }
                if let Some(max) = bounds.max {
                    query = query.filter(products::capacity_gb.le(max));
                }
                query
            }
            Constraint::SpeedBetween(bounds) => {
                if let Some(min) = bounds.min {
                    query = query.filter(products::speed_mt.ge(min));
                }
                if let Some(max) = bounds.max {
                    query = query.filter(products::speed_mt.le(max));
                }
                query
            }
            Constraint::Ecc(ecc) => query.filter(products::ecc.eq(*ecc)),
            Constraint::InStock => query.filter(products::stock_qty.gt(0)),
            Constraint::StockAtMost(max) => query.filter(products::stock_qty.le(*max)),
        };
    }
    query
}

fn labels<T: Copy>(values: &[T], label: impl Fn(T) -> &'static str) -> Vec<&'static str> {
    values.iter().copied().map(label).collect()
}

/// Orders `query` by the requested column, breaking ties by id in the same
/// direction so that pages never overlap.
pub(crate) fn apply_ordering(query: BoxedProductQuery, ordering: Ordering) -> BoxedProductQuery {
    macro_rules! order_by {
        ($column:expr) => {
            match ordering.direction {
                Direction::Asc => query.order_by(($column.asc(), products::id.asc())),
                Direction::Desc => query.order_by(($column.desc(), products::id.desc())),
            }
        };
    }

    match ordering.field {
        SortField::CreatedAt => order_by!(products::created_at),
        SortField::StockQty => order_by!(products::stock_qty),
        SortField::LeadTimeDays => order_by!(products::lead_time_days),
        SortField::CapacityGb => order_by!(products::capacity_gb),
        SortField::SpeedMt => order_by!(products::speed_mt),
    }
}

fn into_domain(rows: Vec<DbProduct>) -> RepositoryResult<Vec<Product>> {
    rows.into_iter()
        .map(|row| Product::try_from(row).map_err(RepositoryError::from))
        .collect()
}

fn to_sql_int(value: usize) -> i64 {
    i64::try_from(value).unwrap_or(i64::MAX)
}

impl ProductReader for DieselRepository {
    fn get_product_by_id(&self, id: ProductId) -> RepositoryResult<Option<Product>> {
        let mut conn = self.conn()?;

        let product = products::table
            .find(id.get())
            .first::<DbProduct>(&mut conn)
            .optional()?;

        product
            .map(|p| Product::try_from(p).map_err(RepositoryError::from))
            .transpose()
    }

    fn get_product_by_slug(&self, slug: &ProductSlug) -> RepositoryResult<Option<Product>> {
        let mut conn = self.conn()?;

        let product = products::table
            .filter(products::slug.eq(slug.as_str()))
            .first::<DbProduct>(&mut conn)
            .optional()?;

        product
            .map(|p| Product::try_from(p).map_err(RepositoryError::from))
            .transpose()
    }

    fn list_products(&self, query: &ProductListQuery) -> RepositoryResult<Vec<Product>> {
        let mut conn = self.conn()?;

        let mut items = apply_ordering(
            apply_predicate(products::table.into_boxed(), &query.predicate),
            query.ordering,
        );

        if let Some(pagination) = &query.pagination {
            items = items
                .offset(to_sql_int(pagination.offset()))
                .limit(to_sql_int(pagination.per_page));
        }

        into_domain(items.load::<DbProduct>(&mut conn)?)
    }

    fn count_products(&self, predicate: &ProductPredicate) -> RepositoryResult<usize> {
        let mut conn = self.conn()?;

        let total = apply_predicate(products::table.into_boxed(), predicate)
            .count()
            .get_result::<i64>(&mut conn)?;

        usize::try_from(total).map_err(|e| RepositoryError::Unexpected(e.to_string()))
    }
}

impl ProductWriter for DieselRepository {
    fn create_product(&self, new_product: &NewProduct) -> RepositoryResult<Product> {
        let mut conn = self.conn()?;

        let row = DbNewProduct::try_from(new_product)?;
        let now = Utc::now().naive_utc();

        let created = diesel::insert_into(products::table)
            .values((&row, products::created_at.eq(now), products::updated_at.eq(now)))
            .get_result::<DbProduct>(&mut conn)?;

        Ok(Product::try_from(created)?)
    }

    fn update_product(&self, id: ProductId, product: &NewProduct) -> RepositoryResult<Product> {
        let mut conn = self.conn()?;

        let row = DbNewProduct::try_from(product)?;

        let updated = diesel::update(products::table.find(id.get()))
            .set((&row, products::updated_at.eq(Utc::now().naive_utc())))
            .get_result::<DbProduct>(&mut conn)?;

        Ok(Product::try_from(updated)?)
    }

    fn delete_product(&self, id: ProductId) -> RepositoryResult<()> {
        let mut conn = self.conn()?;

        let deleted = diesel::delete(products::table.find(id.get())).execute(&mut conn)?;

        if deleted == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }
}
