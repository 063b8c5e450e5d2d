//! Admin product management.

use chrono::Utc;

use crate::catalog::{ProductPredicate, SortKey};
use crate::domain::product::{NewProduct, Product};
use crate::domain::types::{ProductId, ProductSlug};
use crate::forms::product::ProductForm;
use crate::repository::errors::RepositoryError;
use crate::repository::{ProductListQuery, ProductReader, ProductWriter};
use crate::services::{ServiceError, ServiceResult};

fn product_id(id: i32) -> ServiceResult<ProductId> {
    ProductId::new(id).map_err(|_| ServiceError::NotFound)
}

fn slug_taken(err: RepositoryError) -> ServiceError {
    if err.is_unique_violation() {
        ServiceError::Form("slug is already used by another product".to_string())
    } else {
        log::error!("Failed to save product: {err}");
        ServiceError::from(err)
    }
}

/// Every product, newest first.
pub fn list_products<R>(repo: &R) -> ServiceResult<Vec<Product>>
where
    R: ProductReader + ?Sized,
{
    let query = ProductListQuery::new(ProductPredicate::all(), SortKey::Recommended.ordering());
    Ok(repo.list_products(&query)?)
}

pub fn get_product<R>(repo: &R, id: i32) -> ServiceResult<Product>
where
    R: ProductReader + ?Sized,
{
    repo.get_product_by_id(product_id(id)?)?
        .ok_or(ServiceError::NotFound)
}

/// Returns `slug`, or `slug-<unix millis>` when another product already has it.
fn available_slug<R>(repo: &R, slug: ProductSlug) -> ServiceResult<ProductSlug>
where
    R: ProductReader + ?Sized,
{
    if repo.get_product_by_slug(&slug)?.is_none() {
        return Ok(slug);
    }
    Ok(slug.with_suffix(Utc::now().timestamp_millis())?)
}

/// Validates the payload and stores a new product.
pub fn create_product<R>(repo: &R, form: ProductForm) -> ServiceResult<Product>
where
    R: ProductReader + ProductWriter + ?Sized,
{
    let mut new_product = NewProduct::try_from(form)?;
    new_product.slug = available_slug(repo, new_product.slug)?;

    repo.create_product(&new_product).map_err(slug_taken)
}

/// Replaces every editable field of an existing product.
pub fn update_product<R>(repo: &R, id: i32, form: ProductForm) -> ServiceResult<Product>
where
    R: ProductWriter + ?Sized,
{
    let id = product_id(id)?;
    let product = NewProduct::try_from(form)?;

    repo.update_product(id, &product).map_err(slug_taken)
}

pub fn delete_product<R>(repo: &R, id: i32) -> ServiceResult<()>
where
    R: ProductWriter + ?Sized,
{
    repo.delete_product(product_id(id)?)?;
    Ok(())
}
