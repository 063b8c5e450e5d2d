//! Diesel models for storing catalog products.

use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::product::{
    NewProduct as DomainNewProduct, Product as DomainProduct, ProductSpec,
};
use crate::domain::types::{
    CapacityGb, Manufacturer, OrderQuantity, ProductId, ProductName, ProductSlug, ResourceUrl,
    SpeedMt, TypeConstraintError, non_negative,
};

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::products)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
/// Diesel model for [`crate::domain::product::Product`].
pub struct Product {
    pub id: i32,
    pub slug: String,
    pub name: String,
    pub manufacturer: String,
    pub category: String,
    pub status: String,
    pub memory_type: String,
    pub form_factor: String,
    pub capacity_gb: i32,
    pub ecc: bool,
    pub speed_mt: i32,
    pub voltage_v: Option<f64>,
    pub temp_grade: String,
    pub lead_time_days: Option<i32>,
    pub stock_qty: i32,
    pub moq: i32,
    pub datasheet_url: Option<String>,
    pub image_url: Option<String>,
    pub short_desc: String,
    pub specs: String, // JSON array of {key, value}
    pub reference_price_jpy: Option<i32>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Editable columns of a product row.
///
/// Inserted together with both timestamps and used as the full-replacement
/// changeset on update, so `None` clears the column.
#[derive(Debug, Insertable, AsChangeset)]
#[diesel(table_name = crate::schema::products)]
#[diesel(treat_none_as_null = true)]
pub struct NewProduct<'a> {
    pub slug: &'a str,
    pub name: &'a str,
    pub manufacturer: &'a str,
    pub category: &'a str,
    pub status: &'static str,
    pub memory_type: &'static str,
    pub form_factor: &'static str,
    pub capacity_gb: i32,
    pub ecc: bool,
    pub speed_mt: i32,
    pub voltage_v: Option<f64>,
    pub temp_grade: &'static str,
    pub lead_time_days: Option<i32>,
    pub stock_qty: i32,
    pub moq: i32,
    pub datasheet_url: Option<&'a str>,
    pub image_url: Option<&'a str>,
    pub short_desc: &'a str,
    pub specs: String,
    pub reference_price_jpy: Option<i32>,
}

impl<'a> TryFrom<&'a DomainNewProduct> for NewProduct<'a> {
    type Error = serde_json::Error;

    fn try_from(product: &'a DomainNewProduct) -> Result<Self, Self::Error> {
        Ok(Self {
            slug: product.slug.as_str(),
            name: product.name.as_str(),
            manufacturer: product.manufacturer.as_str(),
            category: product.category.as_str(),
            status: product.status.as_str(),
            memory_type: product.memory_type.as_str(),
            form_factor: product.form_factor.as_str(),
            capacity_gb: product.capacity_gb.get(),
            ecc: product.ecc,
            speed_mt: product.speed_mt.get(),
            voltage_v: product.voltage_v,
            temp_grade: product.temp_grade.as_str(),
            lead_time_days: product.lead_time_days,
            stock_qty: product.stock_qty,
            moq: product.moq.get(),
            datasheet_url: product.datasheet_url.as_ref().map(ResourceUrl::as_str),
            image_url: product.image_url.as_ref().map(ResourceUrl::as_str),
            short_desc: product.short_desc.as_str(),
            specs: serde_json::to_string(&product.specs)?,
            reference_price_jpy: product.reference_price_jpy,
        })
    }
}

fn optional_url(value: Option<String>) -> Result<Option<ResourceUrl>, TypeConstraintError> {
    value.map(ResourceUrl::new).transpose()
}

impl TryFrom<Product> for DomainProduct {
    type Error = TypeConstraintError;

    fn try_from(product: Product) -> Result<Self, Self::Error> {
        let specs: Vec<ProductSpec> = serde_json::from_str(&product.specs)
            .map_err(|e| TypeConstraintError::InvalidValue(format!("specs: {e}")))?;

        Ok(Self {
            id: ProductId::new(product.id)?,
            slug: ProductSlug::new(product.slug)?,
            name: ProductName::new(product.name)?,
            manufacturer: Manufacturer::new(product.manufacturer)?,
            category: product.category,
            status: product.status.parse()?,
            memory_type: product.memory_type.parse()?,
            form_factor: product.form_factor.parse()?,
            capacity_gb: CapacityGb::new(product.capacity_gb)?,
            ecc: product.ecc,
            speed_mt: SpeedMt::new(product.speed_mt)?,
            voltage_v: product.voltage_v,
            temp_grade: product.temp_grade.parse()?,
            lead_time_days: product.lead_time_days,
            stock_qty: non_negative(product.stock_qty)?,
            moq: OrderQuantity::new(product.moq)?,
            datasheet_url: optional_url(product.datasheet_url)?,
            image_url: optional_url(product.image_url)?,
            short_desc: product.short_desc,
            specs,
            reference_price_jpy: product.reference_price_jpy,
            created_at: product.created_at,
            updated_at: product.updated_at,
        })
    }
}
