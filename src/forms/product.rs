use std::str::FromStr;

use serde::Deserialize;
use validator::Validate;

use crate::domain::product::{DEFAULT_CATEGORY, NewProduct, ProductSpec};
use crate::domain::types::{
    CapacityGb, Manufacturer, OrderQuantity, ProductName, ProductSlug, ResourceUrl, SpeedMt,
};
use crate::forms::FormError;

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
/// Admin payload for creating or replacing a product.
pub struct ProductForm {
    /// Derived from `name` when absent or blank.
    #[serde(default)]
    pub slug: Option<String>,
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(length(min = 1))]
    pub manufacturer: String,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    pub memory_type: String,
    pub form_factor: String,
    #[validate(range(min = 1))]
    pub capacity_gb: i32,
    #[serde(default)]
    pub ecc: bool,
    #[validate(range(min = 1))]
    pub speed_mt: i32,
    #[serde(default)]
    pub voltage_v: Option<f64>,
    #[serde(default)]
    pub temp_grade: Option<String>,
    #[validate(range(min = 0))]
    #[serde(default)]
    pub lead_time_days: Option<i32>,
    #[validate(range(min = 0))]
    #[serde(default)]
    pub stock_qty: i32,
    #[validate(range(min = 1))]
    #[serde(default = "default_moq")]
    pub moq: i32,
    #[serde(default)]
    pub datasheet_url: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub short_desc: String,
    #[serde(default)]
    pub specs: Vec<ProductSpec>,
    #[validate(range(min = 0))]
    #[serde(default)]
    pub reference_price_jpy: Option<i32>,
}

fn default_moq() -> i32 {
    1
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// Parses an optional enumeration label, falling back to the default.
fn label_or_default<T>(field: &'static str, value: Option<&str>) -> Result<T, FormError>
where
    T: FromStr + Default,
{
    match non_blank(value) {
        Some(label) => label.parse().map_err(|_| FormError::InvalidValue {
            field,
            value: label.to_string(),
        }),
        None => Ok(T::default()),
    }
}

fn label<T: FromStr>(field: &'static str, value: &str) -> Result<T, FormError> {
    value.trim().parse().map_err(|_| FormError::InvalidValue {
        field,
        value: value.to_string(),
    })
}

fn optional_url(value: Option<&str>) -> Result<Option<ResourceUrl>, FormError> {
    non_blank(value)
        .map(|url| ResourceUrl::new(url).map_err(|_| FormError::InvalidUrl))
        .transpose()
}

impl TryFrom<ProductForm> for NewProduct {
    type Error = FormError;

    fn try_from(form: ProductForm) -> Result<Self, Self::Error> {
        form.validate()?;

        let slug = match non_blank(form.slug.as_deref()) {
            Some(slug) => ProductSlug::new(slug),
            None => ProductSlug::from_name(&form.name),
        }
        .map_err(|_| FormError::InvalidSlug)?;

        Ok(NewProduct {
            slug,
            name: ProductName::new(form.name).map_err(|_| FormError::InvalidName)?,
            manufacturer: Manufacturer::new(form.manufacturer)
                .map_err(|_| FormError::InvalidName)?,
            category: non_blank(form.category.as_deref())
                .unwrap_or(DEFAULT_CATEGORY)
                .to_string(),
            status: label_or_default("status", form.status.as_deref())?,
            memory_type: label("memoryType", &form.memory_type)?,
            form_factor: label("formFactor", &form.form_factor)?,
            capacity_gb: CapacityGb::new(form.capacity_gb)
                .map_err(|_| FormError::InvalidQuantity)?,
            ecc: form.ecc,
            speed_mt: SpeedMt::new(form.speed_mt).map_err(|_| FormError::InvalidQuantity)?,
            voltage_v: form.voltage_v,
            temp_grade: label_or_default("tempGrade", form.temp_grade.as_deref())?,
            lead_time_days: form.lead_time_days,
            stock_qty: form.stock_qty,
            moq: OrderQuantity::new(form.moq).map_err(|_| FormError::InvalidQuantity)?,
            datasheet_url: optional_url(form.datasheet_url.as_deref())?,
            image_url: optional_url(form.image_url.as_deref())?,
            short_desc: form.short_desc.trim().to_string(),
            specs: form
                .specs
                .into_iter()
                .filter(|spec| !spec.key.trim().is_empty())
                .collect(),
            reference_price_jpy: form.reference_price_jpy,
        })
    }
}
